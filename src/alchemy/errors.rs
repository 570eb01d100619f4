use thiserror::Error;

/// Errors raised by the alchemy game core.
///
/// Every variant is terminal for the single operation that produced it: the
/// operation performs no mutation before returning the error.
#[derive(Debug, Error)]
pub enum AlchemyError {
    /// Requested quantity exceeds what a shop or location holds.
    #[error("out of stock: {ingredient} (requested {requested}, available {available})")]
    OutOfStock {
        ingredient: String,
        requested: u32,
        available: u32,
    },

    /// Player gold does not cover a purchase or a crafting spend.
    #[error("insufficient funds: need {needed} gold, have {available}")]
    InsufficientFunds { needed: u64, available: u32 },

    /// Recipe result category has no elixir factory.
    #[error("unknown elixir result type: {0}")]
    UnknownResultType(String),

    /// Level number not created yet or out of range.
    #[error("invalid level number {0}: create the level first")]
    InvalidLevel(u32),

    /// Level must be loaded before elixirs can be used on its character.
    #[error("level {0} is not loaded: load it before using elixirs")]
    NotLoaded(u32),

    /// Player lacks a recipe ingredient.
    #[error("missing ingredient {ingredient}: need {required}, have {owned}")]
    MissingIngredient {
        ingredient: String,
        required: u32,
        owned: u32,
    },

    /// Quantity of zero passed to a stock operation.
    #[error("quantity must be greater than zero")]
    InvalidQuantity,

    /// Quiz already finished; reset it before answering again.
    #[error("quiz already completed")]
    QuizCompleted,

    /// Returned when looking up a record that is not present.
    #[error("not found: {0}")]
    NotFound(String),

    /// Wrapper around sled's error type.
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),

    /// Wrapper around bincode serialization and deserialization errors.
    #[error("serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    /// Wrapper around IO errors (directory creation, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when deserializing a record with an unexpected schema version.
    #[error("schema mismatch for {entity}: expected {expected}, got {found}")]
    SchemaMismatch {
        entity: &'static str,
        expected: u8,
        found: u8,
    },
}
