//! Alchemy game core: economy entities, purchase pipeline, elixir factory,
//! level progression, quiz NPC and sled-backed save slots.

pub mod catalog;
pub mod commands;
pub mod crafting;
pub mod elixir;
pub mod errors;
pub mod level;
pub mod quiz;
pub mod shop;
pub mod storage;
pub mod types;
pub mod world;

pub use catalog::{canonical_catalog, starter_player, Catalog, DEFAULT_PLAYER_NAME, STARTING_GOLD};
pub use commands::{handle_command, parse_command, AlchemyCommand};
pub use crafting::{can_craft, craft, ingredient_status};
pub use elixir::{
    apply_effect, brew, create_elixir, create_required_elixir, effect_description, grown_size,
    tier_for_difficulty, tier_for_spend, Elixir, ElixirKind, ResultCategory, Tier, UTILITY_BOOST,
};
pub use errors::AlchemyError;
pub use level::{generate_required_elixirs, Level, LevelBook, LevelState};
pub use quiz::{Question, Questioner, QuizTier, DEFAULT_NPC_NAME};
pub use shop::{
    format_shop_listing, process_purchase, validate_purchase, PurchaseReceipt, PurchaseRequest,
};
pub use storage::{AlchemyStore, AlchemyStoreBuilder, SaveRecord, SaveSummary, SAVE_SCHEMA_VERSION};
pub use types::*;
pub use world::{QuizProgress, World};
