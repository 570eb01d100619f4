//! Elixir factory system.
//!
//! A recipe's result category picks the elixir kind and a tier picks the
//! magnitude from a fixed table. Two independent tier mappings exist:
//! [`tier_for_spend`] for crafting and [`tier_for_difficulty`] for the elixirs
//! a level requires. They are intentionally not reconciled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::alchemy::errors::AlchemyError;
use crate::alchemy::types::{Character, Recipe};

/// Elixir strength class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Base,
    Advanced,
    Master,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Base => "Base",
            Tier::Advanced => "Advanced",
            Tier::Master => "Master",
        };
        f.write_str(name)
    }
}

/// Crafting path: 100 -> Master, 50 -> Advanced, anything else -> Base.
pub fn tier_for_spend(spend_amount: u32) -> Tier {
    match spend_amount {
        100 => Tier::Master,
        50 => Tier::Advanced,
        _ => Tier::Base,
    }
}

/// Level generation path: difficulty <= 2 -> Base, <= 4 -> Advanced, else Master.
pub fn tier_for_difficulty(difficulty: u32) -> Tier {
    match difficulty {
        0..=2 => Tier::Base,
        3..=4 => Tier::Advanced,
        _ => Tier::Master,
    }
}

/// Recipe result category. Parsed from the recipe's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultCategory {
    Healing,
    Mana,
    Strength,
    Mental,
    Enhancement,
    Utility,
}

impl ResultCategory {
    pub const ALL: [ResultCategory; 6] = [
        ResultCategory::Healing,
        ResultCategory::Mana,
        ResultCategory::Strength,
        ResultCategory::Mental,
        ResultCategory::Enhancement,
        ResultCategory::Utility,
    ];

    /// Tag used by the recipe catalog.
    pub fn tag(self) -> &'static str {
        match self {
            ResultCategory::Healing => "Лікування",
            ResultCategory::Mana => "Мана",
            ResultCategory::Strength => "Сила",
            ResultCategory::Mental => "Розумовий",
            ResultCategory::Enhancement => "Посилення",
            ResultCategory::Utility => "Корисність",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            ResultCategory::Healing => "Healing",
            ResultCategory::Mana => "Mana",
            ResultCategory::Strength => "Strength",
            ResultCategory::Mental => "Mental",
            ResultCategory::Enhancement => "Enhancement",
            ResultCategory::Utility => "Utility",
        }
    }
}

impl FromStr for ResultCategory {
    type Err = AlchemyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ResultCategory::ALL
            .into_iter()
            .find(|c| c.tag() == s || c.english().eq_ignore_ascii_case(s))
            .ok_or_else(|| AlchemyError::UnknownResultType(s.to_string()))
    }
}

/// Kind-specific magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElixirKind {
    Healing { healing_power: u32 },
    Mana { mana_power: u32 },
    Strength { strength_boost: u32, duration: u32 },
    Mental { intelligence_boost: u32, duration: u32 },
    Enhancement { defense_boost: u32, duration: u32 },
    Utility { duration: u32 },
}

/// Utility elixirs raise every stat by this much, whatever their tier.
pub const UTILITY_BOOST: u32 = 2;

impl ElixirKind {
    /// Fixed magnitude table, one row per category and tier.
    pub fn for_tier(category: ResultCategory, tier: Tier) -> Self {
        use ResultCategory as C;
        use Tier as T;
        match (category, tier) {
            (C::Healing, T::Base) => Self::Healing { healing_power: 20 },
            (C::Healing, T::Advanced) => Self::Healing { healing_power: 50 },
            (C::Healing, T::Master) => Self::Healing { healing_power: 100 },
            (C::Mana, T::Base) => Self::Mana { mana_power: 15 },
            (C::Mana, T::Advanced) => Self::Mana { mana_power: 40 },
            (C::Mana, T::Master) => Self::Mana { mana_power: 80 },
            (C::Strength, T::Base) => Self::Strength { strength_boost: 2, duration: 3 },
            (C::Strength, T::Advanced) => Self::Strength { strength_boost: 4, duration: 5 },
            (C::Strength, T::Master) => Self::Strength { strength_boost: 8, duration: 7 },
            (C::Mental, T::Base) => Self::Mental { intelligence_boost: 2, duration: 3 },
            (C::Mental, T::Advanced) => Self::Mental { intelligence_boost: 4, duration: 5 },
            (C::Mental, T::Master) => Self::Mental { intelligence_boost: 8, duration: 7 },
            (C::Enhancement, T::Base) => Self::Enhancement { defense_boost: 2, duration: 3 },
            (C::Enhancement, T::Advanced) => Self::Enhancement { defense_boost: 4, duration: 5 },
            (C::Enhancement, T::Master) => Self::Enhancement { defense_boost: 8, duration: 7 },
            (C::Utility, T::Base) => Self::Utility { duration: 2 },
            (C::Utility, T::Advanced) => Self::Utility { duration: 4 },
            (C::Utility, T::Master) => Self::Utility { duration: 6 },
        }
    }

    pub fn category(&self) -> ResultCategory {
        match self {
            Self::Healing { .. } => ResultCategory::Healing,
            Self::Mana { .. } => ResultCategory::Mana,
            Self::Strength { .. } => ResultCategory::Strength,
            Self::Mental { .. } => ResultCategory::Mental,
            Self::Enhancement { .. } => ResultCategory::Enhancement,
            Self::Utility { .. } => ResultCategory::Utility,
        }
    }

    pub fn duration(&self) -> Option<u32> {
        match self {
            Self::Strength { duration, .. }
            | Self::Mental { duration, .. }
            | Self::Enhancement { duration, .. }
            | Self::Utility { duration } => Some(*duration),
            Self::Healing { .. } | Self::Mana { .. } => None,
        }
    }
}

/// Human-readable description of what the kind does to a character.
pub fn effect_description(kind: &ElixirKind) -> String {
    match kind {
        ElixirKind::Healing { healing_power } => {
            format!("This effect heals character's health by {} points", healing_power)
        }
        ElixirKind::Mana { mana_power } => {
            format!("This effect boosts character's mana by {} points", mana_power)
        }
        ElixirKind::Strength { strength_boost, .. } => {
            format!("This effect boosts character's strength by {} points", strength_boost)
        }
        ElixirKind::Mental { intelligence_boost, .. } => format!(
            "This effect boosts character's intelligence by {} points",
            intelligence_boost
        ),
        ElixirKind::Enhancement { defense_boost, .. } => {
            format!("This effect boosts character's defense by {} points", defense_boost)
        }
        ElixirKind::Utility { .. } => format!(
            "This effect boosts each character's parameter by {} points",
            UTILITY_BOOST
        ),
    }
}

/// Mutate the character's stats according to the kind.
pub fn apply_effect(kind: &ElixirKind, character: &mut Character) {
    match *kind {
        ElixirKind::Healing { healing_power } => character.health += healing_power as f32,
        ElixirKind::Mana { mana_power } => character.mana += mana_power as f32,
        ElixirKind::Strength { strength_boost, .. } => {
            character.strength += strength_boost as f32
        }
        ElixirKind::Mental { intelligence_boost, .. } => {
            character.intelligence += intelligence_boost as f32
        }
        ElixirKind::Enhancement { defense_boost, .. } => {
            character.defense += defense_boost as f32
        }
        ElixirKind::Utility { .. } => {
            let boost = UTILITY_BOOST as f32;
            character.health += boost;
            character.mana += boost;
            character.strength += boost;
            character.intelligence += boost;
            character.defense += boost;
        }
    }
}

/// Size after using an elixir of `tier`; an unknown tier grows by 0.1.
pub fn grown_size(size: f32, tier: Option<Tier>) -> f32 {
    let increase = match tier {
        Some(Tier::Base) => 0.2,
        Some(Tier::Advanced) => 0.5,
        Some(Tier::Master) => 1.0,
        None => 0.1,
    };
    size + increase
}

/// A brewed elixir instance. Only [`create_elixir`] and friends construct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elixir {
    pub id: Uuid,
    pub name: String,
    /// Always the effect description, never the recipe text
    pub description: String,
    pub value: u32,
    pub tier: Tier,
    pub kind: ElixirKind,
}

impl Elixir {
    fn new(name: &str, value: u32, tier: Tier, kind: ElixirKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: effect_description(&kind),
            value,
            tier,
            kind,
        }
    }

    pub fn category(&self) -> ResultCategory {
        self.kind.category()
    }

    /// Level requirement match: same kind, tier and name.
    pub fn matches(&self, other: &Elixir) -> bool {
        self.category() == other.category() && self.tier == other.tier && self.name == other.name
    }
}

/// Build an elixir of `category` at `tier`, named and valued after the recipe.
///
/// The recipe description is discarded: the elixir's description is always the
/// text of its effect.
pub fn brew(category: ResultCategory, tier: Tier, name: &str, value: u32) -> Elixir {
    Elixir::new(name, value, tier, ElixirKind::for_tier(category, tier))
}

/// Crafting factory: tier from the gold spent, kind from the recipe category.
pub fn create_elixir(recipe: &Recipe, spend_amount: u32) -> Result<Elixir, AlchemyError> {
    let category: ResultCategory = recipe.result_type.parse()?;
    Ok(brew(
        category,
        tier_for_spend(spend_amount),
        &recipe.name,
        recipe.value,
    ))
}

/// Level factory: tier from the recipe's own difficulty.
pub fn create_required_elixir(recipe: &Recipe) -> Result<Elixir, AlchemyError> {
    let category: ResultCategory = recipe.result_type.parse()?;
    Ok(brew(
        category,
        tier_for_difficulty(recipe.difficulty),
        &recipe.name,
        recipe.value,
    ))
}
