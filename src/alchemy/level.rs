//! Level progression.
//!
//! Levels live in an arena indexed by level number. Each level moves through
//! `Created -> Loaded -> Completed`; loading materialises the level's
//! character once and is a no-op afterwards.

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::alchemy::elixir::{create_required_elixir, Elixir};
use crate::alchemy::errors::AlchemyError;
use crate::alchemy::types::{Character, Player, Recipe};

/// Fewest elixirs a level asks for.
pub const MIN_REQUIRED_ELIXIRS: usize = 2;
/// Exclusive upper bound on the random elixir count.
pub const MAX_REQUIRED_ELIXIRS_EXCLUSIVE: usize = 4;

/// Where a level stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelState {
    Created,
    Loaded,
    Completed,
}

/// One progression unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub number: u32,
    pub name: String,
    pub required_elixirs: Vec<Elixir>,
    pub loaded: bool,
    pub completed: bool,
    pub character: Option<Character>,
}

impl Level {
    fn new(number: u32, required_elixirs: Vec<Elixir>) -> Self {
        // Nothing to deliver means nothing left to do.
        let completed = required_elixirs.is_empty();
        Self {
            number,
            name: format!("Level_{}", number),
            required_elixirs,
            loaded: false,
            completed,
            character: None,
        }
    }

    pub fn state(&self) -> LevelState {
        if self.completed {
            LevelState::Completed
        } else if self.loaded {
            LevelState::Loaded
        } else {
            LevelState::Created
        }
    }
}

/// Highest recipe difficulty allowed for a level (None = unfiltered).
pub fn difficulty_ceiling(level: u32) -> Option<u32> {
    match level {
        0..=3 => Some(2),
        4..=6 => Some(4),
        _ => None,
    }
}

/// Draw the required elixirs for `level` from the recipe catalog.
///
/// Recipes are filtered by the level's difficulty band, shuffled, and the first
/// `count` are converted, where `count` is uniform in
/// `[2, min(4, filtered + 1))`.
pub fn generate_required_elixirs<R: Rng + ?Sized>(
    level: u32,
    recipes: &[Recipe],
    rng: &mut R,
) -> Result<Vec<Elixir>, AlchemyError> {
    let ceiling = difficulty_ceiling(level);
    let mut candidates: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| ceiling.map_or(true, |max| r.difficulty <= max))
        .collect();

    let upper = MAX_REQUIRED_ELIXIRS_EXCLUSIVE.min(candidates.len() + 1);
    let count = if upper > MIN_REQUIRED_ELIXIRS {
        rng.gen_range(MIN_REQUIRED_ELIXIRS..upper)
    } else {
        candidates.len().min(MIN_REQUIRED_ELIXIRS)
    };

    candidates.shuffle(rng);
    candidates
        .into_iter()
        .take(count)
        .map(create_required_elixir)
        .collect()
}

/// Arena of levels; level `n` sits at index `n - 1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelBook {
    levels: Vec<Level>,
}

impl LevelBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn get(&self, number: u32) -> Result<&Level, AlchemyError> {
        self.index(number).map(|i| &self.levels[i])
    }

    fn index(&self, number: u32) -> Result<usize, AlchemyError> {
        if number == 0 || number as usize > self.levels.len() {
            return Err(AlchemyError::InvalidLevel(number));
        }
        Ok(number as usize - 1)
    }

    /// Create level `number`, or return it unchanged if it exists.
    ///
    /// Levels are numbered contiguously, so only the next level (`len + 1`)
    /// can be created; anything further out is `InvalidLevel`.
    pub fn create_level<R: Rng + ?Sized>(
        &mut self,
        number: u32,
        recipes: &[Recipe],
        rng: &mut R,
    ) -> Result<&Level, AlchemyError> {
        let next = self.levels.len() + 1;
        if number == 0 || number as usize > next {
            return Err(AlchemyError::InvalidLevel(number));
        }
        if (number as usize) < next {
            return self.get(number);
        }

        let required = generate_required_elixirs(number, recipes, rng)?;
        let level = Level::new(number, required);
        info!(
            "Created level {} requiring {} elixirs",
            level.name,
            level.required_elixirs.len()
        );
        self.levels.push(level);
        self.get(number)
    }

    /// Append the level after the last one.
    pub fn create_next_level<R: Rng + ?Sized>(
        &mut self,
        recipes: &[Recipe],
        rng: &mut R,
    ) -> Result<&Level, AlchemyError> {
        let next = self.levels.len() as u32 + 1;
        self.create_level(next, recipes, rng)
    }

    /// Load level `number` and return its character, creating both on first load.
    pub fn load_level(&mut self, number: u32) -> Result<&Character, AlchemyError> {
        let index = self.index(number)?;
        let level = &mut self.levels[index];

        if level.loaded {
            debug!("Level {} already loaded", level.name);
        } else {
            info!("Loading level: {}", level.name);
            for elixir in &level.required_elixirs {
                debug!("- {} (Type: {})", elixir.name, elixir.tier);
            }
            level.loaded = true;
        }

        let name = &level.name;
        let character = level.character.get_or_insert_with(|| {
            let c = Character::for_level(number);
            info!("Loaded character for {}: {}", name, c.name);
            c
        });
        Ok(&*character)
    }

    /// Use `elixir` on level `number`'s character and try to tick off a requirement.
    ///
    /// The effect is applied before matching, so a non-matching elixir still
    /// changes the character but leaves the requirements (and the player's
    /// elixir list) alone and returns `false`. A match removes one requirement
    /// and the elixir instance from the player.
    pub fn use_elixir_for_character(
        &mut self,
        number: u32,
        elixir: &Elixir,
        player: &mut Player,
    ) -> Result<bool, AlchemyError> {
        let index = self.index(number)?;
        let level = &mut self.levels[index];

        if !level.loaded {
            return Err(AlchemyError::NotLoaded(number));
        }
        let Some(character) = level.character.as_mut() else {
            return Err(AlchemyError::NotLoaded(number));
        };
        character.use_elixir(elixir);

        let Some(pos) = level
            .required_elixirs
            .iter()
            .position(|required| required.matches(elixir))
        else {
            debug!("{} is not required by {}", elixir.name, level.name);
            return Ok(false);
        };

        level.required_elixirs.remove(pos);
        player.take_elixir(elixir.id);

        if level.required_elixirs.is_empty() {
            level.completed = true;
            info!("Level {} completed", level.name);
        }
        Ok(true)
    }
}
