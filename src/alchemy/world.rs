//! The game world: catalog, player, levels and quiz NPC behind one context.
//!
//! Callers construct a [`World`] explicitly and pass it around by reference;
//! there is no process-wide instance.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::alchemy::catalog::{canonical_catalog, starter_player, Catalog};
use crate::alchemy::crafting;
use crate::alchemy::elixir::Elixir;
use crate::alchemy::errors::AlchemyError;
use crate::alchemy::level::{Level, LevelBook};
use crate::alchemy::quiz::{Question, Questioner};
use crate::alchemy::shop::{process_purchase, PurchaseReceipt};
use crate::alchemy::types::{Character, Player, Recipe};
use crate::config::{GameConfig, QuizConfig};

fn fresh_rng() -> StdRng {
    StdRng::from_entropy()
}

/// Result of answering a quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizProgress {
    /// More questions follow.
    Continue { was_correct: bool },
    /// The session is over and the reward has been credited.
    Finished {
        was_correct: bool,
        correct_answers: u32,
        total: usize,
        reward: u32,
        passed: bool,
        farewell: &'static str,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub catalog: Catalog,
    pub player: Player,
    pub levels: LevelBook,
    pub questioner: Questioner,
    pub quiz_tier_switching: bool,
    #[serde(skip, default = "fresh_rng")]
    rng: StdRng,
}

impl World {
    /// Build a new game from configuration, creating the first `initial_levels` levels.
    pub fn new(game: &GameConfig, quiz: &QuizConfig) -> Result<Self, AlchemyError> {
        let rng = match game.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => fresh_rng(),
        };
        let catalog = canonical_catalog();
        let player = starter_player(&game.player_name, game.starting_gold, &catalog);
        let mut world = Self {
            catalog,
            player,
            levels: LevelBook::new(),
            questioner: Questioner::new(&quiz.npc_name),
            quiz_tier_switching: quiz.tier_switching,
            rng,
        };
        for number in 1..=game.initial_levels {
            world.create_level(number)?;
        }
        info!(
            "World ready for {} with {} gold and {} levels",
            world.player.name,
            world.player.gold,
            world.levels.len()
        );
        Ok(world)
    }

    /// Replace the RNG, e.g. to make a restored save deterministic in tests.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn recipe(&self, name: &str) -> Result<&Recipe, AlchemyError> {
        self.catalog
            .recipe(name)
            .ok_or_else(|| AlchemyError::NotFound(format!("recipe: {}", name)))
    }

    /// Buy `quantity` of `ingredient` from `shop` at `location`.
    pub fn purchase(
        &mut self,
        location: &str,
        shop: &str,
        ingredient: &str,
        quantity: u32,
    ) -> Result<PurchaseReceipt, AlchemyError> {
        let place = self
            .catalog
            .location_mut(location)
            .ok_or_else(|| AlchemyError::NotFound(format!("location: {}", location)))?;
        let store = place
            .shop_mut(shop)
            .ok_or_else(|| AlchemyError::NotFound(format!("shop: {}", shop)))?;
        process_purchase(&mut self.player, store, ingredient, quantity)
    }

    /// Pick `quantity` of `ingredient` from a location's wild pile. Piles never regrow.
    pub fn gather(
        &mut self,
        location: &str,
        ingredient: &str,
        quantity: u32,
    ) -> Result<u32, AlchemyError> {
        if quantity == 0 {
            return Err(AlchemyError::InvalidQuantity);
        }
        let place = self
            .catalog
            .location_mut(location)
            .ok_or_else(|| AlchemyError::NotFound(format!("location: {}", location)))?;
        let available = place.available(ingredient);
        if available < quantity {
            return Err(AlchemyError::OutOfStock {
                ingredient: ingredient.to_string(),
                requested: quantity,
                available,
            });
        }

        let remaining = available - quantity;
        if remaining == 0 {
            place.available_ingredients.remove(ingredient);
        } else {
            place
                .available_ingredients
                .insert(ingredient.to_string(), remaining);
        }
        self.player.add_ingredient(ingredient, quantity);
        info!(
            "{} gathered {} x {} in {}",
            self.player.name, quantity, ingredient, place.name
        );
        Ok(self.player.ingredient_count(ingredient))
    }

    /// Brew the named recipe spending `spend_amount` gold.
    pub fn craft(&mut self, recipe: &str, spend_amount: u32) -> Result<Elixir, AlchemyError> {
        let recipe = self
            .catalog
            .recipe(recipe)
            .ok_or_else(|| AlchemyError::NotFound(format!("recipe: {}", recipe)))?;
        crafting::craft(&mut self.player, recipe, spend_amount)
    }

    /// "name: owned/required" lines for the named recipe.
    pub fn recipe_status(&self, recipe: &str) -> Result<Vec<String>, AlchemyError> {
        Ok(crafting::ingredient_status(&self.player, self.recipe(recipe)?))
    }

    pub fn learn_recipe(&mut self, recipe: &str) -> Result<bool, AlchemyError> {
        let name = self.recipe(recipe)?.name.clone();
        let learned = self.player.learn_recipe(&name);
        if learned {
            info!("{} learned {}", self.player.name, name);
        }
        Ok(learned)
    }

    pub fn create_level(&mut self, number: u32) -> Result<&Level, AlchemyError> {
        self.levels
            .create_level(number, &self.catalog.recipes, &mut self.rng)
    }

    pub fn create_next_level(&mut self) -> Result<&Level, AlchemyError> {
        self.levels
            .create_next_level(&self.catalog.recipes, &mut self.rng)
    }

    pub fn load_level(&mut self, number: u32) -> Result<&Character, AlchemyError> {
        self.levels.load_level(number)
    }

    pub fn level(&self, number: u32) -> Result<&Level, AlchemyError> {
        self.levels.get(number)
    }

    /// Use the player's elixir `elixir_id` on level `number`'s character.
    ///
    /// Completing a level raises the player's level by one.
    pub fn use_elixir_for_character(
        &mut self,
        number: u32,
        elixir_id: Uuid,
    ) -> Result<bool, AlchemyError> {
        let elixir = self
            .player
            .elixir(elixir_id)
            .cloned()
            .ok_or_else(|| AlchemyError::NotFound(format!("elixir: {}", elixir_id)))?;
        let was_completed = self.levels.get(number)?.completed;

        let matched = self
            .levels
            .use_elixir_for_character(number, &elixir, &mut self.player)?;

        if !was_completed && self.levels.get(number)?.completed {
            self.player.level += 1;
            info!("{} reached level {}", self.player.name, self.player.level);
        }
        Ok(matched)
    }

    /// Begin a fresh quiz session and return the NPC's greeting.
    pub fn start_quiz(&mut self) -> &'static str {
        self.questioner
            .update_tier(self.player.level, self.quiz_tier_switching);
        self.questioner.reset();
        debug!(
            "{} starts a {} quiz",
            self.questioner.name,
            self.questioner.tier()
        );
        self.questioner.greeting()
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        self.questioner.current_question()
    }

    /// Grade `choice` for the current question and advance; credits the reward on the last one.
    pub fn answer_quiz(&mut self, choice: usize) -> Result<QuizProgress, AlchemyError> {
        let question = self
            .questioner
            .current_question()
            .ok_or(AlchemyError::QuizCompleted)?;
        let was_correct = question.is_correct(choice);
        if self.questioner.move_to_next(was_correct)? {
            return Ok(QuizProgress::Continue { was_correct });
        }

        let reward = self.questioner.reward();
        self.player.add_gold(reward);
        info!(
            "{} finished the quiz with {}/{} and earned {} gold",
            self.player.name,
            self.questioner.correct_answers(),
            self.questioner.total_questions(),
            reward
        );
        Ok(QuizProgress::Finished {
            was_correct,
            correct_answers: self.questioner.correct_answers(),
            total: self.questioner.total_questions(),
            reward,
            passed: self.questioner.is_passed(),
            farewell: self.questioner.farewell(),
        })
    }
}
