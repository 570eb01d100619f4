//! Catalog and economy entities: ingredients, recipes, locations, shops,
//! the player and the per-level character targeted by elixir effects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::alchemy::elixir::{apply_effect, grown_size, Elixir};

// ============================================================================
// Catalog
// ============================================================================

/// A gatherable or purchasable ingredient. Identity is the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub description: String,
    pub base_value: u32,
}

impl Ingredient {
    pub fn new(name: &str, description: &str, base_value: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            base_value,
        }
    }
}

/// A brewing recipe. Built once through the `with_*` chain and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    /// Ingredient name -> required quantity (always > 0)
    pub ingredients: BTreeMap<String, u32>,
    pub difficulty: u32,
    /// Reward base carried over to the elixir
    pub value: u32,
    /// Result category tag selecting the elixir factory
    pub result_type: String,
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            ingredients: BTreeMap::new(),
            difficulty: 1,
            value: 0,
            result_type: String::new(),
            steps: Vec::new(),
        }
    }

    /// Require `quantity` of an ingredient. Repeated ingredients accumulate; zero is ignored.
    pub fn with_ingredient(mut self, ingredient: &Ingredient, quantity: u32) -> Self {
        if quantity > 0 {
            *self
                .ingredients
                .entry(ingredient.name.clone())
                .or_insert(0) += quantity;
        }
        self
    }

    pub fn with_difficulty(mut self, difficulty: u32) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }

    pub fn with_result_type(mut self, result_type: &str) -> Self {
        self.result_type = result_type.to_string();
        self
    }

    pub fn with_step(mut self, step: &str) -> Self {
        self.steps.push(step.to_string());
        self
    }

    pub fn required(&self, ingredient: &str) -> u32 {
        self.ingredients.get(ingredient).copied().unwrap_or(0)
    }
}

// ============================================================================
// Economy entities
// ============================================================================

/// Stock line in a shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopEntry {
    pub quantity: u32,
    /// Unit price in gold
    pub price: u32,
}

/// A vendor. Stock depletes on purchase and entries vanish at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
    pub description: String,
    pub inventory: BTreeMap<String, ShopEntry>,
}

impl Shop {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            inventory: BTreeMap::new(),
        }
    }

    /// Add stock. Quantities accumulate and the latest price wins.
    pub fn with_stock(mut self, ingredient: &Ingredient, quantity: u32, price: u32) -> Self {
        self.add_stock(&ingredient.name, quantity, price);
        self
    }

    pub fn add_stock(&mut self, ingredient: &str, quantity: u32, price: u32) {
        let entry = self
            .inventory
            .entry(ingredient.to_string())
            .or_insert(ShopEntry { quantity: 0, price });
        entry.quantity = entry.quantity.saturating_add(quantity);
        entry.price = price;
    }

    pub fn get_entry(&self, ingredient: &str) -> Option<&ShopEntry> {
        self.inventory.get(ingredient)
    }

    /// Reduce stock, dropping the entry when it reaches zero. Caller checks availability.
    pub(crate) fn reduce_stock(&mut self, ingredient: &str, quantity: u32) {
        if let Some(entry) = self.inventory.get_mut(ingredient) {
            entry.quantity = entry.quantity.saturating_sub(quantity);
            if entry.quantity == 0 {
                self.inventory.remove(ingredient);
            }
        }
    }
}

/// A place with a gatherable ingredient pile and its shops. Piles never replenish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub description: String,
    pub available_ingredients: BTreeMap<String, u32>,
    pub shops: Vec<Shop>,
}

impl Location {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            available_ingredients: BTreeMap::new(),
            shops: Vec::new(),
        }
    }

    pub fn add_ingredient(&mut self, ingredient: &Ingredient, quantity: u32) {
        *self
            .available_ingredients
            .entry(ingredient.name.clone())
            .or_insert(0) += quantity;
    }

    pub fn add_shop(&mut self, shop: Shop) {
        self.shops.push(shop);
    }

    pub fn available(&self, ingredient: &str) -> u32 {
        self.available_ingredients
            .get(ingredient)
            .copied()
            .unwrap_or(0)
    }

    pub fn shop(&self, name: &str) -> Option<&Shop> {
        self.shops.iter().find(|s| s.name == name)
    }

    pub fn shop_mut(&mut self, name: &str) -> Option<&mut Shop> {
        self.shops.iter_mut().find(|s| s.name == name)
    }
}

/// The alchemist. Gold is unsigned so it can never go negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub gold: u32,
    pub inventory: BTreeMap<String, u32>,
    pub elixirs: Vec<Elixir>,
    /// Recipe names, no duplicates
    pub known_recipes: Vec<String>,
}

impl Player {
    pub fn new(name: &str, gold: u32) -> Self {
        Self {
            name: name.to_string(),
            level: 1,
            experience: 0,
            gold,
            inventory: BTreeMap::new(),
            elixirs: Vec::new(),
            known_recipes: Vec::new(),
        }
    }

    pub fn add_ingredient(&mut self, ingredient: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let owned = self.inventory.entry(ingredient.to_string()).or_insert(0);
        *owned = owned.saturating_add(quantity);
    }

    pub fn ingredient_count(&self, ingredient: &str) -> u32 {
        self.inventory.get(ingredient).copied().unwrap_or(0)
    }

    /// Remove up to `quantity`, dropping the entry at zero. Returns the amount removed.
    pub(crate) fn remove_ingredient(&mut self, ingredient: &str, quantity: u32) -> u32 {
        let Some(owned) = self.inventory.get_mut(ingredient) else {
            return 0;
        };
        let removed = quantity.min(*owned);
        *owned -= removed;
        if *owned == 0 {
            self.inventory.remove(ingredient);
        }
        removed
    }

    pub fn add_elixir(&mut self, elixir: Elixir) {
        self.elixirs.push(elixir);
    }

    pub fn elixir(&self, id: Uuid) -> Option<&Elixir> {
        self.elixirs.iter().find(|e| e.id == id)
    }

    /// Remove one elixir instance by id.
    pub fn take_elixir(&mut self, id: Uuid) -> Option<Elixir> {
        let index = self.elixirs.iter().position(|e| e.id == id)?;
        Some(self.elixirs.remove(index))
    }

    /// Learn a recipe. Returns false when it was already known.
    pub fn learn_recipe(&mut self, recipe: &str) -> bool {
        if self.knows_recipe(recipe) {
            return false;
        }
        self.known_recipes.push(recipe.to_string());
        true
    }

    pub fn knows_recipe(&self, recipe: &str) -> bool {
        self.known_recipes.iter().any(|r| r == recipe)
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }
}

// ============================================================================
// Character
// ============================================================================

const CHARACTER_NAMES: [&str; 6] = [
    "Mashmes",
    "Vinland cat",
    "Papus Jordan",
    "Bombini Gusini",
    "Yaroslav Mudriy",
    "Vidmakini Lapshini",
];
const GENERIC_CHARACTER_NAME: &str = "Tralalelo tralala";

/// Stat bundle that elixirs are used on. `size` only ever grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub health: f32,
    pub mana: f32,
    pub strength: f32,
    pub intelligence: f32,
    pub defense: f32,
    pub size: f32,
}

impl Character {
    pub fn new(name: &str, health: f32, mana: f32) -> Self {
        Self {
            name: name.to_string(),
            health,
            mana,
            strength: 0.0,
            intelligence: 0.0,
            defense: 0.0,
            size: 1.0,
        }
    }

    /// The character guarding level `level`: stats scale linearly with the level number.
    pub fn for_level(level: u32) -> Self {
        let name = level
            .checked_sub(1)
            .and_then(|i| CHARACTER_NAMES.get(i as usize))
            .copied()
            .unwrap_or(GENERIC_CHARACTER_NAME);
        let n = level as f32;
        Self::new(name, 100.0 + 10.0 * n, 50.0 + 5.0 * n)
    }

    /// Apply an elixir's effect, then grow by its tier.
    pub fn use_elixir(&mut self, elixir: &Elixir) {
        apply_effect(&elixir.kind, self);
        self.size = grown_size(self.size, Some(elixir.tier));
        log::debug!("{}'s size increased to {}x", self.name, self.size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_builder_accumulates_ingredients() {
        let herb = Ingredient::new("herb", "", 5);
        let water = Ingredient::new("water", "", 3);
        let recipe = Recipe::new("tonic", "a tonic")
            .with_ingredient(&herb, 2)
            .with_ingredient(&water, 1)
            .with_ingredient(&herb, 1)
            .with_ingredient(&water, 0)
            .with_difficulty(3);

        assert_eq!(recipe.required("herb"), 3);
        assert_eq!(recipe.required("water"), 1);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.difficulty, 3);
    }

    #[test]
    fn shop_stock_accumulates_and_drops_at_zero() {
        let herb = Ingredient::new("herb", "", 5);
        let mut shop = Shop::new("stall", "").with_stock(&herb, 2, 6);
        shop.add_stock("herb", 3, 7);
        assert_eq!(shop.get_entry("herb"), Some(&ShopEntry { quantity: 5, price: 7 }));

        shop.reduce_stock("herb", 5);
        assert!(shop.get_entry("herb").is_none());
    }

    #[test]
    fn player_learns_recipes_once() {
        let mut player = Player::new("tester", 500);
        assert!(player.learn_recipe("tonic"));
        assert!(!player.learn_recipe("tonic"));
        assert_eq!(player.known_recipes.len(), 1);
    }

    #[test]
    fn player_remove_ingredient_drops_empty_entry() {
        let mut player = Player::new("tester", 0);
        player.add_ingredient("herb", 3);
        assert_eq!(player.remove_ingredient("herb", 2), 2);
        assert_eq!(player.ingredient_count("herb"), 1);
        assert_eq!(player.remove_ingredient("herb", 5), 1);
        assert!(!player.inventory.contains_key("herb"));
    }

    #[test]
    fn character_names_follow_level_table() {
        assert_eq!(Character::for_level(1).name, "Mashmes");
        assert_eq!(Character::for_level(6).name, "Vidmakini Lapshini");
        assert_eq!(Character::for_level(7).name, "Tralalelo tralala");

        let c = Character::for_level(3);
        assert_eq!(c.health, 130.0);
        assert_eq!(c.mana, 65.0);
        assert_eq!(c.size, 1.0);
    }
}
