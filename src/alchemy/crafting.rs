//! Recipe to elixir transformation.
//!
//! Every check runs before the first mutation, so a failed craft leaves the
//! player untouched and a successful one deducts all ingredients and the spend.

use log::{info, warn};

use crate::alchemy::elixir::{create_elixir, Elixir};
use crate::alchemy::errors::AlchemyError;
use crate::alchemy::types::{Player, Recipe};

/// Check that `player` can brew `recipe` spending `spend_amount` gold.
pub fn can_craft(player: &Player, recipe: &Recipe, spend_amount: u32) -> Result<(), AlchemyError> {
    if player.gold < spend_amount {
        return Err(AlchemyError::InsufficientFunds {
            needed: spend_amount as u64,
            available: player.gold,
        });
    }

    for (ingredient, &required) in &recipe.ingredients {
        let owned = player.ingredient_count(ingredient);
        if owned < required {
            return Err(AlchemyError::MissingIngredient {
                ingredient: ingredient.clone(),
                required,
                owned,
            });
        }
    }

    Ok(())
}

/// Brew `recipe`, returning a copy of the elixir added to the player's list.
pub fn craft(
    player: &mut Player,
    recipe: &Recipe,
    spend_amount: u32,
) -> Result<Elixir, AlchemyError> {
    // Resolving the factory first means an unknown category fails before anything else.
    let elixir = create_elixir(recipe, spend_amount)?;

    if let Err(e) = can_craft(player, recipe, spend_amount) {
        warn!("{} cannot craft {}: {}", player.name, recipe.name, e);
        return Err(e);
    }

    for (ingredient, &required) in &recipe.ingredients {
        player.remove_ingredient(ingredient, required);
    }
    player.gold -= spend_amount;
    player.add_elixir(elixir.clone());

    info!(
        "{} crafted {} ({} tier) spending {} gold",
        player.name, elixir.name, elixir.tier, spend_amount
    );
    Ok(elixir)
}

/// One "name: owned/required" line per recipe ingredient.
pub fn ingredient_status(player: &Player, recipe: &Recipe) -> Vec<String> {
    recipe
        .ingredients
        .iter()
        .map(|(ingredient, required)| {
            format!(
                "{}: {}/{}",
                ingredient,
                player.ingredient_count(ingredient),
                required
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alchemy::elixir::Tier;
    use crate::alchemy::types::Ingredient;

    fn tonic() -> Recipe {
        let herb = Ingredient::new("herb", "", 5);
        let water = Ingredient::new("water", "", 3);
        Recipe::new("Tonic", "")
            .with_result_type("Лікування")
            .with_value(15)
            .with_ingredient(&herb, 2)
            .with_ingredient(&water, 1)
    }

    #[test]
    fn missing_ingredient_leaves_player_untouched() {
        let mut player = Player::new("p", 500);
        player.add_ingredient("herb", 2);
        let before = player.clone();

        let result = craft(&mut player, &tonic(), 50);
        assert!(matches!(
            result,
            Err(AlchemyError::MissingIngredient { ref ingredient, required: 1, owned: 0 }) if ingredient == "water"
        ));
        assert_eq!(player, before);
    }

    #[test]
    fn spend_beyond_gold_is_rejected() {
        let mut player = Player::new("p", 40);
        player.add_ingredient("herb", 2);
        player.add_ingredient("water", 1);

        let result = craft(&mut player, &tonic(), 50);
        assert!(matches!(
            result,
            Err(AlchemyError::InsufficientFunds { needed: 50, available: 40 })
        ));
        assert_eq!(player.ingredient_count("herb"), 2);
    }

    #[test]
    fn unknown_category_rejected_before_validation() {
        let mut player = Player::new("p", 0);
        let recipe = tonic().with_result_type("Вибух");
        assert!(matches!(
            craft(&mut player, &recipe, 100),
            Err(AlchemyError::UnknownResultType(_))
        ));
    }

    #[test]
    fn craft_master_tier() {
        let mut player = Player::new("p", 100);
        player.add_ingredient("herb", 3);
        player.add_ingredient("water", 1);

        let elixir = craft(&mut player, &tonic(), 100).unwrap();
        assert_eq!(elixir.tier, Tier::Master);
        assert_eq!(player.gold, 0);
        assert_eq!(player.ingredient_count("herb"), 1);
        assert!(!player.inventory.contains_key("water"));
        assert_eq!(player.elixirs.len(), 1);
        assert_eq!(player.elixirs[0].id, elixir.id);
    }

    #[test]
    fn status_lines() {
        let mut player = Player::new("p", 0);
        player.add_ingredient("herb", 1);
        assert_eq!(
            ingredient_status(&player, &tonic()),
            vec!["herb: 1/2".to_string(), "water: 0/1".to_string()]
        );
    }
}
