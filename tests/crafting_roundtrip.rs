//! Integration tests for crafting with the built-in catalog

use alchemist::alchemy::{AlchemyError, ElixirKind, Tier, World};
use alchemist::config::{GameConfig, QuizConfig};

fn world() -> World {
    let game = GameConfig {
        rng_seed: Some(4),
        initial_levels: 1,
        ..GameConfig::default()
    };
    World::new(&game, &QuizConfig::default()).unwrap()
}

#[test]
fn test_starter_satchel_brews_small_mana_potion() {
    let mut world = world();
    let crystals = world.player.ingredient_count("Кристал мани");
    let water = world.player.ingredient_count("Чиста джерельна вода");

    let elixir = world.craft("Мале зілля мани", 50).unwrap();

    assert_eq!(elixir.tier, Tier::Advanced);
    assert_eq!(elixir.kind, ElixirKind::Mana { mana_power: 40 });
    assert_eq!(elixir.description, "This effect boosts character's mana by 40 points");
    assert_eq!(world.player.gold, 450);
    assert_eq!(world.player.ingredient_count("Кристал мани"), crystals - 1);
    assert_eq!(world.player.ingredient_count("Чиста джерельна вода"), water - 1);
    assert_eq!(world.player.elixirs.len(), 1);
}

#[test]
fn test_missing_ingredient_reports_shortfall() {
    let mut world = world();
    let result = world.craft("Диво алхіміка", 100);
    assert!(matches!(
        result,
        Err(AlchemyError::MissingIngredient { required: 1, owned: 0, .. })
    ));
    assert_eq!(world.player.gold, 500);
    assert!(world.player.elixirs.is_empty());
}

#[test]
fn test_gather_then_craft() {
    let mut world = world();
    world.gather("Болото", "Корінь женьшеню", 2).unwrap();
    let elixir = world.craft("Еліксир сили", 0).unwrap();
    assert_eq!(elixir.kind, ElixirKind::Strength { strength_boost: 2, duration: 3 });
    assert_eq!(world.player.ingredient_count("Корінь женьшеню"), 0);
    assert!(!world.player.inventory.contains_key("Корінь женьшеню"));
}

#[test]
fn test_recipe_status_lines() {
    let world = world();
    let lines = world.recipe_status("Мале зілля здоров'я").unwrap();
    assert!(lines.contains(&"Цілюща трава: 3/2".to_string()));
    assert!(lines.contains(&"Чиста джерельна вода: 4/1".to_string()));
}

#[test]
fn test_unknown_recipe_is_not_found() {
    let mut world = world();
    assert!(matches!(
        world.craft("Еліксир вічності", 0),
        Err(AlchemyError::NotFound(_))
    ));
}
