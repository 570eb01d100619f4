//! Integration tests for the elixir factory and character effects

use alchemist::alchemy::{
    create_elixir, AlchemyError, Character, ElixirKind, Ingredient, Recipe, ResultCategory, Tier,
};

fn recipe(category: &str) -> Recipe {
    let herb = Ingredient::new("herb", "", 5);
    Recipe::new("Test brew", "recipe text that never reaches the elixir")
        .with_ingredient(&herb, 1)
        .with_value(15)
        .with_result_type(category)
}

#[test]
fn test_spend_selects_tier() {
    let healing = recipe("Лікування");
    assert_eq!(create_elixir(&healing, 0).unwrap().tier, Tier::Base);
    assert_eq!(create_elixir(&healing, 50).unwrap().tier, Tier::Advanced);
    assert_eq!(create_elixir(&healing, 100).unwrap().tier, Tier::Master);
    // Only the exact thresholds count.
    assert_eq!(create_elixir(&healing, 99).unwrap().tier, Tier::Base);
    assert_eq!(create_elixir(&healing, 150).unwrap().tier, Tier::Base);
}

#[test]
fn test_master_healing_power() {
    let elixir = create_elixir(&recipe("Лікування"), 100).unwrap();
    assert_eq!(elixir.kind, ElixirKind::Healing { healing_power: 100 });
    assert_eq!(elixir.name, "Test brew");
    assert_eq!(elixir.value, 15);
    assert_eq!(
        elixir.description,
        "This effect heals character's health by 100 points"
    );
}

#[test]
fn test_every_category_resolves() {
    for category in ResultCategory::ALL {
        let elixir = create_elixir(&recipe(category.tag()), 0).unwrap();
        assert_eq!(elixir.category(), category);
    }
}

#[test]
fn test_unknown_category_fails() {
    assert!(matches!(
        create_elixir(&recipe("Отрута"), 50),
        Err(AlchemyError::UnknownResultType(tag)) if tag == "Отрута"
    ));
}

#[test]
fn test_using_elixirs_grows_character() {
    let mut hero = Character::new("hero", 100.0, 50.0);

    let strength = create_elixir(&recipe("Сила"), 50).unwrap();
    hero.use_elixir(&strength);
    assert_eq!(hero.strength, 4.0);
    assert!((hero.size - 1.5).abs() < 1e-6);

    let utility = create_elixir(&recipe("Корисність"), 100).unwrap();
    hero.use_elixir(&utility);
    assert_eq!(hero.health, 102.0);
    assert_eq!(hero.mana, 52.0);
    assert_eq!(hero.strength, 6.0);
    assert_eq!(hero.intelligence, 2.0);
    assert_eq!(hero.defense, 2.0);
    assert!((hero.size - 2.5).abs() < 1e-6);
}

#[test]
fn test_each_elixir_gets_its_own_id() {
    let a = create_elixir(&recipe("Мана"), 0).unwrap();
    let b = create_elixir(&recipe("Мана"), 0).unwrap();
    assert_ne!(a.id, b.id);
    assert!(a.matches(&b));
}
