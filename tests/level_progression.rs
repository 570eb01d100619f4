//! Integration tests for level generation, loading and completion

use alchemist::alchemy::{
    brew, AlchemyError, Ingredient, LevelBook, LevelState, Player, Recipe, ResultCategory, Tier,
    World,
};
use alchemist::config::{GameConfig, QuizConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn recipes() -> Vec<Recipe> {
    let herb = Ingredient::new("herb", "", 5);
    vec![
        Recipe::new("Heal", "").with_difficulty(1).with_result_type("Лікування").with_ingredient(&herb, 1),
        Recipe::new("Mana", "").with_difficulty(1).with_result_type("Мана").with_ingredient(&herb, 1),
        Recipe::new("Might", "").with_difficulty(2).with_result_type("Сила").with_ingredient(&herb, 1),
    ]
}

fn seeded_world(seed: u64) -> World {
    let game = GameConfig {
        rng_seed: Some(seed),
        initial_levels: 1,
        ..GameConfig::default()
    };
    World::new(&game, &QuizConfig::default()).unwrap()
}

#[test]
fn test_create_level_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut book = LevelBook::new();
    let first = book.create_level(1, &recipes(), &mut rng).unwrap().clone();
    let second = book.create_level(1, &recipes(), &mut rng).unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(book.len(), 1);
}

#[test]
fn test_same_seed_same_requirements() {
    let a = seeded_world(77);
    let b = seeded_world(77);
    let names = |w: &World| -> Vec<String> {
        w.level(1)
            .unwrap()
            .required_elixirs
            .iter()
            .map(|e| e.name.clone())
            .collect()
    };
    assert_eq!(names(&a), names(&b));
}

#[test]
fn test_use_before_load_is_rejected() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut book = LevelBook::new();
    book.create_level(1, &recipes(), &mut rng).unwrap();
    let mut player = Player::new("p", 0);
    let elixir = brew(ResultCategory::Healing, Tier::Base, "Heal", 0);
    assert!(matches!(
        book.use_elixir_for_character(1, &elixir, &mut player),
        Err(AlchemyError::NotLoaded(1))
    ));
}

#[test]
fn test_non_matching_elixir_still_applies_effect() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut book = LevelBook::new();
    book.create_level(1, &recipes(), &mut rng).unwrap();
    book.load_level(1).unwrap();
    let required_before = book.get(1).unwrap().required_elixirs.len();

    let mut player = Player::new("p", 0);
    let stranger = brew(ResultCategory::Healing, Tier::Master, "Unknown draught", 0);
    player.add_elixir(stranger.clone());

    let matched = book.use_elixir_for_character(1, &stranger, &mut player).unwrap();

    assert!(!matched);
    let level = book.get(1).unwrap();
    assert_eq!(level.required_elixirs.len(), required_before);
    assert_eq!(level.state(), LevelState::Loaded);
    let character = level.character.as_ref().unwrap();
    assert_eq!(character.health, 110.0 + 100.0);
    assert!((character.size - 2.0).abs() < 1e-6);
    assert_eq!(player.elixirs.len(), 1);
}

#[test]
fn test_delivering_every_required_elixir_completes_level() {
    let mut world = seeded_world(3);
    let required: Vec<String> = world
        .level(1)
        .unwrap()
        .required_elixirs
        .iter()
        .map(|e| e.name.clone())
        .collect();
    assert!((2..=3).contains(&required.len()));

    for ingredient in world.catalog.ingredients.clone() {
        world.player.add_ingredient(&ingredient.name, 20);
    }
    world.load_level(1).unwrap();

    for (i, name) in required.iter().enumerate() {
        // Level 1 only draws difficulty <= 2 recipes, which are Base tier: spend 0.
        let elixir = world.craft(name, 0).unwrap();
        assert!(world.use_elixir_for_character(1, elixir.id).unwrap());
        assert!(world.player.elixir(elixir.id).is_none());
        let done = i + 1 == required.len();
        assert_eq!(world.level(1).unwrap().completed, done);
    }

    assert_eq!(world.level(1).unwrap().state(), LevelState::Completed);
    assert_eq!(world.player.level, 2);
}

#[test]
fn test_later_levels_get_named_characters() {
    let mut world = seeded_world(3);
    assert!(matches!(world.create_level(7), Err(AlchemyError::InvalidLevel(7))));
    for number in 2..=7 {
        world.create_level(number).unwrap();
    }
    assert_eq!(world.levels.len(), 7);
    assert_eq!(world.load_level(6).unwrap().name, "Vidmakini Lapshini");
    assert_eq!(world.load_level(7).unwrap().name, "Tralalelo tralala");
    assert!(matches!(world.load_level(8), Err(AlchemyError::InvalidLevel(8))));
}
