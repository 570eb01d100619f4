//! Integration tests for loading and writing the TOML configuration

use alchemist::alchemy::World;
use alchemist::config::Config;
use tempfile::tempdir;

#[tokio::test]
async fn test_create_default_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let path = path.to_str().unwrap();

    Config::create_default(path).await.unwrap();
    let config = Config::load(path).await.unwrap();

    assert_eq!(config.game.starting_gold, 500);
    assert_eq!(config.game.initial_levels, 6);
    assert_eq!(config.quiz.npc_name, "Npc questioner");
    assert!(config.validate().is_ok());
}

#[tokio::test]
async fn test_custom_config_drives_world() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    tokio::fs::write(
        &path,
        r#"
[game]
player_name = "Tester"
starting_gold = 42
initial_levels = 2
rng_seed = 11

[quiz]
npc_name = "Sage"
"#,
    )
    .await
    .unwrap();

    let config = Config::load(path.to_str().unwrap()).await.unwrap();
    let world = World::new(&config.game, &config.quiz).unwrap();

    assert_eq!(world.player.name, "Tester");
    assert_eq!(world.player.gold, 42);
    assert_eq!(world.levels.len(), 2);
    assert_eq!(world.questioner.name, "Sage");
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(Config::load(path.to_str().unwrap()).await.is_err());
}

#[tokio::test]
async fn test_malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    tokio::fs::write(&path, "[game\nstarting_gold = ").await.unwrap();
    let err = Config::load(path.to_str().unwrap()).await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}
