//! # Configuration
//!
//! TOML configuration for the alchemist game, split into sections:
//!
//! - [`GameConfig`] - player name, starting gold, eager levels, RNG seed
//! - [`QuizConfig`] - questioner name and tier switching
//! - [`StorageConfig`] - save store location and default slot
//! - [`LoggingConfig`] - log level and optional log file
//!
//! Every section and field has a default, so a partial file (or an empty one)
//! loads fine.
//!
//! ```rust,no_run
//! use alchemist::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     config.validate()?;
//!     println!("Playing as {}", config.game.player_name);
//!     Ok(())
//! }
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::alchemy::catalog::{DEFAULT_PLAYER_NAME, STARTING_GOLD};
use crate::alchemy::quiz::DEFAULT_NPC_NAME;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_player_name")]
    pub player_name: String,
    #[serde(default = "default_starting_gold")]
    pub starting_gold: u32,
    /// Levels created when a new world is built
    #[serde(default = "default_initial_levels")]
    pub initial_levels: u32,
    /// Fixed seed for level generation; unset means a random seed per run
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_player_name() -> String {
    DEFAULT_PLAYER_NAME.to_string()
}

fn default_starting_gold() -> u32 {
    STARTING_GOLD
}

fn default_initial_levels() -> u32 {
    6
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            starting_gold: default_starting_gold(),
            initial_levels: default_initial_levels(),
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    #[serde(default = "default_npc_name")]
    pub npc_name: String,
    /// Pick the question tier from the player's level instead of always asking beginner questions.
    #[serde(default)]
    pub tier_switching: bool,
}

fn default_npc_name() -> String {
    DEFAULT_NPC_NAME.to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            npc_name: default_npc_name(),
            tier_switching: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_slot")]
    pub default_slot: String,
}

fn default_data_dir() -> String {
    "data/alchemist".to_string()
}

fn default_slot() -> String {
    "autosave".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_slot: default_slot(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// Reject values the game cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.game.player_name.trim().is_empty() {
            return Err(anyhow!("game.player_name must not be empty"));
        }
        if self.game.initial_levels == 0 {
            return Err(anyhow!("game.initial_levels must be at least 1"));
        }
        if self.storage.default_slot.trim().is_empty() {
            return Err(anyhow!("storage.default_slot must not be empty"));
        }
        Ok(())
    }
}
