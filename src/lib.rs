//! # Alchemist - a potion-brewing game core
//!
//! The player gathers and buys ingredients, brews elixirs from recipes, and
//! delivers them to the characters guarding each level. A quiz NPC pays gold
//! for correct answers.
//!
//! ## Features
//!
//! - **Economy**: locations with depleting ingredient piles and shops with priced stock.
//! - **Purchase Pipeline**: ordered stock and funds checks before any gold changes hands.
//! - **Elixir Factory**: six result categories, three tiers chosen by the gold spent.
//! - **Levels**: randomly drawn elixir requirements per level, with a character that grows as it drinks.
//! - **Quiz**: beginner, intermediate and advanced question banks with per-answer rewards.
//! - **Save Slots**: whole worlds persisted to sled with bincode.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use alchemist::alchemy::World;
//! use alchemist::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     let mut world = World::new(&config.game, &config.quiz)?;
//!     world.purchase("Село", "Сільська аптека", "Цілюща трава", 3)?;
//!     let elixir = world.craft("Мале зілля здоров'я", 50)?;
//!     println!("{}: {}", elixir.name, elixir.description);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`alchemy`] - game model, rules and persistence
//! - [`config`] - TOML configuration

pub mod alchemy;
pub mod config;
