//! Binary entrypoint for the alchemist CLI.
//!
//! Commands:
//! - `init` - write a starter `config.toml`
//! - `catalog [--json]` - print the locations, shops and recipes of a new world
//! - `play [--slot <name>] [--new]` - interactive console game backed by save slots
//! - `saves` - list stored save slots
//!
//! See the library crate docs for module-level details: `alchemist::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use alchemist::alchemy::catalog::canonical_catalog;
use alchemist::alchemy::commands::{
    format_locations, format_recipes, handle_command, parse_command, AlchemyCommand,
};
use alchemist::alchemy::errors::AlchemyError;
use alchemist::alchemy::shop::format_shop_listing;
use alchemist::alchemy::storage::AlchemyStoreBuilder;
use alchemist::alchemy::world::World;
use alchemist::config::Config;

#[derive(Parser)]
#[command(name = "alchemist")]
#[command(about = "A potion-brewing game: gather, buy, craft and deliver elixirs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,
    /// Print the world catalog
    Catalog {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Play in the terminal
    Play {
        /// Save slot to load from and save to (defaults to storage.default_slot)
        #[arg(short, long)]
        slot: Option<String>,
        /// Ignore any existing save and start a new game
        #[arg(long)]
        new: bool,
    },
    /// List save slots
    Saves,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Init = cli.command {
        init_logging(&None, cli.verbose);
        info!("Initializing new alchemist configuration");
        Config::create_default(&cli.config).await?;
        info!("Configuration file created at {}", cli.config);
        return Ok(());
    }

    // A missing config file just means defaults.
    let config = match Config::load(&cli.config).await {
        Ok(config) => Some(config),
        Err(e) => {
            if std::path::Path::new(&cli.config).exists() {
                return Err(e);
            }
            None
        }
    };
    init_logging(&config, cli.verbose);
    let config = config.unwrap_or_default();
    config.validate()?;

    match cli.command {
        Commands::Init => {}
        Commands::Catalog { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&canonical_catalog())?);
            } else {
                let world = World::new(&config.game, &config.quiz)?;
                for line in format_locations(&world) {
                    println!("{}", line);
                }
                for location in &world.catalog.locations {
                    for shop in &location.shops {
                        println!();
                        for line in format_shop_listing(shop) {
                            println!("{}", line);
                        }
                    }
                }
                println!();
                for line in format_recipes(&world) {
                    println!("{}", line);
                }
            }
        }
        Commands::Saves => {
            let store = AlchemyStoreBuilder::new(&config.storage.data_dir).open()?;
            let slots = store.list_slots()?;
            if slots.is_empty() {
                println!("No saves in {}", config.storage.data_dir);
            }
            for save in slots {
                println!(
                    "{} - {} (level {}, {}g) saved {}",
                    save.slot,
                    save.player_name,
                    save.player_level,
                    save.gold,
                    save.saved_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        Commands::Play { slot, new } => {
            let slot = slot.unwrap_or_else(|| config.storage.default_slot.clone());
            play(&config, &slot, new).await?;
        }
    }

    Ok(())
}

async fn play(config: &Config, slot: &str, new: bool) -> Result<()> {
    let store = AlchemyStoreBuilder::new(&config.storage.data_dir).open()?;
    let mut world = if new {
        World::new(&config.game, &config.quiz)?
    } else {
        match store.get_save(slot) {
            Ok(world) => {
                info!("Loaded slot {}", slot);
                world
            }
            Err(AlchemyError::NotFound(_)) => World::new(&config.game, &config.quiz)?,
            Err(e) => {
                warn!("Could not load slot {}: {} (starting a new game)", slot, e);
                World::new(&config.game, &config.quiz)?
            }
        }
    };

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    stdout
        .write_all(format!("Welcome, {}! Type HELP for commands.\n", world.player.name).as_bytes())
        .await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = match parse_command(&line) {
            AlchemyCommand::Quit => break,
            AlchemyCommand::Save(target) => {
                let target = target.unwrap_or_else(|| slot.to_string());
                match store.put_save(&target, &world) {
                    Ok(at) => format!("Saved to {} at {}", target, at.format("%H:%M:%S")),
                    Err(e) => format!("Error: {}", e),
                }
            }
            command => handle_command(&mut world, command),
        };
        stdout.write_all(reply.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }

    store.put_save(slot, &world)?;
    stdout
        .write_all(format!("Progress saved to {}. Farewell!\n", slot).as_bytes())
        .await?;
    stdout.flush().await?;
    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|cfg| cfg.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.as_ref())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    if let Some(f) = file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // With a log file the console only gets a copy when attached to a terminal
        let is_tty = atty::is(atty::Stream::Stdout);

        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());

            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }

            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
