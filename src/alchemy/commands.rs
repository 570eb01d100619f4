//! Console command parsing and rendering.
//!
//! Everything the player picks (locations, shop items, recipes, elixirs, quiz
//! answers) is addressed by its 1-based number in the matching listing, so the
//! console never needs Cyrillic input.

use crate::alchemy::errors::AlchemyError;
use crate::alchemy::world::{QuizProgress, World};

/// Parsed console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlchemyCommand {
    Help,
    Status,
    Inventory,
    Locations,
    Shop(usize),
    Buy { location: usize, shop: usize, item: usize, quantity: u32 },
    Gather { location: usize, item: usize, quantity: u32 },
    Recipes,
    Recipe(usize),
    Learn(usize),
    Craft { recipe: usize, spend: u32 },
    Levels,
    Load(u32),
    NextLevel,
    Use { level: u32, elixir: usize },
    Quiz,
    Answer(usize),
    Save(Option<String>),
    Quit,
    Unknown(String),
}

fn number<T: std::str::FromStr>(parts: &[&str], index: usize) -> Option<T> {
    parts.get(index).and_then(|p| p.parse().ok())
}

pub fn parse_command(input: &str) -> AlchemyCommand {
    let input = input.trim().to_uppercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return AlchemyCommand::Unknown(input);
    }

    match parts[0] {
        "H" | "HELP" | "?" => AlchemyCommand::Help,
        "ST" | "STATUS" => AlchemyCommand::Status,
        "I" | "INV" | "INVENTORY" => AlchemyCommand::Inventory,
        "L" | "LOCATIONS" => AlchemyCommand::Locations,
        "SHOP" => match number(&parts, 1) {
            Some(location) => AlchemyCommand::Shop(location),
            None => AlchemyCommand::Unknown("Usage: SHOP <location#>".to_string()),
        },
        "BUY" => match (number(&parts, 1), number(&parts, 2), number(&parts, 3)) {
            (Some(location), Some(shop), Some(item)) => AlchemyCommand::Buy {
                location,
                shop,
                item,
                quantity: number(&parts, 4).unwrap_or(1),
            },
            _ => AlchemyCommand::Unknown(
                "Usage: BUY <location#> <shop#> <item#> [qty]".to_string(),
            ),
        },
        "G" | "GATHER" => match (number(&parts, 1), number(&parts, 2)) {
            (Some(location), Some(item)) => AlchemyCommand::Gather {
                location,
                item,
                quantity: number(&parts, 3).unwrap_or(1),
            },
            _ => AlchemyCommand::Unknown("Usage: GATHER <location#> <item#> [qty]".to_string()),
        },
        "R" | "RECIPES" => match number(&parts, 1) {
            Some(recipe) => AlchemyCommand::Recipe(recipe),
            None => AlchemyCommand::Recipes,
        },
        "LEARN" => match number(&parts, 1) {
            Some(recipe) => AlchemyCommand::Learn(recipe),
            None => AlchemyCommand::Unknown("Usage: LEARN <recipe#>".to_string()),
        },
        "C" | "CRAFT" | "BREW" => match number(&parts, 1) {
            Some(recipe) => AlchemyCommand::Craft {
                recipe,
                spend: number(&parts, 2).unwrap_or(0),
            },
            None => AlchemyCommand::Unknown("Usage: CRAFT <recipe#> [gold]".to_string()),
        },
        "LEVELS" => AlchemyCommand::Levels,
        "LOAD" | "LEVEL" => match number(&parts, 1) {
            Some(level) => AlchemyCommand::Load(level),
            None => AlchemyCommand::Levels,
        },
        "NEXT" | "NEWLEVEL" => AlchemyCommand::NextLevel,
        "U" | "USE" => match (number(&parts, 1), number(&parts, 2)) {
            (Some(level), Some(elixir)) => AlchemyCommand::Use { level, elixir },
            _ => AlchemyCommand::Unknown("Usage: USE <level#> <elixir#>".to_string()),
        },
        "Q" | "QUIZ" => AlchemyCommand::Quiz,
        "A" | "ANSWER" => match number(&parts, 1) {
            Some(choice) => AlchemyCommand::Answer(choice),
            None => AlchemyCommand::Unknown("Usage: ANSWER <option#>".to_string()),
        },
        "SAVE" => AlchemyCommand::Save(parts.get(1).map(|s| s.to_lowercase())),
        "QUIT" | "EXIT" => AlchemyCommand::Quit,
        _ => AlchemyCommand::Unknown(input),
    }
}

fn pick<T>(items: &[T], number: usize, what: &str) -> Result<usize, AlchemyError> {
    if number == 0 || number > items.len() {
        return Err(AlchemyError::NotFound(format!("{} #{}", what, number)));
    }
    Ok(number - 1)
}

pub fn format_help() -> Vec<String> {
    [
        "STATUS | INV | LOCATIONS | SHOP <loc#>",
        "BUY <loc#> <shop#> <item#> [qty] | GATHER <loc#> <item#> [qty]",
        "RECIPES [recipe#] | LEARN <recipe#> | CRAFT <recipe#> [gold: 0, 50, 100]",
        "LEVELS | NEXT | LOAD <level#> | USE <level#> <elixir#>",
        "QUIZ | ANSWER <option#>",
        "SAVE [slot] | QUIT",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn format_status(world: &World) -> Vec<String> {
    let player = &world.player;
    vec![
        format!("{} (level {})", player.name, player.level),
        format!("Gold: {}", player.gold),
        format!(
            "Ingredients: {} kinds, elixirs: {}, recipes known: {}",
            player.inventory.len(),
            player.elixirs.len(),
            player.known_recipes.len()
        ),
    ]
}

pub fn format_inventory(world: &World) -> Vec<String> {
    let player = &world.player;
    let mut lines = vec!["=== Ingredients ===".to_string()];
    if player.inventory.is_empty() {
        lines.push("(empty)".to_string());
    }
    for (name, qty) in &player.inventory {
        lines.push(format!("{}: {}", name, qty));
    }
    lines.push("=== Elixirs ===".to_string());
    if player.elixirs.is_empty() {
        lines.push("(none)".to_string());
    }
    for (idx, elixir) in player.elixirs.iter().enumerate() {
        lines.push(format!(
            "{}. {} [{}] - {}",
            idx + 1,
            elixir.name,
            elixir.tier,
            elixir.description
        ));
    }
    lines
}

pub fn format_locations(world: &World) -> Vec<String> {
    let mut lines = Vec::new();
    for (idx, location) in world.catalog.locations.iter().enumerate() {
        lines.push(format!("{}. {} - {}", idx + 1, location.name, location.description));
        for (item_idx, (name, qty)) in location.available_ingredients.iter().enumerate() {
            lines.push(format!("   {}. {} ({})", item_idx + 1, name, qty));
        }
    }
    lines
}

pub fn format_recipes(world: &World) -> Vec<String> {
    world
        .catalog
        .recipes
        .iter()
        .enumerate()
        .map(|(idx, recipe)| {
            let marker = if world.player.knows_recipe(&recipe.name) {
                "*"
            } else {
                " "
            };
            format!(
                "{}.{} {} [{}] d{} - {}g",
                idx + 1,
                marker,
                recipe.name,
                recipe.result_type,
                recipe.difficulty,
                recipe.value
            )
        })
        .collect()
}

pub fn format_levels(world: &World) -> Vec<String> {
    world
        .levels
        .levels()
        .iter()
        .map(|level| {
            format!(
                "{}. {} - {:?}, {} elixirs left",
                level.number,
                level.name,
                level.state(),
                level.required_elixirs.len()
            )
        })
        .collect()
}

fn format_question(world: &World) -> Vec<String> {
    let Some(question) = world.current_question() else {
        return vec!["No question pending. Type QUIZ to start.".to_string()];
    };
    let mut lines = vec![format!(
        "[{}/{}] {}",
        world.questioner.position() + 1,
        world.questioner.total_questions(),
        question.text
    )];
    for (idx, answer) in question.answers.iter().enumerate() {
        lines.push(format!("  {}. {}", idx + 1, answer));
    }
    lines
}

fn run(world: &mut World, command: AlchemyCommand) -> Result<Vec<String>, AlchemyError> {
    let lines = match command {
        AlchemyCommand::Help => format_help(),
        AlchemyCommand::Status => format_status(world),
        AlchemyCommand::Inventory => format_inventory(world),
        AlchemyCommand::Locations => format_locations(world),
        AlchemyCommand::Shop(location) => {
            let idx = pick(&world.catalog.locations, location, "location")?;
            let place = &world.catalog.locations[idx];
            if place.shops.is_empty() {
                vec![format!("No shops in {}.", place.name)]
            } else {
                let mut lines = Vec::new();
                for (shop_idx, shop) in place.shops.iter().enumerate() {
                    lines.push(format!("Shop #{}", shop_idx + 1));
                    lines.extend(crate::alchemy::shop::format_shop_listing(shop));
                }
                lines
            }
        }
        AlchemyCommand::Buy {
            location,
            shop,
            item,
            quantity,
        } => {
            let idx = pick(&world.catalog.locations, location, "location")?;
            let place = &world.catalog.locations[idx];
            let shop = &place.shops[pick(&place.shops, shop, "shop")?];
            let ingredient = shop
                .inventory
                .keys()
                .nth(item.wrapping_sub(1))
                .cloned()
                .ok_or_else(|| AlchemyError::NotFound(format!("item #{}", item)))?;
            let (place_name, shop_name) = (place.name.clone(), shop.name.clone());
            let receipt = world.purchase(&place_name, &shop_name, &ingredient, quantity)?;
            vec![format!(
                "Bought {} x {} for {}g. Gold left: {}",
                receipt.quantity, receipt.ingredient, receipt.total_cost, world.player.gold
            )]
        }
        AlchemyCommand::Gather {
            location,
            item,
            quantity,
        } => {
            let idx = pick(&world.catalog.locations, location, "location")?;
            let place = &world.catalog.locations[idx];
            let ingredient = place
                .available_ingredients
                .keys()
                .nth(item.wrapping_sub(1))
                .cloned()
                .ok_or_else(|| AlchemyError::NotFound(format!("item #{}", item)))?;
            let place_name = place.name.clone();
            let owned = world.gather(&place_name, &ingredient, quantity)?;
            vec![format!("Gathered {} x {}. You now have {}.", quantity, ingredient, owned)]
        }
        AlchemyCommand::Recipes => format_recipes(world),
        AlchemyCommand::Recipe(number) => {
            let idx = pick(&world.catalog.recipes, number, "recipe")?;
            let recipe = &world.catalog.recipes[idx];
            let mut lines = vec![
                format!("=== {} ===", recipe.name),
                recipe.description.clone(),
            ];
            lines.extend(world.recipe_status(&recipe.name)?);
            lines
        }
        AlchemyCommand::Learn(number) => {
            let idx = pick(&world.catalog.recipes, number, "recipe")?;
            let name = world.catalog.recipes[idx].name.clone();
            if world.learn_recipe(&name)? {
                vec![format!("Learned {}.", name)]
            } else {
                vec![format!("You already know {}.", name)]
            }
        }
        AlchemyCommand::Craft { recipe, spend } => {
            let idx = pick(&world.catalog.recipes, recipe, "recipe")?;
            let name = world.catalog.recipes[idx].name.clone();
            let elixir = world.craft(&name, spend)?;
            vec![format!(
                "Brewed {} [{}]: {}",
                elixir.name, elixir.tier, elixir.description
            )]
        }
        AlchemyCommand::Levels => format_levels(world),
        AlchemyCommand::NextLevel => {
            let level = world.create_next_level()?;
            vec![format!(
                "Created {} ({} elixirs required).",
                level.name,
                level.required_elixirs.len()
            )]
        }
        AlchemyCommand::Load(number) => {
            let character = world.load_level(number)?.clone();
            let level = world.level(number)?;
            let mut lines = vec![
                format!("=== {} ({:?}) ===", level.name, level.state()),
                format!(
                    "{}: hp {} mp {} str {} int {} def {} size {:.1}x",
                    character.name,
                    character.health,
                    character.mana,
                    character.strength,
                    character.intelligence,
                    character.defense,
                    character.size
                ),
            ];
            for elixir in &level.required_elixirs {
                lines.push(format!("- {} [{}]", elixir.name, elixir.tier));
            }
            lines
        }
        AlchemyCommand::Use { level, elixir } => {
            let idx = pick(&world.player.elixirs, elixir, "elixir")?;
            let id = world.player.elixirs[idx].id;
            let matched = world.use_elixir_for_character(level, id)?;
            let state = world.level(level)?;
            let mut lines = vec![if matched {
                format!("That was one of the elixirs {} needed.", state.name)
            } else {
                format!("{} did not need that elixir.", state.name)
            }];
            if state.completed {
                lines.push(format!(
                    "{} completed! You are now level {}.",
                    state.name, world.player.level
                ));
            }
            lines
        }
        AlchemyCommand::Quiz => {
            let greeting = world.start_quiz();
            let mut lines = vec![format!("{}: {}", world.questioner.name, greeting)];
            lines.extend(format_question(world));
            lines
        }
        AlchemyCommand::Answer(choice) => {
            let question = world
                .current_question()
                .ok_or(AlchemyError::QuizCompleted)?;
            let idx = pick(&question.answers, choice, "answer")?;
            let progress = world.answer_quiz(idx)?;
            match progress {
                QuizProgress::Continue { was_correct } => {
                    let mut lines = vec![verdict(was_correct).to_string()];
                    lines.extend(format_question(world));
                    lines
                }
                QuizProgress::Finished {
                    was_correct,
                    correct_answers,
                    total,
                    reward,
                    farewell,
                    ..
                } => vec![
                    verdict(was_correct).to_string(),
                    format!("Score: {}/{}. Reward: {}g", correct_answers, total, reward),
                    format!("{}: {}", world.questioner.name, farewell),
                ],
            }
        }
        AlchemyCommand::Save(_) | AlchemyCommand::Quit => Vec::new(),
        AlchemyCommand::Unknown(text) => vec![format!("Unknown command: {}. Type HELP.", text)],
    };
    Ok(lines)
}

fn verdict(was_correct: bool) -> &'static str {
    if was_correct {
        "Correct!"
    } else {
        "Wrong."
    }
}

/// Execute `command` against `world` and render the reply. Game errors become the reply text.
///
/// `Save` and `Quit` need the caller's store and loop, so they render nothing here.
pub fn handle_command(world: &mut World, command: AlchemyCommand) -> String {
    match run(world, command) {
        Ok(lines) => lines.join("\n"),
        Err(e) => format!("Error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_numbered_commands() {
        assert_eq!(
            parse_command("buy 2 1 4 3"),
            AlchemyCommand::Buy { location: 2, shop: 1, item: 4, quantity: 3 }
        );
        assert_eq!(
            parse_command("buy 2 1 4"),
            AlchemyCommand::Buy { location: 2, shop: 1, item: 4, quantity: 1 }
        );
        assert_eq!(
            parse_command("gather 1 2"),
            AlchemyCommand::Gather { location: 1, item: 2, quantity: 1 }
        );
        assert_eq!(parse_command("craft 1 100"), AlchemyCommand::Craft { recipe: 1, spend: 100 });
        assert_eq!(parse_command("use 1 2"), AlchemyCommand::Use { level: 1, elixir: 2 });
        assert_eq!(parse_command("a 4"), AlchemyCommand::Answer(4));
        assert_eq!(parse_command("r"), AlchemyCommand::Recipes);
        assert_eq!(parse_command("r 3"), AlchemyCommand::Recipe(3));
    }

    #[test]
    fn parse_save_and_usage_errors() {
        assert_eq!(parse_command("SAVE Slot1"), AlchemyCommand::Save(Some("slot1".into())));
        assert_eq!(parse_command("save"), AlchemyCommand::Save(None));
        assert!(matches!(parse_command("buy x"), AlchemyCommand::Unknown(_)));
        assert!(matches!(parse_command("buy 2 1"), AlchemyCommand::Unknown(_)));
        assert_eq!(parse_command("next"), AlchemyCommand::NextLevel);
        assert!(matches!(parse_command("   "), AlchemyCommand::Unknown(_)));
    }

    #[test]
    fn pick_is_one_based() {
        let items = [10, 20];
        assert_eq!(pick(&items, 1, "x").unwrap(), 0);
        assert!(pick(&items, 0, "x").is_err());
        assert!(pick(&items, 3, "x").is_err());
    }
}
