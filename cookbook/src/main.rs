use chrono::NaiveDate;
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use cookbook::cli::{Assignment, Cli, Command, OutputFormat};
use cookbook::config::Config;
use cookbook::planner::DAYS_PER_WEEK;
use cookbook::{Cookbook, Recipe, RecipeDraft, week_start};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(?config, "cookbook starting");

    let cookbook = Cookbook::from_config(&config);

    match cli.command {
        Command::List { category, format } => {
            let recipes = match category {
                Some(category) => cookbook.recipes().by_category(category),
                None => cookbook.recipes().all(),
            };
            print_recipes(&recipes, format)?;
        }
        Command::Show { id, format } => {
            let recipe = cookbook
                .recipes()
                .get(id)
                .ok_or_else(|| eyre::eyre!("Recipe not found: {}", id))?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recipe)?),
                OutputFormat::Text => print_recipe_details(&recipe),
            }
        }
        Command::Search {
            query,
            category,
            format,
        } => {
            let recipes = cookbook.recipes().search(&query, category);
            print_recipes(&recipes, format)?;
        }
        Command::Add {
            title,
            category,
            minutes,
            ingredients,
            steps,
        } => {
            let draft = RecipeDraft {
                title,
                category,
                preparation_minutes: minutes,
                ingredients: ingredients.join("\n"),
                steps: steps.join("\n"),
                image: None,
            };
            let id = cookbook.create_recipe(&draft).context("Failed to add recipe")?;
            println!("{} Added recipe {}: {}", "✓".green(), id.to_string().cyan(), draft.title.trim());
        }
        Command::Day {
            date,
            assignments,
            format,
        } => {
            apply_assignments(&cookbook, date, &assignments)?;
            print_days(&cookbook, &[date], format)?;
        }
        Command::Week {
            date,
            assignments,
            format,
        } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let start = week_start(date, config.week_start.into());
            apply_assignments(&cookbook, start, &assignments)?;
            let dates: Vec<NaiveDate> = start.iter_days().take(DAYS_PER_WEEK as usize).collect();
            print_days(&cookbook, &dates, format)?;
        }
        Command::Shopping {
            from,
            days,
            assignments,
            format,
        } => {
            apply_assignments(&cookbook, from, &assignments)?;
            let days = days.unwrap_or(config.shopping_days);
            let items = cookbook.shopping_list(from, days.into());
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&items)?),
                OutputFormat::Text if items.is_empty() => println!("Nothing planned"),
                OutputFormat::Text => {
                    for item in items {
                        println!("{} {} {}", item.name, format_amount(item.amount).cyan(), item.unit);
                    }
                }
            }
        }
    }

    Ok(())
}

fn apply_assignments(cookbook: &Cookbook, default_date: NaiveDate, assignments: &[Assignment]) -> Result<()> {
    for assignment in assignments {
        let date = assignment.date.unwrap_or(default_date);
        cookbook
            .plan(date, assignment.slot, assignment.recipe_id)
            .context(format!("Failed to plan {} on {}", assignment.slot, date))?;
    }
    Ok(())
}

fn print_recipes(recipes: &[Recipe], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(recipes)?),
        OutputFormat::Text if recipes.is_empty() => println!("No recipes found"),
        OutputFormat::Text => {
            for recipe in recipes {
                println!(
                    "{} {} {}",
                    format!("{:>3}", recipe.id).yellow(),
                    recipe.title,
                    format!("({} min, {})", recipe.preparation_minutes, recipe.category).dimmed()
                );
            }
        }
    }
    Ok(())
}

fn print_recipe_details(recipe: &Recipe) {
    println!("{}", recipe.title.bold());
    println!("Category: {}", recipe.category);
    println!("Time: {} min", recipe.preparation_minutes);
    println!();
    println!("{}", "Ingredients:".bold());
    for ingredient in &recipe.ingredients {
        println!("  - {}: {} {}", ingredient.name, format_amount(ingredient.amount), ingredient.unit);
    }
    println!();
    println!("{}", "Steps:".bold());
    for (n, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {}", n + 1, step);
    }
}

fn print_days(cookbook: &Cookbook, dates: &[NaiveDate], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json: Vec<serde_json::Value> = dates
                .iter()
                .map(|date| {
                    let [(_, breakfast), (_, lunch), (_, dinner)] = cookbook.day_recipes(*date);
                    serde_json::json!({
                        "date": date.to_string(),
                        "breakfast": breakfast,
                        "lunch": lunch,
                        "dinner": dinner,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            for date in dates {
                println!("{}", format!("Menu for {}", date.format("%d.%m.%Y")).bold());
                for (slot, recipe) in cookbook.day_recipes(*date) {
                    match recipe {
                        Some(recipe) => println!("  {}: {} {}", slot, recipe.title, format!("#{}", recipe.id).dimmed()),
                        None => println!("  {}: {}", slot, "not planned".dimmed()),
                    }
                }
            }
        }
    }
    Ok(())
}

/// Drop the fractional part of whole amounts
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        amount.to_string()
    }
}
