//! CLI argument parsing for the cookbook
//!
//! Nothing is persisted between runs: every invocation starts from the seed
//! recipes, so commands that read the menu take the meals to plan inline.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{Category, MealSlot, RecipeId};
use crate::planner::{MAX_PLAN_DAYS, parse_date};

#[derive(Parser, Debug)]
#[command(name = "cb")]
#[command(author, version, about = "Personal cookbook and weekly menu planner", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List recipes
    List {
        /// Only show recipes of this category
        #[arg(short = 'C', long)]
        category: Option<Category>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a recipe in full
    Show {
        /// Recipe ID
        #[arg(required = true)]
        id: RecipeId,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Search titles and ingredients
    Search {
        /// Text to look for (case-insensitive); omit to match everything
        #[arg(default_value = "")]
        query: String,

        /// Only search this category
        #[arg(short = 'C', long)]
        category: Option<Category>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Add a recipe
    Add {
        /// Recipe title
        #[arg(short, long)]
        title: String,

        /// Recipe category
        #[arg(short = 'C', long)]
        category: Category,

        /// Preparation time in minutes
        #[arg(short, long)]
        minutes: u32,

        /// Ingredient as "name, amount, unit" (repeatable)
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,

        /// Preparation step (repeatable, in order)
        #[arg(short, long = "step")]
        steps: Vec<String>,
    },

    /// Show the menu of one day
    Day {
        /// Date as YYYY-MM-DD
        #[arg(value_parser = parse_date)]
        date: NaiveDate,

        /// Plan a meal first, as SLOT=ID or DATE:SLOT=ID (repeatable)
        #[arg(short, long = "assign")]
        assignments: Vec<Assignment>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the week containing a date
    Week {
        /// Any date of the week as YYYY-MM-DD (default: today)
        #[arg(value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Plan a meal first, as DATE:SLOT=ID (repeatable)
        #[arg(short, long = "assign")]
        assignments: Vec<Assignment>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Build a shopping list for planned meals
    Shopping {
        /// First day to cover as YYYY-MM-DD
        #[arg(value_parser = parse_date)]
        from: NaiveDate,

        /// Number of days to cover, 1 to 366 (default from config)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_PLAN_DAYS as i64))]
        days: Option<u32>,

        /// Plan a meal first, as DATE:SLOT=ID (repeatable)
        #[arg(short, long = "assign")]
        assignments: Vec<Assignment>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format for read commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

/// A meal to plan before running a command
///
/// Written `SLOT=ID` or `DATE:SLOT=ID`; without a date the command's own date
/// is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub date: Option<NaiveDate>,
    pub slot: MealSlot,
    pub recipe_id: RecipeId,
}

impl std::str::FromStr for Assignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, id) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected SLOT=ID or DATE:SLOT=ID, got: {}", s))?;

        let (date, slot) = match target.split_once(':') {
            Some((date, slot)) => (Some(parse_date(date).map_err(|e| e.to_string())?), slot),
            None => (None, target),
        };

        Ok(Self {
            date,
            slot: slot.parse::<MealSlot>().map_err(|e| e.to_string())?,
            recipe_id: id
                .trim()
                .parse()
                .map_err(|_| format!("Invalid recipe id: {}", id.trim()))?,
        })
    }
}
