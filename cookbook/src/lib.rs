//! Cookbook - personal recipe repository and weekly menu planner
//!
//! Keeps recipes in memory, lets callers browse and search them, and plans
//! them into breakfast, lunch and dinner slots per calendar date.
//!
//! # Architecture
//!
//! ```text
//! Cookbook
//! ├── Arc<RecipeStore>   # recipes in insertion order, ids assigned on add
//! ├── MenuPlanner        # date -> DayMenu { breakfast, lunch, dinner }
//! └── UserProfile
//! ```
//!
//! Free-text input goes through [`parser`] before it reaches the store. The
//! store is an explicit instance shared by `Arc`; there is no global state.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use cookbook::{Category, Cookbook, MealSlot, RecipeDraft, RecipeStore, parse_date};
//!
//! let cookbook = Cookbook::new(Arc::new(RecipeStore::seeded()));
//! let id = cookbook
//!     .create_recipe(&RecipeDraft {
//!         title: "Блины".to_string(),
//!         category: Category::Breakfast,
//!         preparation_minutes: 40,
//!         ingredients: "Мука, 200, г\nМолоко, 500, мл".to_string(),
//!         steps: "Смешать\nЖарить".to_string(),
//!         image: None,
//!     })
//!     .unwrap();
//!
//! let monday = parse_date("2024-05-06").unwrap();
//! cookbook.plan(monday, MealSlot::Breakfast, id).unwrap();
//! assert_eq!(cookbook.planner().day(monday).breakfast, Some(id));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod parser;
pub mod planner;
pub mod seed;
mod service;
pub mod shopping;
mod store;

pub use config::{Config, WeekStart};
pub use domain::{Category, DayMenu, Diet, Ingredient, MealSlot, NewRecipe, Recipe, RecipeId, UserProfile};
pub use error::{CreateRecipeError, DateError, LabelError, ParseError, PlanError, ProfileError, ValidationError};
pub use parser::{parse_ingredient_lines, parse_steps};
pub use planner::{DATE_FORMAT, MAX_PLAN_DAYS, MenuPlanner, parse_date, week_start};
pub use service::{Cookbook, RecipeDraft, ResolvedDay};
pub use shopping::{ShoppingItem, shopping_list};
pub use store::RecipeStore;
