//! Domain types for the cookbook
//!
//! Core domain types: Recipe, Ingredient, Category, MealSlot, DayMenu, UserProfile.
//! Recipes are owned by the [`RecipeStore`](crate::RecipeStore); the planner only
//! ever holds [`RecipeId`] references to them.

mod category;
mod meal;
mod profile;
mod recipe;

pub use category::Category;
pub use meal::{DayMenu, MealSlot};
pub use profile::{Diet, UserProfile};
pub use recipe::{Ingredient, NewRecipe, Recipe, RecipeId};
pub(crate) use recipe::fold;
