//! Application service tying the store, parser and planner together

use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{Category, Diet, MealSlot, NewRecipe, Recipe, RecipeId, UserProfile};
use crate::error::{CreateRecipeError, PlanError, ProfileError, ValidationError};
use crate::parser::{parse_ingredient_lines, parse_steps};
use crate::planner::MenuPlanner;
use crate::shopping::{ShoppingItem, shopping_list};
use crate::store::RecipeStore;

/// Raw recipe input as the user typed it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub category: Category,
    pub preparation_minutes: u32,
    /// One `name, amount, unit` line per ingredient
    pub ingredients: String,
    /// One step per line
    pub steps: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A day's menu with recipes resolved from the store
pub type ResolvedDay = [(MealSlot, Option<Recipe>); 3];

/// One cookbook: a shared recipe store, the menu planned against it, and the
/// local user's profile
#[derive(Debug)]
pub struct Cookbook {
    recipes: Arc<RecipeStore>,
    planner: MenuPlanner,
    profile: RwLock<UserProfile>,
}

impl Cookbook {
    pub fn new(recipes: Arc<RecipeStore>) -> Self {
        let planner = MenuPlanner::new(Arc::clone(&recipes));
        Self {
            recipes,
            planner,
            profile: RwLock::new(UserProfile::default()),
        }
    }

    /// Build a cookbook as described by the configuration
    pub fn from_config(config: &Config) -> Self {
        let store = if config.seed {
            RecipeStore::seeded()
        } else {
            RecipeStore::new()
        };
        info!(recipes = store.len(), seeded = config.seed, "Cookbook ready");
        Self::new(Arc::new(store))
    }

    pub fn recipes(&self) -> &RecipeStore {
        &self.recipes
    }

    pub fn planner(&self) -> &MenuPlanner {
        &self.planner
    }

    /// Validate and parse a draft, then store it
    ///
    /// Checks run in order: title, preparation time, ingredients, steps. The
    /// first failure is returned and the store is left untouched.
    pub fn create_recipe(&self, draft: &RecipeDraft) -> Result<RecipeId, CreateRecipeError> {
        let recipe = prepare(draft).inspect_err(|e| {
            warn!(title = %draft.title, error = %e, "Rejected recipe");
        })?;
        Ok(self.recipes.add(recipe))
    }

    /// Place a recipe on the menu
    pub fn plan(&self, date: NaiveDate, slot: MealSlot, recipe_id: RecipeId) -> Result<(), PlanError> {
        self.planner.assign(date, slot, recipe_id)
    }

    /// A day's menu with each slot's recipe looked up
    pub fn day_recipes(&self, date: NaiveDate) -> ResolvedDay {
        self.planner
            .day(date)
            .slots()
            .map(|(slot, id)| (slot, id.and_then(|id| self.recipes.get(id))))
    }

    /// Ingredients needed for `days` days of planned meals starting at `from`
    pub fn shopping_list(&self, from: NaiveDate, days: u64) -> Vec<ShoppingItem> {
        shopping_list(&self.planner, from, days)
    }

    pub fn profile(&self) -> UserProfile {
        self.profile.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn update_profile(&self, name: &str, diet: Diet, notifications: bool) -> Result<(), ProfileError> {
        let mut profile = self.profile.write().unwrap_or_else(PoisonError::into_inner);
        profile.update(name, diet, notifications)?;
        info!(name = %profile.name, diet = %profile.diet, notifications, "Updated profile");
        Ok(())
    }
}

fn prepare(draft: &RecipeDraft) -> Result<NewRecipe, CreateRecipeError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle.into());
    }
    if draft.preparation_minutes == 0 {
        return Err(ValidationError::ZeroPreparationTime.into());
    }

    let ingredients = parse_ingredient_lines(&draft.ingredients)?;
    if ingredients.is_empty() {
        return Err(ValidationError::NoIngredients.into());
    }

    let steps = parse_steps(&draft.steps);
    if steps.is_empty() {
        return Err(ValidationError::NoSteps.into());
    }

    Ok(NewRecipe {
        title: title.to_string(),
        category: draft.category,
        preparation_minutes: draft.preparation_minutes,
        ingredients,
        steps,
        image: draft.image.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ingredient;
    use crate::error::ParseError;

    fn draft() -> RecipeDraft {
        RecipeDraft {
            title: "Шарлотка".to_string(),
            category: Category::Dessert,
            preparation_minutes: 60,
            ingredients: "Яблоки, 4, шт\nМука, 200, г\nСахар, 1, стакан".to_string(),
            steps: "Нарезать яблоки\n\nЗамесить тесто\nВыпекать 40 минут".to_string(),
            image: None,
        }
    }

    fn cookbook() -> Cookbook {
        Cookbook::new(Arc::new(RecipeStore::seeded()))
    }

    #[test]
    fn test_create_recipe() {
        let cookbook = cookbook();
        let id = cookbook.create_recipe(&draft()).unwrap();

        assert_eq!(id, 4);
        let recipe = cookbook.recipes().get(id).unwrap();
        assert_eq!(recipe.title, "Шарлотка");
        assert_eq!(recipe.category, Category::Dessert);
        assert_eq!(recipe.ingredients[1], Ingredient::new("Мука", 200.0, "г"));
        assert_eq!(recipe.steps.len(), 3);
    }

    #[test]
    fn test_title_is_trimmed() {
        let cookbook = cookbook();
        let id = cookbook
            .create_recipe(&RecipeDraft {
                title: "  Шарлотка\t".to_string(),
                ..draft()
            })
            .unwrap();
        assert_eq!(cookbook.recipes().get(id).unwrap().title, "Шарлотка");
    }

    #[test]
    fn test_each_rejection_leaves_store_unchanged() {
        let cases = [
            (
                RecipeDraft {
                    title: "   ".to_string(),
                    ..draft()
                },
                CreateRecipeError::Validation(ValidationError::EmptyTitle),
            ),
            (
                RecipeDraft {
                    preparation_minutes: 0,
                    ..draft()
                },
                CreateRecipeError::Validation(ValidationError::ZeroPreparationTime),
            ),
            (
                RecipeDraft {
                    ingredients: "\n  \nсоль по вкусу".to_string(),
                    ..draft()
                },
                CreateRecipeError::Validation(ValidationError::NoIngredients),
            ),
            (
                RecipeDraft {
                    steps: " \n\n ".to_string(),
                    ..draft()
                },
                CreateRecipeError::Validation(ValidationError::NoSteps),
            ),
            (
                RecipeDraft {
                    ingredients: "Яблоки, 4, шт\nМука, много, г".to_string(),
                    ..draft()
                },
                CreateRecipeError::Parse(ParseError::InvalidAmount {
                    ingredient: "Мука".to_string(),
                    value: "много".to_string(),
                }),
            ),
        ];

        for (draft, expected) in cases {
            let cookbook = cookbook();
            let before = cookbook.recipes().all();

            assert_eq!(cookbook.create_recipe(&draft).unwrap_err(), expected);
            assert_eq!(cookbook.recipes().all(), before);
        }
    }

    #[test]
    fn test_title_checked_before_ingredients() {
        let cookbook = cookbook();
        let err = cookbook
            .create_recipe(&RecipeDraft {
                title: String::new(),
                ingredients: "Мука, abc, г".to_string(),
                ..draft()
            })
            .unwrap_err();
        assert_eq!(err, CreateRecipeError::Validation(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_day_recipes_resolves_slots() {
        let cookbook = cookbook();
        let day = crate::planner::parse_date("2024-05-06").unwrap();
        cookbook.plan(day, MealSlot::Dinner, 3).unwrap();

        let [breakfast, lunch, dinner] = cookbook.day_recipes(day);
        assert_eq!(breakfast, (MealSlot::Breakfast, None));
        assert_eq!(lunch, (MealSlot::Lunch, None));
        assert_eq!(dinner.0, MealSlot::Dinner);
        assert_eq!(dinner.1.unwrap().title, "Паста Карбонара");
    }

    #[test]
    fn test_plan_newly_created_recipe() {
        let cookbook = cookbook();
        let day = crate::planner::parse_date("2024-05-07").unwrap();
        let id = cookbook.create_recipe(&draft()).unwrap();

        cookbook.plan(day, MealSlot::Lunch, id).unwrap();
        assert_eq!(cookbook.planner().day(day).lunch, Some(id));
    }

    #[test]
    fn test_from_config_seed_flag() {
        let seeded = Cookbook::from_config(&Config::default());
        assert_eq!(seeded.recipes().len(), 3);

        let empty = Cookbook::from_config(&Config {
            seed: false,
            ..Config::default()
        });
        assert!(empty.recipes().is_empty());
    }

    #[test]
    fn test_update_profile() {
        let cookbook = cookbook();
        cookbook.update_profile("Мария", Diet::Vegetarian, false).unwrap();
        assert_eq!(cookbook.profile().name, "Мария");

        assert_eq!(
            cookbook.update_profile("", Diet::Vegan, true).unwrap_err(),
            ProfileError::EmptyName
        );
        assert_eq!(cookbook.profile().diet, Diet::Vegetarian);
    }
}
