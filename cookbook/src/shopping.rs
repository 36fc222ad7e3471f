//! Shopping list built from planned meals

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::planner::MenuPlanner;

/// One line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Ingredient name as first written in a planned recipe
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// Sum the ingredients of every meal planned over `days` days starting at `from`
///
/// A recipe planned in several slots counts once per slot. Ingredients merge
/// when their names match case-insensitively and their units are identical;
/// the same ingredient in two different units stays on two lines. Items appear
/// in the order they are first met walking the calendar slot by slot.
pub fn shopping_list(planner: &MenuPlanner, from: NaiveDate, days: u64) -> Vec<ShoppingItem> {
    let mut items: Vec<ShoppingItem> = Vec::new();
    let mut meals = 0usize;

    for (_, menu) in planner.days_from(from, days) {
        for recipe_id in menu.slots().into_iter().filter_map(|(_, id)| id) {
            let Some(recipe) = planner.recipes().get(recipe_id) else {
                continue;
            };
            meals += 1;

            for ingredient in recipe.ingredients {
                let key = ingredient.name.to_lowercase();
                match items
                    .iter_mut()
                    .find(|item| item.unit == ingredient.unit && item.name.to_lowercase() == key)
                {
                    Some(item) => item.amount += ingredient.amount,
                    None => items.push(ShoppingItem {
                        name: ingredient.name,
                        amount: ingredient.amount,
                        unit: ingredient.unit,
                    }),
                }
            }
        }
    }

    debug!(%from, days, meals, items = items.len(), "Built shopping list");
    items
}
