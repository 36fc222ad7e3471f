//! Recipe and ingredient records

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::Category;

/// Store-assigned recipe identifier (positive, never reused)
pub type RecipeId = u32;

/// A single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Non-negative quantity expressed in `unit`
    pub amount: f64,
    /// Free-text unit, e.g. "g", "pcs", "ст.л"
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

/// A recipe that has not been stored yet and therefore has no id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub category: Category,
    pub preparation_minutes: u32,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub category: Category,
    pub preparation_minutes: u32,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Recipe {
    pub(crate) fn from_new(id: RecipeId, new: NewRecipe) -> Self {
        Self {
            id,
            title: new.title,
            category: new.category,
            preparation_minutes: new.preparation_minutes,
            ingredients: new.ingredients,
            steps: new.steps,
            image: new.image,
        }
    }

    /// Check whether the title or any ingredient name contains `needle`
    ///
    /// `needle` must already be passed through [`fold`].
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        fold(&self.title).contains(needle)
            || self
                .ingredients
                .iter()
                .any(|ingredient| fold(&ingredient.name).contains(needle))
    }
}

/// Canonical form for text comparison: NFC, then Unicode lowercase
pub(crate) fn fold(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

impl From<Recipe> for NewRecipe {
    fn from(recipe: Recipe) -> Self {
        Self {
            title: recipe.title,
            category: recipe.category,
            preparation_minutes: recipe.preparation_minutes,
            ingredients: recipe.ingredients,
            steps: recipe.steps,
            image: recipe.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancakes() -> NewRecipe {
        NewRecipe {
            title: "Блины".to_string(),
            category: Category::Breakfast,
            preparation_minutes: 40,
            ingredients: vec![Ingredient::new("Мука", 200.0, "г"), Ingredient::new("Молоко", 500.0, "мл")],
            steps: vec!["Смешать".to_string(), "Жарить".to_string()],
            image: None,
        }
    }

    #[test]
    fn test_from_new_keeps_fields() {
        let recipe = Recipe::from_new(7, pancakes());
        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.title, "Блины");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(NewRecipe::from(recipe), pancakes());
    }

    #[test]
    fn test_mentions_title_and_ingredients() {
        let recipe = Recipe::from_new(1, pancakes());
        assert!(recipe.mentions("блин"));
        assert!(recipe.mentions("молоко"));
        assert!(!recipe.mentions("сахар"));
    }

    #[test]
    fn test_fold_composes_before_lowercasing() {
        // "Й" written as И + combining breve
        assert_eq!(fold("\u{418}\u{306}ОД"), "йод");
        assert_eq!(fold("Йод"), "йод");
    }

    #[test]
    fn test_mentions_decomposed_ingredient_name() {
        let mut new = pancakes();
        new.ingredients.push(Ingredient::new("Я\u{438}\u{306}ца", 2.0, "шт"));
        let recipe = Recipe::from_new(1, new);
        assert!(recipe.mentions(&fold("яйца")));
    }

    #[test]
    fn test_serializes_category_lowercase() {
        let recipe = Recipe::from_new(1, pancakes());
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["category"], "breakfast");
        assert!(json.get("image").is_none());
    }
}
