//! In-memory recipe repository

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::domain::{Category, NewRecipe, Recipe, RecipeId, fold};

#[derive(Debug)]
struct Inner {
    recipes: Vec<Recipe>,
    /// Always `max(id) + 1`, or 1 while empty; recipes are never removed
    next_id: RecipeId,
}

/// The recipe collection, in insertion order
///
/// Reads hand out clones so callers can never mutate a stored recipe. Insertion
/// takes the write lock for the whole read-id-then-append sequence, so
/// concurrent callers always receive distinct ids.
#[derive(Debug)]
pub struct RecipeStore {
    inner: RwLock<Inner>,
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                recipes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store holding the given recipes, numbered from 1 in order
    pub fn with_recipes(recipes: impl IntoIterator<Item = NewRecipe>) -> Self {
        let store = Self::new();
        for recipe in recipes {
            store.add(recipe);
        }
        store
    }

    /// Create a store holding the built-in seed recipes
    pub fn seeded() -> Self {
        Self::with_recipes(crate::seed::recipes())
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All recipes in insertion order
    pub fn all(&self) -> Vec<Recipe> {
        self.read().recipes.clone()
    }

    pub fn len(&self) -> usize {
        self.read().recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().recipes.is_empty()
    }

    /// Look up a recipe by id
    pub fn get(&self, id: RecipeId) -> Option<Recipe> {
        let recipe = self.read().recipes.iter().find(|recipe| recipe.id == id).cloned();
        if recipe.is_none() {
            debug!(id, "Recipe not found");
        }
        recipe
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.read().recipes.iter().any(|recipe| recipe.id == id)
    }

    /// Recipes of one category, in insertion order
    pub fn by_category(&self, category: Category) -> Vec<Recipe> {
        self.read()
            .recipes
            .iter()
            .filter(|recipe| recipe.category == category)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over titles and ingredient names
    ///
    /// Both sides are NFC-normalized before lowercasing, so composed and
    /// decomposed spellings of the same word match.
    ///
    /// An empty query matches every recipe. When `category` is given only
    /// recipes of that category are returned. Results keep insertion order.
    pub fn search(&self, query: &str, category: Option<Category>) -> Vec<Recipe> {
        let needle = fold(query.trim());
        let matches: Vec<Recipe> = self
            .read()
            .recipes
            .iter()
            .filter(|recipe| category.is_none_or(|category| recipe.category == category))
            .filter(|recipe| recipe.mentions(&needle))
            .cloned()
            .collect();

        debug!(query, ?category, count = matches.len(), "Searched recipes");
        matches
    }

    /// Store a recipe and return its newly assigned id
    ///
    /// Performs no validation; see [`Cookbook::create_recipe`](crate::Cookbook::create_recipe)
    /// for the checked path.
    pub fn add(&self, recipe: NewRecipe) -> RecipeId {
        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id += 1;

        info!(id, title = %recipe.title, category = %recipe.category, "Added recipe");
        inner.recipes.push(Recipe::from_new(id, recipe));
        id
    }
}
