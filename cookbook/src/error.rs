//! Error types for the cookbook core
//!
//! Lookups that find nothing return `None` rather than an error; everything
//! here is a condition the caller is expected to report to the user.

use thiserror::Error;

use crate::domain::RecipeId;

/// Errors from turning free-text ingredient lines into [`Ingredient`](crate::Ingredient)s
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Invalid amount '{value}' for ingredient: {ingredient}")]
    InvalidAmount { ingredient: String, value: String },

    #[error("Negative amount {amount} for ingredient: {ingredient}")]
    NegativeAmount { ingredient: String, amount: f64 },
}

impl ParseError {
    /// Name of the ingredient whose line could not be parsed
    pub fn ingredient(&self) -> &str {
        match self {
            ParseError::InvalidAmount { ingredient, .. } => ingredient,
            ParseError::NegativeAmount { ingredient, .. } => ingredient,
        }
    }
}

/// Reasons a recipe draft is rejected before it reaches the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Recipe title must not be empty")]
    EmptyTitle,

    #[error("Preparation time must be at least one minute")]
    ZeroPreparationTime,

    #[error("Recipe needs at least one ingredient")]
    NoIngredients,

    #[error("Recipe needs at least one preparation step")]
    NoSteps,
}

/// Errors from the recipe creation flow
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CreateRecipeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors from placing recipes on the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Recipe not found: {id}")]
    UnknownRecipe { id: RecipeId },
}

/// Calendar date text that is not `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date '{input}', expected YYYY-MM-DD")]
pub struct DateError {
    pub input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Profile name must not be empty")]
    EmptyName,
}

/// Unrecognised label for one of the closed vocabularies (category, meal slot, diet)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value}")]
pub struct LabelError {
    pub kind: &'static str,
    pub value: String,
}

impl LabelError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
