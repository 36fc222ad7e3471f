//! Meal slots and the per-day menu record

use serde::{Deserialize, Serialize};

use super::RecipeId;
use crate::error::LabelError;

/// One of the three fixed positions a recipe can occupy on a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// Slots in the order they are served
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breakfast => write!(f, "breakfast"),
            Self::Lunch => write!(f, "lunch"),
            Self::Dinner => write!(f, "dinner"),
        }
    }
}

impl std::str::FromStr for MealSlot {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" | "завтрак" => Ok(Self::Breakfast),
            "lunch" | "обед" => Ok(Self::Lunch),
            "dinner" | "ужин" => Ok(Self::Dinner),
            _ => Err(LabelError::new("meal slot", s)),
        }
    }
}

/// The three meal slots of a single date
///
/// Always fully shaped: a date nobody planned is simply a `DayMenu` with every
/// slot empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMenu {
    pub breakfast: Option<RecipeId>,
    pub lunch: Option<RecipeId>,
    pub dinner: Option<RecipeId>,
}

impl DayMenu {
    /// Recipe planned for a slot, if any
    pub fn get(&self, slot: MealSlot) -> Option<RecipeId> {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }

    /// Put a recipe into a slot, replacing whatever was there
    pub fn set(&mut self, slot: MealSlot, recipe_id: RecipeId) {
        let target = match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        };
        *target = Some(recipe_id);
    }

    /// Slots paired with their contents, breakfast first
    pub fn slots(&self) -> [(MealSlot, Option<RecipeId>); 3] {
        MealSlot::ALL.map(|slot| (slot, self.get(slot)))
    }

    pub fn is_empty(&self) -> bool {
        self.breakfast.is_none() && self.lunch.is_none() && self.dinner.is_none()
    }
}
