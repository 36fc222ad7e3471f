//! Date-keyed weekly menu planner

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::{debug, info, warn};

use crate::domain::{DayMenu, MealSlot, RecipeId};
use crate::error::{DateError, PlanError};
use crate::store::RecipeStore;

/// Text form of dates exchanged with callers
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days shown by the week view
pub const DAYS_PER_WEEK: u64 = 7;

/// Longest range a single view or shopping list covers
pub const MAX_PLAN_DAYS: u64 = 366;

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| DateError {
        input: input.to_string(),
    })
}

/// First day of the week containing `date`
pub fn week_start(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday() - first_day.num_days_from_monday()) % 7;
    date - Days::new(offset.into())
}

/// Meal assignments keyed by date
///
/// The planner stores recipe ids, never recipe copies. Every id it holds was
/// present in the recipe store when it was assigned, and the store never
/// removes recipes.
#[derive(Debug)]
pub struct MenuPlanner {
    recipes: Arc<RecipeStore>,
    days: RwLock<BTreeMap<NaiveDate, DayMenu>>,
}

impl MenuPlanner {
    pub fn new(recipes: Arc<RecipeStore>) -> Self {
        Self {
            recipes,
            days: RwLock::new(BTreeMap::new()),
        }
    }

    /// The three slots of a date; dates never planned come back empty
    pub fn day(&self, date: NaiveDate) -> DayMenu {
        let days = self.days.read().unwrap_or_else(PoisonError::into_inner);
        let menu = days.get(&date).copied().unwrap_or_default();
        debug!(%date, ?menu, "Looked up day menu");
        menu
    }

    /// Put a recipe into a slot, replacing any earlier choice for that slot
    pub fn assign(&self, date: NaiveDate, slot: MealSlot, recipe_id: RecipeId) -> Result<(), PlanError> {
        if !self.recipes.contains(recipe_id) {
            warn!(%date, %slot, recipe_id, "Refusing to plan unknown recipe");
            return Err(PlanError::UnknownRecipe { id: recipe_id });
        }

        let mut days = self.days.write().unwrap_or_else(PoisonError::into_inner);
        let menu = days.entry(date).or_default();
        let previous = menu.get(slot);
        menu.set(slot, recipe_id);

        info!(%date, %slot, recipe_id, ?previous, "Planned meal");
        Ok(())
    }

    /// Seven consecutive days starting at `start`
    pub fn week(&self, start: NaiveDate) -> Vec<(NaiveDate, DayMenu)> {
        self.days_from(start, DAYS_PER_WEEK)
    }

    /// `count` consecutive days starting at `start`, capped at [`MAX_PLAN_DAYS`]
    pub fn days_from(&self, start: NaiveDate, count: u64) -> Vec<(NaiveDate, DayMenu)> {
        if count > MAX_PLAN_DAYS {
            warn!(%start, count, max = MAX_PLAN_DAYS, "Clamping requested day range");
        }
        let count = count.min(MAX_PLAN_DAYS) as usize;
        let days = self.days.read().unwrap_or_else(PoisonError::into_inner);
        start
            .iter_days()
            .take(count)
            .map(|date| (date, days.get(&date).copied().unwrap_or_default()))
            .collect()
    }

    /// Dates that have at least one planned meal, in calendar order
    pub fn planned_dates(&self) -> Vec<NaiveDate> {
        let days = self.days.read().unwrap_or_else(PoisonError::into_inner);
        days.iter()
            .filter(|(_, menu)| !menu.is_empty())
            .map(|(date, _)| *date)
            .collect()
    }

    /// The store this planner validates against
    pub fn recipes(&self) -> &Arc<RecipeStore> {
        &self.recipes
    }
}
