//! Recipe categories

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// Course a recipe belongs to, used for browsing and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Snack,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 5] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Dessert,
        Category::Snack,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breakfast => write!(f, "breakfast"),
            Self::Lunch => write!(f, "lunch"),
            Self::Dinner => write!(f, "dinner"),
            Self::Dessert => write!(f, "dessert"),
            Self::Snack => write!(f, "snack"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = LabelError;

    /// Accepts the English names as well as the Russian labels used by the desktop UI
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" | "завтрак" | "завтраки" => Ok(Self::Breakfast),
            "lunch" | "обед" => Ok(Self::Lunch),
            "dinner" | "ужин" => Ok(Self::Dinner),
            "dessert" | "десерт" | "десерты" => Ok(Self::Dessert),
            "snack" | "закуска" => Ok(Self::Snack),
            _ => Err(LabelError::new("category", s)),
        }
    }
}
