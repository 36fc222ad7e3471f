//! Local user profile and dietary preference

use serde::{Deserialize, Serialize};

use crate::error::{LabelError, ProfileError};

/// Dietary preference shown on the profile screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    #[default]
    None,
    Vegetarian,
    Vegan,
    GlutenFree,
}

impl std::fmt::Display for Diet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Vegetarian => write!(f, "vegetarian"),
            Self::Vegan => write!(f, "vegan"),
            Self::GlutenFree => write!(f, "gluten-free"),
        }
    }
}

impl std::str::FromStr for Diet {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "нет" => Ok(Self::None),
            "vegetarian" | "вегетарианство" => Ok(Self::Vegetarian),
            "vegan" | "веганство" => Ok(Self::Vegan),
            "gluten-free" | "без глютена" => Ok(Self::GlutenFree),
            _ => Err(LabelError::new("diet", s)),
        }
    }
}

/// Preferences of the single local user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub diet: Diet,
    pub notifications: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            diet: Diet::None,
            notifications: true,
        }
    }
}

impl UserProfile {
    /// Replace all preferences at once; a blank name leaves the profile untouched
    pub fn update(&mut self, name: &str, diet: Diet, notifications: bool) -> Result<(), ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        self.name = name.to_string();
        self.diet = diet;
        self.notifications = notifications;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_profile() {
        let mut profile = UserProfile::default();
        profile.update("  Анна ", Diet::Vegan, false).unwrap();
        assert_eq!(profile.name, "Анна");
        assert_eq!(profile.diet, Diet::Vegan);
        assert!(!profile.notifications);
    }

    #[test]
    fn test_blank_name_rejected_without_change() {
        let mut profile = UserProfile::default();
        let err = profile.update("   ", Diet::Vegetarian, false).unwrap_err();
        assert!(matches!(err, ProfileError::EmptyName));
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn test_diet_labels() {
        assert_eq!("Без глютена".parse::<Diet>().unwrap(), Diet::GlutenFree);
        assert_eq!("gluten-free".parse::<Diet>().unwrap(), Diet::GlutenFree);
        assert_eq!(Diet::GlutenFree.to_string(), "gluten-free");
        assert!("keto".parse::<Diet>().is_err());
    }
}
