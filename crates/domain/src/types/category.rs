//! Trait categories and priority levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Category grouping attributes and skills.
///
/// Each category owns a fixed, named set of attributes and skills
/// (see [`crate::ruleset`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Physical,
    Social,
    Mental,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Self::Physical, Self::Social, Self::Mental];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Social => "social",
            Self::Mental => "mental",
        }
    }

    /// Capitalized label (e.g., "Physical").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Social => "Social",
            Self::Mental => "Mental",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "physical" => Ok(Self::Physical),
            "social" => Ok(Self::Social),
            "mental" => Ok(Self::Mental),
            _ => Err(DomainError::parse(format!("Unknown category: {}", s))),
        }
    }
}

/// Priority rank a category can be given during creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Primary,
    Secondary,
    Tertiary,
}

impl PriorityLevel {
    /// All levels in rank order.
    pub const ALL: [PriorityLevel; 3] = [Self::Primary, Self::Secondary, Self::Tertiary];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Tertiary => "Tertiary",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PriorityLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "tertiary" => Ok(Self::Tertiary),
            _ => Err(DomainError::parse(format!("Unknown priority level: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_str_is_case_insensitive() {
        assert_eq!("Physical".parse::<Category>(), Ok(Category::Physical));
        assert_eq!(" mental ".parse::<Category>(), Ok(Category::Mental));
        assert!("spiritual".parse::<Category>().is_err());
    }

    #[test]
    fn priority_level_serializes_lowercase() {
        let json = serde_json::to_string(&PriorityLevel::Secondary).unwrap();
        assert_eq!(json, "\"secondary\"");
        let parsed: PriorityLevel = serde_json::from_str("\"tertiary\"").unwrap();
        assert_eq!(parsed, PriorityLevel::Tertiary);
    }
}
