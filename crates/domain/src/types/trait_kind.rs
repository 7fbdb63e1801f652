//! Trait kinds and their rating domains.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Kind of trait held in the ledger. Each kind has its own rating domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    /// Attributes: 1-5, start at 1
    Attribute,
    /// Skills: 0-5, start at 0
    Skill,
    /// Disciplines: 0-3 at creation
    Discipline,
    /// Advantages (merits and backgrounds): 0-5 each
    Advantage,
    /// Flaws: 0-5 each
    Flaw,
}

impl TraitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attribute => "attribute",
            Self::Skill => "skill",
            Self::Discipline => "discipline",
            Self::Advantage => "advantage",
            Self::Flaw => "flaw",
        }
    }

    /// Rating domain for this kind at character creation.
    pub fn bounds(&self) -> RatingBounds {
        match self {
            Self::Attribute => RatingBounds::new(1, 5),
            Self::Skill => RatingBounds::new(0, 5),
            Self::Discipline => RatingBounds::new(0, 3),
            Self::Advantage | Self::Flaw => RatingBounds::new(0, 5),
        }
    }

    /// Value a trait returns to when its filled dot is clicked again.
    pub fn baseline(&self) -> u8 {
        self.bounds().min
    }

    /// Whether entries of this kind may carry instance/specialty qualifiers.
    pub fn is_qualified(&self) -> bool {
        matches!(self, Self::Advantage | Self::Flaw)
    }
}

impl fmt::Display for TraitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TraitKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attribute" => Ok(Self::Attribute),
            "skill" => Ok(Self::Skill),
            "discipline" => Ok(Self::Discipline),
            "advantage" => Ok(Self::Advantage),
            "flaw" => Ok(Self::Flaw),
            _ => Err(DomainError::parse(format!("Unknown trait kind: {}", s))),
        }
    }
}

/// Inclusive rating domain. The minimum doubles as the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingBounds {
    pub min: u8,
    pub max: u8,
}

impl RatingBounds {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: u8) -> u8 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }
}
