//! Character bio - the free-text and select fields of the Identity step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Clan;

/// Bio fields collected by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BioField {
    FullName,
    Concept,
    Clan,
    Sire,
    Generation,
    PredatorType,
    Ambition,
    Desire,
    Background,
}

impl BioField {
    pub const ALL: [BioField; 9] = [
        Self::FullName,
        Self::Concept,
        Self::Clan,
        Self::Sire,
        Self::Generation,
        Self::PredatorType,
        Self::Ambition,
        Self::Desire,
        Self::Background,
    ];

    /// Free-text fields that must be non-blank for the Identity step.
    pub const REQUIRED: [BioField; 3] = [Self::FullName, Self::Concept, Self::Ambition];

    /// Free-text fields whose blur triggers a draft save.
    pub const AUTOSAVE_ON_BLUR: [BioField; 6] = [
        Self::FullName,
        Self::Concept,
        Self::Sire,
        Self::Ambition,
        Self::Desire,
        Self::Background,
    ];

    /// Wire key (e.g., "full_name").
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Concept => "concept",
            Self::Clan => "clan",
            Self::Sire => "sire",
            Self::Generation => "generation",
            Self::PredatorType => "predator_type",
            Self::Ambition => "ambition",
            Self::Desire => "desire",
            Self::Background => "background",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Name",
            Self::Concept => "Concept",
            Self::Clan => "Clan",
            Self::Sire => "Sire",
            Self::Generation => "Generation",
            Self::PredatorType => "Predator Type",
            Self::Ambition => "Ambition",
            Self::Desire => "Desire",
            Self::Background => "Background",
        }
    }
}

impl fmt::Display for BioField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for BioField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown bio field: {}", s)))
    }
}

/// Bio values. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterBio {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub concept: String,
    #[serde(default)]
    pub clan: String,
    #[serde(default)]
    pub sire: String,
    #[serde(default)]
    pub generation: String,
    #[serde(default)]
    pub predator_type: String,
    #[serde(default)]
    pub ambition: String,
    #[serde(default)]
    pub desire: String,
    #[serde(default)]
    pub background: String,
}

impl CharacterBio {
    pub fn get(&self, field: BioField) -> &str {
        match field {
            BioField::FullName => &self.full_name,
            BioField::Concept => &self.concept,
            BioField::Clan => &self.clan,
            BioField::Sire => &self.sire,
            BioField::Generation => &self.generation,
            BioField::PredatorType => &self.predator_type,
            BioField::Ambition => &self.ambition,
            BioField::Desire => &self.desire,
            BioField::Background => &self.background,
        }
    }

    pub fn set(&mut self, field: BioField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BioField::FullName => self.full_name = value,
            BioField::Concept => self.concept = value,
            BioField::Clan => self.clan = value,
            BioField::Sire => self.sire = value,
            BioField::Generation => self.generation = value,
            BioField::PredatorType => self.predator_type = value,
            BioField::Ambition => self.ambition = value,
            BioField::Desire => self.desire = value,
            BioField::Background => self.background = value,
        }
    }

    pub fn is_filled(&self, field: BioField) -> bool {
        !self.get(field).trim().is_empty()
    }

    /// True when every required free-text field is non-blank.
    pub fn required_filled(&self) -> bool {
        BioField::REQUIRED
            .into_iter()
            .all(|field| self.is_filled(field))
    }

    /// The selected clan, if the stored name is a known clan.
    pub fn selected_clan(&self) -> Option<&'static Clan> {
        Clan::lookup(self.clan.trim())
    }
}
