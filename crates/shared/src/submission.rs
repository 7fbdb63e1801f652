//! Submission Formatter - turns a build into the approval service payload.
//!
//! Attributes and skills are always sent, zero-rated skills included, since
//! a zero skill means "untrained". Disciplines, advantages and flaws are only
//! sent when rated above zero; a zero there means "not taken".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use codex_domain::ruleset::SPLAT;
use codex_domain::{CharacterBio, Clan, MeritEntry, Qualifier, TraitLedger};

/// An advantage or flaw on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeritPayload {
    pub value: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

impl From<&MeritEntry> for MeritPayload {
    fn from(entry: &MeritEntry) -> Self {
        Self {
            value: entry.value,
            instance: entry.qualifier(Qualifier::Instance).map(str::to_string),
            specialty: entry.qualifier(Qualifier::Specialty).map(str::to_string),
        }
    }
}

/// The `character_data` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterData {
    pub splat: String,
    #[serde(flatten)]
    pub bio: CharacterBio,
    /// Attribute and skill ratings keyed by unprefixed name
    #[serde(flatten)]
    pub traits: BTreeMap<String, u8>,
    pub disciplines: BTreeMap<String, u8>,
    pub advantages: BTreeMap<String, MeritPayload>,
    pub flaws: BTreeMap<String, MeritPayload>,
}

/// Body of a create or resubmit request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub character_data: CharacterData,
}

/// Success body. The service's acknowledgement is opaque; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitAck {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub character_id: Option<u64>,
}

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// The service's message, if it sent a non-blank one.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().filter(|m| !m.trim().is_empty())
    }
}

pub struct SubmissionFormatter;

impl SubmissionFormatter {
    /// Build the payload. When a clan is given its canonical name replaces
    /// the bio's clan text.
    pub fn format(ledger: &TraitLedger, bio: &CharacterBio, clan: Option<&Clan>) -> SubmissionRequest {
        let mut bio = bio.clone();
        if let Some(clan) = clan {
            bio.clan = clan.name.to_string();
        }

        let taken = |(name, entry): (&str, &MeritEntry)| {
            (entry.value > 0).then(|| (name.to_string(), MeritPayload::from(entry)))
        };

        SubmissionRequest {
            character_data: CharacterData {
                splat: SPLAT.to_string(),
                bio,
                traits: ledger
                    .attributes()
                    .chain(ledger.skills())
                    .map(|(name, value)| (name.to_string(), value))
                    .collect(),
                disciplines: ledger
                    .disciplines()
                    .filter(|(_, value)| *value > 0)
                    .map(|(name, value)| (name.to_string(), value))
                    .collect(),
                advantages: ledger.advantages().filter_map(taken).collect(),
                flaws: ledger.flaws().filter_map(taken).collect(),
            },
        }
    }
}
