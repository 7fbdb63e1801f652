//! Edit-for-resubmission response and its application to a fresh build.
//!
//! Stored characters may predate the current ruleset, so everything here is
//! read loosely: unknown traits, non-integer ratings and malformed merit
//! entries are skipped with a warning instead of failing the whole load.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use codex_domain::{
    ruleset, BioField, CharacterBio, CharacterBuild, MeritEntry, Priorities, TraitKind,
    TraitLedger,
};

/// Body of `GET /api/traits/character/{id}/for-edit/`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EditCharacterResponse {
    #[serde(default)]
    pub character_data: StoredCharacter,
    #[serde(default)]
    pub rejection_notes: Option<String>,
    #[serde(default)]
    pub rejection_count: Option<u32>,
}

/// Staff feedback from the last rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionFeedback {
    pub notes: String,
    pub count: u32,
}

impl EditCharacterResponse {
    /// Feedback to show, when the service sent non-blank notes.
    pub fn rejection(&self) -> Option<RejectionFeedback> {
        let notes = self.rejection_notes.as_deref()?.trim();
        if notes.is_empty() {
            return None;
        }
        Some(RejectionFeedback {
            notes: notes.to_string(),
            count: self.rejection_count.unwrap_or(0),
        })
    }
}

/// A previously submitted character, kept as loose JSON until applied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StoredCharacter {
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
    #[serde(default)]
    pub skills: BTreeMap<String, Value>,
    #[serde(default)]
    pub disciplines: BTreeMap<String, Value>,
    #[serde(default)]
    pub advantages: BTreeMap<String, Value>,
    #[serde(default)]
    pub flaws: BTreeMap<String, Value>,
    /// Bio fields and anything else the service sends
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Result of applying a stored character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedCharacter {
    pub build: CharacterBuild,
    /// Entries that could not be applied, as `kind:name`
    pub skipped: Vec<String>,
}

impl StoredCharacter {
    /// Bio fields; strings verbatim, numbers stringified, anything else blank.
    pub fn bio(&self) -> CharacterBio {
        let mut bio = CharacterBio::default();
        for field in BioField::ALL {
            match self.rest.get(field.key()) {
                Some(Value::String(text)) => bio.set(field, text.clone()),
                Some(Value::Number(number)) => bio.set(field, number.to_string()),
                _ => {}
            }
        }
        bio
    }

    /// Build a fresh character from the stored one. Priorities are not
    /// stored remotely, so the result has none assigned.
    pub fn apply(&self) -> AppliedCharacter {
        let mut ledger = TraitLedger::new();
        let mut skipped = Vec::new();

        for (kind, entries) in [
            (TraitKind::Attribute, &self.attributes),
            (TraitKind::Skill, &self.skills),
        ] {
            for (raw_name, raw_value) in entries {
                let name = normalize_fixed_name(raw_name);
                let applied = ruleset::category_of(kind, &name).is_some()
                    && rating(raw_value)
                        .is_some_and(|value| ledger.set_trait(kind, &name, value).is_ok());
                if !applied {
                    skip(&mut skipped, kind, raw_name);
                }
            }
        }

        for (name, raw_value) in &self.disciplines {
            let applied = rating(raw_value).is_some_and(|value| {
                ledger
                    .set_trait(TraitKind::Discipline, name, value)
                    .is_ok()
            });
            if !applied {
                skip(&mut skipped, TraitKind::Discipline, name);
            }
        }

        for (kind, entries) in [
            (TraitKind::Advantage, &self.advantages),
            (TraitKind::Flaw, &self.flaws),
        ] {
            for (name, raw_value) in entries {
                let applied = merit(raw_value)
                    .is_some_and(|entry| ledger.put_merit(kind, name, entry).is_ok());
                if !applied {
                    skip(&mut skipped, kind, name);
                }
            }
        }

        AppliedCharacter {
            build: CharacterBuild::from_parts(ledger, Priorities::default(), self.bio()),
            skipped,
        }
    }
}

fn skip(skipped: &mut Vec<String>, kind: TraitKind, name: &str) {
    tracing::warn!(kind = %kind, name = %name, "Skipping stored trait that does not apply");
    skipped.push(format!("{}:{}", kind, name));
}

fn normalize_fixed_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Integer rating, saturated into `u8`. Non-integers are rejected.
fn rating(value: &Value) -> Option<u8> {
    value
        .as_u64()
        .map(|n| u8::try_from(n).unwrap_or(u8::MAX))
}

/// Either a bare rating or `{value, instance?, specialty?}`.
fn merit(value: &Value) -> Option<MeritEntry> {
    match value {
        Value::Number(_) => rating(value).map(MeritEntry::new),
        Value::Object(fields) => {
            let text = |key: &str| {
                fields
                    .get(key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
            };
            Some(MeritEntry {
                value: fields.get("value").and_then(rating)?,
                instance: text("instance"),
                specialty: text("specialty"),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_domain::Qualifier;

    const STORED: &str = r#"{
        "character_data": {
            "full_name": "Iris Vale",
            "concept": "Night-shift nurse",
            "clan": "Toreador",
            "generation": 13,
            "ambition": null,
            "attributes": {"Strength": 2, "charisma": 4, "luck": 3},
            "skills": {"Animal Ken": 2, "medicine": 3, "brawl": "lots"},
            "disciplines": {"Auspex": 2, "Presence": 0, "Celerity": 1.5},
            "advantages": {
                "Contacts": {"value": 2, "instance": "Hospital staff", "specialty": ""},
                "Resources": 3,
                "Broken": [1, 2]
            },
            "flaws": {"Prey Exclusion": {"value": 1}}
        },
        "rejection_notes": "Too many social dots",
        "rejection_count": 2
    }"#;

    fn applied() -> (EditCharacterResponse, AppliedCharacter) {
        let response: EditCharacterResponse = serde_json::from_str(STORED).unwrap();
        let applied = response.character_data.apply();
        (response, applied)
    }

    #[test]
    fn bio_is_read_loosely() {
        let (response, _) = applied();
        let bio = response.character_data.bio();
        assert_eq!(bio.full_name, "Iris Vale");
        assert_eq!(bio.generation, "13");
        assert_eq!(bio.ambition, "");
        assert_eq!(bio.selected_clan().map(|c| c.name), Some("Toreador"));
    }

    #[test]
    fn known_traits_are_applied_with_lowercased_names() {
        let (_, applied) = applied();
        let ledger = applied.build.ledger();
        assert_eq!(ledger.rating(TraitKind::Attribute, "strength"), Ok(2));
        assert_eq!(ledger.rating(TraitKind::Attribute, "charisma"), Ok(4));
        assert_eq!(ledger.rating(TraitKind::Skill, "animal_ken"), Ok(2));
        assert_eq!(ledger.rating(TraitKind::Skill, "medicine"), Ok(3));
        assert_eq!(ledger.rating(TraitKind::Discipline, "Auspex"), Ok(2));
    }

    #[test]
    fn bad_entries_are_skipped_not_fatal() {
        let (_, applied) = applied();
        assert_eq!(
            applied.skipped,
            vec![
                "attribute:luck".to_string(),
                "skill:brawl".to_string(),
                "discipline:Celerity".to_string(),
                "advantage:Broken".to_string(),
            ]
        );
    }

    #[test]
    fn merits_accept_both_shapes() {
        let (_, applied) = applied();
        let ledger = applied.build.ledger();

        let contacts = ledger.merit(TraitKind::Advantage, "Contacts").unwrap();
        assert_eq!(contacts.value, 2);
        assert_eq!(contacts.qualifier(Qualifier::Instance), Some("Hospital staff"));
        assert_eq!(contacts.specialty, None);

        assert_eq!(ledger.rating(TraitKind::Advantage, "Resources"), Ok(3));
        assert_eq!(ledger.rating(TraitKind::Flaw, "Prey Exclusion"), Ok(1));
    }

    #[test]
    fn out_of_domain_ratings_are_clamped() {
        let stored: StoredCharacter =
            serde_json::from_str(r#"{"attributes":{"wits":9},"disciplines":{"Dominate":7}}"#)
                .unwrap();
        let applied = stored.apply();
        let ledger = applied.build.ledger();
        assert_eq!(ledger.rating(TraitKind::Attribute, "wits"), Ok(5));
        assert_eq!(ledger.rating(TraitKind::Discipline, "Dominate"), Ok(3));
        assert!(applied.skipped.is_empty());
    }

    #[test]
    fn rejection_feedback_requires_notes() {
        let (response, _) = applied();
        assert_eq!(
            response.rejection(),
            Some(RejectionFeedback {
                notes: "Too many social dots".to_string(),
                count: 2
            })
        );

        let clean: EditCharacterResponse =
            serde_json::from_str(r#"{"character_data":{},"rejection_notes":""}"#).unwrap();
        assert_eq!(clean.rejection(), None);
    }
}
