//! Draft snapshots of an in-progress build.
//!
//! A snapshot holds everything needed to rebuild a [`CharacterBuild`] plus
//! the time it was taken. Snapshots older than [`DRAFT_TTL_MINUTES`] are
//! expired and must not be offered for restore.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregates::{CharacterBuild, MeritEntry, Qualifier, TraitLedger};
use crate::ids::CharacterId;
use crate::ruleset;
use crate::types::TraitKind;
use crate::value_objects::{CharacterBio, Priorities, PriorityAssignment};

/// Draft lifetime: 7 days.
pub const DRAFT_TTL_MINUTES: i64 = 10080;

/// Storage key distinguishing a new character from an edit of character N.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DraftKey(String);

impl DraftKey {
    pub fn new_character() -> Self {
        Self("chargen_draft_new".to_string())
    }

    pub fn for_character(id: CharacterId) -> Self {
        Self(format!("chargen_draft_{}", id))
    }

    /// Key for an optional edit target.
    pub fn for_target(id: Option<CharacterId>) -> Self {
        id.map_or_else(Self::new_character, Self::for_character)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Serialized form of a build in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    #[serde(default)]
    pub bio: CharacterBio,
    /// Attribute and skill ratings keyed by unprefixed name
    #[serde(default)]
    pub trait_values: BTreeMap<String, u8>,
    #[serde(default)]
    pub discipline_values: BTreeMap<String, u8>,
    #[serde(default)]
    pub advantage_values: BTreeMap<String, MeritEntry>,
    #[serde(default)]
    pub flaw_values: BTreeMap<String, MeritEntry>,
    #[serde(default)]
    pub attribute_priorities: PriorityAssignment,
    #[serde(default)]
    pub skill_priorities: PriorityAssignment,
    pub saved_at: DateTime<Utc>,
}

impl DraftSnapshot {
    pub fn capture(build: &CharacterBuild, saved_at: DateTime<Utc>) -> Self {
        let ledger = build.ledger();
        let nonzero = |(name, value): (&str, u8)| (value > 0).then(|| (name.to_string(), value));
        // Qualifiers typed before any dots are chosen are kept too
        let taken = |(name, entry): (&str, &MeritEntry)| {
            let qualified = entry.qualifier(Qualifier::Instance).is_some()
                || entry.qualifier(Qualifier::Specialty).is_some();
            (entry.value > 0 || qualified).then(|| (name.to_string(), entry.clone()))
        };

        Self {
            bio: build.bio().clone(),
            trait_values: ledger
                .attributes()
                .chain(ledger.skills())
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            discipline_values: ledger.disciplines().filter_map(nonzero).collect(),
            advantage_values: ledger.advantages().filter_map(taken).collect(),
            flaw_values: ledger.flaws().filter_map(taken).collect(),
            attribute_priorities: build.priorities().attributes,
            skill_priorities: build.priorities().skills,
            saved_at,
        }
    }

    /// Rebuild the build. Entries the ledger rejects are skipped and their
    /// names returned.
    pub fn restore(&self) -> (CharacterBuild, Vec<String>) {
        let mut ledger = TraitLedger::new();
        let mut skipped = Vec::new();

        for (name, value) in &self.trait_values {
            let applied = ruleset::classify(name)
                .map(|kind| ledger.set_trait(kind, name, *value).is_ok())
                .unwrap_or(false);
            if !applied {
                skipped.push(name.clone());
            }
        }
        for (name, value) in &self.discipline_values {
            if ledger.set_trait(TraitKind::Discipline, name, *value).is_err() {
                skipped.push(name.clone());
            }
        }
        for (kind, entries) in [
            (TraitKind::Advantage, &self.advantage_values),
            (TraitKind::Flaw, &self.flaw_values),
        ] {
            for (name, entry) in entries {
                if ledger.put_merit(kind, name, entry.clone()).is_err() {
                    skipped.push(name.clone());
                }
            }
        }

        let priorities = Priorities {
            attributes: self.attribute_priorities,
            skills: self.skill_priorities,
        };
        (
            CharacterBuild::from_parts(ledger, priorities, self.bio.clone()),
            skipped,
        )
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.saved_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.age(now) > Duration::minutes(DRAFT_TTL_MINUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::PriorityTable;
    use crate::types::{Category, PriorityLevel};
    use crate::value_objects::BioField;
    use chrono::TimeZone;

    fn saved_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn sample_build() -> CharacterBuild {
        let mut build = CharacterBuild::new();
        build.set_bio(BioField::FullName, "Mara Quill");
        build.set_bio(BioField::Clan, "Tremere");
        build.assign_priority(PriorityTable::Attributes, PriorityLevel::Primary, Some(Category::Mental));
        build.assign_priority(PriorityTable::Skills, PriorityLevel::Tertiary, Some(Category::Physical));
        build.set_trait(TraitKind::Attribute, "intelligence", 4).unwrap();
        build.set_trait(TraitKind::Skill, "occult", 3).unwrap();
        build.set_trait(TraitKind::Discipline, "Blood Sorcery", 2).unwrap();
        build.set_trait(TraitKind::Advantage, "Contacts", 2).unwrap();
        build
            .set_qualifier(TraitKind::Advantage, "Contacts", Qualifier::Instance, "Museum staff")
            .unwrap();
        build.set_trait(TraitKind::Flaw, "Prey Exclusion", 1).unwrap();
        build
    }

    #[test]
    fn draft_keys_distinguish_new_and_edit() {
        assert_eq!(DraftKey::new_character().as_str(), "chargen_draft_new");
        assert_eq!(
            DraftKey::for_character(CharacterId::new(12)).as_str(),
            "chargen_draft_12"
        );
        assert_eq!(DraftKey::for_target(None), DraftKey::new_character());
    }

    #[test]
    fn capture_then_restore_keeps_the_build() {
        let build = sample_build();
        let snapshot = DraftSnapshot::capture(&build, saved_at());

        assert_eq!(snapshot.trait_values.len(), 36);
        assert_eq!(snapshot.discipline_values.len(), 1);

        let (restored, skipped) = snapshot.restore();
        assert!(skipped.is_empty());
        assert_eq!(restored, build);
    }

    #[test]
    fn qualifier_without_dots_survives_restore() {
        let mut build = CharacterBuild::new();
        build
            .set_qualifier(TraitKind::Advantage, "Contacts", Qualifier::Instance, "Police")
            .unwrap();
        build.set_trait(TraitKind::Flaw, "Enemy", 0).unwrap();

        let snapshot = DraftSnapshot::capture(&build, saved_at());
        assert_eq!(snapshot.advantage_values.len(), 1);
        assert!(snapshot.flaw_values.is_empty());

        let (restored, _) = snapshot.restore();
        let entry = restored
            .ledger()
            .merit(TraitKind::Advantage, "Contacts")
            .unwrap();
        assert_eq!(entry.value, 0);
        assert_eq!(entry.qualifier(Qualifier::Instance), Some("Police"));
    }

    #[test]
    fn restore_skips_unknown_traits() {
        let mut snapshot = DraftSnapshot::capture(&sample_build(), saved_at());
        snapshot.trait_values.insert("sorcery".to_string(), 3);
        snapshot.discipline_values.insert(" ".to_string(), 1);

        let (restored, skipped) = snapshot.restore();

        assert_eq!(skipped, vec!["sorcery".to_string(), " ".to_string()]);
        assert_eq!(
            restored.ledger().rating(TraitKind::Attribute, "intelligence"),
            Ok(4)
        );
    }

    #[test]
    fn drafts_expire_after_seven_days() {
        let snapshot = DraftSnapshot::capture(&CharacterBuild::new(), saved_at());

        let just_inside = saved_at() + Duration::minutes(DRAFT_TTL_MINUTES);
        assert!(!snapshot.is_expired(just_inside));

        let eight_days = saved_at() + Duration::days(8);
        assert!(snapshot.is_expired(eight_days));
    }

    #[test]
    fn snapshot_tolerates_missing_sections() {
        let json = r#"{"saved_at":"2026-03-01T12:00:00Z","bio":{"full_name":"Ash"}}"#;
        let snapshot: DraftSnapshot = serde_json::from_str(json).unwrap();
        let (build, skipped) = snapshot.restore();
        assert!(skipped.is_empty());
        assert_eq!(build.bio().full_name, "Ash");
        assert_eq!(build.ledger().rating(TraitKind::Attribute, "wits"), Ok(1));
    }
}
