//! Trait Ledger - current dot ratings for every trait of a build.
//!
//! Attributes and skills are a fixed set seeded at their baselines.
//! Discipline, advantage and flaw names come from the remote trait catalog,
//! so the ledger accepts any non-blank name for those kinds and treats an
//! absent entry as rated 0.
//!
//! Every rating change goes through two transitions, [`TraitLedger::set_trait`]
//! and [`TraitLedger::clear_trait`]. [`TraitLedger::toggle_trait`] is the
//! click-the-filled-dot-to-clear rule on top of them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::events::RatingChange;
use crate::ruleset;
use crate::types::{Category, TraitKind};
use crate::value_objects::Clan;

/// Free-text qualifier attached to an advantage or flaw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    /// Which instance of a repeatable trait (e.g., which Contact)
    Instance,
    /// Area of focus (e.g., a Linguistics language)
    Specialty,
}

/// Rating plus optional qualifiers for an advantage or flaw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeritEntry {
    pub value: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

impl MeritEntry {
    pub fn new(value: u8) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Qualifier text, if set and non-blank.
    pub fn qualifier(&self, qualifier: Qualifier) -> Option<&str> {
        let text = match qualifier {
            Qualifier::Instance => self.instance.as_deref(),
            Qualifier::Specialty => self.specialty.as_deref(),
        };
        text.filter(|t| !t.trim().is_empty())
    }
}

/// Mutable mapping from trait name to rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitLedger {
    attributes: BTreeMap<String, u8>,
    skills: BTreeMap<String, u8>,
    disciplines: BTreeMap<String, u8>,
    advantages: BTreeMap<String, MeritEntry>,
    flaws: BTreeMap<String, MeritEntry>,
}

impl Default for TraitLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TraitLedger {
    /// A fresh ledger: attributes at 1, skills at 0, nothing else taken.
    pub fn new() -> Self {
        let seed = |kind: TraitKind| {
            Category::ALL
                .into_iter()
                .flat_map(|category| ruleset::names(kind, category))
                .map(|name| (name.to_string(), kind.baseline()))
                .collect::<BTreeMap<_, _>>()
        };

        Self {
            attributes: seed(TraitKind::Attribute),
            skills: seed(TraitKind::Skill),
            disciplines: BTreeMap::new(),
            advantages: BTreeMap::new(),
            flaws: BTreeMap::new(),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Current rating of a trait.
    ///
    /// Unknown attribute/skill names are an error; catalog-driven kinds
    /// report 0 for names never rated.
    pub fn rating(&self, kind: TraitKind, name: &str) -> Result<u8, DomainError> {
        match kind {
            TraitKind::Attribute => self
                .attributes
                .get(name)
                .copied()
                .ok_or_else(|| DomainError::unknown_trait(kind, name)),
            TraitKind::Skill => self
                .skills
                .get(name)
                .copied()
                .ok_or_else(|| DomainError::unknown_trait(kind, name)),
            TraitKind::Discipline => Ok(self.disciplines.get(name).copied().unwrap_or(0)),
            TraitKind::Advantage => Ok(self.advantages.get(name).map_or(0, |e| e.value)),
            TraitKind::Flaw => Ok(self.flaws.get(name).map_or(0, |e| e.value)),
        }
    }

    /// Sum of ratings of a fixed-set kind within a category.
    pub fn category_total(&self, kind: TraitKind, category: Category) -> u32 {
        let map = match kind {
            TraitKind::Attribute => &self.attributes,
            TraitKind::Skill => &self.skills,
            _ => return 0,
        };
        ruleset::names(kind, category)
            .iter()
            .filter_map(|name| map.get(*name))
            .map(|v| u32::from(*v))
            .sum()
    }

    /// Attribute dots spent in a category, net of the pre-spent baseline dot
    /// each attribute starts with.
    pub fn attribute_spend(&self, category: Category) -> u32 {
        let baseline = ruleset::attributes(category).len() as u32
            * u32::from(TraitKind::Attribute.baseline());
        self.category_total(TraitKind::Attribute, category)
            .saturating_sub(baseline)
    }

    /// Skill dots spent in a category.
    pub fn skill_spend(&self, category: Category) -> u32 {
        self.category_total(TraitKind::Skill, category)
    }

    pub fn discipline_total(&self) -> u32 {
        self.disciplines.values().map(|v| u32::from(*v)).sum()
    }

    /// Discipline dots spent within a clan's affinity list.
    pub fn in_clan_total(&self, clan: &Clan) -> u32 {
        self.disciplines
            .iter()
            .filter(|(name, _)| clan.is_in_clan(name))
            .map(|(_, v)| u32::from(*v))
            .sum()
    }

    pub fn advantage_total(&self) -> u32 {
        self.advantages.values().map(|e| u32::from(e.value)).sum()
    }

    pub fn flaw_total(&self) -> u32 {
        self.flaws.values().map(|e| u32::from(e.value)).sum()
    }

    /// Attribute ratings in sheet order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        self.fixed_in_order(TraitKind::Attribute, &self.attributes)
    }

    /// Skill ratings in sheet order, including untrained (0) skills.
    pub fn skills(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        self.fixed_in_order(TraitKind::Skill, &self.skills)
    }

    pub fn disciplines(&self) -> impl Iterator<Item = (&str, u8)> {
        self.disciplines.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn advantages(&self) -> impl Iterator<Item = (&str, &MeritEntry)> {
        self.advantages.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn flaws(&self) -> impl Iterator<Item = (&str, &MeritEntry)> {
        self.flaws.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn merit(&self, kind: TraitKind, name: &str) -> Option<&MeritEntry> {
        match kind {
            TraitKind::Advantage => self.advantages.get(name),
            TraitKind::Flaw => self.flaws.get(name),
            _ => None,
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Set a rating, clamped to the kind's domain.
    pub fn set_trait(
        &mut self,
        kind: TraitKind,
        name: &str,
        value: u8,
    ) -> Result<RatingChange, DomainError> {
        let to = kind.bounds().clamp(value);
        let slot = self.slot_mut(kind, name)?;
        let from = *slot;
        if from == to {
            return Ok(RatingChange::Unchanged { value: to });
        }
        *slot = to;
        Ok(RatingChange::Set { from, to })
    }

    /// Reset a rating to the kind's baseline (1 for attributes, 0 otherwise).
    pub fn clear_trait(&mut self, kind: TraitKind, name: &str) -> Result<RatingChange, DomainError> {
        let to = kind.baseline();
        let slot = self.slot_mut(kind, name)?;
        let from = *slot;
        if from == to {
            return Ok(RatingChange::Unchanged { value: to });
        }
        *slot = to;
        Ok(RatingChange::Cleared { from, to })
    }

    /// The dot-click interaction: clicking the current value clears the
    /// trait, clicking any other value sets it.
    pub fn toggle_trait(
        &mut self,
        kind: TraitKind,
        name: &str,
        clicked: u8,
    ) -> Result<RatingChange, DomainError> {
        if self.rating(kind, name)? == clicked {
            self.clear_trait(kind, name)
        } else {
            self.set_trait(kind, name, clicked)
        }
    }

    /// Attach (or with blank text, remove) a qualifier on an advantage or flaw.
    pub fn set_qualifier(
        &mut self,
        kind: TraitKind,
        name: &str,
        qualifier: Qualifier,
        text: &str,
    ) -> Result<(), DomainError> {
        let entry = self.merit_mut(kind, name)?;
        let text = text.trim();
        let value = (!text.is_empty()).then(|| text.to_string());
        match qualifier {
            Qualifier::Instance => entry.instance = value,
            Qualifier::Specialty => entry.specialty = value,
        }
        Ok(())
    }

    /// Replace an advantage or flaw wholesale (used when restoring state).
    pub fn put_merit(
        &mut self,
        kind: TraitKind,
        name: &str,
        mut entry: MeritEntry,
    ) -> Result<(), DomainError> {
        entry.value = kind.bounds().clamp(entry.value);
        *self.merit_mut(kind, name)? = entry;
        Ok(())
    }

    fn slot_mut(&mut self, kind: TraitKind, name: &str) -> Result<&mut u8, DomainError> {
        match kind {
            TraitKind::Attribute => self
                .attributes
                .get_mut(name)
                .ok_or_else(|| DomainError::unknown_trait(kind, name)),
            TraitKind::Skill => self
                .skills
                .get_mut(name)
                .ok_or_else(|| DomainError::unknown_trait(kind, name)),
            TraitKind::Discipline => {
                let name = validated_name(kind, name)?;
                Ok(self.disciplines.entry(name).or_insert(0))
            }
            TraitKind::Advantage | TraitKind::Flaw => {
                Ok(&mut self.merit_mut(kind, name)?.value)
            }
        }
    }

    fn merit_mut(&mut self, kind: TraitKind, name: &str) -> Result<&mut MeritEntry, DomainError> {
        let map = match kind {
            TraitKind::Advantage => &mut self.advantages,
            TraitKind::Flaw => &mut self.flaws,
            _ => {
                return Err(DomainError::constraint(format!(
                    "{} traits do not carry qualifiers",
                    kind
                )))
            }
        };
        let name = validated_name(kind, name)?;
        Ok(map.entry(name).or_default())
    }

    fn fixed_in_order<'a>(
        &'a self,
        kind: TraitKind,
        map: &'a BTreeMap<String, u8>,
    ) -> impl Iterator<Item = (&'static str, u8)> + 'a {
        Category::ALL
            .into_iter()
            .flat_map(move |category| ruleset::names(kind, category).iter().copied())
            .map(move |name| (name, map.get(name).copied().unwrap_or(kind.baseline())))
    }
}

fn validated_name(kind: TraitKind, name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{} name cannot be empty", kind)));
    }
    Ok(trimmed.to_string())
}
