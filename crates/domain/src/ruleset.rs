//! Creation ruleset data.
//!
//! These constants are ruleset data rather than behavior: trait names per
//! category, pool allowance tables and the flat budgets for disciplines,
//! advantages and flaws.

use crate::types::{Category, TraitKind};
use crate::value_objects::PoolTable;

/// Attribute allowances by priority: primary 7, secondary 5, tertiary 3.
pub const ATTRIBUTE_POOLS: PoolTable = PoolTable::new(7, 5, 3);

/// Skill allowances by priority: primary 13, secondary 9, tertiary 5.
pub const SKILL_POOLS: PoolTable = PoolTable::new(13, 9, 5);

/// Discipline dots to spend, regardless of priorities.
pub const DISCIPLINE_BUDGET: u8 = 3;

/// Minimum discipline dots that must fall within the clan's affinity list.
pub const IN_CLAN_MINIMUM: u8 = 2;

/// Advantage points to spend.
pub const ADVANTAGE_BUDGET: u8 = 7;

/// Flaw points that may be taken. Flaws are optional.
pub const FLAW_CEILING: u8 = 2;

/// Splat tag sent with every submission.
pub const SPLAT: &str = "vampire";

const PHYSICAL_ATTRIBUTES: [&str; 3] = ["strength", "dexterity", "stamina"];
const SOCIAL_ATTRIBUTES: [&str; 3] = ["charisma", "manipulation", "composure"];
const MENTAL_ATTRIBUTES: [&str; 3] = ["intelligence", "wits", "resolve"];

const PHYSICAL_SKILLS: [&str; 9] = [
    "athletics",
    "brawl",
    "craft",
    "drive",
    "firearms",
    "melee",
    "larceny",
    "stealth",
    "survival",
];
const SOCIAL_SKILLS: [&str; 9] = [
    "animal_ken",
    "etiquette",
    "insight",
    "intimidation",
    "leadership",
    "performance",
    "persuasion",
    "streetwise",
    "subterfuge",
];
const MENTAL_SKILLS: [&str; 9] = [
    "academics",
    "awareness",
    "finance",
    "investigation",
    "medicine",
    "occult",
    "politics",
    "science",
    "technology",
];

/// Attribute names in a category, in sheet order.
pub fn attributes(category: Category) -> &'static [&'static str] {
    match category {
        Category::Physical => &PHYSICAL_ATTRIBUTES,
        Category::Social => &SOCIAL_ATTRIBUTES,
        Category::Mental => &MENTAL_ATTRIBUTES,
    }
}

/// Skill names in a category, in sheet order.
pub fn skills(category: Category) -> &'static [&'static str] {
    match category {
        Category::Physical => &PHYSICAL_SKILLS,
        Category::Social => &SOCIAL_SKILLS,
        Category::Mental => &MENTAL_SKILLS,
    }
}

/// Trait names of a fixed-set kind in a category.
///
/// Returns an empty slice for kinds whose names come from the trait catalog.
pub fn names(kind: TraitKind, category: Category) -> &'static [&'static str] {
    match kind {
        TraitKind::Attribute => attributes(category),
        TraitKind::Skill => skills(category),
        TraitKind::Discipline | TraitKind::Advantage | TraitKind::Flaw => &[],
    }
}

/// Category of an attribute or skill, if the name belongs to that fixed set.
pub fn category_of(kind: TraitKind, name: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|category| names(kind, *category).contains(&name))
}

/// Classifies an unprefixed trait name as an attribute or a skill.
pub fn classify(name: &str) -> Option<TraitKind> {
    [TraitKind::Attribute, TraitKind::Skill]
        .into_iter()
        .find(|kind| category_of(*kind, name).is_some())
}

/// Turns a stored trait key into a display label (`animal_ken` -> `Animal Ken`).
pub fn display_label(name: &str) -> String {
    name.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_three_attributes_and_nine_skills() {
        for category in Category::ALL {
            assert_eq!(attributes(category).len(), 3);
            assert_eq!(skills(category).len(), 9);
        }
    }

    #[test]
    fn classify_distinguishes_attributes_and_skills() {
        assert_eq!(classify("wits"), Some(TraitKind::Attribute));
        assert_eq!(classify("animal_ken"), Some(TraitKind::Skill));
        assert_eq!(classify("Potence"), None);
    }

    #[test]
    fn category_of_finds_owning_category() {
        assert_eq!(
            category_of(TraitKind::Attribute, "composure"),
            Some(Category::Social)
        );
        assert_eq!(
            category_of(TraitKind::Skill, "technology"),
            Some(Category::Mental)
        );
        assert_eq!(category_of(TraitKind::Skill, "strength"), None);
    }

    #[test]
    fn display_label_title_cases_words() {
        assert_eq!(display_label("animal_ken"), "Animal Ken");
        assert_eq!(display_label("strength"), "Strength");
        assert_eq!(display_label("Blood Sorcery"), "Blood Sorcery");
    }
}
