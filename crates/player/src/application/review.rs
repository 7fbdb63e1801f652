//! Review summary shown on the Submit step.

use std::fmt;

use codex_domain::ruleset::{self, display_label};
use codex_domain::{BioField, CharacterBuild, Category, MeritEntry, Qualifier, TraitKind};

const FILLED: char = '●';
const EMPTY: char = '○';

/// Dot string for a rating, e.g. `pips(2, 3)` is `●●○`.
pub fn pips(value: u8, max: u8) -> String {
    let filled = value.min(max);
    std::iter::repeat(FILLED)
        .take(usize::from(filled))
        .chain(std::iter::repeat(EMPTY).take(usize::from(max - filled)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSection {
    pub title: String,
    pub lines: Vec<String>,
}

impl ReviewSection {
    fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub sections: Vec<ReviewSection>,
}

impl ReviewSummary {
    pub fn from_build(build: &CharacterBuild) -> Self {
        let bio = build.bio();
        let ledger = build.ledger();

        let identity = BioField::ALL
            .into_iter()
            .map(|field| {
                let value = bio.get(field).trim();
                let shown = match (value.is_empty(), field) {
                    (true, BioField::FullName) => "(unnamed)",
                    (true, _) => "(none)",
                    (false, _) => value,
                };
                format!("{}: {}", field.label(), shown)
            })
            .collect();

        let mut sections = vec![ReviewSection::new("Identity", identity)];

        for (title, kind) in [("Attributes", TraitKind::Attribute), ("Skills", TraitKind::Skill)] {
            let lines = Category::ALL
                .into_iter()
                .filter_map(|category| {
                    let rated: Vec<String> = ruleset::names(kind, category)
                        .iter()
                        .filter_map(|name| {
                            let value = ledger.rating(kind, name).ok()?;
                            (value > 0).then(|| format!("{} {}", display_label(name), value))
                        })
                        .collect();
                    (!rated.is_empty())
                        .then(|| format!("{}: {}", category.display_name(), rated.join(", ")))
                })
                .collect();
            sections.push(ReviewSection::new(title, lines));
        }

        let disciplines: Vec<String> = ledger
            .disciplines()
            .filter(|(_, value)| *value > 0)
            .map(|(name, value)| {
                format!("{} {}", name, pips(value, TraitKind::Discipline.bounds().max))
            })
            .collect();
        sections.push(ReviewSection::new(
            "Disciplines",
            or_placeholder(disciplines, "(none selected)"),
        ));

        let advantages: Vec<String> = ledger
            .advantages()
            .filter(|(_, entry)| entry.value > 0)
            .map(|(name, entry)| merit_line(name, entry))
            .collect();
        sections.push(ReviewSection::new(
            "Advantages",
            or_placeholder(advantages, "(none selected)"),
        ));

        let flaws: Vec<String> = ledger
            .flaws()
            .filter(|(_, entry)| entry.value > 0)
            .map(|(name, entry)| merit_line(name, entry))
            .collect();
        sections.push(ReviewSection::new("Flaws", or_placeholder(flaws, "(none taken)")));

        Self { sections }
    }

    pub fn section(&self, title: &str) -> Option<&ReviewSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

impl fmt::Display for ReviewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "== {} ==", section.title)?;
            for line in &section.lines {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}

fn merit_line(name: &str, entry: &MeritEntry) -> String {
    let qualifier = entry
        .qualifier(Qualifier::Instance)
        .or_else(|| entry.qualifier(Qualifier::Specialty));
    let dots = pips(entry.value, TraitKind::Advantage.bounds().max);
    match qualifier {
        Some(q) => format!("{} ({}) {}", name, q, dots),
        None => format!("{} {}", name, dots),
    }
}

fn or_placeholder(lines: Vec<String>, placeholder: &str) -> Vec<String> {
    if lines.is_empty() {
        vec![placeholder.to_string()]
    } else {
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pips_fill_then_empty() {
        assert_eq!(pips(2, 3), "●●○");
        assert_eq!(pips(0, 5), "○○○○○");
        assert_eq!(pips(7, 3), "●●●");
    }

    #[test]
    fn empty_build_uses_placeholders() {
        let summary = ReviewSummary::from_build(&CharacterBuild::new());

        let identity = summary.section("Identity").unwrap();
        assert_eq!(identity.lines[0], "Name: (unnamed)");
        assert!(identity.lines.contains(&"Concept: (none)".to_string()));

        assert_eq!(summary.section("Skills").unwrap().lines, Vec::<String>::new());
        assert_eq!(summary.section("Disciplines").unwrap().lines, vec!["(none selected)"]);
        assert_eq!(summary.section("Advantages").unwrap().lines, vec!["(none selected)"]);
        assert_eq!(summary.section("Flaws").unwrap().lines, vec!["(none taken)"]);
    }

    #[test]
    fn rated_traits_are_listed_with_labels() {
        let mut build = CharacterBuild::new();
        build.set_bio(BioField::FullName, "Dario Kent");
        build.set_trait(TraitKind::Skill, "animal_ken", 2).unwrap();
        build.set_trait(TraitKind::Discipline, "Protean", 2).unwrap();
        build.set_trait(TraitKind::Advantage, "Allies", 3).unwrap();
        build
            .set_qualifier(TraitKind::Advantage, "Allies", Qualifier::Instance, "Bikers")
            .unwrap();

        let summary = ReviewSummary::from_build(&build);

        assert_eq!(summary.section("Identity").unwrap().lines[0], "Name: Dario Kent");
        assert_eq!(summary.section("Skills").unwrap().lines, vec!["Social: Animal Ken 2"]);
        assert_eq!(
            summary.section("Attributes").unwrap().lines[0],
            "Physical: Strength 1, Dexterity 1, Stamina 1"
        );
        assert_eq!(summary.section("Disciplines").unwrap().lines, vec!["Protean ●●○"]);
        assert_eq!(
            summary.section("Advantages").unwrap().lines,
            vec!["Allies (Bikers) ●●●○○"]
        );
        assert!(summary.to_string().contains("== Flaws ==\n  (none taken)\n"));
    }
}
