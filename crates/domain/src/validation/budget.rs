//! Budget Validator - compares ledger spend against every pool.
//!
//! Validation is re-derived from scratch on each call. Nothing is cached,
//! so calling it after every click is always safe.

use std::fmt;

use crate::aggregates::TraitLedger;
use crate::ruleset::{
    ADVANTAGE_BUDGET, ATTRIBUTE_POOLS, DISCIPLINE_BUDGET, FLAW_CEILING, IN_CLAN_MINIMUM,
    SKILL_POOLS,
};
use crate::types::Category;
use crate::value_objects::{Clan, Priorities};

/// An independently budgeted group of traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetGroup {
    Attributes(Category),
    Skills(Category),
    Disciplines,
    Advantages,
    Flaws,
}

impl BudgetGroup {
    /// Every group, in wizard order.
    pub const ALL: [BudgetGroup; 9] = [
        Self::Attributes(Category::Physical),
        Self::Attributes(Category::Social),
        Self::Attributes(Category::Mental),
        Self::Skills(Category::Physical),
        Self::Skills(Category::Social),
        Self::Skills(Category::Mental),
        Self::Disciplines,
        Self::Advantages,
        Self::Flaws,
    ];

    /// Unit spent in this group, for messages.
    fn unit(&self) -> &'static str {
        match self {
            Self::Attributes(_) | Self::Skills(_) | Self::Disciplines => "dots",
            Self::Advantages | Self::Flaws => "points",
        }
    }
}

impl fmt::Display for BudgetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attributes(category) => write!(f, "{} Attributes", category.display_name()),
            Self::Skills(category) => write!(f, "{} Skills", category.display_name()),
            Self::Disciplines => write!(f, "Disciplines"),
            Self::Advantages => write!(f, "Advantages"),
            Self::Flaws => write!(f, "Flaws"),
        }
    }
}

/// What a group is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Spend must equal the amount
    Exact(u32),
    /// Spend must not exceed the amount
    Ceiling(u32),
    /// No priority level claims the category yet
    Unknown,
}

/// A reason a group is unsatisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    TooFew { required: u32, spent: u32 },
    TooMany { required: u32, spent: u32 },
    OverCeiling { ceiling: u32, spent: u32 },
    NoPriority { spent: u32 },
    InClanShort { minimum: u32, spent: u32 },
}

impl Violation {
    /// Human-readable message for a violation of `group`.
    pub fn message(&self, group: BudgetGroup) -> String {
        let unit = group.unit();
        match self {
            Self::TooFew { required, spent } => format!(
                "{group}: Must spend exactly {required} {unit} (currently {spent}, {} too few)",
                required.abs_diff(*spent)
            ),
            Self::TooMany { required, spent } => format!(
                "{group}: Must spend exactly {required} {unit} (currently {spent}, {} too many)",
                spent.abs_diff(*required)
            ),
            Self::OverCeiling { ceiling, spent } => format!(
                "{group}: Cannot exceed {ceiling} {unit} (currently {spent}, {} too many)",
                spent.abs_diff(*ceiling)
            ),
            Self::NoPriority { spent } => {
                format!("{group}: No priority assigned (currently {spent} {unit})")
            }
            Self::InClanShort { minimum, spent } => format!(
                "{group}: Must spend at least {minimum} dots in in-clan disciplines (currently {spent})"
            ),
        }
    }
}

/// Spend and verdict for one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupStatus {
    pub group: BudgetGroup,
    pub spent: u32,
    pub target: Target,
    pub violations: Vec<Violation>,
}

impl GroupStatus {
    fn measure(group: BudgetGroup, spent: u32, target: Target) -> Self {
        let violation = match target {
            Target::Exact(required) if spent < required => {
                Some(Violation::TooFew { required, spent })
            }
            Target::Exact(required) if spent > required => {
                Some(Violation::TooMany { required, spent })
            }
            Target::Ceiling(ceiling) if spent > ceiling => {
                Some(Violation::OverCeiling { ceiling, spent })
            }
            Target::Unknown => Some(Violation::NoPriority { spent }),
            Target::Exact(_) | Target::Ceiling(_) => None,
        };
        Self {
            group,
            spent,
            target,
            violations: violation.into_iter().collect(),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.violations.iter().map(|v| v.message(self.group))
    }
}

/// Configuration that must be complete before a build is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigGap {
    AttributePriorities,
    SkillPriorities,
    Clan,
}

impl fmt::Display for ConfigGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttributePriorities => write!(
                f,
                "You must assign all attribute priorities (Primary, Secondary, Tertiary)"
            ),
            Self::SkillPriorities => write!(
                f,
                "You must assign all skill priorities (Primary, Secondary, Tertiary)"
            ),
            Self::Clan => write!(f, "You must select a clan"),
        }
    }
}

/// Structured outcome of validating a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    groups: Vec<GroupStatus>,
    gaps: Vec<ConfigGap>,
}

impl ValidationResult {
    /// Valid iff every group is satisfied and nothing is left unconfigured.
    pub fn is_valid(&self) -> bool {
        self.gaps.is_empty() && self.groups.iter().all(GroupStatus::is_satisfied)
    }

    pub fn groups(&self) -> &[GroupStatus] {
        &self.groups
    }

    pub fn group(&self, group: BudgetGroup) -> Option<&GroupStatus> {
        self.groups.iter().find(|status| status.group == group)
    }

    pub fn is_satisfied(&self, group: BudgetGroup) -> bool {
        self.group(group).is_some_and(GroupStatus::is_satisfied)
    }

    pub fn gaps(&self) -> &[ConfigGap] {
        &self.gaps
    }

    pub fn has_gap(&self, gap: ConfigGap) -> bool {
        self.gaps.contains(&gap)
    }

    /// Configuration messages first, then one line per violation in group order.
    pub fn messages(&self) -> Vec<String> {
        self.gaps
            .iter()
            .map(ToString::to_string)
            .chain(self.groups.iter().flat_map(GroupStatus::messages))
            .collect()
    }
}

/// Stateless validator over a ledger, its priorities and the chosen clan.
pub struct BudgetValidator;

impl BudgetValidator {
    pub fn validate(
        ledger: &TraitLedger,
        priorities: &Priorities,
        clan: Option<&Clan>,
    ) -> ValidationResult {
        let mut groups = Vec::with_capacity(BudgetGroup::ALL.len());

        for category in Category::ALL {
            let target = ATTRIBUTE_POOLS
                .resolve(&priorities.attributes, category)
                .map_or(Target::Unknown, |pool| Target::Exact(u32::from(pool)));
            groups.push(GroupStatus::measure(
                BudgetGroup::Attributes(category),
                ledger.attribute_spend(category),
                target,
            ));
        }

        for category in Category::ALL {
            let target = SKILL_POOLS
                .resolve(&priorities.skills, category)
                .map_or(Target::Unknown, |pool| Target::Exact(u32::from(pool)));
            groups.push(GroupStatus::measure(
                BudgetGroup::Skills(category),
                ledger.skill_spend(category),
                target,
            ));
        }

        let mut disciplines = GroupStatus::measure(
            BudgetGroup::Disciplines,
            ledger.discipline_total(),
            Target::Exact(u32::from(DISCIPLINE_BUDGET)),
        );
        // The in-clan minimum only applies once the total is right
        let total_met = disciplines.violations.is_empty();
        if let Some(clan) = clan.filter(|c| total_met && c.has_affinity()) {
            let in_clan = ledger.in_clan_total(clan);
            let minimum = u32::from(IN_CLAN_MINIMUM);
            if in_clan < minimum {
                disciplines.violations.push(Violation::InClanShort {
                    minimum,
                    spent: in_clan,
                });
            }
        }
        groups.push(disciplines);

        groups.push(GroupStatus::measure(
            BudgetGroup::Advantages,
            ledger.advantage_total(),
            Target::Exact(u32::from(ADVANTAGE_BUDGET)),
        ));
        groups.push(GroupStatus::measure(
            BudgetGroup::Flaws,
            ledger.flaw_total(),
            Target::Ceiling(u32::from(FLAW_CEILING)),
        ));

        let mut gaps = Vec::new();
        if !priorities.attributes.is_complete() {
            gaps.push(ConfigGap::AttributePriorities);
        }
        if !priorities.skills.is_complete() {
            gaps.push(ConfigGap::SkillPriorities);
        }
        if clan.is_none() {
            gaps.push(ConfigGap::Clan);
        }

        ValidationResult { groups, gaps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PriorityLevel, TraitKind};

    fn standard_priorities() -> Priorities {
        let mut priorities = Priorities::default();
        for (level, category) in PriorityLevel::ALL.into_iter().zip(Category::ALL) {
            priorities.attributes.assign(level, Some(category));
            priorities.skills.assign(level, Some(category));
        }
        priorities
    }

    /// A build that satisfies every pool for a Brujah.
    fn legal_ledger() -> TraitLedger {
        let mut ledger = TraitLedger::new();
        let attrs = [
            ("strength", 4),
            ("dexterity", 3),
            ("stamina", 3),
            ("charisma", 3),
            ("manipulation", 2),
            ("composure", 3),
            ("intelligence", 2),
            ("wits", 2),
            ("resolve", 2),
        ];
        for (name, value) in attrs {
            ledger.set_trait(TraitKind::Attribute, name, value).unwrap();
        }
        let skills = [
            ("athletics", 3),
            ("brawl", 4),
            ("drive", 2),
            ("firearms", 2),
            ("melee", 2),
            ("insight", 2),
            ("intimidation", 3),
            ("streetwise", 2),
            ("subterfuge", 2),
            ("awareness", 2),
            ("investigation", 2),
            ("occult", 1),
        ];
        for (name, value) in skills {
            ledger.set_trait(TraitKind::Skill, name, value).unwrap();
        }
        ledger.set_trait(TraitKind::Discipline, "Potence", 2).unwrap();
        ledger.set_trait(TraitKind::Discipline, "Auspex", 1).unwrap();
        ledger.set_trait(TraitKind::Advantage, "Resources", 3).unwrap();
        ledger.set_trait(TraitKind::Advantage, "Haven", 4).unwrap();
        ledger.set_trait(TraitKind::Flaw, "Enemy", 1).unwrap();
        ledger
    }

    fn brujah() -> &'static Clan {
        Clan::lookup("Brujah").unwrap()
    }

    #[test]
    fn legal_build_is_valid() {
        let result =
            BudgetValidator::validate(&legal_ledger(), &standard_priorities(), Some(brujah()));
        assert!(result.is_valid(), "{:?}", result.messages());
        assert!(result.messages().is_empty());
    }

    #[test]
    fn fresh_build_is_invalid_everywhere_but_flaws() {
        let result =
            BudgetValidator::validate(&TraitLedger::new(), &Priorities::default(), None);

        assert!(!result.is_valid());
        for group in BudgetGroup::ALL {
            let expected = group == BudgetGroup::Flaws;
            assert_eq!(result.is_satisfied(group), expected, "{group}");
        }
        assert!(result.has_gap(ConfigGap::AttributePriorities));
        assert!(result.has_gap(ConfigGap::SkillPriorities));
        assert!(result.has_gap(ConfigGap::Clan));
        assert_eq!(
            result.messages()[0],
            "You must assign all attribute priorities (Primary, Secondary, Tertiary)"
        );
        assert!(result
            .messages()
            .contains(&"Mental Attributes: No priority assigned (currently 0 dots)".to_string()));
    }

    #[test]
    fn physical_group_satisfied_at_exact_spend() {
        let mut priorities = Priorities::default();
        priorities
            .attributes
            .assign(PriorityLevel::Primary, Some(Category::Physical));
        priorities
            .attributes
            .assign(PriorityLevel::Secondary, Some(Category::Social));
        priorities
            .attributes
            .assign(PriorityLevel::Tertiary, Some(Category::Mental));

        let mut ledger = TraitLedger::new();
        ledger.set_trait(TraitKind::Attribute, "strength", 4).unwrap();
        ledger.set_trait(TraitKind::Attribute, "dexterity", 3).unwrap();
        ledger.set_trait(TraitKind::Attribute, "stamina", 3).unwrap();

        let physical = BudgetGroup::Attributes(Category::Physical);
        let result = BudgetValidator::validate(&ledger, &priorities, None);
        assert!(result.is_satisfied(physical));
        assert_eq!(result.group(physical).unwrap().target, Target::Exact(7));

        ledger.set_trait(TraitKind::Attribute, "stamina", 2).unwrap();
        let result = BudgetValidator::validate(&ledger, &priorities, None);
        let status = result.group(physical).unwrap();
        assert!(!status.is_satisfied());
        assert_eq!(status.spent, 6);
        assert_eq!(
            status.messages().collect::<Vec<_>>(),
            vec!["Physical Attributes: Must spend exactly 7 dots (currently 6, 1 too few)"]
        );
    }

    #[test]
    fn overspend_reports_too_many() {
        let mut ledger = legal_ledger();
        ledger.set_trait(TraitKind::Skill, "occult", 3).unwrap();

        let result =
            BudgetValidator::validate(&ledger, &standard_priorities(), Some(brujah()));
        assert!(!result.is_valid());
        assert_eq!(
            result.messages(),
            vec!["Mental Skills: Must spend exactly 5 dots (currently 7, 2 too many)"]
        );
    }

    #[test]
    fn flaws_are_a_ceiling() {
        for (total, satisfied) in [(0, true), (1, true), (2, true), (3, false)] {
            let mut ledger = TraitLedger::new();
            ledger.set_trait(TraitKind::Flaw, "Enemy", total).unwrap();
            let result = BudgetValidator::validate(&ledger, &Priorities::default(), None);
            assert_eq!(result.is_satisfied(BudgetGroup::Flaws), satisfied, "{total}");
        }

        let mut ledger = TraitLedger::new();
        ledger.set_trait(TraitKind::Flaw, "Enemy", 3).unwrap();
        let result = BudgetValidator::validate(&ledger, &Priorities::default(), None);
        let flaws: Vec<_> = result.group(BudgetGroup::Flaws).unwrap().messages().collect();
        assert_eq!(flaws, vec!["Flaws: Cannot exceed 2 points (currently 3, 1 too many)"]);
    }

    #[test]
    fn out_of_clan_disciplines_fail_the_in_clan_minimum() {
        let mut ledger = legal_ledger();
        ledger.clear_trait(TraitKind::Discipline, "Potence").unwrap();
        ledger.set_trait(TraitKind::Discipline, "Auspex", 2).unwrap();
        ledger.set_trait(TraitKind::Discipline, "Obfuscate", 1).unwrap();

        let result =
            BudgetValidator::validate(&ledger, &standard_priorities(), Some(brujah()));
        let status = result.group(BudgetGroup::Disciplines).unwrap();

        assert_eq!(status.spent, 3);
        assert!(!status.is_satisfied());
        assert_eq!(
            status.violations,
            vec![Violation::InClanShort {
                minimum: 2,
                spent: 0
            }]
        );
        assert!(!result.is_valid());
    }

    #[test]
    fn wrong_discipline_total_reports_only_the_total() {
        let mut ledger = TraitLedger::new();
        ledger.set_trait(TraitKind::Discipline, "Auspex", 1).unwrap();

        let result = BudgetValidator::validate(&ledger, &standard_priorities(), Some(brujah()));
        let messages: Vec<_> = result
            .group(BudgetGroup::Disciplines)
            .unwrap()
            .messages()
            .collect();

        assert_eq!(
            messages,
            vec!["Disciplines: Must spend exactly 3 dots (currently 1, 2 too few)"]
        );
    }

    #[test]
    fn messages_tolerate_inconsistent_violations() {
        let too_few = Violation::TooFew {
            required: 1,
            spent: 5,
        };
        assert_eq!(
            too_few.message(BudgetGroup::Advantages),
            "Advantages: Must spend exactly 1 points (currently 5, 4 too few)"
        );

        let over = Violation::OverCeiling {
            ceiling: 2,
            spent: 0,
        };
        assert_eq!(
            over.message(BudgetGroup::Flaws),
            "Flaws: Cannot exceed 2 points (currently 0, 2 too many)"
        );
    }

    #[test]
    fn clan_without_affinity_skips_in_clan_minimum() {
        let mut ledger = legal_ledger();
        ledger.clear_trait(TraitKind::Discipline, "Potence").unwrap();
        ledger.set_trait(TraitKind::Discipline, "Auspex", 3).unwrap();
        let caitiff = Clan::lookup("Caitiff").unwrap();

        let result = BudgetValidator::validate(&ledger, &standard_priorities(), Some(caitiff));
        assert!(result.is_valid(), "{:?}", result.messages());
    }

    #[test]
    fn missing_clan_blocks_validity_alone() {
        let result = BudgetValidator::validate(&legal_ledger(), &standard_priorities(), None);
        assert!(!result.is_valid());
        assert_eq!(result.gaps(), &[ConfigGap::Clan]);
        assert_eq!(result.messages(), vec!["You must select a clan"]);
    }
}
