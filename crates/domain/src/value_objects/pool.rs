//! Pool Resolver - maps the priority given to a category onto a point allowance.

use serde::{Deserialize, Serialize};

use crate::ruleset::{ATTRIBUTE_POOLS, SKILL_POOLS};
use crate::types::{Category, PriorityLevel};
use crate::value_objects::{PriorityAssignment, Priorities};

/// Allowance per priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolTable {
    pub primary: u8,
    pub secondary: u8,
    pub tertiary: u8,
}

impl PoolTable {
    pub const fn new(primary: u8, secondary: u8, tertiary: u8) -> Self {
        Self {
            primary,
            secondary,
            tertiary,
        }
    }

    pub fn allowance(&self, level: PriorityLevel) -> u8 {
        match level {
            PriorityLevel::Primary => self.primary,
            PriorityLevel::Secondary => self.secondary,
            PriorityLevel::Tertiary => self.tertiary,
        }
    }

    /// Allowance for a category under an assignment.
    ///
    /// `None` means no level claims the category yet, which is distinct from
    /// a zero budget.
    pub fn resolve(&self, assignment: &PriorityAssignment, category: Category) -> Option<u8> {
        assignment
            .level_of(category)
            .map(|level| self.allowance(level))
    }
}

/// Read-only view resolving attribute and skill pools for a build.
#[derive(Debug, Clone, Copy)]
pub struct PoolResolver<'a> {
    priorities: &'a Priorities,
}

impl<'a> PoolResolver<'a> {
    pub fn new(priorities: &'a Priorities) -> Self {
        Self { priorities }
    }

    pub fn attribute_pool(&self, category: Category) -> Option<u8> {
        ATTRIBUTE_POOLS.resolve(&self.priorities.attributes, category)
    }

    pub fn skill_pool(&self, category: Category) -> Option<u8> {
        SKILL_POOLS.resolve(&self.priorities.skills, category)
    }
}

/// Formats a pool for display, `?` when unknown.
pub fn pool_label(pool: Option<u8>) -> String {
    pool.map(|p| p.to_string()).unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permutations() -> Vec<[Category; 3]> {
        use Category::*;
        vec![
            [Physical, Social, Mental],
            [Physical, Mental, Social],
            [Social, Physical, Mental],
            [Social, Mental, Physical],
            [Mental, Physical, Social],
            [Mental, Social, Physical],
        ]
    }

    fn assignment_from(order: [Category; 3]) -> PriorityAssignment {
        let mut assignment = PriorityAssignment::default();
        for (level, category) in PriorityLevel::ALL.into_iter().zip(order) {
            assignment.assign(level, Some(category));
        }
        assignment
    }

    #[test]
    fn every_permutation_yields_attribute_pools_in_rank_order() {
        for order in permutations() {
            let priorities = Priorities {
                attributes: assignment_from(order),
                skills: PriorityAssignment::default(),
            };
            let resolver = PoolResolver::new(&priorities);
            let pools: Vec<_> = order.iter().map(|c| resolver.attribute_pool(*c)).collect();
            assert_eq!(pools, vec![Some(7), Some(5), Some(3)]);
        }
    }

    #[test]
    fn every_permutation_yields_skill_pools_in_rank_order() {
        for order in permutations() {
            let priorities = Priorities {
                attributes: PriorityAssignment::default(),
                skills: assignment_from(order),
            };
            let resolver = PoolResolver::new(&priorities);
            let pools: Vec<_> = order.iter().map(|c| resolver.skill_pool(*c)).collect();
            assert_eq!(pools, vec![Some(13), Some(9), Some(5)]);
        }
    }

    #[test]
    fn unassigned_category_is_unknown_not_zero() {
        let mut priorities = Priorities::default();
        priorities
            .attributes
            .assign(PriorityLevel::Primary, Some(Category::Social));
        let resolver = PoolResolver::new(&priorities);

        assert_eq!(resolver.attribute_pool(Category::Social), Some(7));
        assert_eq!(resolver.attribute_pool(Category::Physical), None);
        assert_eq!(resolver.skill_pool(Category::Social), None);
    }

    #[test]
    fn pool_label_renders_unknown_as_question_mark() {
        assert_eq!(pool_label(Some(9)), "9");
        assert_eq!(pool_label(None), "?");
    }
}
