//! Console render sink for the CLI.

use chrono::{DateTime, Utc};

use codex_domain::{pool_label, Target, ValidationResult, WizardStep};
use codex_shared::RejectionFeedback;

use crate::ports::outbound::{Notification, NotificationLevel, PoolSummary, RenderSink};

/// Prints notifications to stderr and, when verbose, every re-render to stdout.
pub struct ConsoleRenderSink {
    verbose: bool,
    restore_drafts: bool,
}

impl ConsoleRenderSink {
    pub fn new(verbose: bool, restore_drafts: bool) -> Self {
        Self {
            verbose,
            restore_drafts,
        }
    }
}

/// One line per budget group, e.g. `[ok] Physical Attributes: 7 / 7`.
pub fn validation_lines(result: &ValidationResult) -> Vec<String> {
    result
        .groups()
        .iter()
        .map(|status| {
            let mark = if status.is_satisfied() { "ok" } else { "!!" };
            let target = match status.target {
                Target::Exact(n) => n.to_string(),
                Target::Ceiling(n) => format!("<= {}", n),
                Target::Unknown => "?".to_string(),
            };
            format!("[{}] {}: {} / {}", mark, status.group, status.spent, target)
        })
        .collect()
}

pub fn pool_lines(pools: &PoolSummary) -> Vec<String> {
    let row = |title: &str, entries: &[(codex_domain::Category, Option<u8>)]| {
        let cells: Vec<String> = entries
            .iter()
            .map(|(category, pool)| format!("{} {}", category.display_name(), pool_label(*pool)))
            .collect();
        format!("{} pools: {}", title, cells.join(", "))
    };
    vec![row("Attribute", &pools.attributes), row("Skill", &pools.skills)]
}

pub fn completion_line(progress: &[(WizardStep, bool)]) -> String {
    progress
        .iter()
        .map(|(step, done)| format!("{}{}", step.numeral(), if *done { "+" } else { "-" }))
        .collect::<Vec<_>>()
        .join(" ")
}

impl RenderSink for ConsoleRenderSink {
    fn render_validation(&self, result: &ValidationResult) {
        if self.verbose {
            for line in validation_lines(result) {
                println!("{}", line);
            }
        }
    }

    fn render_pools(&self, pools: &PoolSummary) {
        if self.verbose {
            for line in pool_lines(pools) {
                println!("{}", line);
            }
        }
    }

    fn render_completion(&self, progress: &[(WizardStep, bool)]) {
        if self.verbose {
            println!("Steps: {}", completion_line(progress));
        }
    }

    fn notify(&self, notification: Notification) {
        let prefix = match notification.level {
            NotificationLevel::Success => "OK",
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
        };
        eprintln!("[{}] {}", prefix, notification.message);
    }

    fn show_rejection(&self, feedback: &RejectionFeedback) {
        eprintln!(
            "This character was rejected ({} time{}). Staff notes:",
            feedback.count,
            if feedback.count == 1 { "" } else { "s" }
        );
        eprintln!("  {}", feedback.notes);
    }

    fn confirm_restore(&self, saved_at: DateTime<Utc>) -> bool {
        eprintln!(
            "Found a draft saved {}; {}",
            saved_at.format("%Y-%m-%d %H:%M UTC"),
            if self.restore_drafts { "restoring" } else { "ignoring" }
        );
        self.restore_drafts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_domain::{BudgetValidator, Category, Priorities, PriorityLevel, TraitLedger};

    #[test]
    fn validation_lines_mark_each_group() {
        let mut priorities = Priorities::default();
        priorities
            .attributes
            .assign(PriorityLevel::Tertiary, Some(Category::Mental));
        let result = BudgetValidator::validate(&TraitLedger::new(), &priorities, None);

        let lines = validation_lines(&result);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "[!!] Physical Attributes: 0 / ?");
        assert_eq!(lines[2], "[!!] Mental Attributes: 0 / 3");
        assert_eq!(lines[8], "[ok] Flaws: 0 / <= 2");
    }

    #[test]
    fn pools_show_unknown_as_question_mark() {
        let mut priorities = Priorities::default();
        priorities
            .skills
            .assign(PriorityLevel::Primary, Some(Category::Social));
        let summary = PoolSummary::resolve(&codex_domain::PoolResolver::new(&priorities));

        assert_eq!(
            pool_lines(&summary),
            vec![
                "Attribute pools: Physical ?, Social ?, Mental ?",
                "Skill pools: Physical ?, Social 13, Mental ?",
            ]
        );
    }

    #[test]
    fn completion_line_uses_numerals() {
        let progress = [(WizardStep::Identity, true), (WizardStep::Attributes, false)];
        assert_eq!(completion_line(&progress), "I+ II-");
    }
}
