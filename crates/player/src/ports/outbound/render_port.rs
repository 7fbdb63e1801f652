//! Render Sink Port - everything the wizard shows the user.
//!
//! The session calls this with plain data after every change. Implementations
//! decide how to present it; the core never looks anything up by identifier.

use chrono::{DateTime, Utc};

use codex_domain::{Category, PoolResolver, ValidationResult, WizardStep};
use codex_shared::RejectionFeedback;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Resolved pools per category; `None` when no priority claims the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSummary {
    pub attributes: [(Category, Option<u8>); 3],
    pub skills: [(Category, Option<u8>); 3],
}

impl PoolSummary {
    pub fn resolve(pools: &PoolResolver<'_>) -> Self {
        Self {
            attributes: Category::ALL.map(|c| (c, pools.attribute_pool(c))),
            skills: Category::ALL.map(|c| (c, pools.skill_pool(c))),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait RenderSink: Send + Sync {
    fn render_validation(&self, result: &ValidationResult);

    fn render_pools(&self, pools: &PoolSummary);

    fn render_completion(&self, progress: &[(WizardStep, bool)]);

    fn notify(&self, notification: Notification);

    fn show_rejection(&self, feedback: &RejectionFeedback);

    /// Ask whether to restore a draft saved at `saved_at`.
    fn confirm_restore(&self, saved_at: DateTime<Utc>) -> bool;
}
