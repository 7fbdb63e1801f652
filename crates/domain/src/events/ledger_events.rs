//! Ledger-related domain events

/// Outcome of changing a trait rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingChange {
    /// Rating moved to a new value
    Set { from: u8, to: u8 },
    /// Rating was reset to the kind's baseline
    Cleared { from: u8, to: u8 },
    /// Requested value equals the current one
    Unchanged { value: u8 },
}

impl RatingChange {
    /// The rating after the change.
    pub fn value(&self) -> u8 {
        match self {
            Self::Set { to, .. } | Self::Cleared { to, .. } => *to,
            Self::Unchanged { value } => *value,
        }
    }

    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged { .. })
    }
}
