//! Player port definitions.
//!
//! Outbound only: the wizard drives the approval service, draft storage,
//! the clock and the render sink through these traits.

pub mod outbound;
