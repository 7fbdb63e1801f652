//! Domain events
//!
//! Outcome enums returned from aggregate mutations so callers can react
//! (re-render, autosave) without diffing state themselves.

mod ledger_events;

pub use ledger_events::RatingChange;
