//! Codex Player - the character-creation wizard client.
//!
//! Application logic drives the domain build through outbound ports; the
//! infrastructure module provides the HTTP, file, clock and console adapters
//! used by the CLI binary.

pub mod application;
pub mod infrastructure;
pub mod ports;
