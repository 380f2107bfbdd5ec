//! Interactive translation mode.
//!
//! Provides a REPL-style interface with backslash commands for
//! configuration changes and history inspection.

/// Backslash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{ChatSession, SessionEnd};
