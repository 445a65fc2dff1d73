//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `split` so the state machine can be embedded without terminal crates.

pub mod crossterm;
pub mod host;
pub mod terminal_guard;
