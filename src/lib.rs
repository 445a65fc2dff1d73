//! splitpane - resizable two-pane split layout for terminal UIs
//!
//! Module layout:
//! - core: backend-neutral input events
//! - split: split state machine, drag guard, split view widget
//! - ui: geometry, painting, render backends
//! - settings: persisted split configuration
//! - tui: crossterm terminal integration (feature `tui`)

pub mod core;
pub mod settings;
pub mod split;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
