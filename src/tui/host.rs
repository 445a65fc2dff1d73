//! Terminal-backed [`InteractionHost`].
//!
//! - pointer listeners: any-motion mouse reporting (`CSI ?1003h`), so moves keep arriving after
//!   the pointer leaves the divider, with or without a held button
//! - cursor: OSC 22 pointer shape, wrapped for tmux passthrough
//! - selection: the shared [`SelectionGate`] consulted by selectable regions

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use crate::split::guard::{CursorIcon, InteractionHost, SelectionGate};

/// Press/release + drag reporting with SGR coordinates.
pub const BUTTON_TRACKING_ON: &str = "\x1b[?1000h\x1b[?1002h\x1b[?1006h";
pub const BUTTON_TRACKING_OFF: &str = "\x1b[?1006l\x1b[?1002l\x1b[?1000l";
pub const ANY_MOTION_ON: &str = "\x1b[?1003h";
pub const ANY_MOTION_OFF: &str = "\x1b[?1003l";
/// Terminals keep a single tracking mode and resetting 1003 turns all of it off, so ending
/// any-motion reporting has to re-select drag tracking.
pub const ANY_MOTION_TO_BUTTON: &str = "\x1b[?1003l\x1b[?1002h";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermEnv {
    pub is_tmux: bool,
}

impl TermEnv {
    pub fn detect() -> Self {
        Self {
            is_tmux: std::env::var_os("TMUX").is_some(),
        }
    }
}

/// OSC 22 sequence selecting a pointer shape by CSS name.
pub fn pointer_shape_sequence(cursor: CursorIcon, env: TermEnv) -> String {
    let name = cursor.css_name();
    if env.is_tmux {
        // tmux passthrough: DCS-wrapped, inner ESC doubled.
        format!("\x1bPtmux;\x1b\x1b]22;{name}\x07\x1b\\")
    } else {
        format!("\x1b]22;{name}\x1b\\")
    }
}

pub struct TerminalHost {
    out: Mutex<Box<dyn Write + Send>>,
    env: TermEnv,
    selection: SelectionGate,
}

impl TerminalHost {
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(io::stdout()), TermEnv::detect())
    }

    pub fn with_writer(out: Box<dyn Write + Send>, env: TermEnv) -> Self {
        Self {
            out: Mutex::new(out),
            env,
            selection: SelectionGate::new(),
        }
    }

    pub fn selection_gate(&self) -> SelectionGate {
        self.selection.clone()
    }

    fn out(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn emit(&self, seq: &str) -> io::Result<()> {
        let mut out = self.out();
        out.write_all(seq.as_bytes())?;
        out.flush()
    }
}

impl InteractionHost for TerminalHost {
    fn listen_pointer(&self) -> io::Result<()> {
        self.emit(ANY_MOTION_ON)
    }

    fn unlisten_pointer(&self) -> io::Result<()> {
        self.emit(ANY_MOTION_TO_BUTTON)
    }

    fn set_cursor(&self, cursor: CursorIcon) -> io::Result<()> {
        self.emit(&pointer_shape_sequence(cursor, self.env))
    }

    fn set_selection_enabled(&self, enabled: bool) -> io::Result<()> {
        self.selection.set_enabled(enabled);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/host.rs"]
mod tests;
