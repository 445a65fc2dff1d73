//! Scoped ownership of the global interaction affordances a drag needs.
//!
//! While the divider is being dragged the split claims three pieces of global state on its host:
//! pointer listeners that see moves/releases anywhere on the surface, a resize pointer shape and a
//! suppressed text selection. [`DragGuard`] claims them on construction and gives them back exactly
//! once, on explicit release or on drop, whichever comes first.

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    ColResize,
}

impl CursorIcon {
    /// CSS cursor name, also understood by terminals implementing OSC 22.
    pub fn css_name(self) -> &'static str {
        match self {
            CursorIcon::Default => "default",
            CursorIcon::ColResize => "ew-resize",
        }
    }
}

/// The global surface a split lives on (a terminal, a browser document, a test double).
pub trait InteractionHost: Send + Sync + 'static {
    fn listen_pointer(&self) -> io::Result<()>;
    fn unlisten_pointer(&self) -> io::Result<()>;
    fn set_cursor(&self, cursor: CursorIcon) -> io::Result<()>;
    fn set_selection_enabled(&self, enabled: bool) -> io::Result<()>;
}

/// Shared "may regions start a text selection" flag.
///
/// Hosts flip it; selectable regions read it before starting a selection.
#[derive(Debug, Clone)]
pub struct SelectionGate {
    enabled: Arc<AtomicBool>,
}

impl SelectionGate {
    pub fn new() -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }
}

impl Default for SelectionGate {
    fn default() -> Self {
        Self::new()
    }
}

pub struct DragGuard {
    host: Arc<dyn InteractionHost>,
    released: bool,
}

impl DragGuard {
    /// Claim pointer listeners, the resize cursor and selection suppression on `host`.
    ///
    /// A failing step is logged and skipped; the drag still proceeds and release still undoes
    /// every step.
    pub fn acquire(host: Arc<dyn InteractionHost>) -> Self {
        if let Err(err) = host.listen_pointer() {
            tracing::warn!(error = %err, "failed to register pointer listeners");
        }
        if let Err(err) = host.set_cursor(CursorIcon::ColResize) {
            tracing::warn!(error = %err, "failed to set resize cursor");
        }
        if let Err(err) = host.set_selection_enabled(false) {
            tracing::warn!(error = %err, "failed to suppress text selection");
        }

        Self {
            host,
            released: false,
        }
    }

    pub fn release(mut self) -> io::Result<()> {
        self.release_claims()
    }

    /// Only the first call does any work.
    fn release_claims(&mut self) -> io::Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;

        // Best-effort: undo every claim even if one step fails.
        let mut first_err: Option<io::Error> = None;

        if let Err(err) = self.host.set_selection_enabled(true) {
            first_err.get_or_insert(err);
        }
        if let Err(err) = self.host.set_cursor(CursorIcon::Default) {
            first_err.get_or_insert(err);
        }
        if let Err(err) = self.host.unlisten_pointer() {
            first_err.get_or_insert(err);
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for DragGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragGuard")
            .field("released", &self.released)
            .finish_non_exhaustive()
    }
}

impl Drop for DragGuard {
    fn drop(&mut self) {
        if let Err(err) = self.release_claims() {
            tracing::warn!(error = %err, "failed to release drag affordances");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    ListenPointer,
    UnlistenPointer,
    SetCursor(CursorIcon),
    SetSelectionEnabled(bool),
}

#[derive(Debug)]
struct HeadlessState {
    listeners: usize,
    cursor: CursorIcon,
    calls: Vec<HostCall>,
}

/// In-memory host for tests and for embedders without a real surface.
///
/// Tracks the global state a drag may leave behind and records every call. A failing host records
/// the call but neither mutates state nor succeeds.
#[derive(Debug)]
pub struct HeadlessHost {
    state: Mutex<HeadlessState>,
    selection: SelectionGate,
    failing: bool,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(HeadlessState {
                listeners: 0,
                cursor: CursorIcon::Default,
                calls: Vec::new(),
            }),
            selection: SelectionGate::new(),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn selection_gate(&self) -> SelectionGate {
        self.selection.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners
    }

    pub fn cursor(&self) -> CursorIcon {
        self.lock().cursor
    }

    pub fn selection_enabled(&self) -> bool {
        self.selection.is_enabled()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.lock().calls.clone()
    }

    /// No listeners registered, default cursor, selection allowed.
    pub fn is_pristine(&self) -> bool {
        let state = self.lock();
        state.listeners == 0 && state.cursor == CursorIcon::Default && self.selection.is_enabled()
    }

    fn lock(&self) -> MutexGuard<'_, HeadlessState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn apply(&self, call: HostCall) -> io::Result<()> {
        let mut state = self.lock();
        state.calls.push(call);
        if self.failing {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "headless host configured to fail",
            ));
        }
        match call {
            HostCall::ListenPointer => state.listeners += 1,
            HostCall::UnlistenPointer => state.listeners = state.listeners.saturating_sub(1),
            HostCall::SetCursor(cursor) => state.cursor = cursor,
            HostCall::SetSelectionEnabled(enabled) => self.selection.set_enabled(enabled),
        }
        Ok(())
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionHost for HeadlessHost {
    fn listen_pointer(&self) -> io::Result<()> {
        self.apply(HostCall::ListenPointer)
    }

    fn unlisten_pointer(&self) -> io::Result<()> {
        self.apply(HostCall::UnlistenPointer)
    }

    fn set_cursor(&self, cursor: CursorIcon) -> io::Result<()> {
        self.apply(HostCall::SetCursor(cursor))
    }

    fn set_selection_enabled(&self, enabled: bool) -> io::Result<()> {
        self.apply(HostCall::SetSelectionEnabled(enabled))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/split/guard.rs"]
mod tests;
