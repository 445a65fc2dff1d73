//! Split state machine.
//!
//! Two states: `Idle` and `Dragging`. A pointer-down on the divider enters `Dragging`, any
//! pointer-up leaves it. While dragging, every pointer move recomputes the left width from the
//! absolute pointer position, so dropped or reordered intermediate moves cannot cause drift.

use std::fmt;
use std::sync::Arc;

use super::config::SplitConfig;
use super::geometry::Container;
use super::guard::{DragGuard, HeadlessHost, InteractionHost};

#[derive(Debug)]
pub struct DragSession {
    guard: DragGuard,
    origin_percent: f32,
}

impl DragSession {
    /// Left width when the drag started.
    pub fn origin_percent(&self) -> f32 {
        self.origin_percent
    }

    fn finish(self) {
        if let Err(err) = self.guard.release() {
            tracing::warn!(error = %err, "failed to release drag affordances");
        }
    }
}

#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

pub struct SplitState {
    config: SplitConfig,
    left_percent: f32,
    drag: DragState,
    host: Arc<dyn InteractionHost>,
}

impl SplitState {
    pub fn new(config: SplitConfig, host: Arc<dyn InteractionHost>) -> Self {
        let config = config.normalized();
        debug_assert!(config.is_normalized());
        Self {
            config,
            left_percent: config.default_left_width,
            drag: DragState::Idle,
            host,
        }
    }

    /// State backed by a [`HeadlessHost`], for embedders without a global surface.
    pub fn headless(config: SplitConfig) -> Self {
        Self::new(config, Arc::new(HeadlessHost::new()))
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    pub fn left_percent(&self) -> f32 {
        self.left_percent
    }

    pub fn right_percent(&self) -> f32 {
        100.0 - self.left_percent
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// `Idle -> Dragging`. Returns false if a drag is already active.
    pub fn pointer_down_on_divider(&mut self) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        let guard = DragGuard::acquire(self.host.clone());
        self.drag = DragState::Dragging(DragSession {
            guard,
            origin_percent: self.left_percent,
        });
        tracing::debug!(left = self.left_percent, "split drag started");
        true
    }

    /// Recompute the left width from an absolute pointer position. Idle: no effect.
    ///
    /// Degenerate geometry keeps the previous width. Returns whether the width changed.
    pub fn pointer_move(&mut self, pointer_x: f32, container: Container) -> bool {
        if !self.drag.is_dragging() {
            return false;
        }
        let Some(raw) = container.percent_at(pointer_x) else {
            tracing::trace!(?container, "split move ignored: degenerate container");
            return false;
        };
        let next = self.config.clamp(raw);
        tracing::trace!(raw, left = next, "split move");
        self.replace_left(next)
    }

    /// `Dragging -> Idle`, freezing the current width. Returns false if no drag was active.
    pub fn pointer_up(&mut self) -> bool {
        match std::mem::take(&mut self.drag) {
            DragState::Dragging(session) => {
                session.finish();
                tracing::debug!(left = self.left_percent, "split drag ended");
                true
            }
            DragState::Idle => false,
        }
    }

    /// `Dragging -> Idle`, restoring the width the drag started from.
    pub fn cancel_drag(&mut self) -> bool {
        match std::mem::take(&mut self.drag) {
            DragState::Dragging(session) => {
                self.left_percent = session.origin_percent();
                session.finish();
                tracing::debug!(left = self.left_percent, "split drag canceled");
                true
            }
            DragState::Idle => false,
        }
    }

    /// Force `Idle`, releasing anything a drag still holds. Also runs on drop.
    pub fn teardown(&mut self) {
        if let DragState::Dragging(session) = std::mem::take(&mut self.drag) {
            tracing::debug!(left = self.left_percent, "split torn down while dragging");
            session.finish();
        }
    }

    /// Keyboard resize. Ignored while dragging so the pointer stays authoritative.
    pub fn nudge(&mut self, delta: f32) -> bool {
        if self.drag.is_dragging() || !delta.is_finite() {
            return false;
        }
        self.replace_left(self.config.clamp(self.left_percent + delta))
    }

    /// Back to the configured default width. Ignored while dragging.
    pub fn reset(&mut self) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        self.replace_left(self.config.default_left_width)
    }

    pub fn set_left_percent(&mut self, percent: f32) -> bool {
        if !percent.is_finite() {
            return false;
        }
        self.replace_left(self.config.clamp(percent))
    }

    fn replace_left(&mut self, next: f32) -> bool {
        if next == self.left_percent {
            return false;
        }
        self.left_percent = next;
        true
    }
}

impl Drop for SplitState {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for SplitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitState")
            .field("config", &self.config)
            .field("left_percent", &self.left_percent)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/split/state.rs"]
mod tests;
