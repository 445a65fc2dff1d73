//! Resizable two-pane split.
//!
//! - `config`: width bounds and their normalization
//! - `geometry`: pointer position to width percentage
//! - `guard`: scoped claim of global pointer/cursor/selection state during a drag
//! - `state`: the `Idle`/`Dragging` state machine
//! - `view`: layout, painting and event routing around two regions

pub mod config;
pub mod geometry;
pub mod guard;
pub mod state;
pub mod view;

pub use config::SplitConfig;
pub use geometry::Container;
pub use guard::{CursorIcon, DragGuard, HeadlessHost, InteractionHost, SelectionGate};
pub use state::{DragState, SplitState};
pub use view::{split_areas, SplitAreas, SplitTheme, SplitView};
