//! Rendering backends.
//!
//! Widgets only produce [`PaintCmd`]s; a backend turns them into cells. The terminal backend is
//! only compiled with the `tui` feature so the split core stays usable headless.

use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
