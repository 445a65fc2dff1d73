use crate::core::event::InputEvent;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::Painter;

/// An opaque content region hosted by a container widget.
pub trait Region {
    fn paint(&mut self, painter: &mut Painter, area: Rect, focused: bool);

    /// `area` is where the region was last laid out.
    fn handle_input(&mut self, _event: &InputEvent, _area: Rect) -> EventResult {
        EventResult::Ignored
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, EventResult::Ignored)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneSide {
    #[default]
    Left,
    Right,
}

impl PaneSide {
    pub fn other(self) -> Self {
        match self {
            PaneSide::Left => PaneSide::Right,
            PaneSide::Right => PaneSide::Left,
        }
    }
}
