use crate::ui::core::geom::Rect;

/// Horizontal extent of the split container, in host units (cells for a terminal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    pub left: f32,
    pub width: f32,
}

impl Container {
    pub const fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Left-pane width in percent for a pointer at `pointer_x`, unclamped.
    ///
    /// Returns `None` for degenerate geometry (non-positive or non-finite width) so callers can
    /// keep the last valid width instead of storing NaN/inf.
    pub fn percent_at(&self, pointer_x: f32) -> Option<f32> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return None;
        }
        let percent = (pointer_x - self.left) * 100.0 / self.width;
        percent.is_finite().then_some(percent)
    }
}

impl From<Rect> for Container {
    fn from(area: Rect) -> Self {
        Self::new(area.x as f32, area.w as f32)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/split/geometry.rs"]
mod tests;
