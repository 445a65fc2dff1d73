#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Cell-space rectangle. Right and bottom edges are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, p: Pos) -> bool {
        !self.is_empty() && p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn intersect(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        Rect::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }

    /// Shrink by `n` cells on every side.
    pub fn shrink(self, n: u16) -> Rect {
        let twice = n.saturating_mul(2);
        Rect::new(
            self.x.saturating_add(n),
            self.y.saturating_add(n),
            self.w.saturating_sub(twice),
            self.h.saturating_sub(twice),
        )
    }

    /// Split off the leftmost `w` columns (capped to the width).
    pub fn split_left(self, w: u16) -> (Rect, Rect) {
        let left_w = w.min(self.w);
        let left = Rect::new(self.x, self.y, left_w, self.h);
        let rest = Rect::new(
            self.x.saturating_add(left_w),
            self.y,
            self.w - left_w,
            self.h,
        );
        (left, rest)
    }

    /// Split off the bottom `h` rows (capped to the height).
    pub fn split_bottom(self, h: u16) -> (Rect, Rect) {
        let bottom_h = h.min(self.h);
        let rest_h = self.h - bottom_h;
        let rest = Rect::new(self.x, self.y, self.w, rest_h);
        let bottom = Rect::new(self.x, self.y.saturating_add(rest_h), self.w, bottom_h);
        (rest, bottom)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
