use serde::{Deserialize, Serialize};

pub const DEFAULT_LEFT_WIDTH: f32 = 40.0;
pub const DEFAULT_MIN_LEFT_WIDTH: f32 = 25.0;
pub const DEFAULT_MAX_LEFT_WIDTH: f32 = 60.0;

/// Width bounds of the left pane, in percent of the container width.
///
/// Any subset of the fields may be omitted when deserializing; missing ones take the built-in
/// defaults (40 / 25 / 60). Values are not validated on construction: call [`normalized`] (the
/// split state always does) to get a config that satisfies
/// `0 <= min_left_width <= default_left_width <= max_left_width <= 100`.
///
/// [`normalized`]: SplitConfig::normalized
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SplitConfig {
    pub default_left_width: f32,
    pub min_left_width: f32,
    pub max_left_width: f32,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            default_left_width: DEFAULT_LEFT_WIDTH,
            min_left_width: DEFAULT_MIN_LEFT_WIDTH,
            max_left_width: DEFAULT_MAX_LEFT_WIDTH,
        }
    }
}

impl SplitConfig {
    pub fn new(default_left_width: f32, min_left_width: f32, max_left_width: f32) -> Self {
        Self {
            default_left_width,
            min_left_width,
            max_left_width,
        }
    }

    pub fn with_default_left_width(mut self, percent: f32) -> Self {
        self.default_left_width = percent;
        self
    }

    pub fn with_min_left_width(mut self, percent: f32) -> Self {
        self.min_left_width = percent;
        self
    }

    pub fn with_max_left_width(mut self, percent: f32) -> Self {
        self.max_left_width = percent;
        self
    }

    /// Repair a possibly misconfigured value instead of rejecting it.
    ///
    /// Non-finite fields fall back to their defaults, everything is clamped into `0..=100`,
    /// inverted bounds are swapped and the default width is pulled into the bounds.
    pub fn normalized(self) -> Self {
        let mut min = sanitize(self.min_left_width, DEFAULT_MIN_LEFT_WIDTH);
        let mut max = sanitize(self.max_left_width, DEFAULT_MAX_LEFT_WIDTH);
        if min > max {
            tracing::warn!(min, max, "split bounds inverted; swapping");
            std::mem::swap(&mut min, &mut max);
        }
        let default = sanitize(self.default_left_width, DEFAULT_LEFT_WIDTH).clamp(min, max);

        Self {
            default_left_width: default,
            min_left_width: min,
            max_left_width: max,
        }
    }

    pub fn is_normalized(&self) -> bool {
        self.min_left_width.is_finite()
            && self.max_left_width.is_finite()
            && self.default_left_width.is_finite()
            && 0.0 <= self.min_left_width
            && self.min_left_width <= self.default_left_width
            && self.default_left_width <= self.max_left_width
            && self.max_left_width <= 100.0
    }

    /// Clamp `percent` into the bounds. Expects a normalized config.
    pub fn clamp(&self, percent: f32) -> f32 {
        percent.clamp(self.min_left_width, self.max_left_width)
    }
}

fn sanitize(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        fallback
    }
}

#[cfg(test)]
#[path = "../../tests/unit/split/config.rs"]
mod tests;
