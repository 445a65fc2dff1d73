use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Color, Mod, Style};
use crate::ui::view::{EventResult, PaneSide, Region};

use super::geometry::Container;
use super::state::SplitState;

pub const DEFAULT_KEYBOARD_STEP: f32 = 5.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitAreas {
    pub left: Rect,
    pub divider: Rect,
    pub right: Rect,
}

/// Lay out `area` for a left pane of `left_percent`.
///
/// The left pane gets `round(w * left_percent / 100)` columns, the divider the next column and
/// the right pane the rest, so the three widths always add up to `area.w`.
pub fn split_areas(area: Rect, left_percent: f32) -> SplitAreas {
    if area.w == 0 {
        let empty = Rect::new(area.x, area.y, 0, area.h);
        return SplitAreas {
            left: empty,
            divider: empty,
            right: empty,
        };
    }

    let max_left = area.w - 1;
    let left_w = if left_percent.is_finite() {
        (area.w as f32 * left_percent / 100.0).round().clamp(0.0, max_left as f32) as u16
    } else {
        0
    };
    let (left, rest) = area.split_left(left_w);
    let (divider, right) = rest.split_left(1);
    SplitAreas {
        left,
        divider,
        right,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitTheme {
    pub divider: Style,
    pub divider_active: Style,
    pub divider_char: char,
    pub divider_active_char: char,
}

impl Default for SplitTheme {
    fn default() -> Self {
        Self {
            divider: Style::default().fg(Color::Indexed(8)),
            divider_active: Style::default().fg(Color::Indexed(14)).add_mod(Mod::BOLD),
            divider_char: '│',
            divider_active_char: '┃',
        }
    }
}

/// Two regions side by side with a draggable divider between them.
///
/// Mouse routing: a left press on the divider starts a drag; while dragging every mouse event is
/// captured by the split, moves anywhere on screen resize and any release ends the drag. Outside
/// a drag, mouse events go to the region under the pointer (or the region that saw the press) and
/// keys go to the focused region.
pub struct SplitView<L, R> {
    state: SplitState,
    left: L,
    right: R,
    focus: PaneSide,
    pointer_owner: Option<PaneSide>,
    keyboard_step: f32,
    theme: SplitTheme,
    last_area: Option<Rect>,
}

impl<L: Region, R: Region> SplitView<L, R> {
    pub fn new(left: L, right: R, state: SplitState) -> Self {
        Self {
            state,
            left,
            right,
            focus: PaneSide::Left,
            pointer_owner: None,
            keyboard_step: DEFAULT_KEYBOARD_STEP,
            theme: SplitTheme::default(),
            last_area: None,
        }
    }

    pub fn with_keyboard_step(mut self, step: f32) -> Self {
        if step.is_finite() && step > 0.0 {
            self.keyboard_step = step;
        }
        self
    }

    pub fn with_theme(mut self, theme: SplitTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn state(&self) -> &SplitState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SplitState {
        &mut self.state
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn left_mut(&mut self) -> &mut L {
        &mut self.left
    }

    pub fn right_mut(&mut self) -> &mut R {
        &mut self.right
    }

    pub fn focus(&self) -> PaneSide {
        self.focus
    }

    pub fn set_focus(&mut self, side: PaneSide) {
        self.focus = side;
    }

    pub fn keyboard_step(&self) -> f32 {
        self.keyboard_step
    }

    /// Container area from the most recent paint.
    pub fn last_area(&self) -> Option<Rect> {
        self.last_area
    }

    pub fn areas(&self) -> Option<SplitAreas> {
        self.last_area
            .map(|area| split_areas(area, self.state.left_percent()))
    }

    pub fn paint(&mut self, painter: &mut Painter, area: Rect) {
        self.last_area = Some(area);
        let areas = split_areas(area, self.state.left_percent());

        self.left
            .paint(painter, areas.left, self.focus == PaneSide::Left);
        self.right
            .paint(painter, areas.right, self.focus == PaneSide::Right);

        if areas.divider.is_empty() {
            return;
        }
        let (ch, style) = if self.state.is_dragging() {
            (self.theme.divider_active_char, self.theme.divider_active)
        } else {
            (self.theme.divider_char, self.theme.divider)
        };
        painter.vline(
            Pos::new(areas.divider.x, areas.divider.y),
            areas.divider.h,
            ch,
            style,
        );
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Mouse(me) => self.handle_mouse(event, me),
            InputEvent::Key(key) => self.handle_key(event, key),
            InputEvent::FocusLost => {
                // The release may never be reported once the terminal loses focus.
                if self.state.pointer_up() {
                    return EventResult::Consumed;
                }
                EventResult::Ignored
            }
            _ => EventResult::Ignored,
        }
    }

    /// Release a drag in progress. Also happens when the view is dropped.
    pub fn teardown(&mut self) {
        self.pointer_owner = None;
        self.state.teardown();
    }

    fn handle_mouse(&mut self, event: &InputEvent, me: &MouseEvent) -> EventResult {
        if self.state.is_dragging() {
            match me.kind {
                MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                    if let Some(area) = self.last_area {
                        self.state
                            .pointer_move(me.column as f32, Container::from(area));
                    }
                }
                MouseEventKind::Up(_) => {
                    self.state.pointer_up();
                }
                _ => {}
            }
            return EventResult::Consumed;
        }

        let Some(areas) = self.areas() else {
            return EventResult::Ignored;
        };
        let pos = Pos::new(me.column, me.row);

        if me.kind == MouseEventKind::Down(MouseButton::Left) && areas.divider.contains(pos) {
            self.pointer_owner = None;
            self.state.pointer_down_on_divider();
            return EventResult::Consumed;
        }

        let target = match (me.kind, self.pointer_owner) {
            (MouseEventKind::Drag(_) | MouseEventKind::Up(_), Some(owner)) => Some(owner),
            _ => side_at(&areas, pos),
        };
        match me.kind {
            MouseEventKind::Down(_) => {
                self.pointer_owner = target;
                if let Some(side) = target {
                    self.focus = side;
                }
            }
            MouseEventKind::Up(_) => self.pointer_owner = None,
            _ => {}
        }

        match target {
            Some(PaneSide::Left) => self.left.handle_input(event, areas.left),
            Some(PaneSide::Right) => self.right.handle_input(event, areas.right),
            None => EventResult::Ignored,
        }
    }

    fn handle_key(&mut self, event: &InputEvent, key: &KeyEvent) -> EventResult {
        if !key.is_press() {
            return EventResult::Ignored;
        }

        if self.state.is_dragging() {
            if key.code == KeyCode::Esc {
                self.state.cancel_drag();
            }
            return EventResult::Consumed;
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Left => {
                    self.state.nudge(-self.keyboard_step);
                    return EventResult::Consumed;
                }
                KeyCode::Right => {
                    self.state.nudge(self.keyboard_step);
                    return EventResult::Consumed;
                }
                KeyCode::Char('0') => {
                    self.state.reset();
                    return EventResult::Consumed;
                }
                _ => {}
            }
        }

        let areas = self.areas().unwrap_or_default();
        let result = match self.focus {
            PaneSide::Left => self.left.handle_input(event, areas.left),
            PaneSide::Right => self.right.handle_input(event, areas.right),
        };
        if result.is_ignored() && key.code == KeyCode::Tab {
            self.focus = self.focus.other();
            return EventResult::Consumed;
        }
        result
    }
}

fn side_at(areas: &SplitAreas, pos: Pos) -> Option<PaneSide> {
    if areas.left.contains(pos) {
        Some(PaneSide::Left)
    } else if areas.right.contains(pos) {
        Some(PaneSide::Right)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/split/view.rs"]
mod tests;
