use crate::core::event::{InputEvent, KeyCode, MouseButton, MouseEventKind};
use crate::split::guard::SelectionGate;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, Painter};
use crate::ui::core::style::{Color, Mod, Style};
use crate::ui::view::{EventResult, Region};

#[derive(Clone, Copy, Debug)]
pub struct TextPaneStyles {
    pub base: Style,
    pub border: Style,
    pub border_focused: Style,
    pub title: Style,
    pub selected: Style,
}

impl Default for TextPaneStyles {
    fn default() -> Self {
        Self {
            base: Style::default(),
            border: Style::default().fg(Color::Indexed(8)),
            border_focused: Style::default().fg(Color::Indexed(12)),
            title: Style::default().add_mod(Mod::BOLD),
            selected: Style::default().add_mod(Mod::REVERSE),
        }
    }
}

/// Bordered, scrollable list of lines with mouse line selection.
///
/// Selection only starts while the shared [`SelectionGate`] is open, so a host can suppress it
/// for the duration of a divider drag.
#[derive(Debug)]
pub struct TextPane {
    title: String,
    lines: Vec<String>,
    scroll: usize,
    anchor: Option<usize>,
    head: usize,
    selecting: bool,
    gate: SelectionGate,
    styles: TextPaneStyles,
}

impl TextPane {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
            scroll: 0,
            anchor: None,
            head: 0,
            selecting: false,
            gate: SelectionGate::new(),
            styles: TextPaneStyles::default(),
        }
    }

    pub fn with_selection_gate(mut self, gate: SelectionGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn with_styles(mut self, styles: TextPaneStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.scroll = self.scroll.min(self.lines.len().saturating_sub(1));
        self.clear_selection();
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Selected line range, inclusive and ordered.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        Some((anchor.min(self.head), anchor.max(self.head)))
    }

    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.selection()?;
        let end = end.min(self.lines.len().checked_sub(1)?);
        Some(self.lines.get(start..=end)?.join("\n"))
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
        self.selecting = false;
    }

    fn content(area: Rect) -> Rect {
        area.shrink(1)
    }

    fn line_at(&self, content: Rect, row: u16) -> Option<usize> {
        if self.lines.is_empty() || content.is_empty() {
            return None;
        }
        let rel = row.clamp(content.y, content.bottom() - 1) - content.y;
        Some((self.scroll + rel as usize).min(self.lines.len() - 1))
    }

    fn scroll_by(&mut self, delta: isize, content: Rect) {
        let max = self.lines.len().saturating_sub(content.h as usize);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }
}

impl Region for TextPane {
    fn paint(&mut self, painter: &mut Painter, area: Rect, focused: bool) {
        if area.is_empty() {
            return;
        }
        painter.fill_rect(area, self.styles.base);
        let (border, kind) = if focused {
            (self.styles.border_focused, BorderKind::Thick)
        } else {
            (self.styles.border, BorderKind::Plain)
        };
        painter.border(area, border, kind);

        if area.w > 4 {
            let title_clip = Rect::new(area.x + 2, area.y, area.w - 4, 1);
            painter.text_clipped(
                Pos::new(title_clip.x, area.y),
                format!(" {} ", self.title),
                self.styles.title,
                title_clip,
            );
        }

        let content = Self::content(area);
        if content.is_empty() {
            return;
        }
        let selection = self.selection();
        for (row, (idx, line)) in self
            .lines
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(content.h as usize)
            .enumerate()
        {
            let y = content.y + row as u16;
            painter.text_clipped(Pos::new(content.x, y), line.as_str(), self.styles.base, content);
            if selection.is_some_and(|(start, end)| (start..=end).contains(&idx)) {
                painter.style_rect(
                    Rect::new(content.x, y, content.w, 1),
                    self.styles.base.patch(self.styles.selected),
                );
            }
        }
    }

    fn handle_input(&mut self, event: &InputEvent, area: Rect) -> EventResult {
        let content = Self::content(area);
        match event {
            InputEvent::Mouse(me) => match me.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if !self.gate.is_enabled() || !content.contains(Pos::new(me.column, me.row)) {
                        self.clear_selection();
                        return EventResult::Consumed;
                    }
                    match self.line_at(content, me.row) {
                        Some(line) => {
                            self.anchor = Some(line);
                            self.head = line;
                            self.selecting = true;
                        }
                        None => self.clear_selection(),
                    }
                    EventResult::Consumed
                }
                MouseEventKind::Drag(MouseButton::Left) if self.selecting => {
                    if me.row < content.y {
                        self.scroll_by(-1, content);
                    } else if me.row >= content.bottom() {
                        self.scroll_by(1, content);
                    }
                    if let Some(line) = self.line_at(content, me.row) {
                        self.head = line;
                    }
                    EventResult::Consumed
                }
                MouseEventKind::Up(MouseButton::Left) if self.selecting => {
                    self.selecting = false;
                    EventResult::Consumed
                }
                MouseEventKind::ScrollDown => {
                    self.scroll_by(1, content);
                    EventResult::Consumed
                }
                MouseEventKind::ScrollUp => {
                    self.scroll_by(-1, content);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            },
            InputEvent::Key(key) if key.is_press() => match key.code {
                KeyCode::Down => {
                    self.scroll_by(1, content);
                    EventResult::Consumed
                }
                KeyCode::Up => {
                    self.scroll_by(-1, content);
                    EventResult::Consumed
                }
                KeyCode::PageDown => {
                    self.scroll_by(content.h as isize, content);
                    EventResult::Consumed
                }
                KeyCode::PageUp => {
                    self.scroll_by(-(content.h as isize), content);
                    EventResult::Consumed
                }
                KeyCode::Esc if self.anchor.is_some() => {
                    self.clear_selection();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/text_pane.rs"]
mod tests;
