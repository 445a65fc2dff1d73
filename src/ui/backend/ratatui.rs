use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::{rasterize, CellSink, PaintCmd};
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use std::io;

/// Paints into one ratatui frame.
pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self { frame }
    }
}

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        self.frame.render_widget(PaintWidget { cmds }, area.into());
    }
}

/// Owns the ratatui terminal so callers never name ratatui types.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area: Rect = frame.area().into();
            let mut backend = RatatuiBackend::new(frame);
            f(&mut backend, area);
        })?;
        Ok(())
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for PaintWidget<'_> {
    fn render(self, _area: RRect, buf: &mut Buffer) {
        rasterize(&mut BufferSink(buf), self.cmds);
    }
}

struct BufferSink<'a>(&'a mut Buffer);

impl CellSink for BufferSink<'_> {
    fn area(&self) -> Rect {
        self.0.area.into()
    }

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        let Some(cell) = self.0.cell_mut((x, y)) else {
            return;
        };
        let mut chars = symbol.chars();
        let cell = match (chars.next(), chars.next()) {
            (Some(ch), None) => cell.set_char(ch),
            _ => cell.set_symbol(symbol),
        };
        cell.set_style(to_ratatui_style(style));
    }

    fn restyle(&mut self, x: u16, y: u16, style: Style) {
        if let Some(cell) = self.0.cell_mut((x, y)) {
            cell.set_style(to_ratatui_style(style));
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out.add_modifier(to_ratatui_mods(s.mods))
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    let mut out = RModifier::empty();
    if m.contains(Mod::BOLD) {
        out |= RModifier::BOLD;
    }
    if m.contains(Mod::DIM) {
        out |= RModifier::DIM;
    }
    if m.contains(Mod::REVERSE) {
        out |= RModifier::REVERSED;
    }
    out
}
