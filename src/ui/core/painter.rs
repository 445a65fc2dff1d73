use super::geom::{Pos, Rect};
use super::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderKind {
    Plain,
    Thick,
}

impl BorderKind {
    /// (top-left, top-right, bottom-left, bottom-right, horizontal, vertical)
    fn glyphs(self) -> (char, char, char, char, char, char) {
        match self {
            BorderKind::Plain => ('┌', '┐', '└', '┘', '─', '│'),
            BorderKind::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    FillRect { rect: Rect, style: Style },
    /// Restyle existing cells without touching their symbols.
    StyleRect { rect: Rect, style: Style },
    VLine {
        pos: Pos,
        len: u16,
        ch: char,
        style: Style,
    },
    Text {
        pos: Pos,
        text: String,
        style: Style,
        clip: Option<Rect>,
    },
    Border {
        rect: Rect,
        style: Style,
        kind: BorderKind,
    },
}

#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        self.cmds.push(PaintCmd::FillRect { rect, style });
    }

    pub fn style_rect(&mut self, rect: Rect, style: Style) {
        self.cmds.push(PaintCmd::StyleRect { rect, style });
    }

    pub fn vline(&mut self, pos: Pos, len: u16, ch: char, style: Style) {
        self.cmds.push(PaintCmd::VLine { pos, len, ch, style });
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
            clip: None,
        });
    }

    pub fn text_clipped(&mut self, pos: Pos, text: impl Into<String>, style: Style, clip: Rect) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
            clip: Some(clip),
        });
    }

    pub fn border(&mut self, rect: Rect, style: Style, kind: BorderKind) {
        self.cmds.push(PaintCmd::Border { rect, style, kind });
    }
}

/// A cell grid that paint commands can be rasterized into.
///
/// Both the headless test backend and the ratatui backend implement this, so clipping and
/// wide-glyph rules live in one place.
pub trait CellSink {
    fn area(&self) -> Rect;

    /// Write `symbol` into the cell at `(x, y)`. Out-of-area writes are ignored.
    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style);

    fn restyle(&mut self, x: u16, y: u16, style: Style);
}

pub fn rasterize<S: CellSink + ?Sized>(sink: &mut S, cmds: &[PaintCmd]) {
    for cmd in cmds {
        match cmd {
            PaintCmd::FillRect { rect, style } => {
                for_each_cell(sink, *rect, |sink, x, y| sink.put(x, y, " ", *style))
            }
            PaintCmd::StyleRect { rect, style } => {
                for_each_cell(sink, *rect, |sink, x, y| sink.restyle(x, y, *style))
            }
            PaintCmd::VLine { pos, len, ch, style } => {
                let mut buf = [0u8; 4];
                let symbol = ch.encode_utf8(&mut buf);
                for_each_cell(sink, Rect::new(pos.x, pos.y, 1, *len), |sink, x, y| {
                    sink.put(x, y, symbol, *style)
                })
            }
            PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            } => draw_text(sink, *pos, text, *style, *clip),
            PaintCmd::Border { rect, style, kind } => draw_border(sink, *rect, *style, *kind),
        }
    }
}

fn for_each_cell<S: CellSink + ?Sized>(
    sink: &mut S,
    rect: Rect,
    mut f: impl FnMut(&mut S, u16, u16),
) {
    let clip = rect.intersect(sink.area());
    if clip.is_empty() {
        return;
    }
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            f(sink, x, y);
        }
    }
}

fn draw_text<S: CellSink + ?Sized>(
    sink: &mut S,
    pos: Pos,
    text: &str,
    style: Style,
    clip: Option<Rect>,
) {
    let clip = clip.unwrap_or_else(|| sink.area()).intersect(sink.area());
    if clip.is_empty() || pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }

    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x >= clip.right() {
            break;
        }
        // Never render half of a wide glyph.
        if w > 1 && x.saturating_add(w - 1) >= clip.right() {
            break;
        }
        if x >= clip.x {
            sink.put(x, pos.y, g, style);
            for dx in 1..w {
                sink.put(x.saturating_add(dx), pos.y, " ", style);
            }
        }
        x = x.saturating_add(w);
    }
}

fn draw_border<S: CellSink + ?Sized>(sink: &mut S, rect: Rect, style: Style, kind: BorderKind) {
    let rect = rect.intersect(sink.area());
    if rect.w < 2 || rect.h < 2 {
        return;
    }

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    let (tl, tr, bl, br, h, v) = kind.glyphs();
    let mut buf = [0u8; 4];

    sink.put(rect.x, rect.y, tl.encode_utf8(&mut buf), style);
    sink.put(right, rect.y, tr.encode_utf8(&mut buf), style);
    sink.put(rect.x, bottom, bl.encode_utf8(&mut buf), style);
    sink.put(right, bottom, br.encode_utf8(&mut buf), style);

    let h = h.encode_utf8(&mut buf).to_string();
    for x in rect.x + 1..right {
        sink.put(x, rect.y, &h, style);
        sink.put(x, bottom, &h, style);
    }
    let v = v.encode_utf8(&mut buf).to_string();
    for y in rect.y + 1..bottom {
        sink.put(rect.x, y, &v, style);
        sink.put(right, y, &v, style);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
