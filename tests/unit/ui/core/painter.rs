use super::*;
use crate::ui::backend::test::TestBuffer;
use crate::ui::core::style::Color;

#[test]
fn painter_collects_commands_and_clears() {
    let mut p = Painter::new();
    assert!(p.cmds().is_empty());

    p.fill_rect(Rect::new(0, 0, 1, 1), Style::default());
    p.style_rect(Rect::new(0, 0, 1, 1), Style::default());
    p.vline(Pos::new(0, 0), 2, '│', Style::default());
    p.text(Pos::new(0, 0), "hi", Style::default());
    p.border(Rect::new(0, 0, 3, 3), Style::default(), BorderKind::Plain);
    assert_eq!(p.cmds().len(), 5);

    p.clear();
    assert!(p.cmds().is_empty());
}

#[test]
fn wide_glyph_is_dropped_when_it_does_not_fit() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 1, 1));
    let mut p = Painter::new();
    p.text(Pos::new(0, 0), "界", Style::default());
    rasterize(&mut buf, p.cmds());
    assert_eq!(buf.cell(0, 0).unwrap().symbol, " ");
}

#[test]
fn wide_glyph_occupies_two_cells() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 3, 1));
    let mut p = Painter::new();
    p.text(Pos::new(0, 0), "界a", Style::default());
    rasterize(&mut buf, p.cmds());
    assert_eq!(buf.row_text(0), "界 a");
}

#[test]
fn text_respects_clip() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 6, 1));
    let mut p = Painter::new();
    p.text_clipped(Pos::new(0, 0), "abcdef", Style::default(), Rect::new(1, 0, 3, 1));
    rasterize(&mut buf, p.cmds());
    assert_eq!(buf.row_text(0), " bcd  ");
}

#[test]
fn style_rect_preserves_symbols() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 2, 1));
    let style = Style::default().fg(Color::Indexed(2));
    let mut p = Painter::new();
    p.text(Pos::new(0, 0), "ab", Style::default());
    p.style_rect(Rect::new(0, 0, 1, 1), style);
    rasterize(&mut buf, p.cmds());

    let cell = buf.cell(0, 0).unwrap();
    assert_eq!(cell.symbol, "a");
    assert_eq!(cell.style, style);
    assert_eq!(buf.cell(1, 0).unwrap().style, Style::default());
}

#[test]
fn vline_and_fill_clip_to_area() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 2, 2));
    let mut p = Painter::new();
    p.text(Pos::new(0, 0), "xy", Style::default());
    p.fill_rect(Rect::new(0, 0, 10, 10), Style::default());
    p.vline(Pos::new(1, 0), 5, '┃', Style::default());
    rasterize(&mut buf, p.cmds());

    assert_eq!(buf.row_text(0), " ┃");
    assert_eq!(buf.row_text(1), " ┃");
}

#[test]
fn thick_border_draws_corners_and_edges() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 3, 3));
    let mut p = Painter::new();
    p.border(Rect::new(0, 0, 3, 3), Style::default(), BorderKind::Thick);
    rasterize(&mut buf, p.cmds());

    assert_eq!(buf.row_text(0), "┏━┓");
    assert_eq!(buf.row_text(1), "┃ ┃");
    assert_eq!(buf.row_text(2), "┗━┛");
}
