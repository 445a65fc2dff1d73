use super::*;
use crate::core::event::{KeyEvent, KeyModifiers, MouseEvent};
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;

const AREA: Rect = Rect::new(0, 0, 12, 5); // content: x 1..11, y 1..4

fn pane(n: usize) -> TextPane {
    TextPane::new("t", (0..n).map(|i| format!("line {i}")).collect())
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> InputEvent {
    InputEvent::Mouse(MouseEvent::new(kind, column, row))
}

#[test]
fn paints_border_title_and_visible_lines() {
    let mut p = pane(5);
    let mut painter = Painter::new();
    p.paint(&mut painter, AREA, false);

    let mut backend = TestBackend::new(12, 5);
    backend.draw(AREA, painter.cmds());
    let buf = backend.buffer();
    assert_eq!(buf.row_text(0), "┌─ t ──────┐");
    assert_eq!(buf.row_text(1), "│line 0    │");
    assert_eq!(buf.row_text(3), "│line 2    │");
    assert_eq!(buf.row_text(4), "└──────────┘");
}

#[test]
fn focused_pane_uses_thick_border() {
    let mut p = pane(1);
    let mut painter = Painter::new();
    p.paint(&mut painter, AREA, true);

    let mut backend = TestBackend::new(12, 5);
    backend.draw(AREA, painter.cmds());
    assert!(backend.buffer().row_text(4).starts_with('┗'));
}

#[test]
fn press_and_drag_selects_lines() {
    let mut p = pane(5);
    p.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 1), AREA);
    p.handle_input(&mouse(MouseEventKind::Drag(MouseButton::Left), 3, 3), AREA);
    p.handle_input(&mouse(MouseEventKind::Up(MouseButton::Left), 3, 3), AREA);

    assert_eq!(p.selection(), Some((0, 2)));
    assert_eq!(p.selected_text().as_deref(), Some("line 0\nline 1\nline 2"));
}

#[test]
fn selection_does_not_start_while_gate_is_closed() {
    let gate = SelectionGate::new();
    let mut p = pane(5).with_selection_gate(gate.clone());
    gate.set_enabled(false);

    p.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 1), AREA);
    p.handle_input(&mouse(MouseEventKind::Drag(MouseButton::Left), 3, 3), AREA);
    assert_eq!(p.selection(), None);

    gate.set_enabled(true);
    p.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 2), AREA);
    assert_eq!(p.selection(), Some((1, 1)));
}

#[test]
fn dragging_below_content_scrolls() {
    let mut p = pane(10);
    p.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 1), AREA);
    p.handle_input(&mouse(MouseEventKind::Drag(MouseButton::Left), 3, 9), AREA);
    assert_eq!(p.scroll(), 1);
    assert_eq!(p.selection(), Some((0, 3)));
}

#[test]
fn scrolling_is_clamped() {
    let mut p = pane(5);
    for _ in 0..10 {
        p.handle_input(&mouse(MouseEventKind::ScrollDown, 3, 2), AREA);
    }
    assert_eq!(p.scroll(), 2);

    let up = InputEvent::Key(KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE));
    p.handle_input(&up, AREA);
    assert_eq!(p.scroll(), 0);
}

#[test]
fn escape_clears_selection() {
    let mut p = pane(3);
    p.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 1), AREA);
    let esc = InputEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert!(p.handle_input(&esc, AREA).is_consumed());
    assert_eq!(p.selection(), None);
    assert!(p.handle_input(&esc, AREA).is_ignored());
}

#[test]
fn set_lines_resets_selection_and_scroll() {
    let mut p = pane(10);
    p.handle_input(&mouse(MouseEventKind::ScrollDown, 3, 2), AREA);
    p.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 1), AREA);
    p.set_lines(vec!["only".to_string()]);
    assert_eq!(p.scroll(), 0);
    assert_eq!(p.selection(), None);
    assert_eq!(p.lines(), ["only".to_string()]);
}
