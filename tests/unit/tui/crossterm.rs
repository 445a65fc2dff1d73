use super::*;

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = ct::KeyEvent::new(ct::KeyCode::Null, ct::KeyModifiers::NONE);
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn alt_arrow_keeps_modifier() {
    let event = ct::KeyEvent::new(ct::KeyCode::Left, ct::KeyModifiers::ALT);
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Left);
    assert!(converted.modifiers.contains(KeyModifiers::ALT));
    assert!(!converted.modifiers.contains(KeyModifiers::SHIFT));
}

#[test]
fn mouse_drag_converts_position_and_button() {
    let event = ct::Event::Mouse(ct::MouseEvent {
        kind: ct::MouseEventKind::Drag(ct::MouseButton::Left),
        column: 12,
        row: 3,
        modifiers: ct::KeyModifiers::NONE,
    });
    assert_eq!(
        into_input_event(event),
        InputEvent::Mouse(MouseEvent::new(
            MouseEventKind::Drag(MouseButton::Left),
            12,
            3
        ))
    );
}

#[test]
fn focus_lost_passes_through() {
    assert_eq!(into_input_event(ct::Event::FocusLost), InputEvent::FocusLost);
}
