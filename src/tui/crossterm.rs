//! crossterm event conversion into crate-native events.

use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::event as ct;

pub fn into_input_event(event: ct::Event) -> InputEvent {
    match event {
        ct::Event::Key(key) => InputEvent::Key(into_key_event(key)),
        ct::Event::Mouse(mouse) => InputEvent::Mouse(into_mouse_event(mouse)),
        ct::Event::Resize(w, h) => InputEvent::Resize(w, h),
        ct::Event::FocusGained => InputEvent::FocusGained,
        ct::Event::FocusLost => InputEvent::FocusLost,
        ct::Event::Paste(s) => InputEvent::Paste(s),
    }
}

pub fn into_key_event(event: ct::KeyEvent) -> KeyEvent {
    let mut modifiers = into_modifiers(event.modifiers);
    let code = into_key_code(event.code, &mut modifiers);
    KeyEvent {
        code,
        modifiers,
        kind: match event.kind {
            ct::KeyEventKind::Press => KeyEventKind::Press,
            ct::KeyEventKind::Release => KeyEventKind::Release,
            ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
        },
    }
}

pub fn into_mouse_event(event: ct::MouseEvent) -> MouseEvent {
    let kind = match event.kind {
        ct::MouseEventKind::Down(b) => MouseEventKind::Down(into_button(b)),
        ct::MouseEventKind::Up(b) => MouseEventKind::Up(into_button(b)),
        ct::MouseEventKind::Drag(b) => MouseEventKind::Drag(into_button(b)),
        ct::MouseEventKind::Moved => MouseEventKind::Moved,
        ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        ct::MouseEventKind::ScrollLeft => MouseEventKind::ScrollLeft,
        ct::MouseEventKind::ScrollRight => MouseEventKind::ScrollRight,
    };
    MouseEvent {
        kind,
        column: event.column,
        row: event.row,
        modifiers: into_modifiers(event.modifiers),
    }
}

fn into_button(button: ct::MouseButton) -> MouseButton {
    match button {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Right => MouseButton::Right,
        ct::MouseButton::Middle => MouseButton::Middle,
    }
}

fn into_modifiers(mods: ct::KeyModifiers) -> KeyModifiers {
    [
        (ct::KeyModifiers::SHIFT, KeyModifiers::SHIFT),
        (ct::KeyModifiers::CONTROL, KeyModifiers::CONTROL),
        (ct::KeyModifiers::ALT, KeyModifiers::ALT),
        (ct::KeyModifiers::SUPER, KeyModifiers::SUPER),
    ]
    .into_iter()
    .filter(|(from, _)| mods.contains(*from))
    .fold(KeyModifiers::NONE, |acc, (_, to)| acc | to)
}

fn into_key_code(code: ct::KeyCode, modifiers: &mut KeyModifiers) -> KeyCode {
    match code {
        ct::KeyCode::Char(ch) => KeyCode::Char(ch),
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::BackTab => KeyCode::BackTab,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Delete => KeyCode::Delete,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        ct::KeyCode::F(n) => KeyCode::F(n),
        // Some terminals report Ctrl+Space as NUL.
        ct::KeyCode::Null => {
            *modifiers |= KeyModifiers::CONTROL;
            KeyCode::Char(' ')
        }
        _ => KeyCode::Unknown,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
