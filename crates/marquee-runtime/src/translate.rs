#![forbid(unsafe_code)]

//! Crossterm-to-core event translation.
//!
//! The rest of the workspace only ever sees `marquee_core::Event`; this is
//! the single place backend types cross the boundary. Events with no
//! counterpart (paste, unsupported keys) translate to `None` and are
//! dropped.

use crossterm::event as ct;
use marquee_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
use marquee_core::geometry::Position;

/// Translate one backend event. `None` means "no core equivalent".
#[must_use]
pub fn translate(event: ct::Event) -> Option<Event> {
    match event {
        ct::Event::Key(key) => translate_key(key).map(Event::Key),
        ct::Event::Mouse(mouse) => translate_mouse(mouse).map(Event::Mouse),
        ct::Event::Resize(width, height) => Some(Event::Resize { width, height }),
        ct::Event::FocusGained => Some(Event::FocusGained),
        ct::Event::FocusLost => Some(Event::FocusLost),
        // Paste and any future backend variants have no core equivalent.
        _ => None,
    }
}

fn translate_key(key: ct::KeyEvent) -> Option<KeyEvent> {
    let code = match key.code {
        ct::KeyCode::Char(c) => KeyCode::Char(c),
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::BackTab => KeyCode::BackTab,
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        _ => return None,
    };
    let kind = match key.kind {
        ct::KeyEventKind::Press => KeyEventKind::Press,
        ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
        ct::KeyEventKind::Release => KeyEventKind::Release,
    };
    Some(KeyEvent {
        code,
        modifiers: translate_modifiers(key.modifiers),
        kind,
    })
}

fn translate_modifiers(modifiers: ct::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::empty();
    if modifiers.contains(ct::KeyModifiers::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if modifiers.contains(ct::KeyModifiers::CONTROL) {
        out |= Modifiers::CONTROL;
    }
    if modifiers.contains(ct::KeyModifiers::ALT) {
        out |= Modifiers::ALT;
    }
    out
}

fn translate_mouse(mouse: ct::MouseEvent) -> Option<MouseEvent> {
    let kind = match mouse.kind {
        ct::MouseEventKind::Moved | ct::MouseEventKind::Drag(_) => MouseEventKind::Moved,
        ct::MouseEventKind::Down(button) => MouseEventKind::Down(translate_button(button)?),
        ct::MouseEventKind::Up(button) => MouseEventKind::Up(translate_button(button)?),
        ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        ct::MouseEventKind::ScrollLeft | ct::MouseEventKind::ScrollRight => return None,
    };
    Some(MouseEvent::new(
        kind,
        Position::new(mouse.column, mouse.row),
    ))
}

fn translate_button(button: ct::MouseButton) -> Option<MouseButton> {
    match button {
        ct::MouseButton::Left => Some(MouseButton::Left),
        ct::MouseButton::Right => Some(MouseButton::Right),
        ct::MouseButton::Middle => Some(MouseButton::Middle),
    }
}
