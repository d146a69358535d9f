//! Terminal events translated into the few discrete inputs the game knows.

use std::io::Write;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags, MouseButton,
    MouseEvent, MouseEventKind, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::ExecutableCommand;

use crate::geometry::Point;
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Esc, `q` or Ctrl-C — the terminal's version of closing the window.
    Quit,
    /// Space or ↑ pressed.
    Jump,
    /// A pointer button went down at a logical position.
    Click { pos: Point, button: PointerButton },
    /// The pointer moved (hover tracking only).
    PointerMoved(Point),
    /// Terminal resized to `cols` × `rows` cells.
    Resized { cols: u16, rows: u16 },
}

/// Map a raw terminal event; `None` for anything the game ignores.
pub fn translate(event: &Event, viewport: &Viewport) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, viewport),
        Event::Resize(cols, rows) => Some(InputEvent::Resized {
            cols: *cols,
            rows: *rows,
        }),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<InputEvent> {
    // Key-down only; repeats and releases must not trigger a jump.
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Up => Some(InputEvent::Jump),
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent, viewport: &Viewport) -> Option<InputEvent> {
    let pos = viewport.to_logical(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(button) => Some(InputEvent::Click {
            pos,
            button: match button {
                MouseButton::Left => PointerButton::Primary,
                MouseButton::Right => PointerButton::Secondary,
                MouseButton::Middle => PointerButton::Middle,
            },
        }),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::PointerMoved(pos)),
        _ => None,
    }
}

/// Where the pointer was last seen, if anywhere.
pub fn pointer_position(event: &InputEvent) -> Option<Point> {
    match event {
        InputEvent::Click { pos, .. } | InputEvent::PointerMoved(pos) => Some(*pos),
        _ => None,
    }
}

/// Ask the terminal to tag key events as press, repeat or release.
/// Without this, holding a key arrives as a stream of fresh presses and
/// every auto-repeat would be another jump.  Returns whether the request
/// was written; terminals that ignore it fall back to plain presses.
pub fn enable_key_event_types<W: Write>(out: &mut W) -> bool {
    out.execute(PushKeyboardEnhancementFlags(
        KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
    ))
    .is_ok()
}

pub fn disable_key_event_types<W: Write>(out: &mut W) {
    let _ = out.execute(PopKeyboardEnhancementFlags);
}
