use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use stickman_runner::clock::FrameClock;
use stickman_runner::config::GameConfig;
use stickman_runner::entities::ButtonLayout;
use stickman_runner::geometry::{Point, Rect};
use stickman_runner::input::*;
use stickman_runner::viewport::Viewport;

/// 80×50 cells: one cell is 10×10 logical units.
fn viewport() -> Viewport {
    Viewport::new(800.0, 500.0, 80, 50)
}

fn key(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    })
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ── Viewport ──────────────────────────────────────────────────────────────────

#[test]
fn to_cell_scales_and_clamps() {
    let vp = viewport();
    assert_eq!(vp.to_cell(Point::new(0.0, 0.0)), (0, 0));
    assert_eq!(vp.to_cell(Point::new(155.0, 420.0)), (15, 42));
    assert_eq!(vp.to_cell(Point::new(-50.0, 900.0)), (0, 49));
    assert_eq!(vp.to_cell(Point::new(800.0, 500.0)), (79, 49));
}

#[test]
fn to_logical_is_cell_centre() {
    let vp = viewport();
    assert_eq!(vp.to_logical(40, 25), Point::new(405.0, 255.0));
}

#[test]
fn cell_rect_covers_button() {
    let vp = viewport();
    let r = Rect::new(325.0, 225.0, 150.0, 50.0);
    assert_eq!(vp.cell_rect(&r), Some((32, 22, 15, 5)));
}

#[test]
fn every_drawn_button_cell_is_clickable() {
    let layout = ButtonLayout::for_config(&GameConfig::default());
    let buttons = [&layout.start, &layout.restart, &layout.quit];
    for (cols, rows) in [(80, 24), (80, 50), (120, 40), (100, 30), (133, 37)] {
        let vp = Viewport::new(800.0, 500.0, cols, rows);
        for button in buttons {
            let (col, row, w, h) = vp.cell_rect(&button.rect).unwrap();
            assert!(w > 0 && h > 0, "{} vanished at {}x{}", button.label, cols, rows);
            for c in col..col + w {
                for r in row..row + h {
                    let down = mouse(MouseEventKind::Down(MouseButton::Left), c, r);
                    let click = translate(&down, &vp).unwrap();
                    assert!(
                        button.is_clicked(&click),
                        "{} cell ({}, {}) not clickable at {}x{}",
                        button.label, c, r, cols, rows
                    );
                    let hover = translate(&mouse(MouseEventKind::Moved, c, r), &vp);
                    assert!(button.is_hovered(hover.as_ref().and_then(pointer_position)));
                }
            }
        }
    }
}

#[test]
fn clicks_beside_a_drawn_button_miss() {
    let vp = Viewport::new(800.0, 500.0, 80, 24);
    let layout = ButtonLayout::for_config(&GameConfig::default());
    let (col, row, w, h) = vp.cell_rect(&layout.start.rect).unwrap();
    for (c, r) in [(col - 1, row), (col + w, row), (col, row - 1), (col, row + h)] {
        let click = translate(&mouse(MouseEventKind::Down(MouseButton::Left), c, r), &vp).unwrap();
        assert!(!layout.start.is_clicked(&click), "({}, {}) should miss", c, r);
    }
}

#[test]
fn cell_rect_off_surface() {
    let vp = viewport();
    assert_eq!(vp.cell_rect(&Rect::new(-40.0, 380.0, 30.0, 40.0)), None);
    assert_eq!(vp.cell_rect(&Rect::new(800.0, 380.0, 30.0, 40.0)), None);
}

#[test]
fn cell_rect_keeps_thin_shapes_visible() {
    let vp = Viewport::new(800.0, 500.0, 40, 20);
    let (_, _, w, h) = vp.cell_rect(&Rect::new(100.0, 100.0, 1.0, 1.0)).unwrap();
    assert_eq!((w, h), (1, 1));
}

#[test]
fn clip_text_stops_before_last_column() {
    let vp = Viewport::new(800.0, 500.0, 20, 10);
    let hint = "SPACE / ↑ : Jump   CLICK : Buttons   Q : Quit";
    assert_eq!(vp.clip_text(1, hint), "SPACE / ↑ : Jump  ");
    assert_eq!(vp.clip_text(1, hint).chars().count(), 18);
    assert_eq!(vp.clip_text(1, "Score: 7"), "Score: 7");
    assert_eq!(vp.clip_text(19, "O"), "");
    assert_eq!(vp.clip_text(30, "O"), "");
}

#[test]
fn resized_keeps_logical_surface() {
    let vp = viewport().resized(160, 100);
    assert_eq!((vp.cols, vp.rows), (160, 100));
    assert_eq!(vp.logical_width, 800.0);
    assert_eq!(vp.to_cell(Point::new(400.0, 250.0)), (80, 50));
}

// ── translate ─────────────────────────────────────────────────────────────────

#[test]
fn space_and_up_jump() {
    let vp = viewport();
    assert_eq!(
        translate(&key(KeyCode::Char(' '), KeyEventKind::Press), &vp),
        Some(InputEvent::Jump)
    );
    assert_eq!(translate(&key(KeyCode::Up, KeyEventKind::Press), &vp), Some(InputEvent::Jump));
}

#[test]
fn key_release_and_repeat_ignored() {
    let vp = viewport();
    assert_eq!(translate(&key(KeyCode::Char(' '), KeyEventKind::Release), &vp), None);
    assert_eq!(translate(&key(KeyCode::Char(' '), KeyEventKind::Repeat), &vp), None);
}

#[test]
fn quit_keys() {
    let vp = viewport();
    assert_eq!(translate(&key(KeyCode::Esc, KeyEventKind::Press), &vp), Some(InputEvent::Quit));
    assert_eq!(
        translate(&key(KeyCode::Char('q'), KeyEventKind::Press), &vp),
        Some(InputEvent::Quit)
    );
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(translate(&ctrl_c, &vp), Some(InputEvent::Quit));
}

#[test]
fn other_keys_ignored() {
    let vp = viewport();
    assert_eq!(translate(&key(KeyCode::Char('c'), KeyEventKind::Press), &vp), None);
    assert_eq!(translate(&key(KeyCode::Enter, KeyEventKind::Press), &vp), None);
}

#[test]
fn left_click_maps_to_logical_position() {
    let ev = translate(&mouse(MouseEventKind::Down(MouseButton::Left), 40, 25), &viewport());
    assert_eq!(
        ev,
        Some(InputEvent::Click { pos: Point::new(405.0, 255.0), button: PointerButton::Primary })
    );
}

#[test]
fn right_click_is_secondary() {
    let ev = translate(&mouse(MouseEventKind::Down(MouseButton::Right), 0, 0), &viewport());
    assert!(matches!(
        ev,
        Some(InputEvent::Click { button: PointerButton::Secondary, .. })
    ));
}

#[test]
fn motion_and_release() {
    let vp = viewport();
    assert_eq!(
        translate(&mouse(MouseEventKind::Moved, 1, 1), &vp),
        Some(InputEvent::PointerMoved(Point::new(15.0, 15.0)))
    );
    assert_eq!(translate(&mouse(MouseEventKind::Up(MouseButton::Left), 1, 1), &vp), None);
}

#[test]
fn resize_event() {
    assert_eq!(
        translate(&Event::Resize(120, 40), &viewport()),
        Some(InputEvent::Resized { cols: 120, rows: 40 })
    );
}

#[test]
fn pointer_position_tracks_clicks_and_moves() {
    let p = Point::new(1.0, 2.0);
    assert_eq!(pointer_position(&InputEvent::PointerMoved(p)), Some(p));
    assert_eq!(
        pointer_position(&InputEvent::Click { pos: p, button: PointerButton::Middle }),
        Some(p)
    );
    assert_eq!(pointer_position(&InputEvent::Jump), None);
}

// ── Keyboard enhancement ──────────────────────────────────────────────────────

#[test]
#[cfg(unix)]
fn key_event_types_pushed_and_popped() {
    let mut out: Vec<u8> = Vec::new();
    assert!(enable_key_event_types(&mut out));
    assert_eq!(out, b"\x1b[>2u");

    out.clear();
    disable_key_event_types(&mut out);
    assert_eq!(out, b"\x1b[<1u");
}

// ── FrameClock ────────────────────────────────────────────────────────────────

#[test]
fn clock_remaining_budget() {
    let clock = FrameClock::new(Duration::from_millis(16));
    assert_eq!(clock.remaining(Duration::from_millis(6)), Some(Duration::from_millis(10)));
    assert_eq!(clock.remaining(Duration::from_millis(16)), None);
    assert_eq!(clock.remaining(Duration::from_millis(40)), None);
}
