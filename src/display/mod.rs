//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! logical shapes into terminal commands through the viewport.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};
use stickman_runner::compute::obstacle_bounds;
use stickman_runner::config::GameConfig;
use stickman_runner::entities::{Button, ButtonLayout, GameStatus, Obstacle, Player, RoundState};
use stickman_runner::geometry::{Point, Rect};
use stickman_runner::viewport::Viewport;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::Rgb { r: 255, g: 255, b: 255 };
const C_GROUND: Color = Color::Rgb { r: 0, g: 200, b: 0 };
const C_OBSTACLE: Color = Color::Rgb { r: 200, g: 0, b: 0 };
const C_STICKMAN: Color = Color::Rgb { r: 0, g: 0, b: 0 };
const C_TEXT: Color = Color::Rgb { r: 0, g: 0, b: 0 };
const C_BUTTON: Color = Color::Rgb { r: 100, g: 100, b: 100 };
const C_BUTTON_HOVER: Color = Color::Rgb { r: 0, g: 100, b: 255 };
const C_BUTTON_TEXT: Color = Color::Rgb { r: 255, g: 255, b: 255 };
const C_HINT: Color = Color::Rgb { r: 0, g: 90, b: 0 };

pub const TITLE: &str = "Stickman Endless Runner";

/// What the renderer needs besides the round itself.
pub struct Scene<'a> {
    pub config: &'a GameConfig,
    pub layout: &'a ButtonLayout,
    pub viewport: &'a Viewport,
    /// Last known pointer position, for button hover.
    pub pointer: Option<Point>,
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render the main menu.
pub fn render_menu<W: Write>(out: &mut W, scene: &Scene) -> std::io::Result<()> {
    draw_backdrop(out, scene)?;

    let title_at = Point::new(scene.config.width / 2.0, scene.config.height / 2.0 - 100.0);
    draw_text_centered(out, scene, TITLE, title_at, C_TEXT, C_BACKGROUND)?;

    draw_button(out, scene, &scene.layout.start)?;
    draw_button(out, scene, &scene.layout.quit)?;
    draw_controls_hint(out, scene)?;

    finish(out, scene)
}

/// Render one complete frame of a round.
pub fn render_round<W: Write>(
    out: &mut W,
    scene: &Scene,
    state: &RoundState,
) -> std::io::Result<()> {
    draw_backdrop(out, scene)?;

    for obstacle in &state.obstacles {
        draw_obstacle(out, scene, obstacle)?;
    }
    draw_stickman(out, scene, &state.player)?;
    draw_score(out, scene, state.score)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, scene)?;
    } else {
        draw_controls_hint(out, scene)?;
    }

    finish(out, scene)
}

fn finish<W: Write>(out: &mut W, scene: &Scene) -> std::io::Result<()> {
    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, scene.viewport.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Primitives ────────────────────────────────────────────────────────────────

fn fill_rect<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    rect: &Rect,
    color: Color,
) -> std::io::Result<()> {
    let Some((col, row, w, h)) = viewport.cell_rect(rect) else {
        return Ok(());
    };
    let line = " ".repeat(w as usize);
    out.queue(style::SetBackgroundColor(color))?;
    for r in row..row + h {
        out.queue(cursor::MoveTo(col, r))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

fn draw_text_centered<W: Write>(
    out: &mut W,
    scene: &Scene,
    text: &str,
    centre: Point,
    fg: Color,
    bg: Color,
) -> std::io::Result<()> {
    let (col, row) = scene.viewport.to_cell(centre);
    let col = col.saturating_sub(text.chars().count() as u16 / 2);
    draw_text_at(out, scene.viewport, col, row, text, fg, bg)
}

/// Print `text` at a cell, clipped so it never wraps onto the next row.
fn draw_text_at<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    col: u16,
    row: u16,
    text: &str,
    fg: Color,
    bg: Color,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(fg))?;
    out.queue(style::SetBackgroundColor(bg))?;
    out.queue(Print(viewport.clip_text(col, text)))?;
    Ok(())
}

/// Background colour of the cell row, so glyphs blend into sky or ground.
fn backdrop_at(scene: &Scene, row: u16) -> Color {
    let (_, ground_row) = scene
        .viewport
        .to_cell(Point::new(0.0, scene.config.ground_y()));
    if row >= ground_row {
        C_GROUND
    } else {
        C_BACKGROUND
    }
}

// ── Backdrop ──────────────────────────────────────────────────────────────────

fn draw_backdrop<W: Write>(out: &mut W, scene: &Scene) -> std::io::Result<()> {
    let config = scene.config;
    let sky = Rect::new(0.0, 0.0, config.width, config.height);
    fill_rect(out, scene.viewport, &sky, C_BACKGROUND)?;

    let ground = Rect::new(0.0, config.ground_y(), config.width, config.ground_height);
    fill_rect(out, scene.viewport, &ground, C_GROUND)
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_obstacle<W: Write>(out: &mut W, scene: &Scene, obstacle: &Obstacle) -> std::io::Result<()> {
    fill_rect(out, scene.viewport, &obstacle_bounds(obstacle), C_OBSTACLE)
}

fn draw_stickman<W: Write>(out: &mut W, scene: &Scene, p: &Player) -> std::io::Result<()> {
    // Decorative only; collisions use the plain bounding box.
    //    O      ← head   (y - height)
    //   /|\     ← arms   (y - height + 25)
    //    |      ← body   (down to y - 10)
    //   / \     ← legs   (y + 2)
    let vp = scene.viewport;
    let head = vp.to_cell(Point::new(p.x, p.y - p.height));
    let arms_row = vp.to_cell(Point::new(p.x, p.y - p.height + 25.0)).1;
    let body_end = vp.to_cell(Point::new(p.x, p.y - 10.0)).1;
    let legs_row = vp.to_cell(Point::new(p.x, p.y + 2.0)).1;
    let left = vp.to_cell(Point::new(p.x - 15.0, p.y)).0;
    let right = vp.to_cell(Point::new(p.x + 15.0, p.y)).0;
    let col = head.0;

    for row in head.1 + 1..=body_end.max(head.1 + 1) {
        if row != legs_row {
            draw_text_at(out, scene.viewport, col, row, "|", C_STICKMAN, backdrop_at(scene, row))?;
        }
    }
    if arms_row > head.1 {
        let bg = backdrop_at(scene, arms_row);
        draw_text_at(out, scene.viewport, left.min(col.saturating_sub(1)), arms_row, "/", C_STICKMAN, bg)?;
        draw_text_at(out, scene.viewport, right.max(col + 1), arms_row, "\\", C_STICKMAN, bg)?;
    }
    let bg = backdrop_at(scene, legs_row);
    draw_text_at(out, scene.viewport, left.min(col.saturating_sub(1)), legs_row, "/", C_STICKMAN, bg)?;
    draw_text_at(out, scene.viewport, right.max(col + 1), legs_row, "\\", C_STICKMAN, bg)?;

    draw_text_at(out, scene.viewport, col, head.1, "O", C_STICKMAN, backdrop_at(scene, head.1))
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_score<W: Write>(out: &mut W, scene: &Scene, score: u32) -> std::io::Result<()> {
    let (col, row) = scene.viewport.to_cell(Point::new(10.0, 10.0));
    draw_text_at(out, scene.viewport, col, row, &format!("Score: {}", score), C_TEXT, C_BACKGROUND)
}

fn draw_button<W: Write>(out: &mut W, scene: &Scene, button: &Button) -> std::io::Result<()> {
    let fill = if button.is_hovered(scene.pointer) {
        C_BUTTON_HOVER
    } else {
        C_BUTTON
    };
    fill_rect(out, scene.viewport, &button.rect, fill)?;
    draw_text_centered(out, scene, button.label, button.rect.center(), C_BUTTON_TEXT, fill)
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, scene: &Scene) -> std::io::Result<()> {
    let row = scene.viewport.rows.saturating_sub(1);
    draw_text_at(
        out,
        scene.viewport,
        1,
        row,
        "SPACE / ↑ : Jump   CLICK : Buttons   Q : Quit",
        C_HINT,
        backdrop_at(scene, row),
    )
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, scene: &Scene) -> std::io::Result<()> {
    let at = Point::new(scene.config.width / 2.0, scene.config.height / 2.0 - 60.0);
    draw_text_centered(out, scene, "Game Over!", at, C_TEXT, C_BACKGROUND)?;

    draw_button(out, scene, &scene.layout.restart)?;
    draw_button(out, scene, &scene.layout.quit)
}
