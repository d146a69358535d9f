//! All game entity types — pure data, no logic.

use crate::geometry::Rect;

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Player ────────────────────────────────────────────────────────────────────

/// The stickman.  `x` is the horizontal centre, `y` is the feet line.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    /// Resting on the ground line with zero vertical velocity.
    pub on_ground: bool,
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// A block standing on the ground.  `x` is the left edge, `y` the base.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

// ── Buttons ───────────────────────────────────────────────────────────────────

/// A clickable labelled region.  Hover state is never stored; it is
/// derived from the pointer position at draw time.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
}

/// Every button the shell and the round controller know about.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonLayout {
    pub start: Button,
    pub restart: Button,
    pub quit: Button,
}

// ── Round state ───────────────────────────────────────────────────────────────

/// The state of one round.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct RoundState {
    pub player: Player,
    /// Live obstacles in spawn order.
    pub obstacles: Vec<Obstacle>,
    /// Ticks since the last spawn.
    pub spawn_timer: u32,
    pub score: u32,
    pub status: GameStatus,
    /// Simulated ticks so far this round.
    pub frame: u64,
}
