//! Pure game-logic functions.
//!
//! Every public function takes immutable references (plus, where needed, an
//! RNG handle) and returns a brand-new value.  Side effects are limited to
//! the injected RNG.

use log::{debug, trace};
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{GameStatus, Obstacle, Player, RoundState};
use crate::geometry::Rect;

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn new_player(config: &GameConfig) -> Player {
    Player {
        x: config.player_start_x,
        y: config.ground_y(),
        vy: 0.0,
        width: config.player_width,
        height: config.player_height,
        on_ground: true,
    }
}

/// A fresh round: grounded player, no obstacles, zeroed timer and score.
pub fn new_round(config: &GameConfig) -> RoundState {
    RoundState {
        player: new_player(config),
        obstacles: Vec::new(),
        spawn_timer: 0,
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
    }
}

/// A new obstacle at the right edge with a random size.
pub fn spawn_obstacle(config: &GameConfig, rng: &mut impl Rng) -> Obstacle {
    let width = rng.gen_range(config.obstacle_width.clone()) as f32;
    let height = rng.gen_range(config.obstacle_height.clone()) as f32;
    Obstacle {
        x: config.width,
        y: config.ground_y(),
        width,
        height,
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Apply the jump impulse.  No-op while airborne.
pub fn jump(player: &Player, config: &GameConfig) -> Player {
    if !player.on_ground {
        return player.clone();
    }
    Player {
        vy: config.jump_impulse,
        on_ground: false,
        ..player.clone()
    }
}

/// One tick of gravity, clamped at the ground line.
pub fn update_player(player: &Player, config: &GameConfig) -> Player {
    let ground_y = config.ground_y();
    let vy = player.vy + config.gravity;
    let y = player.y + vy;
    if y >= ground_y {
        Player {
            y: ground_y,
            vy: 0.0,
            on_ground: true,
            ..player.clone()
        }
    } else {
        Player {
            y,
            vy,
            on_ground: false,
            ..player.clone()
        }
    }
}

/// Collision box: centred on `x`, spanning from the head to the feet line.
pub fn player_bounds(player: &Player) -> Rect {
    Rect::new(
        player.x - player.width / 2.0,
        player.y - player.height,
        player.width,
        player.height,
    )
}

// ── Obstacles ────────────────────────────────────────────────────────────────

pub fn advance_obstacle(obstacle: &Obstacle, speed: f32) -> Obstacle {
    Obstacle {
        x: obstacle.x - speed,
        ..obstacle.clone()
    }
}

pub fn obstacle_bounds(obstacle: &Obstacle) -> Rect {
    Rect::new(
        obstacle.x,
        obstacle.y - obstacle.height,
        obstacle.width,
        obstacle.height,
    )
}

/// Fully past the left edge of the surface.
pub fn is_expired(obstacle: &Obstacle) -> bool {
    obstacle.x + obstacle.width < 0.0
}

pub fn collides_with(obstacle: &Obstacle, player: &Player) -> bool {
    obstacle_bounds(obstacle).intersects(&player_bounds(player))
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Route a jump key-down to the player.  Ignored once the round is over.
pub fn player_jump(state: &RoundState, config: &GameConfig) -> RoundState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    RoundState {
        player: jump(&state.player, config),
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the round by one tick.  A finished round is returned unchanged,
/// so the game-over frame stays frozen.  All randomness comes through `rng`
/// so callers control determinism (tests use a seeded RNG).
pub fn tick(state: &RoundState, config: &GameConfig, rng: &mut impl Rng) -> RoundState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    let frame = state.frame + 1;

    // ── 1. Gravity ───────────────────────────────────────────────────────────
    let player = update_player(&state.player, config);

    // ── 2. Spawner ───────────────────────────────────────────────────────────
    let mut obstacles = state.obstacles.clone();
    let mut spawn_timer = state.spawn_timer + 1;
    if spawn_timer >= config.spawn_interval {
        let obstacle = spawn_obstacle(config, rng);
        debug!(
            "frame {}: spawned obstacle {}x{}",
            frame, obstacle.width, obstacle.height
        );
        obstacles.push(obstacle);
        spawn_timer = 0;
    }

    // ── 3. Scroll, then collide, then drop what left the screen ─────────────
    let obstacles: Vec<Obstacle> = obstacles
        .iter()
        .map(|o| advance_obstacle(o, config.scroll_speed))
        .collect();

    let hit = obstacles.iter().any(|o| collides_with(o, &player));

    let obstacles: Vec<Obstacle> = obstacles.into_iter().filter(|o| !is_expired(o)).collect();

    // ── 4. Status & score ────────────────────────────────────────────────────
    let (status, score) = if hit {
        (GameStatus::GameOver, state.score)
    } else {
        (GameStatus::Playing, state.score + 1)
    };

    trace!(
        "frame {}: y={} vy={} obstacles={} score={}",
        frame,
        player.y,
        player.vy,
        obstacles.len(),
        score
    );

    RoundState {
        player,
        obstacles,
        spawn_timer,
        score,
        status,
        frame,
    }
}
