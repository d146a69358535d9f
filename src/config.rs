//! Every gameplay tunable, gathered in one immutable value.
//!
//! Built once at startup and handed by reference to the shell, the round
//! controller and the renderer.  All distances are logical units on the
//! fixed `width` × `height` surface; velocities are units per tick.

use std::ops::RangeInclusive;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Logical surface size.
    pub width: f32,
    pub height: f32,
    /// Height of the ground strip measured up from the bottom edge.
    pub ground_height: f32,
    /// Added to the player's vertical velocity every tick.
    pub gravity: f32,
    /// Vertical velocity applied by a jump (negative = upward).
    pub jump_impulse: f32,
    /// Horizontal obstacle speed, leftward.
    pub scroll_speed: f32,
    /// Ticks between two obstacle spawns.
    pub spawn_interval: u32,
    pub obstacle_width: RangeInclusive<u32>,
    pub obstacle_height: RangeInclusive<u32>,
    pub player_start_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Target simulation/render rate.
    pub frames_per_second: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 800.0,
            height: 500.0,
            ground_height: 80.0,
            gravity: 1.0,
            jump_impulse: -15.0,
            scroll_speed: 8.0,
            spawn_interval: 60,
            obstacle_width: 20..=40,
            obstacle_height: 30..=50,
            player_start_x: 150.0,
            player_width: 20.0,
            player_height: 50.0,
            frames_per_second: 60,
        }
    }
}

impl GameConfig {
    /// The y coordinate the player stands on and obstacles grow up from.
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_height
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.frames_per_second.max(1)))
    }
}
