//! Lane Crosser - a lane-crossing arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, movement, collisions, round events)
//! - `input`: Directional commands and key decoding
//! - `render`: Render-target boundary and a text board for headless play
//! - `hud`: Event messages and round tally for the presentation layer
//! - `settings`: Data-driven game configuration

pub mod hud;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use hud::{EventHint, Tally};
pub use input::Direction;
pub use settings::Settings;
pub use sim::{Game, GameEvent};

/// Grid units and playfield bounds
pub mod consts {
    /// Height of one lane (pixels)
    pub const LANE_HEIGHT: f32 = 83.0;
    /// Width of one column (pixels)
    pub const COLUMN_WIDTH: f32 = 101.0;

    /// Obstacle lanes between the goal row and the start row
    pub const OBSTACLE_LANES: u32 = 5;
    /// Columns across the playfield
    pub const COLUMN_COUNT: u32 = 5;

    /// Lowest top-left y an actor may rest at (the start row)
    pub const MAX_HEIGHT: f32 = LANE_HEIGHT * 5.0;
    /// Rightmost top-left x; obstacles wrap once they reach it
    pub const MAX_WIDTH: f32 = COLUMN_WIDTH * (COLUMN_COUNT - 1) as f32;

    /// Row the player spawns on (counted from the goal row)
    pub const PLAYER_START_ROW: u32 = 5;
    /// Columns the player may spawn in
    pub const PLAYER_SPAWN_COLUMNS: std::ops::RangeInclusive<u32> = 2..=4;

    /// Obstacle speed multipliers (inclusive)
    pub const OBSTACLE_SPEEDS: std::ops::RangeInclusive<u32> = 1..=3;

    /// Obstacles spawned per round unless configured otherwise
    pub const DEFAULT_OBSTACLE_COUNT: usize = 3;
    /// Upper bound on configured obstacles per round
    pub const MAX_OBSTACLE_COUNT: usize = 64;

    /// Frame clamp to keep a stalled frame from teleporting obstacles
    pub const MAX_FRAME_DT: f32 = 0.1;

    pub const OBSTACLE_SPRITE: &str = "images/enemy-bug.png";
    pub const PLAYER_SPRITE: &str = "images/char-pink-girl.png";
}

/// Top-left y of a lane (lane 0 is the goal row)
#[inline]
pub fn lane_to_y(lane: u32) -> f32 {
    lane as f32 * consts::LANE_HEIGHT
}

/// Top-left x of a column
#[inline]
pub fn column_to_x(column: u32) -> f32 {
    column as f32 * consts::COLUMN_WIDTH
}
