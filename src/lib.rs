//! Gapwing - a terminal gap-dodging side-scroller
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Read-only frame description consumed by the host
//! - `persistence`: Best-score record load/save

pub mod persistence;
pub mod render;
pub mod sim;

pub use sim::{GameMode, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield dimensions (logical pixels)
    pub const WIDTH: f32 = 288.0;
    pub const HEIGHT: f32 = 512.0;

    /// Bird physics - per-tick units (px/tick, px/tick^2)
    pub const GRAVITY: f32 = 0.35;
    pub const FLAP_VELOCITY: f32 = -6.5;
    pub const MAX_FALL_SPEED: f32 = 12.0;
    pub const BIRD_RADIUS: f32 = 12.0;
    /// The bird never moves horizontally; the world scrolls past it
    pub const BIRD_X: f32 = WIDTH * 0.25;

    /// Ground strip along the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 64.0;
    /// Top edge of the ground strip
    pub const GROUND_TOP: f32 = HEIGHT - GROUND_HEIGHT;
    /// Width of one ground tile (scroll offset wraps at this)
    pub const GROUND_TILE: f32 = 24.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const GAP_START: f32 = 140.0;
    pub const GAP_MIN: f32 = 100.0;
    pub const PIPE_SPEED_START: f32 = 2.5;
    pub const PIPE_SPEED_MAX: f32 = 5.0;
    /// Seconds between pipe spawns
    pub const PIPE_SPAWN_INTERVAL: f32 = 1.2;
    /// Minimum clearance between a gap edge and the screen top
    pub const SAFE_MARGIN_TOP: f32 = 40.0;
    /// Minimum clearance between a gap edge and the ground
    pub const SAFE_MARGIN_BOTTOM: f32 = 80.0;

    /// Difficulty ramps every this many points
    pub const DIFF_EVERY: u32 = 10;
    pub const DIFF_SPEED_STEP: f32 = 0.2;
    pub const DIFF_GAP_STEP: f32 = 5.0;
}
