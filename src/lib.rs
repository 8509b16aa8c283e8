//! Brick Breaker - a single-screen paddle and brick arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, round state)
//! - `config`: Field and entity geometry with validation
//! - `renderer`: Backend-agnostic frame description
//! - `driver`: Fixed-timestep frame driver and demo autopilot

pub mod config;
pub mod driver;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use driver::{Driver, FrameReport, Key};
pub use sim::{Direction, GameEvent, RoundState, Simulation, TickInput, TickReport};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per ~16 ms frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Play field dimensions
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;
    /// Largest accepted field side, keeps all geometry well inside `i32`
    pub const MAX_FIELD_SIZE: i32 = 1 << 20;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 20;
    /// Distance from the field bottom to the paddle's top edge
    pub const PADDLE_BOTTOM_MARGIN: i32 = 40;
    /// Horizontal distance moved per directional input
    pub const PADDLE_STEP: i32 = 20;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 15;
    pub const BALL_VELOCITY_X: i32 = 5;
    pub const BALL_VELOCITY_Y: i32 = -5;

    /// Brick grid defaults
    pub const BRICK_WIDTH: i32 = 60;
    pub const BRICK_HEIGHT: i32 = 20;
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLUMNS: u32 = 10;
    pub const BRICK_SPACING: i32 = 10;
    pub const GRID_ORIGIN_X: i32 = 35;
    pub const GRID_ORIGIN_Y: i32 = 50;
}
