//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer geometry only
//! - One tick per call, no wall-clock time
//! - Stable iteration order (bricks row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod simulation;
pub mod state;
pub mod tick;

pub use collision::{
    ball_ceiling_collision, ball_floor_collision, ball_paddle_collision, ball_side_wall_collision,
    first_brick_hit,
};
pub use rect::Rect;
pub use simulation::Simulation;
pub use state::{Ball, Brick, BrickGrid, GameState, Paddle, RoundState};
pub use tick::{Direction, GameEvent, TickInput, TickReport, apply_input, tick};
