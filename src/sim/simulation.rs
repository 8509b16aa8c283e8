//! Owned simulation handle
//!
//! `Simulation` is the only way a driver touches a round: state changes go
//! through `apply_input`, `step`, `advance` and `reset_ball`, everything else
//! is read-only.

use glam::IVec2;

use super::rect::Rect;
use super::state::{GameState, RoundState};
use super::tick::{Direction, TickInput, TickReport, apply_input, tick};
use crate::config::{ConfigError, GameConfig};

#[derive(Debug, Clone)]
pub struct Simulation {
    state: GameState,
}

impl Simulation {
    /// Start a round; fails if the config describes degenerate geometry
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(config),
        })
    }

    /// Resume from a snapshot; rejects states no round could reach
    pub fn from_state(state: GameState) -> Result<Self, ConfigError> {
        state.validate()?;
        Ok(Self { state })
    }

    pub fn apply_input(&mut self, direction: Direction) {
        apply_input(&mut self.state, direction);
    }

    /// Advance one tick
    pub fn step(&mut self) -> TickReport {
        tick(&mut self.state)
    }

    /// Apply the tick's input, then step
    pub fn advance(&mut self, input: &TickInput) -> TickReport {
        self.apply_input(input.direction);
        self.step()
    }

    /// Re-centre the ball with its launch velocity. Never called automatically.
    pub fn reset_ball(&mut self) {
        self.state.reset_ball();
    }

    pub fn paddle_rect(&self) -> Rect {
        self.state.paddle.rect
    }

    pub fn ball_rect(&self) -> Rect {
        self.state.ball.rect
    }

    pub fn ball_velocity(&self) -> IVec2 {
        self.state.ball.vel
    }

    /// `(rect, destroyed)` for every brick, row-major
    pub fn bricks(&self) -> impl Iterator<Item = (Rect, bool)> + '_ {
        self.state.bricks.iter().map(|b| (b.rect, b.destroyed))
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn round_state(&self) -> RoundState {
        self.state.round
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn destroyed_count(&self) -> usize {
        self.state.bricks.destroyed_count()
    }

    pub fn remaining_bricks(&self) -> usize {
        self.state.bricks.remaining()
    }

    pub fn time_ticks(&self) -> u64 {
        self.state.time_ticks
    }

    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    /// Read-only view of the full state (e.g. for JSON dumps)
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
