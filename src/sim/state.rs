//! Game state and core simulation types
//!
//! Everything a round needs lives here; `GameState` is plain data so it can
//! be inspected, cloned and dumped as JSON.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::{ConfigError, GameConfig};

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundState {
    /// Active gameplay
    #[default]
    Playing,
    /// Ball reached the floor; terminal
    GameOver,
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Paddle centred horizontally at the configured height
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rect: Rect::new(
                config.field_width / 2 - config.paddle_width / 2,
                config.paddle_y(),
                config.paddle_width,
                config.paddle_height,
            ),
        }
    }

    /// Shift horizontally by `dx`, clamped to `[0, max_x]`
    pub fn shift(&mut self, dx: i32, max_x: i32) {
        self.rect.pos.x = self.rect.pos.x.saturating_add(dx).clamp(0, max_x);
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: IVec2,
}

impl Ball {
    /// Ball at the field centre with the configured launch velocity
    pub fn new(config: &GameConfig) -> Self {
        let spawn = config.ball_spawn();
        Self {
            rect: Rect::new(spawn.x, spawn.y, config.ball_size, config.ball_size),
            vel: config.ball_velocity,
        }
    }

    /// Move by one tick of velocity
    pub fn integrate(&mut self) {
        self.rect.pos += self.vel;
    }

    pub fn reflect_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn reflect_y(&mut self) {
        self.vel.y = -self.vel.y;
    }
}

/// A single brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub destroyed: bool,
}

/// Fixed-size grid of bricks, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: u32,
    columns: u32,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out `rows x columns` bricks from the configured origin
    pub fn new(config: &GameConfig) -> Self {
        let step_x = config.brick_width + config.brick_spacing;
        let step_y = config.brick_height + config.brick_spacing;

        let mut bricks = Vec::with_capacity(config.brick_count());
        for row in 0..config.brick_rows as i32 {
            for col in 0..config.brick_columns as i32 {
                bricks.push(Brick {
                    rect: Rect::new(
                        config.grid_origin.x + col * step_x,
                        config.grid_origin.y + row * step_y,
                        config.brick_width,
                        config.brick_height,
                    ),
                    destroyed: false,
                });
            }
        }

        Self {
            rows: config.brick_rows,
            columns: config.brick_columns,
            bricks,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Bricks in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index)
    }

    /// Brick at `(row, column)`
    pub fn at(&self, row: u32, column: u32) -> Option<&Brick> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.bricks.get((row * self.columns + column) as usize)
    }

    /// Mark a brick destroyed. Returns false if it already was (or doesn't exist).
    pub fn destroy(&mut self, index: usize) -> bool {
        match self.bricks.get_mut(index) {
            Some(brick) if !brick.destroyed => {
                brick.destroyed = true;
                true
            }
            _ => false,
        }
    }

    pub fn destroyed_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.destroyed).count()
    }

    pub fn remaining(&self) -> usize {
        self.len() - self.destroyed_count()
    }
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Geometry this round was built from
    pub config: GameConfig,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    /// One point per destroyed brick
    pub score: u32,
    pub round: RoundState,
    /// Ticks simulated while playing
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh round from an already validated config
    pub fn new(config: GameConfig) -> Self {
        let state = Self {
            paddle: Paddle::new(&config),
            ball: Ball::new(&config),
            bricks: BrickGrid::new(&config),
            score: 0,
            round: RoundState::Playing,
            time_ticks: 0,
            config,
        };
        log::info!(
            "Round started: {}x{} bricks, field {}x{}",
            state.bricks.rows(),
            state.bricks.columns(),
            state.config.field_width,
            state.config.field_height
        );
        state
    }

    /// Put the ball back at the field centre with its launch velocity
    pub fn reset_ball(&mut self) {
        self.ball = Ball::new(&self.config);
        log::debug!("Ball reset to {:?}", self.ball.rect.pos);
    }

    pub fn is_game_over(&self) -> bool {
        self.round == RoundState::GameOver
    }

    /// Check that a restored state is one a round built from its config
    /// could have reached
    pub fn validate(&self) -> Result<(), ConfigError> {
        let config = &self.config;
        config.validate()?;

        let snapshot = |reason| Err(ConfigError::Snapshot { reason });

        let paddle = &self.paddle.rect;
        if paddle.size != IVec2::new(config.paddle_width, config.paddle_height) {
            return snapshot("paddle size differs from config");
        }
        if paddle.top() != config.paddle_y() {
            return snapshot("paddle is off its row");
        }
        if !(0..=config.paddle_max_x()).contains(&paddle.left()) {
            return snapshot("paddle outside the field");
        }

        let ball = &self.ball;
        if ball.rect.size != IVec2::splat(config.ball_size) {
            return snapshot("ball size differs from config");
        }
        // Collisions only flip signs, never change speed
        if ball.vel.abs() != config.ball_velocity.abs() {
            return snapshot("ball speed differs from config");
        }
        let reach = config.max_ball_speed();
        let x_range = -reach..=config.field_width + reach;
        let y_range = -reach..=config.field_height + reach;
        if !x_range.contains(&ball.rect.left()) || !y_range.contains(&ball.rect.top()) {
            return snapshot("ball outside the field");
        }

        let expected = BrickGrid::new(config);
        if self.bricks.rows() != expected.rows()
            || self.bricks.columns() != expected.columns()
            || self.bricks.len() != expected.len()
        {
            return snapshot("brick grid shape differs from config");
        }
        if self
            .bricks
            .iter()
            .zip(expected.iter())
            .any(|(brick, laid_out)| brick.rect != laid_out.rect)
        {
            return snapshot("brick moved from its grid slot");
        }

        if self.score as usize != self.bricks.destroyed_count() {
            return snapshot("score differs from destroyed brick count");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(state.paddle.rect, Rect::new(350, 560, 100, 20));
        assert_eq!(state.ball.rect, Rect::new(393, 293, 15, 15));
        assert_eq!(state.ball.vel, IVec2::new(5, -5));
        assert_eq!(state.score, 0);
        assert_eq!(state.round, RoundState::Playing);
    }

    #[test]
    fn test_grid_row_major_layout() {
        let grid = BrickGrid::new(&GameConfig::default());
        assert_eq!(grid.len(), 50);
        assert_eq!(grid.get(0).unwrap().rect, Rect::new(35, 50, 60, 20));
        assert_eq!(grid.get(1).unwrap().rect, Rect::new(105, 50, 60, 20));
        // Index 10 starts the second row
        assert_eq!(grid.get(10).unwrap().rect, Rect::new(35, 80, 60, 20));
        assert_eq!(grid.at(4, 9).unwrap().rect, Rect::new(665, 170, 60, 20));
        assert!(grid.at(5, 0).is_none());
        assert!(grid.iter().all(|b| !b.destroyed));
    }

    #[test]
    fn test_destroy_is_one_way() {
        let mut grid = BrickGrid::new(&GameConfig::default());
        assert!(grid.destroy(3));
        assert!(!grid.destroy(3));
        assert!(!grid.destroy(999));
        assert_eq!(grid.destroyed_count(), 1);
        assert_eq!(grid.remaining(), 49);
    }

    #[test]
    fn test_paddle_shift_clamps() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(&config);
        paddle.shift(-1000, config.paddle_max_x());
        assert_eq!(paddle.rect.left(), 0);
        paddle.shift(1000, config.paddle_max_x());
        assert_eq!(paddle.rect.right(), config.field_width);
    }

    #[test]
    fn test_paddle_shift_saturates() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(&config);
        paddle.shift(i32::MAX, config.paddle_max_x());
        assert_eq!(paddle.rect.left(), config.paddle_max_x());
        paddle.shift(i32::MIN, config.paddle_max_x());
        assert_eq!(paddle.rect.left(), 0);
    }

    #[test]
    fn test_fresh_state_validates() {
        let mut state = GameState::new(GameConfig::default());
        assert!(state.validate().is_ok());

        // Reachable mid-round state
        state.bricks.destroy(4);
        state.score = 1;
        state.ball.vel = IVec2::new(-5, 5);
        state.round = RoundState::GameOver;
        assert!(state.validate().is_ok());
    }

    fn snapshot_reason(state: &GameState) -> Option<&'static str> {
        match state.validate() {
            Err(ConfigError::Snapshot { reason }) => Some(reason),
            _ => None,
        }
    }

    #[test]
    fn test_validate_rejects_paddle_out_of_bounds() {
        let mut state = GameState::new(GameConfig::default());
        state.paddle.rect.pos.x = 5000;
        assert_eq!(snapshot_reason(&state), Some("paddle outside the field"));

        let mut state = GameState::new(GameConfig::default());
        state.paddle.rect.size.x = 300;
        assert_eq!(snapshot_reason(&state), Some("paddle size differs from config"));

        let mut state = GameState::new(GameConfig::default());
        state.paddle.rect.pos.y = 10;
        assert_eq!(snapshot_reason(&state), Some("paddle is off its row"));
    }

    #[test]
    fn test_validate_rejects_score_mismatch() {
        let mut state = GameState::new(GameConfig::default());
        state.score = 42;
        assert_eq!(
            snapshot_reason(&state),
            Some("score differs from destroyed brick count")
        );
    }

    #[test]
    fn test_validate_rejects_bad_ball() {
        let mut state = GameState::new(GameConfig::default());
        state.ball.rect.size = IVec2::new(15, 30);
        assert_eq!(snapshot_reason(&state), Some("ball size differs from config"));

        let mut state = GameState::new(GameConfig::default());
        state.ball.vel = IVec2::new(i32::MAX, 5);
        assert_eq!(snapshot_reason(&state), Some("ball speed differs from config"));

        let mut state = GameState::new(GameConfig::default());
        state.ball.rect.pos.x = i32::MAX - 1;
        assert_eq!(snapshot_reason(&state), Some("ball outside the field"));
    }

    #[test]
    fn test_validate_rejects_altered_grid() {
        let mut state = GameState::new(GameConfig::default());
        state.bricks = BrickGrid::new(&GameConfig {
            brick_rows: 2,
            ..Default::default()
        });
        assert_eq!(
            snapshot_reason(&state),
            Some("brick grid shape differs from config")
        );

        let mut state = GameState::new(GameConfig::default());
        state.bricks.bricks[7].rect.pos.y += 1;
        assert_eq!(snapshot_reason(&state), Some("brick moved from its grid slot"));
    }

    #[test]
    fn test_reset_ball_keeps_round() {
        let mut state = GameState::new(GameConfig::default());
        state.ball.rect.pos = IVec2::new(12, 34);
        state.ball.vel = IVec2::new(-5, 5);
        state.score = 7;
        state.round = RoundState::GameOver;

        state.reset_ball();
        assert_eq!(state.ball.rect.pos, IVec2::new(393, 293));
        assert_eq!(state.ball.vel, IVec2::new(5, -5));
        assert_eq!(state.score, 7);
        assert_eq!(state.round, RoundState::GameOver);
    }
}
