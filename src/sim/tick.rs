//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use serde::{Deserialize, Serialize};

use super::collision::{
    ball_ceiling_collision, ball_floor_collision, ball_paddle_collision, ball_side_wall_collision,
    first_brick_hit, paddle_rest_y,
};
use super::state::{GameState, RoundState};

/// Horizontal paddle command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// Sign of the paddle displacement
    pub fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::None => 0,
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub direction: Direction,
}

impl TickInput {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the left or right wall
    WallBounce,
    /// Ball bounced off the ceiling
    CeilingBounce,
    /// Ball bounced off the paddle
    PaddleHit,
    /// Brick at this row-major index was destroyed
    BrickDestroyed { index: usize },
    /// Ball reached the floor
    GameOver,
}

/// Side effects of one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Events in the order they were resolved
    pub events: Vec<GameEvent>,
    /// Points gained this tick (0 or 1)
    pub score_delta: u32,
    /// Round is over after this tick
    pub game_over: bool,
}

impl TickReport {
    fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Move the paddle one step in `direction`, clamped to the field
pub fn apply_input(state: &mut GameState, direction: Direction) {
    if state.is_game_over() {
        return;
    }
    let dx = direction.sign() * state.config.paddle_step;
    let max_x = state.config.paddle_max_x();
    state.paddle.shift(dx, max_x);
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) -> TickReport {
    let mut report = TickReport::default();

    // Nothing moves once the round is lost
    if state.is_game_over() {
        report.game_over = true;
        return report;
    }

    state.time_ticks += 1;

    state.ball.integrate();

    if ball_side_wall_collision(&state.ball.rect, state.config.field_width) {
        state.ball.reflect_x();
        log::trace!("Wall bounce at {:?}", state.ball.rect.pos);
        report.push(GameEvent::WallBounce);
    }

    if ball_ceiling_collision(&state.ball.rect) {
        state.ball.reflect_y();
        log::trace!("Ceiling bounce at {:?}", state.ball.rect.pos);
        report.push(GameEvent::CeilingBounce);
    }

    if ball_floor_collision(&state.ball.rect, state.config.field_height) {
        state.round = RoundState::GameOver;
        log::info!(
            "Game over at tick {} with score {}",
            state.time_ticks,
            state.score
        );
        report.push(GameEvent::GameOver);
        report.game_over = true;
        return report;
    }

    if ball_paddle_collision(&state.ball.rect, &state.paddle.rect) {
        state.ball.reflect_y();
        state.ball.rect.pos.y = paddle_rest_y(&state.ball.rect, &state.paddle.rect);
        log::trace!("Paddle hit at x={}", state.ball.rect.pos.x);
        report.push(GameEvent::PaddleHit);
    }

    // At most one brick per tick, even if the ball overlaps several
    if let Some(index) = first_brick_hit(&state.ball.rect, &state.bricks) {
        state.bricks.destroy(index);
        state.ball.reflect_y();
        state.score += 1;
        report.score_delta += 1;
        log::debug!("Brick {} destroyed, score {}", index, state.score);
        report.push(GameEvent::BrickDestroyed { index });
    }

    report
}
