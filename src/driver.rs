//! Frame driver
//!
//! Sits between a platform event loop and the simulation: forwards key
//! presses as paddle commands and runs fixed-size ticks out of variable
//! frame times.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::renderer::{DrawCommand, build_frame};
use crate::sim::{Direction, GameEvent, Simulation};

/// Platform-neutral key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Any key without a paddle binding
    Other,
}

impl From<Key> for Direction {
    fn from(key: Key) -> Self {
        match key {
            Key::Left => Direction::Left,
            Key::Right => Direction::Right,
            Key::Other => Direction::None,
        }
    }
}

/// What happened during one `Driver::update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Ticks run this frame
    pub substeps: u32,
    pub events: Vec<GameEvent>,
    pub score_delta: u32,
    pub game_over: bool,
}

/// Drives a simulation at a fixed tick rate
#[derive(Debug, Clone)]
pub struct Driver {
    sim: Simulation,
    accumulator: f32,
}

impl Driver {
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            accumulator: 0.0,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// One paddle command per received key event
    pub fn on_key_down(&mut self, key: Key) {
        self.apply_input(key.into());
    }

    pub fn apply_input(&mut self, direction: Direction) {
        self.sim.apply_input(direction);
    }

    /// Run as many fixed ticks as `elapsed` seconds allow
    pub fn update(&mut self, elapsed: f32) -> FrameReport {
        let mut report = FrameReport::default();

        if self.sim.is_game_over() {
            self.accumulator = 0.0;
            report.game_over = true;
            return report;
        }

        // A bogus frame time must not poison the accumulator
        let elapsed = if elapsed.is_finite() { elapsed } else { 0.0 };
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_DT);

        while self.accumulator >= SIM_DT && report.substeps < MAX_SUBSTEPS {
            let tick = self.sim.step();
            self.accumulator -= SIM_DT;
            report.substeps += 1;
            report.score_delta += tick.score_delta;
            report.events.extend(tick.events);

            if tick.game_over {
                report.game_over = true;
                self.accumulator = 0.0;
                break;
            }
        }

        report
    }

    /// Draw list for the current state
    pub fn frame(&self) -> Vec<DrawCommand> {
        build_frame(&self.sim)
    }
}

/// Demo input: steer the paddle centre toward the ball centre
pub fn autopilot(sim: &Simulation) -> Direction {
    let paddle = sim.paddle_rect().center().x;
    let ball = sim.ball_rect().center().x;
    let dead_zone = sim.config().paddle_step / 2;

    if ball < paddle - dead_zone {
        Direction::Left
    } else if ball > paddle + dead_zone {
        Direction::Right
    } else {
        Direction::None
    }
}
