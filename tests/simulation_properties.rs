//! Invariants checked over random input sequences

use brick_breaker::GameConfig;
use brick_breaker::sim::{Direction, GameEvent, GameState, Simulation};
use glam::IVec2;
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Left),
        Just(Direction::Right),
        Just(Direction::None),
    ]
}

/// Ball anywhere strictly inside the field, moving at a modest integer speed
fn ball_start() -> impl Strategy<Value = (IVec2, IVec2)> {
    let pos = (1..784i32, 1..584i32).prop_map(|(x, y)| IVec2::new(x, y));
    let speed = prop_oneof![(-8..=-1i32), (1..=8i32)];
    let vel = (speed.clone(), speed).prop_map(|(x, y)| IVec2::new(x, y));
    (pos, vel)
}

fn simulation(pos: IVec2, vel: IVec2) -> Simulation {
    let mut state = GameState::new(GameConfig::default());
    state.ball.rect.pos = pos;
    state.ball.vel = vel;
    state.config.ball_velocity = vel;
    Simulation::from_state(state).unwrap()
}

proptest! {
    #[test]
    fn paddle_stays_inside_field(inputs in prop::collection::vec(direction(), 0..200)) {
        let mut sim = Simulation::new(GameConfig::default()).unwrap();
        let max_x = sim.config().paddle_max_x();
        for dir in inputs {
            sim.apply_input(dir);
            let x = sim.paddle_rect().left();
            prop_assert!((0..=max_x).contains(&x));
            prop_assert_eq!(sim.paddle_rect().width(), 100);
        }
    }

    #[test]
    fn ball_integrates_velocity_before_response(
        (pos, vel) in ball_start(),
        inputs in prop::collection::vec(direction(), 1..300),
    ) {
        let mut sim = simulation(pos, vel);
        for dir in inputs {
            if sim.is_game_over() {
                break;
            }
            sim.apply_input(dir);
            let before = sim.ball_rect();
            let before_vel = sim.ball_velocity();
            let report = sim.step();

            let expected = before.pos + before_vel;
            prop_assert_eq!(sim.ball_rect().pos.x, expected.x);
            if !report.events.contains(&GameEvent::PaddleHit) {
                prop_assert_eq!(sim.ball_rect().pos.y, expected.y);
            }
            prop_assert_eq!(sim.ball_rect().size, before.size);
            // Speeds never change, only signs
            prop_assert_eq!(sim.ball_velocity().abs(), before_vel.abs());
        }
    }

    #[test]
    fn score_tracks_destroyed_bricks(
        (pos, vel) in ball_start(),
        inputs in prop::collection::vec(direction(), 1..400),
    ) {
        let mut sim = simulation(pos, vel);
        let mut previously_destroyed: Vec<bool> = sim.bricks().map(|(_, d)| d).collect();
        let mut last_score = sim.score();

        for dir in inputs {
            let report = sim.advance(&brick_breaker::TickInput::new(dir));
            let destroyed: Vec<bool> = sim.bricks().map(|(_, d)| d).collect();

            // Flags only ever go false -> true, at most one per tick
            let flipped = destroyed
                .iter()
                .zip(&previously_destroyed)
                .filter(|(now, before)| **now != **before)
                .count();
            prop_assert!(flipped <= 1);
            for (now, before) in destroyed.iter().zip(&previously_destroyed) {
                prop_assert!(!(*before && !*now));
            }

            prop_assert!(sim.score() >= last_score);
            prop_assert_eq!(sim.score() - last_score, report.score_delta);
            prop_assert_eq!(sim.score() as usize, sim.destroyed_count());

            previously_destroyed = destroyed;
            last_score = sim.score();
        }
    }

    #[test]
    fn fastest_valid_ball_stays_in_range(
        vx in -599..=599i32,
        vy in -599..=599i32,
        inputs in prop::collection::vec(direction(), 1..200),
    ) {
        let config = GameConfig {
            ball_velocity: IVec2::new(vx, vy),
            paddle_step: 800,
            ..Default::default()
        };
        prop_assert!(config.validate().is_ok());

        let mut sim = Simulation::new(config).unwrap();
        for dir in inputs {
            sim.apply_input(dir);
            sim.step();
            // Whatever the speed, the state stays restorable
            prop_assert!(sim.state().validate().is_ok());
        }
    }

    #[test]
    fn game_over_is_absorbing(
        x in 1..784i32,
        vx in prop_oneof![(-8..=-1i32), (1..=8i32)],
        inputs in prop::collection::vec(direction(), 1..50),
    ) {
        // Bottom edge at 599, falling
        let mut sim = simulation(IVec2::new(x, 584), IVec2::new(vx, 5));
        let report = sim.step();
        prop_assert!(report.game_over);

        let frozen = sim.state().clone();
        for dir in inputs {
            sim.apply_input(dir);
            sim.step();
            prop_assert_eq!(sim.state(), &frozen);
        }
    }
}
