//! Brick Breaker entry point
//!
//! Runs the simulation headless with the demo autopilot and reports the
//! result. A windowed frontend only needs to replace the frame loop below
//! with real key events and draw `Driver::frame()`.

use anyhow::Context;

use brick_breaker::GameConfig;
use brick_breaker::consts::SIM_DT;
use brick_breaker::driver::{Driver, autopilot};
use brick_breaker::renderer::frame::text_lines;
use brick_breaker::sim::{GameEvent, Simulation};

/// Default tick budget (one minute at 60 Hz)
const DEFAULT_MAX_TICKS: u64 = 60 * 60;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load(&path).with_context(|| format!("loading {}", path))?,
        None => GameConfig::default(),
    };
    let max_ticks = match args.next() {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("invalid tick budget: {}", raw))?,
        None => DEFAULT_MAX_TICKS,
    };

    let sim = Simulation::new(config).context("invalid game config")?;
    let mut driver = Driver::new(sim);

    while !driver.simulation().is_game_over() && driver.simulation().time_ticks() < max_ticks {
        // One synthetic key press per frame, like a held arrow key
        driver.apply_input(autopilot(driver.simulation()));

        let report = driver.update(SIM_DT);
        for event in &report.events {
            if let GameEvent::BrickDestroyed { index } = event {
                log::debug!("brick {} down", index);
            }
        }
    }

    let sim = driver.simulation();
    println!("Ticks simulated: {}", sim.time_ticks());
    println!(
        "Bricks destroyed: {}/{}",
        sim.destroyed_count(),
        sim.destroyed_count() + sim.remaining_bricks()
    );
    println!("Round: {:?}", sim.round_state());
    for line in text_lines(&driver.frame()) {
        println!("{}", line);
    }

    Ok(())
}
