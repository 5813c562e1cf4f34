//! Conway's Game of Life simulator
//!
//! A pattern library is scanned once at startup, a pattern generator turns a
//! named pattern into the initial grid, and a simulation engine evolves it one
//! tick at a time for a rendering collaborator.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod patterns;
pub mod utils;

pub use config::Settings;
pub use error::{LifeError, LifeResult};
pub use game_of_life::{Grid, SimulationEngine};
pub use patterns::{PatternGenerator, PatternLibrary};

use anyhow::{Context, Result};
use patterns::generator::RANDOM_PATTERN;
use rand::Rng;
use utils::FrameRenderer;

/// Build the initial grid from the configured seed and wrap it in an engine.
/// Without a seed the `random` pattern with default arguments is used.
pub fn build_engine<R: Rng + ?Sized>(
    settings: &Settings,
    library: &PatternLibrary,
    rng: &mut R,
) -> LifeResult<SimulationEngine> {
    let sim = &settings.simulation;
    let generator = PatternGenerator::new(library, sim.boundary);

    let initial = match &sim.seed {
        Some(seed) => generator.generate_named(sim.rows, sim.cols, &seed.pattern, &seed.args, rng)?,
        None => generator.generate_named(sim.rows, sim.cols, RANDOM_PATTERN, &[], rng)?,
    };

    SimulationEngine::new(sim.rows, sim.cols, sim.steps, initial)
}

/// Drive the engine for its configured number of ticks: advance, then hand
/// the current grid to the renderer with the tick index as caption.
pub fn run_simulation<F: FrameRenderer + ?Sized>(engine: &mut SimulationEngine, renderer: &mut F) -> Result<()> {
    for step in 0..engine.steps() {
        engine.advance();
        renderer
            .render(step, engine.grid())
            .with_context(|| format!("Failed to render step {}", step))?;
    }
    Ok(())
}
