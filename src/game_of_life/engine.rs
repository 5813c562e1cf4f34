//! Simulation engine: owns the grid and advances it one tick at a time

use super::{GameOfLifeRules, Grid};
use crate::error::{LifeError, LifeResult};
use std::fmt;
use tracing::debug;

/// Number of `advance` calls that leave the grid untouched.
/// Tick 0 shows the seed, tick 1 repeats it, the rule applies from tick 2 on.
pub const WARMUP_TICKS: usize = 2;

/// Lifecycle of a run as seen by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Ready,
    Running,
    Done,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EngineState::Ready => "ready",
            EngineState::Running => "running",
            EngineState::Done => "done",
        };
        write!(f, "{}", label)
    }
}

pub struct SimulationEngine {
    grid: Grid,
    previous_grid: Option<Grid>,
    step_counter: usize,
    steps: usize,
}

impl SimulationEngine {
    /// Create an engine for `steps` ticks over an initial grid of `rows x cols`
    pub fn new(rows: usize, cols: usize, steps: usize, initial: Grid) -> LifeResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::Configuration(format!(
                "Grid dimensions must be positive, got {}x{}", rows, cols
            )));
        }
        if steps == 0 {
            return Err(LifeError::Configuration("Number of steps must be positive".to_string()));
        }
        if initial.dimensions() != (rows, cols) {
            return Err(LifeError::Configuration(format!(
                "Initial grid is {}x{}, expected {}x{}",
                initial.rows, initial.cols, rows, cols
            )));
        }

        Ok(Self {
            grid: initial,
            previous_grid: None,
            step_counter: 0,
            steps,
        })
    }

    /// Advance by one tick.
    ///
    /// The first [`WARMUP_TICKS`] calls only bump the counter; later calls
    /// apply the rule and keep the replaced grid as `previous_grid`.
    pub fn advance(&mut self) {
        if self.step_counter >= WARMUP_TICKS {
            let next = GameOfLifeRules::evolve(&self.grid);
            self.previous_grid = Some(std::mem::replace(&mut self.grid, next));
        }
        self.step_counter += 1;
        debug!(step = self.step_counter, living = self.grid.living_count(), "advanced");
    }

    /// Current grid snapshot
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Grid before the most recent rule application, if any
    pub fn previous_grid(&self) -> Option<&Grid> {
        self.previous_grid.as_ref()
    }

    pub fn step_counter(&self) -> usize {
        self.step_counter
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn state(&self) -> EngineState {
        if self.step_counter == 0 {
            EngineState::Ready
        } else if self.step_counter < self.steps {
            EngineState::Running
        } else {
            EngineState::Done
        }
    }
}
