//! Game of Life core functionality

pub mod grid;
pub mod rules;
pub mod engine;
pub mod io;

pub use grid::Grid;
pub use rules::GameOfLifeRules;
pub use engine::{EngineState, SimulationEngine, WARMUP_TICKS};
pub use io::{load_grid_from_file, save_grid_to_file};
