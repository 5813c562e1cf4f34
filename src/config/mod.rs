//! Configuration management for the Game of Life simulation

pub mod settings;

pub use settings::{
    Settings, SimulationConfig, SeedConfig, PatternConfig, DisplayConfig, OutputConfig,
    BoundaryCondition, OutputFormat, CliOverrides
};
