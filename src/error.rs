//! Error types for the simulation core

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by grid construction, pattern loading and pattern placement
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("failed to parse pattern file {}: {reason}", .path.display())]
    PatternParse { path: PathBuf, reason: String },

    #[error(
        "pattern '{name}' ({}x{}) placed at ({}, {}) does not fit in a {}x{} grid",
        .pattern_size.0, .pattern_size.1, .origin.0, .origin.1, .grid_size.0, .grid_size.1
    )]
    PlacementOutOfBounds {
        name: String,
        origin: (usize, usize),
        pattern_size: (usize, usize),
        grid_size: (usize, usize),
    },

    #[error("coordinates ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid arguments for pattern '{pattern}': {reason}")]
    InvalidPatternArgs { pattern: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type LifeResult<T> = std::result::Result<T, LifeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_message() {
        let err = LifeError::PlacementOutOfBounds {
            name: "GLIDER".to_string(),
            origin: (4, 4),
            pattern_size: (3, 3),
            grid_size: (5, 5),
        };
        let message = err.to_string();
        assert!(message.contains("GLIDER"));
        assert!(message.contains("(4, 4)"));
        assert!(message.contains("5x5"));
    }
}
