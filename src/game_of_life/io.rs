//! File I/O for grid snapshots

use super::Grid;
use crate::config::OutputFormat;
use crate::patterns::{format_pattern, PatternDefinition};
use anyhow::{Context, Result};
use std::path::Path;

/// Save a grid snapshot.
/// `Text` writes a pattern file named `name`, so a saved snapshot can be
/// dropped into the pattern library and used as a seed.
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P, format: OutputFormat, name: &str) -> Result<()> {
    let content = match format {
        OutputFormat::Text => format_pattern(name, grid),
        OutputFormat::Json => serde_json::to_string_pretty(grid)
            .context("Failed to serialize grid")?,
    };

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Load a grid snapshot; `.json` files are read as JSON, anything else as a pattern file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid file: {}", path.display()))?;
        let grid: Grid = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse grid from file: {}", path.display()))?;
        if grid.cells.len() != grid.rows * grid.cols {
            anyhow::bail!(
                "Grid file {} declares {}x{} but holds {} cells",
                path.display(), grid.rows, grid.cols, grid.cells.len()
            );
        }
        Ok(grid)
    } else {
        let pattern = PatternDefinition::load(path)
            .with_context(|| format!("Failed to load grid from file: {}", path.display()))?;
        Ok(pattern.cells().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundaryCondition;
    use tempfile::tempdir;

    fn sample_grid() -> Grid {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
        ];
        Grid::from_cells(cells, BoundaryCondition::Dead).unwrap()
    }

    #[test]
    fn test_text_snapshot() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("out/final.cells");

        save_grid_to_file(&sample_grid(), &file_path, OutputFormat::Text, "final state").unwrap();

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "!NAME: final state\nO.O\n.O.\n");
        assert_eq!(load_grid_from_file(&file_path).unwrap(), sample_grid());
    }

    #[test]
    fn test_json_snapshot() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("final.json");

        save_grid_to_file(&sample_grid(), &file_path, OutputFormat::Json, "ignored").unwrap();
        assert_eq!(load_grid_from_file(&file_path).unwrap(), sample_grid());
    }

    #[test]
    fn test_inconsistent_json_rejected() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("bad.json");
        std::fs::write(&file_path, r#"{"rows": 2, "cols": 2, "cells": [true]}"#).unwrap();

        assert!(load_grid_from_file(&file_path).is_err());
    }
}
