//! Pattern file format
//!
//! ```text
//! !NAME: Glider
//! !Any other line starting with '!' is a comment
//! .O.
//! ..O
//! OOO
//! ```
//!
//! `O` is a live cell, every other character is dead. Short rows are padded
//! with dead cells to the width of the longest row.

use crate::config::BoundaryCondition;
use crate::error::{LifeError, LifeResult};
use crate::game_of_life::Grid;
use std::path::Path;

const HEADER_KEY: &str = "NAME";
const ALIVE: char = 'O';
const DEAD: char = '.';

/// A pattern loaded from disk: an upper-cased name and its bounding box of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDefinition {
    name: String,
    cells: Grid,
}

impl PatternDefinition {
    /// Load and parse a pattern file
    pub fn load<P: AsRef<Path>>(path: P) -> LifeResult<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content, path.as_ref())
    }

    /// Parse pattern text; `source` only labels errors
    pub fn parse(content: &str, source: &Path) -> LifeResult<Self> {
        let mut lines = content.lines();
        let name = parse_header(lines.next().unwrap_or(""), source)?;

        let mut rows: Vec<Vec<bool>> = lines
            .filter(|line| !line.starts_with('!'))
            .map(|line| line.chars().map(|ch| ch == ALIVE).collect())
            .collect();

        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(LifeError::PatternParse {
                path: source.to_path_buf(),
                reason: format!("pattern '{}' has no cells", name),
            });
        }
        for row in rows.iter_mut() {
            row.resize(width, false);
        }

        let cells = Grid::from_cells(rows, BoundaryCondition::Dead)?;
        Ok(Self { name, cells })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bounding box as `(rows, cols)`
    pub fn size(&self) -> (usize, usize) {
        self.cells.dimensions()
    }

    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    /// Copy the pattern into `grid` with its top-left corner at `origin`.
    /// A pattern that would cross the grid edge is rejected, never clipped.
    pub fn stamp_onto(&self, grid: &mut Grid, origin: (usize, usize)) -> LifeResult<()> {
        let (pat_rows, pat_cols) = self.size();
        let (row0, col0) = origin;

        let exceeds = |start: usize, len: usize, limit: usize| {
            start.checked_add(len).map_or(true, |end| end > limit)
        };
        if exceeds(row0, pat_rows, grid.rows) || exceeds(col0, pat_cols, grid.cols) {
            return Err(LifeError::PlacementOutOfBounds {
                name: self.name.clone(),
                origin,
                pattern_size: (pat_rows, pat_cols),
                grid_size: grid.dimensions(),
            });
        }

        for (row, col) in self.cells.living_cells() {
            grid.set(row0 + row, col0 + col, true)?;
        }
        Ok(())
    }
}

/// Extract the upper-cased pattern name from a `!NAME: <name>` header line
pub fn parse_header(line: &str, source: &Path) -> LifeResult<String> {
    let parse_error = |reason: &str| LifeError::PatternParse {
        path: source.to_path_buf(),
        reason: reason.to_string(),
    };

    let header = line
        .trim()
        .strip_prefix('!')
        .ok_or_else(|| parse_error("first line is not a '!NAME:' header"))?;
    let (key, value) = header
        .split_once(':')
        .ok_or_else(|| parse_error("header has no ':' separator"))?;

    if !key.trim().eq_ignore_ascii_case(HEADER_KEY) {
        return Err(parse_error("first line is not a '!NAME:' header"));
    }

    let name = value.trim();
    if name.is_empty() {
        return Err(parse_error("pattern name is empty"));
    }
    Ok(name.to_uppercase())
}

/// Read only the header of a pattern file
pub fn read_pattern_name<P: AsRef<Path>>(path: P) -> LifeResult<String> {
    let content = std::fs::read_to_string(&path)?;
    parse_header(content.lines().next().unwrap_or(""), path.as_ref())
}

/// Render a grid in pattern file format under `name`
pub fn format_pattern(name: &str, grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.rows * (grid.cols + 1) + name.len() + 8);
    result.push_str(&format!("!{}: {}\n", HEADER_KEY, name));

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            result.push(if grid.get(row, col) { ALIVE } else { DEAD });
        }
        result.push('\n');
    }

    result
}
