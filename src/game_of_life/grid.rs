//! Grid representation and utilities for Game of Life

use crate::config::BoundaryCondition;
use crate::error::{LifeError, LifeResult};
use serde::{Deserialize, Serialize};

/// Fixed-size grid of cells, `true` is alive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<bool>,
    #[serde(default)]
    pub boundary_condition: BoundaryCondition,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(rows: usize, cols: usize, boundary_condition: BoundaryCondition) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
            boundary_condition,
        }
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>, boundary_condition: BoundaryCondition) -> LifeResult<Self> {
        if cells.is_empty() {
            return Err(LifeError::Configuration("Grid cannot be empty".to_string()));
        }

        let rows = cells.len();
        let cols = cells[0].len();

        if cols == 0 {
            return Err(LifeError::Configuration("Grid width cannot be zero".to_string()));
        }

        for (i, row) in cells.iter().enumerate() {
            if row.len() != cols {
                return Err(LifeError::Configuration(format!(
                    "Row {} has length {}, expected {}", i, row.len(), cols
                )));
            }
        }

        let flat_cells: Vec<bool> = cells.into_iter().flatten().collect();

        Ok(Self {
            rows,
            cols,
            cells: flat_cells,
            boundary_condition,
        })
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Dimensions as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get cell value at coordinates
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[self.index(row, col)]
        } else {
            false // Out of bounds cells are considered dead
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> LifeResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(LifeError::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Count living cells among the 8 neighbours of a cell
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in [-1, 0, 1].iter() {
            for dc in [-1, 0, 1].iter() {
                if *dr == 0 && *dc == 0 {
                    continue;
                }

                let r = row as isize + dr;
                let c = col as isize + dc;

                if self.is_neighbor_alive(r, c) {
                    count += 1;
                }
            }
        }

        count
    }

    fn is_neighbor_alive(&self, row: isize, col: isize) -> bool {
        match self.boundary_condition {
            BoundaryCondition::Dead => {
                if row >= 0 && row < self.rows as isize && col >= 0 && col < self.cols as isize {
                    self.cells[self.index(row as usize, col as usize)]
                } else {
                    false
                }
            }
            BoundaryCondition::Wrap => {
                let wrapped_row = row.rem_euclid(self.rows as isize) as usize;
                let wrapped_col = col.rem_euclid(self.cols as isize) as usize;
                self.cells[self.index(wrapped_row, wrapped_col)]
            }
        }
    }

    /// Cell-wise logical OR of `other` into this grid.
    /// Grids of different dimensions are rejected.
    pub fn union_with(&mut self, other: &Grid) -> LifeResult<()> {
        if self.dimensions() != other.dimensions() {
            return Err(LifeError::Configuration(format!(
                "Cannot union a {}x{} grid into a {}x{} grid",
                other.rows, other.cols, self.rows, self.cols
            )));
        }
        for (cell, &other_cell) in self.cells.iter_mut().zip(other.cells.iter()) {
            *cell |= other_cell;
        }
        Ok(())
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        let mut living = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.get(row, col) {
                    living.push((row, col));
                }
            }
        }
        living
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}
