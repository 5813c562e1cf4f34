//! Conway's B3/S23 rule

use super::Grid;
use rayon::prelude::*;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next generation.
    ///
    /// Every neighbour count is read from `current`; results land in a fresh
    /// buffer, so no worker ever observes a partially updated grid.
    pub fn evolve(current: &Grid) -> Grid {
        let next_cells: Vec<bool> = (0..current.rows * current.cols)
            .into_par_iter()
            .map(|idx| {
                let (row, col) = (idx / current.cols, idx % current.cols);
                Self::should_be_alive(current.cells[idx], current.count_neighbors(row, col))
            })
            .collect();

        Grid {
            rows: current.rows,
            cols: current.cols,
            cells: next_cells,
            boundary_condition: current.boundary_condition,
        }
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }
}
