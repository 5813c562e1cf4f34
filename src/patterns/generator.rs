//! Initial grid generation from a named pattern

use super::library::PatternLibrary;
use crate::config::BoundaryCondition;
use crate::error::{LifeError, LifeResult};
use crate::game_of_life::Grid;
use rand::Rng;
use tracing::warn;

pub const RANDOM_PATTERN: &str = "random";
pub const MIXED_PATTERN: &str = "mixed pattern";

/// Lowest row used for a randomly placed pattern
const MIN_RANDOM_ROW: usize = 2;

/// Which strategy produces a grid for a pattern name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternKind {
    Random,
    Mixed,
    FileBacked(String),
}

impl PatternKind {
    /// Resolve a pattern name, case-insensitively
    pub fn resolve(name: &str) -> Self {
        let normalized = name.trim();
        if normalized.eq_ignore_ascii_case(RANDOM_PATTERN) {
            PatternKind::Random
        } else if normalized.eq_ignore_ascii_case(MIXED_PATTERN) || normalized.eq_ignore_ascii_case("mixed") {
            PatternKind::Mixed
        } else {
            PatternKind::FileBacked(normalized.to_uppercase())
        }
    }
}

/// A pattern name paired with typed arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternRequest {
    /// `live_cells` defaults to a draw from `[total/16, total/8]`
    Random { live_cells: Option<usize> },
    /// Union of `count` library patterns sampled with replacement
    Mixed { count: usize },
    /// `origin` is the top-left corner; random when absent
    FileBacked { name: String, origin: Option<(usize, usize)> },
}

impl PatternRequest {
    /// Build a request from a pattern name and its raw argument list
    pub fn from_args(name: &str, args: &[usize]) -> LifeResult<Self> {
        let invalid = |reason: &str| LifeError::InvalidPatternArgs {
            pattern: name.to_string(),
            reason: reason.to_string(),
        };

        match PatternKind::resolve(name) {
            PatternKind::Random => match args {
                [] => Ok(PatternRequest::Random { live_cells: None }),
                [count] => Ok(PatternRequest::Random { live_cells: Some(*count) }),
                _ => Err(invalid("expected at most one argument (number of live cells)")),
            },
            PatternKind::Mixed => match args {
                [count] => Ok(PatternRequest::Mixed { count: *count }),
                _ => Err(invalid("expected exactly one argument (number of patterns)")),
            },
            PatternKind::FileBacked(name) => match args {
                [] => Ok(PatternRequest::FileBacked { name, origin: None }),
                [row, col] => Ok(PatternRequest::FileBacked { name, origin: Some((*row, *col)) }),
                _ => Err(invalid("expected no arguments or a (row, col) origin")),
            },
        }
    }
}

/// Produces initial grids, consulting a shared pattern library
pub struct PatternGenerator<'a> {
    library: &'a PatternLibrary,
    boundary_condition: BoundaryCondition,
}

impl<'a> PatternGenerator<'a> {
    pub fn new(library: &'a PatternLibrary, boundary_condition: BoundaryCondition) -> Self {
        Self {
            library,
            boundary_condition,
        }
    }

    /// Generate a grid for a pattern name and raw arguments
    pub fn generate_named<R: Rng + ?Sized>(
        &self,
        rows: usize,
        cols: usize,
        name: &str,
        args: &[usize],
        rng: &mut R,
    ) -> LifeResult<Grid> {
        let request = PatternRequest::from_args(name, args)?;
        self.generate(rows, cols, &request, rng)
    }

    /// Generate a `rows x cols` grid for a request.
    ///
    /// Unknown library names log a warning and yield a blank grid; a pattern
    /// that does not fit at its origin is an error.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rows: usize,
        cols: usize,
        request: &PatternRequest,
        rng: &mut R,
    ) -> LifeResult<Grid> {
        match request {
            PatternRequest::Random { live_cells } => Ok(self.random(rows, cols, *live_cells, rng)),
            PatternRequest::Mixed { count } => self.mixed(rows, cols, *count, rng),
            PatternRequest::FileBacked { name, origin } => self.file_backed(rows, cols, name, *origin, rng),
        }
    }

    fn random<R: Rng + ?Sized>(&self, rows: usize, cols: usize, live_cells: Option<usize>, rng: &mut R) -> Grid {
        let mut grid = Grid::new(rows, cols, self.boundary_condition);
        if rows == 0 || cols == 0 {
            return grid;
        }

        let live_cells = live_cells.unwrap_or_else(|| {
            let (lo, hi) = default_live_cell_range(rows * cols);
            rng.random_range(lo..=hi)
        });

        // Duplicate draws land on an already-live cell
        for _ in 0..live_cells {
            let row = rng.random_range(0..rows);
            let col = rng.random_range(0..cols);
            let idx = grid.index(row, col);
            grid.cells[idx] = true;
        }
        grid
    }

    fn mixed<R: Rng + ?Sized>(&self, rows: usize, cols: usize, count: usize, rng: &mut R) -> LifeResult<Grid> {
        let mut grid = Grid::new(rows, cols, self.boundary_condition);
        let names = self.library.names();
        if names.is_empty() {
            warn!("Pattern library is empty, mixed pattern produces a blank grid");
            return Ok(grid);
        }

        for _ in 0..count {
            let name = names[rng.random_range(0..names.len())];
            let part = self.file_backed(rows, cols, name, None, rng)?;
            grid.union_with(&part)?;
        }
        Ok(grid)
    }

    fn file_backed<R: Rng + ?Sized>(
        &self,
        rows: usize,
        cols: usize,
        name: &str,
        origin: Option<(usize, usize)>,
        rng: &mut R,
    ) -> LifeResult<Grid> {
        let mut grid = Grid::new(rows, cols, self.boundary_condition);

        let pattern = match self.library.load(name) {
            Some(pattern) => pattern?,
            None => {
                warn!("Pattern '{}' not found, starting from a blank grid", name);
                return Ok(grid);
            }
        };

        let origin = origin.unwrap_or_else(|| random_origin(rows, cols, rng));
        pattern.stamp_onto(&mut grid, origin)?;
        Ok(grid)
    }
}

/// Inclusive bounds for the default number of random live cells
pub fn default_live_cell_range(total_cells: usize) -> (usize, usize) {
    let lo = (total_cells / 16).max(1);
    let hi = (total_cells / 8).max(lo);
    (lo, hi)
}

/// Random top-left corner in the upper-left two thirds of the grid
fn random_origin<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> (usize, usize) {
    let row_hi = (rows.saturating_sub(1) * 2 / 3).max(MIN_RANDOM_ROW);
    let col_hi = cols.saturating_sub(1) * 2 / 3;
    (
        rng.random_range(MIN_RANDOM_ROW..=row_hi),
        rng.random_range(0..=col_hi),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::{tempdir, TempDir};

    fn library_with(patterns: &[(&str, &str)]) -> (TempDir, PatternLibrary) {
        let temp_dir = tempdir().unwrap();
        for (file, content) in patterns {
            std::fs::write(temp_dir.path().join(file), content).unwrap();
        }
        let library = PatternLibrary::scan(temp_dir.path()).unwrap();
        (temp_dir, library)
    }

    fn glider_library() -> (TempDir, PatternLibrary) {
        library_with(&[
            ("glider.cells", "!NAME: Glider\n.O.\n..O\nOOO\n"),
            ("block.cells", "!NAME: Block\nOO\nOO\n"),
        ])
    }

    #[test]
    fn test_resolve_kinds() {
        assert_eq!(PatternKind::resolve("Random"), PatternKind::Random);
        assert_eq!(PatternKind::resolve("Mixed Pattern"), PatternKind::Mixed);
        assert_eq!(PatternKind::resolve("acorn"), PatternKind::FileBacked("ACORN".to_string()));
    }

    #[test]
    fn test_request_argument_shapes() {
        assert_eq!(
            PatternRequest::from_args("random", &[]).unwrap(),
            PatternRequest::Random { live_cells: None }
        );
        assert_eq!(
            PatternRequest::from_args("glider", &[4, 5]).unwrap(),
            PatternRequest::FileBacked { name: "GLIDER".to_string(), origin: Some((4, 5)) }
        );
        assert!(matches!(
            PatternRequest::from_args("mixed pattern", &[]),
            Err(LifeError::InvalidPatternArgs { .. })
        ));
        assert!(PatternRequest::from_args("glider", &[1]).is_err());
        assert!(PatternRequest::from_args("random", &[1, 2]).is_err());
    }

    #[test]
    fn test_random_with_zero_cells_is_blank() {
        let library = PatternLibrary::default();
        let generator = PatternGenerator::new(&library, BoundaryCondition::Dead);
        let mut rng = StdRng::seed_from_u64(1);

        let grid = generator.generate_named(10, 12, "random", &[0], &mut rng).unwrap();
        assert_eq!(grid.dimensions(), (10, 12));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_random_explicit_count_upper_bound() {
        let library = PatternLibrary::default();
        let generator = PatternGenerator::new(&library, BoundaryCondition::Dead);
        let mut rng = StdRng::seed_from_u64(2);

        let grid = generator.generate_named(8, 30, "random", &[40], &mut rng).unwrap();
        assert!(grid.living_count() >= 1);
        assert!(grid.living_count() <= 40);
    }

    #[test]
    fn test_random_default_density() {
        let library = PatternLibrary::default();
        let generator = PatternGenerator::new(&library, BoundaryCondition::Dead);
        let mut rng = StdRng::seed_from_u64(3);

        let grid = generator.generate_named(40, 40, "random", &[], &mut rng).unwrap();
        let (_, hi) = default_live_cell_range(1600);
        assert!(grid.living_count() >= 1);
        assert!(grid.living_count() <= hi);
    }

    #[test]
    fn test_random_uses_all_columns() {
        // Wide grid: columns beyond the row count must be reachable
        let library = PatternLibrary::default();
        let generator = PatternGenerator::new(&library, BoundaryCondition::Dead);
        let mut rng = StdRng::seed_from_u64(4);

        let grid = generator.generate_named(4, 64, "random", &[200], &mut rng).unwrap();
        assert!(grid.living_cells().iter().any(|&(_, col)| col >= 4));
    }

    #[test]
    fn test_default_live_cell_range() {
        assert_eq!(default_live_cell_range(1600), (100, 200));
        assert_eq!(default_live_cell_range(4), (1, 1));
        assert_eq!(default_live_cell_range(20), (1, 2));
    }

    #[test]
    fn test_file_backed_placement() {
        let (_dir, library) = glider_library();
        let generator = PatternGenerator::new(&library, BoundaryCondition::Dead);
        let mut rng = StdRng::seed_from_u64(5);

        let grid = generator.generate_named(10, 10, "glider", &[1, 2], &mut rng).unwrap();
        assert_eq!(grid.living_cells(), vec![(1, 3), (2, 4), (3, 2), (3, 3), (3, 4)]);
    }

    #[test]
    fn test_file_backed_random_origin_in_range() {
        let (_dir, library) = glider_library();
        let generator = PatternGenerator::new(&library, BoundaryCondition::Dead);
        let mut rng = StdRng::seed_from_u64(6);

        for _ in 0..20 {
            let grid = generator.generate_named(31, 31, "BLOCK", &[], &mut rng).unwrap();
            let cells = grid.living_cells();
            assert_eq!(cells.len(), 4);
            let (row0, col0) = cells[0];
            assert!((2..=20).contains(&row0));
            assert!(col0 <= 20);
        }
    }

    #[test]
    fn test_placement_out_of_bounds_is_error() {
        let (_dir, library) = glider_library();
        let generator = PatternGenerator::new(&library, BoundaryCondition::Dead);
        let mut rng = StdRng::seed_from_u64(7);

        let result = generator.generate_named(10, 10, "glider", &[8, 0], &mut rng);
        assert!(matches!(result, Err(LifeError::PlacementOutOfBounds { .. })));

        let result = generator.generate_named(10, 10, "glider", &[usize::MAX, 0], &mut rng);
        assert!(matches!(result, Err(LifeError::PlacementOutOfBounds { .. })));
    }

    #[test]
    fn test_unknown_pattern_is_blank() {
        let (_dir, library) = glider_library();
        let generator = PatternGenerator::new(&library, BoundaryCondition::Dead);
        let mut rng = StdRng::seed_from_u64(8);

        let grid = generator.generate_named(7, 9, "DOES-NOT-EXIST", &[], &mut rng).unwrap();
        assert_eq!(grid.dimensions(), (7, 9));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_mixed_unions_library_patterns() {
        let (_dir, library) = library_with(&[("block.cells", "!NAME: Block\nOO\nOO\n")]);
        let generator = PatternGenerator::new(&library, BoundaryCondition::Dead);
        let mut rng = StdRng::seed_from_u64(9);

        let grid = generator.generate_named(30, 30, "mixed pattern", &[3], &mut rng).unwrap();
        assert!(grid.living_count() >= 4);
        assert!(grid.living_count() <= 12);
    }

    #[test]
    fn test_mixed_with_empty_library_is_blank() {
        let library = PatternLibrary::default();
        let generator = PatternGenerator::new(&library, BoundaryCondition::Dead);
        let mut rng = StdRng::seed_from_u64(10);

        let grid = generator.generate_named(5, 5, "Mixed Pattern", &[4], &mut rng).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let (_dir, library) = glider_library();
        let generator = PatternGenerator::new(&library, BoundaryCondition::Dead);

        let first = generator
            .generate_named(40, 40, "mixed pattern", &[5], &mut StdRng::seed_from_u64(11))
            .unwrap();
        let second = generator
            .generate_named(40, 40, "mixed pattern", &[5], &mut StdRng::seed_from_u64(11))
            .unwrap();
        assert_eq!(first, second);
    }
}
