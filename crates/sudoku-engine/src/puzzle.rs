//! Service facade: the two entry points the surrounding application calls,
//! in the external `(col, row)` coordinate convention.

use crate::generator::{Difficulty, Generator};
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::solver::Solver;
use std::collections::BTreeMap;

/// Answer key for a puzzle's blanks, keyed by external `(col, row)`
/// coordinates
pub type SolutionMap = BTreeMap<(u8, u8), u8>;

/// A generated puzzle in the external representation
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// The carved grid handed to the player
    pub grid: Grid,
    /// Removed digit per `(col, row)` coordinate
    pub solution: SolutionMap,
}

/// Facade over [`Generator`] and [`Solver`].
///
/// The engine works in `(row, col)` throughout; the boundary representation
/// is `(col, row)`. This facade is the single place where the two
/// conventions meet; the swap never leaks into the solver or the carver.
pub struct PuzzleService {
    generator: Generator,
}

impl Default for PuzzleService {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleService {
    /// Create a new service
    pub fn new() -> Self {
        Self {
            generator: Generator::new(),
        }
    }

    /// Create a service whose generation stream is reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self {
            generator: Generator::with_seed(seed),
        }
    }

    /// Generate a new puzzle at the given difficulty.
    ///
    /// The blank count can fall short of the difficulty target when no
    /// further cell can be removed without losing uniqueness; callers that
    /// require the exact count treat that as a soft failure and generate
    /// again.
    pub fn generate(&mut self, difficulty: Difficulty) -> Puzzle {
        let generated = self.generator.generate(difficulty);
        let solution = generated
            .removed
            .iter()
            .map(|(pos, &digit)| ((pos.col as u8, pos.row as u8), digit))
            .collect();
        Puzzle {
            grid: generated.puzzle,
            solution,
        }
    }

    /// Attempt to fully solve an externally supplied partial grid.
    ///
    /// Returns the digits the solver filled in, keyed `(col, row)`; given
    /// cells are not echoed back. An invalid or unsolvable grid yields an
    /// empty map.
    pub fn solve(&self, grid: &Grid) -> SolutionMap {
        let solver = Solver::new();
        let mut rng = SimpleRng::new();
        match solver.solve(grid, &mut rng) {
            Ok(solved) => solved
                .placements
                .iter()
                .map(|(pos, &digit)| ((pos.col as u8, pos.row as u8), digit))
                .collect(),
            Err(_) => SolutionMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_generate_swaps_coordinates_at_the_boundary() {
        let mut service = PuzzleService::with_seed(42);
        let puzzle = service.generate(Difficulty::Easy);

        assert_eq!(puzzle.grid.empty_count(), puzzle.solution.len());
        let mut reconstructed = puzzle.grid;
        for (&(col, row), &digit) in &puzzle.solution {
            let pos = Position::new(row as usize, col as usize);
            // Each key addresses a blank cell of the puzzle once the swap
            // is undone
            assert_eq!(puzzle.grid.get(pos), None);
            assert!((1..=9).contains(&digit));
            reconstructed.set(pos, Some(digit));
        }
        assert!(reconstructed.is_complete());
    }

    #[test]
    fn test_generate_easy_then_hard_differ() {
        let mut service = PuzzleService::with_seed(42);
        let easy = service.generate(Difficulty::Easy);
        let hard = service.generate(Difficulty::Hard);
        assert_ne!(easy.grid, hard.grid);

        let solver = Solver::new();
        assert!(solver.has_unique_solution(&easy.grid));
        assert!(solver.has_unique_solution(&hard.grid));
    }

    #[test]
    fn test_solve_returns_the_blanks() {
        let service = PuzzleService::new();
        let grid = Grid::from_string(PUZZLE).unwrap();
        let solution = service.solve(&grid);

        assert_eq!(solution.len(), grid.empty_count());
        let expected = Grid::from_string(SOLVED).unwrap();
        for (&(col, row), &digit) in &solution {
            let pos = Position::new(row as usize, col as usize);
            assert_eq!(grid.get(pos), None, "solver echoed a given back");
            assert_eq!(expected.get(pos), Some(digit));
        }
    }

    #[test]
    fn test_solve_invalid_grid_yields_empty_map() {
        let service = PuzzleService::new();
        let mut grid = Grid::from_string(PUZZLE).unwrap();
        grid.set(Position::new(0, 8), Some(5)); // duplicate 5 in row 0
        assert!(service.solve(&grid).is_empty());
    }

    #[test]
    fn test_solve_unsolvable_grid_yields_empty_map() {
        let service = PuzzleService::new();
        let mut grid = Grid::new();
        for col in 1..9 {
            grid.set(Position::new(0, col), Some(col as u8 + 1));
        }
        grid.set(Position::new(1, 0), Some(1));
        assert!(grid.is_valid());
        assert!(service.solve(&grid).is_empty());
    }

    #[test]
    fn test_solve_complete_grid_yields_empty_map() {
        // Nothing left to fill
        let service = PuzzleService::new();
        let grid = Grid::from_string(SOLVED).unwrap();
        assert!(service.solve(&grid).is_empty());
    }

    #[test]
    fn test_generated_puzzle_solves_through_the_facade() {
        let mut service = PuzzleService::with_seed(5);
        let puzzle = service.generate(Difficulty::Medium);
        let solution = service.solve(&puzzle.grid);
        // The puzzle is unique by construction, so the facade's solve must
        // agree with the generation-time answer key
        assert_eq!(solution, puzzle.solution);
    }
}
