//! Puzzle generation: fill a solved grid, then carve cells out of it while
//! the puzzle keeps exactly one solution.

use crate::grid::{Grid, Position};
use crate::rng::SimpleRng;
use crate::solver::Solver;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Difficulty of a generated puzzle, expressed as the number of cells the
/// carver tries to blank out of 81. Pure configuration; no other behavior
/// attaches to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Target number of blanked cells for this difficulty
    pub fn target_blanks(&self) -> usize {
        match self {
            Difficulty::Easy => 40,
            Difficulty::Medium => 50,
            Difficulty::Hard => 64,
        }
    }

    /// All difficulty levels
    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A carved puzzle plus the digits removed from its solved grid
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// The puzzle grid, carved cells set to empty
    pub puzzle: Grid,
    /// Digit removed at each carved position
    pub removed: BTreeMap<Position, u8>,
}

/// Sudoku puzzle generator
pub struct Generator {
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Generate a puzzle with the given difficulty.
    ///
    /// The carve may fall short of the difficulty's target on an unlucky
    /// solved grid; the result then simply carries fewer blanks. A caller
    /// that needs the exact count generates again from a fresh grid.
    pub fn generate(&mut self, difficulty: Difficulty) -> GeneratedPuzzle {
        let solved = self.fill_grid();
        let (puzzle, removed) = self.carve(&solved, difficulty.target_blanks());
        GeneratedPuzzle { puzzle, removed }
    }

    /// Produce a completely filled valid grid
    fn fill_grid(&mut self) -> Grid {
        let solver = Solver::new();
        loop {
            // An empty grid is trivially valid and always completable, so
            // this succeeds on the first pass.
            if let Ok(solved) = solver.solve(&Grid::new(), &mut self.rng) {
                return solved.grid;
            }
        }
    }

    /// Remove up to `target` cells from a solved grid, keeping the solution
    /// unique.
    ///
    /// Candidates come from one shuffled permutation of all 81 positions, so
    /// no cell is tried twice and the loop runs at most 81 uniqueness
    /// checks. A removal that leaves more than one completion is rolled back
    /// and the next candidate is tried; exhausting the permutation before
    /// `target` is an expected outcome, not an error.
    pub fn carve(&mut self, solved: &Grid, target: usize) -> (Grid, BTreeMap<Position, u8>) {
        let solver = Solver::new();
        let mut puzzle = *solved;
        let mut removed = BTreeMap::new();

        let mut candidates: Vec<Position> = Position::all_9x9().collect();
        self.rng.shuffle(&mut candidates);

        for pos in candidates {
            if removed.len() == target {
                break;
            }
            let digit = match puzzle.get(pos) {
                Some(digit) => digit,
                // Skip cells already blank (cannot occur with a
                // duplicate-free permutation)
                None => continue,
            };
            puzzle.set(pos, None);
            if solver.has_unique_solution(&puzzle) {
                removed.insert(pos, digit);
            } else {
                puzzle.set(pos, Some(digit));
            }
        }

        (puzzle, removed)
    }
}
