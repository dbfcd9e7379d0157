//! Backtracking search: grid completion and the solution-count oracle.
//!
//! Both operations share one recursion shape (scan for the first empty cell
//! in row-major order, try candidate digits, place, recurse, undo) and
//! differ only in termination policy. Recursion depth is bounded by the 81
//! cells; there are no internal timeouts or cancellation points, so a caller
//! wanting either runs the search on a task it can abandon.

use crate::grid::{Grid, Position};
use crate::rng::SimpleRng;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

const DIGITS: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Why a solve attempt produced no solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The input grid already violates a row, column, or box constraint
    InvalidGrid,
    /// The grid is legal but has no completion
    Unsatisfiable,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidGrid => {
                write!(f, "grid violates a row, column, or box constraint")
            }
            SolveError::Unsatisfiable => write!(f, "grid has no completion"),
        }
    }
}

impl Error for SolveError {}

/// A completed grid plus the placements the search made.
///
/// `placements` covers exactly the cells that were empty in the input, so a
/// caller solving a partial puzzle can tell solver-filled cells apart from
/// the givens it supplied.
#[derive(Debug, Clone)]
pub struct Solved {
    pub grid: Grid,
    pub placements: BTreeMap<Position, u8>,
}

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Complete the grid by randomized backtracking.
    ///
    /// The input is validated up front: a grid that already violates a
    /// constraint fails with [`SolveError::InvalidGrid`] before any search,
    /// since the recursion assumes placed digits are legal and never
    /// re-checks them. Candidate digits are tried in a freshly shuffled
    /// order at each cell, which is what makes grids filled from empty vary
    /// run to run. A legal grid with no completion fails with
    /// [`SolveError::Unsatisfiable`]; both failures are normal outcomes,
    /// not faults.
    pub fn solve(&self, grid: &Grid, rng: &mut SimpleRng) -> Result<Solved, SolveError> {
        if !grid.is_valid() {
            return Err(SolveError::InvalidGrid);
        }
        let mut working = *grid;
        if !Self::fill_recursive(&mut working, rng) {
            return Err(SolveError::Unsatisfiable);
        }
        let placements = grid
            .empty_positions()
            .into_iter()
            .filter_map(|pos| working.get(pos).map(|digit| (pos, digit)))
            .collect();
        Ok(Solved {
            grid: working,
            placements,
        })
    }

    /// Count completions of the grid, stopping as soon as `limit` is
    /// reached.
    ///
    /// Digit order is fixed here: only the count matters, so shuffling
    /// would change speed at best. An invalid grid has zero completions.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        if limit == 0 || !grid.is_valid() {
            return 0;
        }
        let mut working = *grid;
        Self::count_recursive(&mut working, 0, limit)
    }

    /// Check if the puzzle has exactly one solution.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }

    fn fill_recursive(grid: &mut Grid, rng: &mut SimpleRng) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => return true, // Every cell filled
        };
        let mut digits = DIGITS;
        rng.shuffle(&mut digits);
        for &digit in &digits {
            if grid.is_safe(pos, digit) {
                grid.set(pos, Some(digit));
                if Self::fill_recursive(grid, rng) {
                    return true;
                }
                grid.set(pos, None); // Backtrack
            }
        }
        // No candidate fits the first empty cell
        false
    }

    /// Depth-first count, returned functionally up the recursion. Every exit
    /// path restores the cell it touched, including the early exit once
    /// `found` reaches `limit`.
    fn count_recursive(grid: &mut Grid, mut found: usize, limit: usize) -> usize {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => return found + 1, // One full assignment reached
        };
        for digit in DIGITS {
            if grid.is_safe(pos, digit) {
                grid.set(pos, Some(digit));
                found = Self::count_recursive(grid, found, limit);
                grid.set(pos, None);
                if found >= limit {
                    break;
                }
            }
        }
        found
    }
}
