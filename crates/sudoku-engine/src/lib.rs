//! Sudoku puzzle generation and solving engine.
//!
//! Produces 9×9 puzzles guaranteed to have exactly one solution and solves
//! externally supplied partial grids. Four pieces compose top-down:
//!
//! - [`Grid`]: the board and its constraint predicates
//! - [`Solver`]: randomized backtracking search plus the solution-count
//!   oracle used for uniqueness checks
//! - [`Generator`]: carves cells out of a solved grid while uniqueness
//!   holds
//! - [`PuzzleService`]: the facade the surrounding application calls, in
//!   external `(col, row)` coordinates
//!
//! The engine is synchronous and CPU-bound with no internal concurrency or
//! cancellation; embedders run [`PuzzleService`] calls on a worker thread of
//! their choosing.

mod generator;
mod grid;
mod puzzle;
mod rng;
mod solver;

pub use generator::{Difficulty, GeneratedPuzzle, Generator};
pub use grid::{Grid, Position};
pub use puzzle::{Puzzle, PuzzleService, SolutionMap};
pub use rng::SimpleRng;
pub use solver::{SolveError, Solved, Solver};
