//! Basic example of using the Sudoku engine

use sudoku_engine::{Difficulty, Grid, PuzzleService};

fn main() {
    // Generate a puzzle
    println!("Generating a Medium difficulty puzzle...\n");
    let mut service = PuzzleService::new();
    let puzzle = service.generate(Difficulty::Medium);

    println!("Generated puzzle:");
    println!("{}", puzzle.grid);

    // Show some stats
    println!("Given cells: {}", puzzle.grid.filled_count());
    println!("Blank cells: {}", puzzle.grid.empty_count());
    println!("Answer key entries: {}", puzzle.solution.len());

    // Solve it back through the facade
    println!("\nSolving it back...\n");
    let solution = service.solve(&puzzle.grid);
    if solution.is_empty() {
        println!("No solution found (this shouldn't happen for a generated puzzle!)");
    } else {
        println!("Solver filled {} cells", solution.len());
    }

    // Parse a puzzle from a string
    println!("\n--- Parsing a puzzle from string ---\n");
    let puzzle_string = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    if let Some(grid) = Grid::from_string(puzzle_string) {
        println!("Parsed puzzle:");
        println!("{}", grid);

        let filled = service.solve(&grid);
        println!("Solver filled {} cells", filled.len());
    }
}
