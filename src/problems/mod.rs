//! Reference constraint problems

pub mod sudoku;

pub use sudoku::Sudoku;
