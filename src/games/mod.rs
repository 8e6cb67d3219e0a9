//! Reference game implementations

pub mod tictactoe;

pub use tictactoe::TicTacToe;
