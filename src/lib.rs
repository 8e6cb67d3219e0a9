//! # classical-search
//!
//! Two exhaustive search engines for small, fully-observable decision problems:
//!
//! - [`AlphaBeta`]: depth-limited minimax with alpha-beta pruning for two-player,
//!   zero-sum, perfect-information games.
//! - [`BacktrackingSolver`]: backtracking search with the Minimum Remaining Values
//!   (MRV) variable-ordering heuristic for finite-domain constraint problems.
//!
//! Both engines are generic over a small trait. Implement [`GameState`] for a game
//! or [`CspProblem`] for a puzzle and hand it to the matching engine.
//!
//! ## Adversarial search
//!
//! ```
//! use classical_search::{games::TicTacToe, AlphaBeta, MinimaxConfig};
//!
//! fn main() -> Result<(), classical_search::SearchError> {
//!     let game = TicTacToe::new();
//!     let mut engine = AlphaBeta::new(MinimaxConfig::default());
//!
//!     // Search the whole game tree from the empty board
//!     let (best_move, value) = engine.best_move(&game, 9)?;
//!
//!     // Perfect play from both sides is a draw
//!     assert_eq!(value, 0.0);
//!     assert_eq!(best_move, Some(0));
//!     println!("{}", engine.statistics().summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Constraint satisfaction
//!
//! ```
//! use classical_search::{problems::Sudoku, BacktrackingSolver, CspProblem};
//!
//! fn main() -> Result<(), classical_search::SearchError> {
//!     let mut puzzle: Sudoku =
//!         "003020600900305001001806400008102900700000008006708200002609500800203009005010300"
//!             .parse()?;
//!
//!     let mut solver = BacktrackingSolver::default();
//!     assert!(solver.solve(&mut puzzle));
//!
//!     // The puzzle itself carries the solution
//!     assert!(puzzle.is_complete());
//!     assert!(puzzle.is_solved());
//!     println!("{}", solver.statistics().summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Limitations
//!
//! The default evaluator scores a non-terminal cutoff as a draw. That is only
//! sound when the game is searched to completion. For games that need real
//! depth cutoffs, supply an evaluator through [`AlphaBeta::with_evaluator`].
//!
//! Search is recursive. Recursion depth is bounded by the number of open cells
//! (9 for tic-tac-toe, 81 for sudoku).

pub mod agent;
pub mod backtracking;
pub mod config;
pub mod csp;
pub mod evaluation;
pub mod game_state;
pub mod games;
pub mod minimax;
pub mod problems;
pub mod stats;

pub use agent::{play_game, Agent, MinimaxAgent, RandomAgent};
pub use backtracking::BacktrackingSolver;
pub use config::{MinimaxConfig, SolverConfig, VariableOrdering};
pub use csp::CspProblem;
pub use evaluation::{Evaluator, HeuristicEvaluator, TerminalEvaluator};
pub use game_state::{GameState, Move, Side};
pub use minimax::AlphaBeta;
pub use stats::{SearchStatistics, SolverStatistics};

/// Error types for the search engines and the reference problems
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A game state was asked to apply a move outside its legal set
    #[error("Illegal move: {0}")]
    IllegalMove(String),

    /// A puzzle could not be built from its textual form
    #[error("Invalid puzzle: {0}")]
    InvalidPuzzle(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
