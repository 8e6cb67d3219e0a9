//! Configuration options for the search engines
//!
//! This module defines the parameters that control the behavior of the
//! minimax engine and the backtracking solver.

use crate::{Result, SearchError};

/// Configuration for the minimax engine
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use classical_search::MinimaxConfig;
///
/// let config = MinimaxConfig::default()
///     .with_max_depth(4)
///     .with_pruning(false)
///     .with_win_score(100.0);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MinimaxConfig {
    /// Depth used by agents that search on a caller's behalf
    ///
    /// [`AlphaBeta::best_move`](crate::AlphaBeta::best_move) takes its depth
    /// explicitly and ignores this value.
    pub max_depth: usize,

    /// Whether to prune with alpha-beta bounds
    ///
    /// Disabling pruning yields plain exhaustive minimax. The returned value is
    /// the same either way; only the number of evaluated nodes changes.
    pub use_pruning: bool,

    /// Value of a won terminal state
    ///
    /// A win for [`Side::Plus`](crate::Side::Plus) scores `+win_score`, a win
    /// for [`Side::Minus`](crate::Side::Minus) scores `-win_score`.
    pub win_score: f64,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        MinimaxConfig {
            max_depth: 9, // full depth for a 3x3 board
            use_pruning: true,
            win_score: 10.0,
        }
    }
}

impl MinimaxConfig {
    /// Sets the default search depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enables or disables alpha-beta pruning
    pub fn with_pruning(mut self, use_pruning: bool) -> Self {
        self.use_pruning = use_pruning;
        self
    }

    /// Sets the value of a won terminal state
    pub fn with_win_score(mut self, score: f64) -> Self {
        self.win_score = score;
        self
    }

    /// Checks that the configuration can drive a search
    pub fn validate(&self) -> Result<()> {
        if !self.win_score.is_finite() || self.win_score <= 0.0 {
            return Err(SearchError::InvalidConfiguration(format!(
                "win score must be finite and positive, got {}",
                self.win_score
            )));
        }
        Ok(())
    }
}

/// How the backtracking solver picks the next variable to assign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableOrdering {
    /// Pick the unassigned variable with the smallest current domain
    ///
    /// Ties go to the variable that comes first in the problem's natural order.
    MinimumRemainingValues,

    /// Pick the first unassigned variable in the problem's natural order
    Natural,
}

/// Configuration for the backtracking solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Variable-ordering heuristic
    pub variable_ordering: VariableOrdering,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            variable_ordering: VariableOrdering::MinimumRemainingValues,
        }
    }
}

impl SolverConfig {
    /// Sets the variable-ordering heuristic
    pub fn with_variable_ordering(mut self, ordering: VariableOrdering) -> Self {
        self.variable_ordering = ordering;
        self
    }
}
