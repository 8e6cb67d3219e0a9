//! Statistics collection for searches
//!
//! Both engines reset their statistics at the start of every call. Read them
//! after the call returns.

use std::time::Duration;

/// Statistics collected during a minimax search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatistics {
    /// Number of calls to the inner minimax recursion
    pub nodes_evaluated: usize,

    /// Number of times a `beta <= alpha` bound stopped a move loop early
    pub cutoffs: usize,

    /// Whether some non-terminal node was scored because the depth ran out
    ///
    /// When set, the backed-up value depends on the evaluator's guess for
    /// unfinished positions and is not a proven game value.
    pub depth_cutoff: bool,

    /// Total time spent searching
    pub total_time: Duration,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            nodes_evaluated: 0,
            cutoffs: 0,
            depth_cutoff: false,
            total_time: Duration::from_secs(0),
        }
    }

    /// Returns the number of nodes evaluated per second
    pub fn nodes_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.nodes_evaluated as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Minimax Search Statistics:\n\
             - Nodes evaluated: {}\n\
             - Cutoffs: {}\n\
             - Depth cutoff reached: {}\n\
             - Total time: {:.3} seconds\n\
             - Nodes per second: {:.1}",
            self.nodes_evaluated,
            self.cutoffs,
            self.depth_cutoff,
            self.total_time.as_secs_f64(),
            self.nodes_per_second()
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics collected during a backtracking solve
#[derive(Debug, Clone, PartialEq)]
pub struct SolverStatistics {
    /// Number of recursive steps that did not find the problem already complete
    pub nodes_visited: usize,

    /// Number of assignments undone
    pub backtracks: usize,

    /// Deepest recursion level reached (the root call is level 0)
    pub max_depth: usize,

    /// Total time spent solving
    pub total_time: Duration,
}

impl SolverStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SolverStatistics {
            nodes_visited: 0,
            backtracks: 0,
            max_depth: 0,
            total_time: Duration::from_secs(0),
        }
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Backtracking Solver Statistics:\n\
             - Nodes visited: {}\n\
             - Backtracks: {}\n\
             - Max depth: {}\n\
             - Total time: {:.3} seconds",
            self.nodes_visited,
            self.backtracks,
            self.max_depth,
            self.total_time.as_secs_f64()
        )
    }
}

impl Default for SolverStatistics {
    fn default() -> Self {
        Self::new()
    }
}
