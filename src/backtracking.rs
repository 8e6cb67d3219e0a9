//! Backtracking search for constraint satisfaction problems
//!
//! Each recursive step picks one unassigned variable, then tries its domain
//! values in ascending order. A value is kept if the rest of the problem can be
//! completed around it, and undone otherwise. Conflicts are caught only when
//! some variable's domain becomes empty; there is no look-ahead propagation.

use std::time::Instant;

use log::{debug, trace};

use crate::{
    config::{SolverConfig, VariableOrdering},
    csp::CspProblem,
    stats::SolverStatistics,
};

/// Backtracking solver with Minimum Remaining Values variable ordering
///
/// The solver is the only mutator of the problem while a solve is running and
/// must not be run concurrently on the same problem.
#[derive(Debug, Clone, Default)]
pub struct BacktrackingSolver {
    /// Configuration for the solver
    config: SolverConfig,

    /// Statistics gathered during the last solve
    statistics: SolverStatistics,
}

impl BacktrackingSolver {
    /// Creates a new solver with the given configuration
    pub fn new(config: SolverConfig) -> Self {
        BacktrackingSolver {
            config,
            statistics: SolverStatistics::new(),
        }
    }

    /// Returns the statistics of the last solve
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Searches for a complete assignment of `problem`
    ///
    /// On success returns true and leaves `problem` fully assigned. On failure
    /// returns false and leaves `problem` exactly as it was given.
    pub fn solve<P: CspProblem>(&mut self, problem: &mut P) -> bool {
        self.statistics = SolverStatistics::new();
        let start_time = Instant::now();

        debug!(
            "Starting backtracking solve ({:?}) with {} open variables",
            self.config.variable_ordering,
            problem.variables().len()
        );

        let solved = self.backtrack(problem, 0);

        self.statistics.total_time = start_time.elapsed();
        debug!(
            "Solve finished: solved {}, {} nodes, {} backtracks",
            solved, self.statistics.nodes_visited, self.statistics.backtracks
        );

        solved
    }

    fn backtrack<P: CspProblem>(&mut self, problem: &mut P, depth: usize) -> bool {
        if problem.is_complete() {
            return true;
        }

        self.statistics.nodes_visited += 1;
        self.statistics.max_depth = self.statistics.max_depth.max(depth);

        let Some(var) = self.select_unassigned_variable(problem) else {
            return false;
        };

        let mut values = problem.domain(var);
        values.sort_unstable();
        trace!("Depth {}: {:?} has candidates {:?}", depth, var, values);

        for value in values {
            if !problem.is_consistent(var, value) {
                continue;
            }

            problem.assign(var, value);
            if self.backtrack(problem, depth + 1) {
                return true;
            }
            problem.unassign(var);
            self.statistics.backtracks += 1;
        }

        false
    }

    /// Picks the next variable to assign, or `None` if all are assigned
    ///
    /// With MRV ordering the variable with the smallest domain wins. Only a
    /// strictly smaller domain replaces the current choice, so ties go to the
    /// variable that comes first in the problem's natural order.
    pub fn select_unassigned_variable<P: CspProblem>(&self, problem: &P) -> Option<P::Variable> {
        let variables = problem.variables();

        match self.config.variable_ordering {
            VariableOrdering::Natural => variables.first().copied(),
            VariableOrdering::MinimumRemainingValues => {
                let mut best: Option<(usize, P::Variable)> = None;
                for var in variables {
                    let domain_size = problem.domain(var).len();
                    match best {
                        Some((min_size, _)) if domain_size >= min_size => {}
                        _ => best = Some((domain_size, var)),
                    }
                }
                best.map(|(_, var)| var)
            }
        }
    }
}
