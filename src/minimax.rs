//! Depth-limited minimax with alpha-beta pruning
//!
//! The side to move is read from each state's [`GameState::turn`] rather than
//! from an alternating flag, so games where a player may move twice in a row
//! are searched correctly.
//!
//! Among moves of equal value the first one enumerated by
//! [`GameState::legal_moves`] wins: the running best is replaced only on a
//! strict improvement, both at the root and inside the recursion.

use std::time::Instant;

use log::{debug, trace, warn};

use crate::{
    config::MinimaxConfig,
    evaluation::{Evaluator, TerminalEvaluator},
    game_state::GameState,
    stats::SearchStatistics,
    Result,
};

/// Minimax search engine with alpha-beta pruning
///
/// The engine holds no search state between calls besides its statistics,
/// which are reset by every call to [`best_move`](AlphaBeta::best_move). One
/// engine can be reused for any number of independent searches, but it must
/// not be shared between threads searching at the same time.
pub struct AlphaBeta<S: GameState> {
    /// Configuration for the search
    config: MinimaxConfig,

    /// Scores leaf states
    evaluator: Box<dyn Evaluator<S>>,

    /// Statistics gathered during the last search
    statistics: SearchStatistics,
}

impl<S: GameState + 'static> AlphaBeta<S> {
    /// Creates a new engine that scores leaves by their winner only
    pub fn new(config: MinimaxConfig) -> Self {
        AlphaBeta {
            config,
            evaluator: Box::new(TerminalEvaluator::new()),
            statistics: SearchStatistics::new(),
        }
    }

    /// Sets the evaluator used at terminal and cutoff states
    pub fn with_evaluator<E: Evaluator<S> + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Returns the engine configuration
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Returns the statistics of the last search
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Finds the best move for the side to move, searching `depth` plies
    ///
    /// Returns the chosen move and its backed-up value. A terminal state, a
    /// state without legal moves, or `depth == 0` yields `None` together with
    /// the evaluation of `state` itself.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid, and passes through any error
    /// raised by [`GameState::apply_move`] unchanged.
    pub fn best_move(&mut self, state: &S, depth: usize) -> Result<(Option<S::Move>, f64)> {
        self.config.validate()?;
        self.statistics = SearchStatistics::new();
        let start_time = Instant::now();

        debug!(
            "Starting search for side {} to depth {} (pruning: {})",
            state.turn(),
            depth,
            self.config.use_pruning
        );

        let result = self.search_root(state, depth);

        self.statistics.total_time = start_time.elapsed();

        if let Ok((best_move, value)) = &result {
            debug!(
                "Search finished: move {:?}, value {}, {} nodes, {} cutoffs",
                best_move, value, self.statistics.nodes_evaluated, self.statistics.cutoffs
            );
        }
        if self.statistics.depth_cutoff {
            warn!(
                "Depth {} ended on unfinished positions; value relies on the evaluator",
                depth
            );
        }

        result
    }

    /// Top-level move loop; tracks the move alongside the value
    fn search_root(&mut self, state: &S, depth: usize) -> Result<(Option<S::Move>, f64)> {
        if depth == 0 || state.is_terminal() {
            if !state.is_terminal() {
                self.statistics.depth_cutoff = true;
            }
            return Ok((None, self.evaluate(state)));
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok((None, self.evaluate(state)));
        }

        let maximizing = state.turn().is_maximizer();
        let mut best_value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;
        let mut alpha = f64::NEG_INFINITY;
        let mut beta = f64::INFINITY;

        for mv in moves {
            let next_state = state.apply_move(&mv)?;
            let value = self.minimax(&next_state, depth - 1, alpha, beta)?;
            trace!("Root move {:?} -> {}", mv, value);

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                beta = beta.min(best_value);
            }

            if self.config.use_pruning && beta <= alpha {
                self.statistics.cutoffs += 1;
                break;
            }
        }

        Ok((best_move, best_value))
    }

    /// Returns the backed-up value of `state` searched `depth` plies deep
    fn minimax(&mut self, state: &S, depth: usize, mut alpha: f64, mut beta: f64) -> Result<f64> {
        self.statistics.nodes_evaluated += 1;

        if state.is_terminal() {
            return Ok(self.evaluate(state));
        }
        if depth == 0 {
            self.statistics.depth_cutoff = true;
            return Ok(self.evaluate(state));
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(self.evaluate(state));
        }

        if state.turn().is_maximizer() {
            let mut max_value = f64::NEG_INFINITY;
            for mv in moves {
                let value = self.minimax(&state.apply_move(&mv)?, depth - 1, alpha, beta)?;
                if value > max_value {
                    max_value = value;
                }
                if max_value > alpha {
                    alpha = max_value;
                }
                if self.config.use_pruning && beta <= alpha {
                    self.statistics.cutoffs += 1;
                    break;
                }
            }
            Ok(max_value)
        } else {
            let mut min_value = f64::INFINITY;
            for mv in moves {
                let value = self.minimax(&state.apply_move(&mv)?, depth - 1, alpha, beta)?;
                if value < min_value {
                    min_value = value;
                }
                if min_value < beta {
                    beta = min_value;
                }
                if self.config.use_pruning && beta <= alpha {
                    self.statistics.cutoffs += 1;
                    break;
                }
            }
            Ok(min_value)
        }
    }

    fn evaluate(&self, state: &S) -> f64 {
        self.evaluator.evaluate(state, self.config.win_score)
    }
}
