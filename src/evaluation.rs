//! Evaluation of leaf states for the minimax engine
//!
//! An evaluator scores the states where the recursion stops: terminal states
//! and states reached when the depth budget runs out.

use std::marker::PhantomData;

use crate::game_state::{GameState, Side};

/// Trait for policies that score leaf states
///
/// Values are from the point of view of [`Side::Plus`]: larger is better for
/// the maximizer.
pub trait Evaluator<S: GameState>: Send + Sync {
    /// Scores `state` on a scale where a won game is worth `win_score`
    fn evaluate(&self, state: &S, win_score: f64) -> f64;
}

/// Scores a state by its winner alone
///
/// Returns `+win_score` if [`Side::Plus`] has won, `-win_score` if
/// [`Side::Minus`] has won, and `0` otherwise.
pub fn terminal_score<S: GameState>(state: &S, win_score: f64) -> f64 {
    match state.winner() {
        Some(Side::Plus) => win_score,
        Some(Side::Minus) => -win_score,
        None => 0.0,
    }
}

/// Terminal-only evaluation policy
///
/// Every unfinished position scores as a draw. This is exact when the game
/// is searched to the end and a placeholder otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalEvaluator;

impl TerminalEvaluator {
    /// Creates a new terminal evaluator
    pub fn new() -> Self {
        TerminalEvaluator
    }
}

impl<S: GameState> Evaluator<S> for TerminalEvaluator {
    fn evaluate(&self, state: &S, win_score: f64) -> f64 {
        terminal_score(state, win_score)
    }
}

/// Heuristic evaluation policy
///
/// Terminal states still score by their winner. Non-terminal cutoff states are
/// scored by the wrapped function, which should stay inside
/// `[-win_score, win_score]`.
#[derive(Debug, Clone)]
pub struct HeuristicEvaluator<F, S>
where
    F: Fn(&S) -> f64 + Send + Sync,
    S: GameState,
{
    heuristic: F,
    _phantom: PhantomData<fn(&S)>,
}

impl<F, S> HeuristicEvaluator<F, S>
where
    F: Fn(&S) -> f64 + Send + Sync,
    S: GameState,
{
    /// Creates a new heuristic evaluator with the given function
    pub fn new(heuristic: F) -> Self {
        HeuristicEvaluator {
            heuristic,
            _phantom: PhantomData,
        }
    }
}

impl<F, S> Evaluator<S> for HeuristicEvaluator<F, S>
where
    F: Fn(&S) -> f64 + Send + Sync,
    S: GameState,
{
    fn evaluate(&self, state: &S, win_score: f64) -> f64 {
        if state.is_terminal() {
            return terminal_score(state, win_score);
        }
        (self.heuristic)(state)
    }
}
