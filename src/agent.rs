//! Named players that choose moves, and a driver that plays them against each other

use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    config::MinimaxConfig,
    game_state::{GameState, Side},
    minimax::AlphaBeta,
    stats::SearchStatistics,
    Result,
};

/// Trait for actors that pick a move for the side to move
pub trait Agent<S: GameState> {
    /// Returns the display name of this agent
    fn name(&self) -> &str;

    /// Chooses a move from `state`, or `None` if there is nothing to play
    fn select_move(&mut self, state: &S) -> Result<Option<S::Move>>;
}

/// Agent that plays the minimax choice at a fixed depth
pub struct MinimaxAgent<S: GameState> {
    name: String,
    depth: usize,
    engine: AlphaBeta<S>,
}

impl<S: GameState + 'static> MinimaxAgent<S> {
    /// Creates an agent searching to the configured `max_depth`
    pub fn new(name: impl Into<String>, config: MinimaxConfig) -> Self {
        MinimaxAgent {
            name: name.into(),
            depth: config.max_depth,
            engine: AlphaBeta::new(config),
        }
    }

    /// Wraps an already built engine
    pub fn with_engine(name: impl Into<String>, engine: AlphaBeta<S>) -> Self {
        MinimaxAgent {
            name: name.into(),
            depth: engine.config().max_depth,
            engine,
        }
    }

    /// Returns the depth searched for every move
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the statistics of the last search
    pub fn statistics(&self) -> &SearchStatistics {
        self.engine.statistics()
    }
}

impl<S: GameState + 'static> Agent<S> for MinimaxAgent<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, state: &S) -> Result<Option<S::Move>> {
        let (best_move, _value) = self.engine.best_move(state, self.depth)?;
        Ok(best_move)
    }
}

/// Agent that picks uniformly among the legal moves
///
/// Useful as a baseline opponent.
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Creates an agent seeded from system entropy
    pub fn new(name: impl Into<String>) -> Self {
        RandomAgent {
            name: name.into(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an agent with a fixed seed, for reproducible games
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        RandomAgent {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, state: &S) -> Result<Option<S::Move>> {
        Ok(state.legal_moves().choose(&mut self.rng).cloned())
    }
}

/// Plays a game to the end, asking each agent for a move on its side's turn
///
/// Returns the final state. Stops early if the agent to move has nothing to
/// play.
///
/// # Errors
///
/// Passes through errors from the agents and from [`GameState::apply_move`].
pub fn play_game<S: GameState>(
    initial_state: S,
    plus: &mut dyn Agent<S>,
    minus: &mut dyn Agent<S>,
) -> Result<S> {
    let mut state = initial_state;

    while !state.is_terminal() {
        let side = state.turn();
        let (name, selected) = match side {
            Side::Plus => (plus.name().to_string(), plus.select_move(&state)?),
            Side::Minus => (minus.name().to_string(), minus.select_move(&state)?),
        };

        let Some(mv) = selected else {
            debug!("{} ({}) has no move to play", name, side);
            break;
        };
        debug!("{} ({}) plays {:?}", name, side, mv);
        state = state.apply_move(&mv)?;
    }

    Ok(state)
}
