//! Traits defining game state representation for adversarial search.
//!
//! The GameState trait is the interface that must be implemented for any
//! two-player, zero-sum, perfect-information game searched by [`AlphaBeta`].
//!
//! [`AlphaBeta`]: crate::AlphaBeta

use std::fmt::{self, Debug};

use crate::Result;

/// Trait for moves that can be made in a game
///
/// Moves are plain values: they are compared for equality and cloned freely
/// while the search walks the tree.
pub trait Move: Clone + Debug + PartialEq + Send + Sync {}

impl Move for usize {}
impl Move for u8 {}
impl Move for u16 {}
impl Move for u32 {}
impl Move for (usize, usize) {}

/// One of the two players of a game
///
/// `Plus` is the maximizing side (`+1`), `Minus` the minimizing side (`-1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Identity `+1`, the maximizer
    Plus,
    /// Identity `-1`, the minimizer
    Minus,
}

impl Side {
    /// Returns the other side
    pub fn opponent(self) -> Side {
        match self {
            Side::Plus => Side::Minus,
            Side::Minus => Side::Plus,
        }
    }

    /// Returns the canonical numeric identity, `+1` or `-1`
    pub fn sign(self) -> i8 {
        match self {
            Side::Plus => 1,
            Side::Minus => -1,
        }
    }

    /// Returns true if this side maximizes the backed-up value
    pub fn is_maximizer(self) -> bool {
        self == Side::Plus
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.sign())
    }
}

/// Trait defining the game state interface required for adversarial search
///
/// States are immutable values: [`apply_move`](GameState::apply_move) returns a
/// new state and never modifies the receiver, so the engine can explore many
/// continuations from the same position.
///
/// The game tree rooted at any reachable state must be finite. An unbounded
/// search relies on that to terminate.
pub trait GameState: Clone + Send + Sync {
    /// The type of moves that can be made in this game
    type Move: Move;

    /// Returns the legal moves from this state
    ///
    /// The order is significant: when several moves share the best value the
    /// engine keeps the one enumerated first. The list is empty iff no move
    /// exists.
    ///
    /// # Example
    ///
    /// ```
    /// # use classical_search::{GameState, Side, Result};
    /// # #[derive(Clone)]
    /// # struct Countdown(usize);
    /// # impl GameState for Countdown {
    /// #     type Move = usize;
    /// fn legal_moves(&self) -> Vec<usize> {
    ///     // Take one or two tokens, never more than remain
    ///     (1..=2).filter(|take| *take <= self.0).collect()
    /// }
    /// #     fn apply_move(&self, mv: &usize) -> Result<Self> { Ok(Countdown(self.0 - mv)) }
    /// #     fn is_terminal(&self) -> bool { self.0 == 0 }
    /// #     fn winner(&self) -> Option<Side> { None }
    /// #     fn turn(&self) -> Side { Side::Plus }
    /// # }
    /// # assert_eq!(Countdown(1).legal_moves(), vec![1]);
    /// ```
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Applies a move, returning the resulting state
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::IllegalMove`](crate::SearchError::IllegalMove) if
    /// `mv` is not currently legal.
    fn apply_move(&self, mv: &Self::Move) -> Result<Self>;

    /// Returns true if the game has ended
    ///
    /// A game ends when a winner exists or no legal moves remain.
    fn is_terminal(&self) -> bool;

    /// Returns the winning side, or `None` for a draw or an unfinished game
    fn winner(&self) -> Option<Side>;

    /// Returns the side whose decision is pending
    fn turn(&self) -> Side;
}
