//! Tic-Tac-Toe on a 3x3 board
//!
//! Cells are indexed 0-8 in row-major order. [`Side::Plus`] plays `X` and
//! moves first; [`Side::Minus`] plays `O`.

use std::fmt;

use crate::{
    game_state::{GameState, Side},
    Result, SearchError,
};

/// Every row, column and diagonal of the board
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Tic-Tac-Toe game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    /// Board representation (None = empty, Some(side) = occupied)
    board: [Option<Side>; 9],

    /// Side to move
    turn: Side,
}

impl TicTacToe {
    /// Creates a new empty board with `X` to move
    pub fn new() -> Self {
        TicTacToe {
            board: [None; 9],
            turn: Side::Plus,
        }
    }

    /// Creates a position from an explicit board and side to move
    ///
    /// No check is made that the position is reachable.
    pub fn with_board(board: [Option<Side>; 9], turn: Side) -> Self {
        TicTacToe { board, turn }
    }

    /// Returns the occupant of `index`, or `None` for an empty or invalid cell
    pub fn cell(&self, index: usize) -> Option<Side> {
        self.board.get(index).copied().flatten()
    }

    /// Returns the number of occupied cells
    pub fn moves_played(&self) -> usize {
        self.board.iter().filter(|cell| cell.is_some()).count()
    }

    /// Checks if a move is legal
    pub fn is_legal_move(&self, index: usize) -> bool {
        index < 9 && self.board[index].is_none() && self.winner().is_none()
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for TicTacToe {
    type Move = usize;

    fn legal_moves(&self) -> Vec<usize> {
        if self.winner().is_some() {
            return Vec::new();
        }
        (0..9).filter(|&i| self.board[i].is_none()).collect()
    }

    fn apply_move(&self, mv: &usize) -> Result<Self> {
        let index = *mv;
        if !self.is_legal_move(index) {
            return Err(SearchError::IllegalMove(format!(
                "cell {} is not playable for {}",
                index, self.turn
            )));
        }

        let mut board = self.board;
        board[index] = Some(self.turn);
        Ok(TicTacToe {
            board,
            turn: self.turn.opponent(),
        })
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.board.iter().all(Option::is_some)
    }

    fn winner(&self) -> Option<Side> {
        LINES.iter().find_map(|&[a, b, c]| match self.board[a] {
            Some(side) if self.board[b] == Some(side) && self.board[c] == Some(side) => {
                Some(side)
            }
            _ => None,
        })
    }

    fn turn(&self) -> Side {
        self.turn
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let symbols: Vec<&str> = (0..3)
                .map(|col| match self.board[row * 3 + col] {
                    Some(Side::Plus) => "X",
                    Some(Side::Minus) => "O",
                    None => ".",
                })
                .collect();
            writeln!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}
