//! Sudoku as a constraint satisfaction problem
//!
//! Each of the 81 cells is a variable, indexed 0-80 in row-major order. A cell
//! holding `0` is unassigned. The domain of a cell is 1-9 minus every value
//! already placed in its row, column or 3x3 block.

use std::fmt;
use std::str::FromStr;

use crate::{csp::CspProblem, Result, SearchError};

/// Number of cells on the board
pub const CELLS: usize = 81;

const EMPTY: u8 = 0;

/// A 9x9 sudoku board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sudoku {
    cells: [u8; CELLS],
}

impl Sudoku {
    /// Parses a board from an 81-character string
    ///
    /// The digits `1`-`9` are givens; any other character (`0`, `.`) is an
    /// empty cell. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPuzzle`] if the string does not hold
    /// exactly 81 characters.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let length = input.chars().count();
        if length != CELLS {
            return Err(SearchError::InvalidPuzzle(format!(
                "expected {} cells, found {}",
                CELLS, length
            )));
        }

        let mut cells = [EMPTY; CELLS];
        for (cell, ch) in cells.iter_mut().zip(input.chars()) {
            *cell = match ch.to_digit(10) {
                Some(digit @ 1..=9) => digit as u8,
                _ => EMPTY,
            };
        }
        Ok(Sudoku { cells })
    }

    /// Returns the board in row-major order, `0` marking empty cells
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Returns the value at `row`, `col`, or `0` if the cell is empty
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * 9 + col]
    }

    /// Returns true if every row, column and block holds each of 1-9 exactly once
    pub fn is_solved(&self) -> bool {
        (0..9).all(|unit| {
            is_permutation((0..9).map(|i| self.get(unit, i)))
                && is_permutation((0..9).map(|i| self.get(i, unit)))
                && is_permutation((0..9).map(|i| {
                    self.get((unit / 3) * 3 + i / 3, (unit % 3) * 3 + i % 3)
                }))
        })
    }

    /// Returns the indices of every cell sharing a row, column or block with `index`
    fn peers(index: usize) -> impl Iterator<Item = usize> {
        let row = index / 9;
        let col = index % 9;
        let block_row = (row / 3) * 3;
        let block_col = (col / 3) * 3;

        let row_peers = (0..9).map(move |c| row * 9 + c);
        let col_peers = (0..9).map(move |r| r * 9 + col);
        let block_peers = (0..9).map(move |i| (block_row + i / 3) * 9 + block_col + i % 3);

        row_peers.chain(col_peers).chain(block_peers)
    }
}

fn is_permutation(values: impl Iterator<Item = u8>) -> bool {
    let mut seen = [false; 10];
    for value in values {
        let slot = value as usize;
        if slot == 0 || slot > 9 || seen[slot] {
            return false;
        }
        seen[slot] = true;
    }
    true
}

impl FromStr for Sudoku {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        Sudoku::parse(s)
    }
}

impl CspProblem for Sudoku {
    type Variable = usize;
    type Value = u8;

    fn variables(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.cells[i] == EMPTY).collect()
    }

    fn domain(&self, var: usize) -> Vec<u8> {
        let mut used = [false; 10];
        for peer in Self::peers(var) {
            used[self.cells[peer] as usize] = true;
        }
        (1..=9).filter(|&value| !used[value as usize]).collect()
    }

    fn assign(&mut self, var: usize, value: u8) {
        self.cells[var] = value;
    }

    fn unassign(&mut self, var: usize) {
        self.cells[var] = EMPTY;
    }

    fn is_complete(&self) -> bool {
        !self.cells.contains(&EMPTY)
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row % 3 == 0 && row != 0 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..9 {
                if col % 3 == 0 && col != 0 {
                    write!(f, "| ")?;
                }
                match self.get(row, col) {
                    EMPTY => write!(f, ". ")?,
                    value => write!(f, "{} ", value)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
