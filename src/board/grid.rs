//! Mutable board working copy.
//!
//! A [`Board`] exists only inside a transition: the rules facade rehydrates
//! it from a [`BoardState`], mutates it, and snapshots the result back out.
//! It owns stone placement, legal-move enumeration, and the line scan that
//! decides wins and draws.

use rustc_hash::FxHashSet;

use super::state::{BoardState, EMPTY};
use crate::core::{ConfigError, Move, MoveError, Player};

/// A mutable `size x size` grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<i8>,
}

impl Board {
    /// Create an all-empty board.
    ///
    /// Fails with [`ConfigError::BoardSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Board, ConfigError> {
        if size == 0 {
            return Err(ConfigError::BoardSize(size));
        }
        Ok(Self {
            size,
            cells: vec![EMPTY; size * size],
        })
    }

    /// Rehydrate a board from a snapshot (copy-in).
    #[must_use]
    pub fn load(state: &BoardState) -> Board {
        Self {
            size: state.size(),
            cells: state.cells().to_vec(),
        }
    }

    /// Take an immutable snapshot of the current grid (copy-out).
    #[must_use]
    pub fn snapshot(&self) -> BoardState {
        BoardState::from_cells(self.size, self.cells.clone())
    }

    /// Get the board size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the cell value at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i8 {
        self.cells[row * self.size + col]
    }

    /// Enumerate every legal move: all empty cells.
    ///
    /// The player argument exists for interface symmetry only; occupancy is
    /// the sole legality rule, so the result is the same for both players.
    #[must_use]
    pub fn legal_moves(&self, _player: Player) -> FxHashSet<Move> {
        let mut moves = FxHashSet::default();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.get(row, col) == EMPTY {
                    moves.insert(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Check whether any empty cell remains.
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        self.cells.iter().any(|&c| c == EMPTY)
    }

    /// Place a stone for `player` at `mv`.
    ///
    /// The target cell must be empty; an occupied cell is a caller contract
    /// violation reported as [`MoveError::Occupied`].
    pub fn execute_move(&mut self, mv: Move, player: Player) -> Result<(), MoveError> {
        if mv.row >= self.size || mv.col >= self.size {
            return Err(MoveError::OutOfRange {
                action: mv.index(self.size),
                pass_action: self.size * self.size,
            });
        }
        if self.get(mv.row, mv.col) != EMPTY {
            return Err(MoveError::Occupied {
                row: mv.row,
                col: mv.col,
            });
        }
        self.cells[mv.row * self.size + mv.col] = player.sign();
        Ok(())
    }

    /// Scan for a winning run of exactly `run_length` stones.
    ///
    /// Visits every starting cell in row-major order and checks the four
    /// directions {horizontal, vertical, down-right, down-left} in that
    /// fixed order, returning the occupant value of the first run found.
    /// Runs longer than `run_length` are caught through their prefix. The
    /// scan reads raw stored values, so the result is perspective-free.
    #[must_use]
    pub fn winner(&self, run_length: usize) -> Option<i8> {
        let n = self.size;
        let k = run_length;
        debug_assert!(k >= 1 && k <= n, "run length must be in 1..=size");

        for w in 0..n {
            for h in 0..n {
                let v = self.get(w, h);
                if v == EMPTY {
                    continue;
                }

                if w + k <= n && (1..k).all(|i| self.get(w + i, h) == v) {
                    return Some(v);
                }
                if h + k <= n && (1..k).all(|j| self.get(w, h + j) == v) {
                    return Some(v);
                }
                if w + k <= n && h + k <= n && (1..k).all(|i| self.get(w + i, h + i) == v) {
                    return Some(v);
                }
                if w + k <= n && h >= k - 1 && (1..k).all(|i| self.get(w + i, h - i) == v) {
                    return Some(v);
                }
            }
        }

        None
    }
}
