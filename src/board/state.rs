//! Immutable board snapshots.
//!
//! A [`BoardState`] is the value a search caller holds between transitions.
//! It is never mutated in place: every transition copies it into a working
//! [`Board`](super::Board), mutates the copy, and snapshots a fresh value.
//! Structural equality and hashing make states directly usable as
//! transposition-table keys.

use serde::{Deserialize, Serialize};

/// The value of an unoccupied cell.
pub const EMPTY: i8 = 0;

/// An immutable `size x size` grid snapshot.
///
/// Cells hold `+1` (player one), `-1` (player two), or [`EMPTY`], stored
/// row-major in a flat vector.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    size: usize,
    cells: Vec<i8>,
}

impl BoardState {
    /// Create an all-empty snapshot.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![EMPTY; size * size],
        }
    }

    /// Create a snapshot from raw row-major cells.
    ///
    /// Panics if `cells` is not exactly `size * size` long.
    #[must_use]
    pub fn from_cells(size: usize, cells: Vec<i8>) -> Self {
        assert_eq!(
            cells.len(),
            size * size,
            "cell count must match declared size"
        );
        Self { size, cells }
    }

    /// Get the board size (grid is `size x size`).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the cell value at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i8 {
        self.cells[row * self.size + col]
    }

    /// Get the raw row-major cells.
    #[must_use]
    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    /// Get a copy of this snapshot with every stone's sign flipped.
    ///
    /// This is the canonical form for the `-1` player; applying it twice
    /// restores the original state.
    #[must_use]
    pub fn negated(&self) -> BoardState {
        Self {
            size: self.size,
            cells: self.cells.iter().map(|&c| -c).collect(),
        }
    }

    /// Count cells holding `value`.
    #[must_use]
    pub fn count(&self, value: i8) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// Check whether no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != EMPTY)
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let glyph = match self.get(row, col) {
                    1 => 'X',
                    -1 => 'O',
                    _ => '.',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
