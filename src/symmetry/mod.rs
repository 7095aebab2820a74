//! Dihedral symmetry expansion for training-data augmentation.
//!
//! A square board has 8 symmetries (4 rotations x optional mirror). One
//! board/policy pair expands into the 8 transformed pairs, each policy
//! permuted consistently with its board so the augmented examples stay
//! semantically identical to the original.
//!
//! The iteration order is fixed: rotation count 1..=4 (counter-clockwise
//! quarter turns), and for each count the mirrored variant first. The
//! fourth rotation without mirror reproduces the input; it is kept, not
//! deduplicated, so downstream augmentation counts stay at exactly 8.

use smallvec::SmallVec;

use crate::board::BoardState;

/// A transformed board/policy pair.
pub type Symmetry = (BoardState, Vec<f32>);

/// Rotate a flat row-major `size x size` grid a quarter turn
/// counter-clockwise.
///
/// `out[r][c] = in[c][size - 1 - r]`, matching numpy's `rot90`.
#[must_use]
pub fn rot90<T: Copy>(cells: &[T], size: usize) -> Vec<T> {
    debug_assert_eq!(cells.len(), size * size);
    let mut out = Vec::with_capacity(cells.len());
    for r in 0..size {
        for c in 0..size {
            out.push(cells[c * size + (size - 1 - r)]);
        }
    }
    out
}

/// Mirror a flat row-major `size x size` grid left-right.
///
/// `out[r][c] = in[r][size - 1 - c]`, matching numpy's `fliplr`.
#[must_use]
pub fn fliplr<T: Copy>(cells: &[T], size: usize) -> Vec<T> {
    debug_assert_eq!(cells.len(), size * size);
    let mut out = Vec::with_capacity(cells.len());
    for r in 0..size {
        for c in 0..size {
            out.push(cells[r * size + (size - 1 - c)]);
        }
    }
    out
}

/// Expand one board/policy pair into its 8 dihedral variants.
///
/// The policy must already have `size * size` entries; the rules facade
/// validates the shape before calling in.
#[must_use]
pub fn expand(state: &BoardState, policy: &[f32]) -> SmallVec<[Symmetry; 8]> {
    let size = state.size();
    debug_assert_eq!(policy.len(), size * size);

    let mut variants = SmallVec::new();
    let mut board = state.cells().to_vec();
    let mut pi = policy.to_vec();

    for _ in 1..=4 {
        board = rot90(&board, size);
        pi = rot90(&pi, size);

        variants.push((
            BoardState::from_cells(size, fliplr(&board, size)),
            fliplr(&pi, size),
        ));
        variants.push((BoardState::from_cells(size, board.clone()), pi.clone()));
    }

    variants
}
