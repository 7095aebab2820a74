//! Board storage and scanning.
//!
//! Split into two types with one grid layout:
//! - [`BoardState`]: the immutable snapshot callers hold between moves.
//! - [`Board`]: the mutable working copy used inside a single transition.
//!
//! The copy-in / mutate / copy-out shape keeps every caller-visible state a
//! pure value; two search branches can never alias one grid.

pub mod grid;
pub mod state;

pub use grid::Board;
pub use state::{BoardState, EMPTY};
