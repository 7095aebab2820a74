//! N-in-a-row (Gomoku) rules.
//!
//! The only game shipped with the engine: place-a-stone on a square grid,
//! first run of `run_length` contiguous same-player stones wins. Board
//! size and run length are configuration, so the same implementation
//! serves tic-tac-toe (3, 3) through free-style Gomoku (15, 5).

pub mod game;

pub use game::Gomoku;
