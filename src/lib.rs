//! # rust-gomoku
//!
//! An N-in-a-row (Gomoku-family) rules engine for RL/MCTS training.
//!
//! The crate owns all game-specific knowledge: board representation,
//! legal-move enumeration, move application, terminal detection,
//! canonicalization, and dihedral symmetry expansion. It is packaged as a
//! pluggable "game" module for a generic search or self-play framework.
//! Search, evaluation, and learning live in the caller.
//!
//! ## Design Principles
//!
//! 1. **States Are Values**: a [`BoardState`] is immutable. Every
//!    transition copies into a working [`Board`], mutates the copy, and
//!    snapshots a fresh value, so search branches never alias state.
//!
//! 2. **Pure Functions**: every [`GameRules`] operation depends only on
//!    its explicit arguments. Worker threads share one rules value with no
//!    synchronization.
//!
//! 3. **Configuration Over Convention**: board size and winning run length
//!    are constructor parameters, validated once; the same implementation
//!    covers tic-tac-toe through 15x15 Gomoku.
//!
//! ## Modules
//!
//! - `core`: players, moves, the action-index codec, errors
//! - `board`: grid storage, legality, the win/draw line scan
//! - `rules`: the `GameRules` trait callers drive
//! - `games`: the Gomoku implementation
//! - `symmetry`: dihedral board/policy expansion for augmentation

pub mod board;
pub mod core;
pub mod games;
pub mod rules;
pub mod symmetry;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::board::{Board, BoardState, EMPTY};
pub use crate::core::{Action, ConfigError, Move, MoveError, Player, ShapeError};
pub use crate::games::Gomoku;
pub use crate::rules::{GameRules, Outcome};
