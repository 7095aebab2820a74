//! Core engine types: players, moves, the action-index codec, errors.
//!
//! This module contains the fundamental building blocks shared by the board
//! and the rules facade. Nothing here depends on a concrete board size.

pub mod action;
pub mod error;
pub mod player;

pub use action::{Action, Move};
pub use error::{ConfigError, MoveError, ShapeError};
pub use player::Player;
