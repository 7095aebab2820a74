//! Error types for the rules engine.
//!
//! Every failure here is a caller contract violation, not a transient
//! condition: nothing is retried internally, errors propagate immediately.

/// Errors raised when constructing a game with invalid parameters.
///
/// Fatal to construction; surfaced immediately, never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size must be at least 1, got {0}")]
    BoardSize(usize),

    #[error("run length must be in 1..={size}, got {run_length}")]
    RunLength { size: usize, run_length: usize },
}

/// Errors raised when applying an action that violates the move contract.
///
/// The engine does not recover or pick an alternative move; callers are
/// expected to consult `valid_moves` first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("action index {action} out of range (pass is {pass_action})")]
    OutOfRange { action: usize, pass_action: usize },
}

/// Error raised when a supplied policy vector does not match the action space.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("policy has {actual} entries, expected {expected}")]
pub struct ShapeError {
    pub expected: usize,
    pub actual: usize,
}
