//! Rules trait for game implementations.
//!
//! Games implement `GameRules` to define:
//! - Legal actions for each game state
//! - How actions produce successor states
//! - Win/draw conditions, canonicalization, and symmetry expansion
//!
//! Search callers drive the trait and never interpret game-specific
//! concepts directly.

pub mod engine;

pub use engine::{GameRules, Outcome};
