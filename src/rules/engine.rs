//! Rules trait for game implementations.
//!
//! A game implements [`GameRules`] to expose the environment contract a
//! generic search or self-play caller drives:
//! - state creation and transitions
//! - the legal-move mask over a fixed action space
//! - termination detection
//! - canonicalization and symmetry expansion for training
//!
//! Every operation is a pure function of its explicit arguments; callers on
//! independent worker threads can share one rules value with no locking.

use smallvec::SmallVec;

use crate::core::{MoveError, Player, ShapeError};

/// Terminal status of a state, in absolute player-one terms.
///
/// `Win` and `Loss` always refer to the `+1` player, whatever player the
/// query was made for; callers needing a player-relative value flip the
/// sign themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    /// The game continues.
    NotEnded,
    /// Player `+1` has a winning run.
    Win,
    /// Player `-1` has a winning run.
    Loss,
    /// The board is full with no winning run.
    Draw,
}

impl Outcome {
    /// Check whether the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::NotEnded)
    }

    /// Get the winner's sign, if there is one.
    #[must_use]
    pub const fn winner_sign(self) -> Option<i8> {
        match self {
            Outcome::Win => Some(1),
            Outcome::Loss => Some(-1),
            Outcome::NotEnded | Outcome::Draw => None,
        }
    }
}

/// The environment contract a search caller drives.
///
/// ## Caller loop
///
/// Query `valid_moves` -> pick an action -> `apply` -> check `outcome`,
/// ending the episode once it is terminal. When `valid_moves` returns
/// `None` the caller must submit the pass action (index `action_count()`)
/// before re-checking termination.
///
/// ## Implementation notes
///
/// - `apply` must never mutate the input state; it returns a fresh value.
/// - `valid_moves` returns `None` for "no legal moves", which is distinct
///   from any all-false mask.
/// - `symmetries` returns exactly 8 pairs, identity included.
pub trait GameRules: Send + Sync {
    /// The opaque state value callers hold between transitions.
    type State: Clone + PartialEq + Eq + std::hash::Hash;

    /// Create the initial (empty) state.
    fn initial_state(&self) -> Self::State;

    /// Get the board dimensions as `(rows, cols)`.
    fn board_dimensions(&self) -> (usize, usize);

    /// Get the placement action count. The pass action sits one past the
    /// end, at index `action_count()`.
    fn action_count(&self) -> usize;

    /// Get the distinguished pass action index.
    fn pass_action(&self) -> usize {
        self.action_count()
    }

    /// Apply an action for `player`, returning the successor state and the
    /// player to move next.
    fn apply(
        &self,
        state: &Self::State,
        player: Player,
        action: usize,
    ) -> Result<(Self::State, Player), MoveError>;

    /// Get the legality mask over the action space, or `None` when no legal
    /// moves exist.
    fn valid_moves(&self, state: &Self::State, player: Player) -> Option<Vec<bool>>;

    /// Get the terminal status of a state, in absolute player-one terms.
    fn outcome(&self, state: &Self::State, player: Player) -> Outcome;

    /// Normalize a state to the given player's perspective.
    fn canonical_form(&self, state: &Self::State, player: Player) -> Self::State;

    /// Expand a state/policy pair into its 8 dihedral variants.
    fn symmetries(
        &self,
        state: &Self::State,
        policy: &[f32],
    ) -> Result<SmallVec<[(Self::State, Vec<f32>); 8]>, ShapeError>;

    /// Encode a state as a canonical byte key for hashing and lookup.
    fn serialize(&self, state: &Self::State) -> Vec<u8>;
}
