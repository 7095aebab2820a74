//! Gomoku rules implementation.

use smallvec::SmallVec;

use crate::board::{Board, BoardState};
use crate::core::{Action, ConfigError, MoveError, Player, ShapeError};
use crate::rules::{GameRules, Outcome};
use crate::symmetry;

/// N-in-a-row rules on an `size x size` grid.
///
/// Holds only the immutable configuration: the board size and the run
/// length required to win. All state lives in the [`BoardState`] values
/// passed through the [`GameRules`] operations, so one `Gomoku` can serve
/// any number of concurrent episodes.
///
/// ## Example
///
/// ```
/// use rust_gomoku::{GameRules, Gomoku, Outcome, Player};
///
/// let game = Gomoku::new(5, 3).unwrap();
/// let state = game.initial_state();
///
/// let (state, next) = game.apply(&state, Player::ONE, 12).unwrap();
/// assert_eq!(next, Player::TWO);
/// assert_eq!(game.outcome(&state, Player::ONE), Outcome::NotEnded);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gomoku {
    size: usize,
    run_length: usize,
}

impl Gomoku {
    /// Create a rules value for an `size x size` board where `run_length`
    /// contiguous stones win.
    ///
    /// Fails if `size` is zero or `run_length` is not in `1..=size`.
    pub fn new(size: usize, run_length: usize) -> Result<Gomoku, ConfigError> {
        if size == 0 {
            return Err(ConfigError::BoardSize(size));
        }
        if run_length == 0 || run_length > size {
            return Err(ConfigError::RunLength { size, run_length });
        }
        Ok(Self { size, run_length })
    }

    /// Get the board size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the winning run length.
    #[must_use]
    pub fn run_length(&self) -> usize {
        self.run_length
    }
}

impl GameRules for Gomoku {
    type State = BoardState;

    fn initial_state(&self) -> BoardState {
        BoardState::empty(self.size)
    }

    fn board_dimensions(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    fn action_count(&self) -> usize {
        self.size * self.size
    }

    fn apply(
        &self,
        state: &BoardState,
        player: Player,
        action: usize,
    ) -> Result<(BoardState, Player), MoveError> {
        match Action::from_index(action, self.size)? {
            Action::Pass => Ok((state.clone(), player.opponent())),
            Action::Place(mv) => {
                let mut board = Board::load(state);
                board.execute_move(mv, player)?;
                Ok((board.snapshot(), player.opponent()))
            }
        }
    }

    fn valid_moves(&self, state: &BoardState, player: Player) -> Option<Vec<bool>> {
        let board = Board::load(state);
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            return None;
        }

        let mut mask = vec![false; self.action_count()];
        for mv in moves {
            mask[mv.index(self.size)] = true;
        }
        Some(mask)
    }

    fn outcome(&self, state: &BoardState, _player: Player) -> Outcome {
        let board = Board::load(state);
        match board.winner(self.run_length) {
            Some(v) if v == Player::ONE.sign() => Outcome::Win,
            Some(_) => Outcome::Loss,
            None if board.has_legal_moves() => Outcome::NotEnded,
            None => Outcome::Draw,
        }
    }

    fn canonical_form(&self, state: &BoardState, player: Player) -> BoardState {
        if player == Player::ONE {
            state.clone()
        } else {
            state.negated()
        }
    }

    fn symmetries(
        &self,
        state: &BoardState,
        policy: &[f32],
    ) -> Result<SmallVec<[(BoardState, Vec<f32>); 8]>, ShapeError> {
        if policy.len() != self.action_count() {
            return Err(ShapeError {
                expected: self.action_count(),
                actual: policy.len(),
            });
        }
        Ok(symmetry::expand(state, policy))
    }

    fn serialize(&self, state: &BoardState) -> Vec<u8> {
        bincode::serialize(state).expect("board state serialization cannot fail")
    }
}
