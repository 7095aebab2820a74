//! Rules facade bindings for Python.

use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::board::BoardState;
use crate::core::Player;
use crate::games::Gomoku;
use crate::rules::{GameRules, Outcome};

/// Python wrapper for the Gomoku rules facade.
///
/// Method names and integer conventions follow the framework the engine
/// plugs into: players are `+1`/`-1`, `get_game_ended` returns `2` while
/// the game continues, `+1`/`-1` for a player-one win/loss, `0` for a
/// draw, and `get_valid_moves` returns `None` when no placement is legal.
#[pyclass(name = "Rules")]
#[derive(Clone, Debug)]
pub struct PyRules(pub Gomoku);

fn player_from_sign(sign: i8) -> PyResult<Player> {
    Player::from_sign(sign)
        .ok_or_else(|| PyValueError::new_err(format!("player must be +1 or -1, got {sign}")))
}

fn state_from_array(game: &Gomoku, board: &PyReadonlyArray2<'_, i8>) -> PyResult<BoardState> {
    let view = board.as_array();
    let n = game.size();
    if view.shape() != [n, n] {
        return Err(PyValueError::new_err(format!(
            "board must be {n}x{n}, got {:?}",
            view.shape()
        )));
    }

    let mut cells = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            cells.push(view[[row, col]]);
        }
    }
    Ok(BoardState::from_cells(n, cells))
}

fn array_from_state<'py>(py: Python<'py>, state: &BoardState) -> Bound<'py, PyArray2<i8>> {
    let n = state.size();
    Array2::from_shape_vec((n, n), state.cells().to_vec())
        .expect("snapshot always holds n*n cells")
        .into_pyarray_bound(py)
}

#[pymethods]
impl PyRules {
    /// Create rules for a `size x size` board with the given winning run.
    #[new]
    fn new(size: usize, run_length: usize) -> PyResult<Self> {
        Gomoku::new(size, run_length)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Get the initial all-empty board.
    fn get_init_board<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<i8>> {
        array_from_state(py, &self.0.initial_state())
    }

    /// Get the board dimensions as an `(n, n)` tuple.
    fn get_board_size(&self) -> (usize, usize) {
        self.0.board_dimensions()
    }

    /// Get the number of placement actions (`n * n`; pass is `n * n`).
    fn get_action_size(&self) -> usize {
        self.0.action_count()
    }

    /// Apply an action and return `(next_board, next_player)`.
    fn get_next_state<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, i8>,
        player: i8,
        action: usize,
    ) -> PyResult<(Bound<'py, PyArray2<i8>>, i8)> {
        let state = state_from_array(&self.0, &board)?;
        let player = player_from_sign(player)?;

        let (next, next_player) = self
            .0
            .apply(&state, player, action)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok((array_from_state(py, &next), next_player.sign()))
    }

    /// Get the 0/1 legality vector, or `None` when no placement is legal.
    fn get_valid_moves<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, i8>,
        player: i8,
    ) -> PyResult<Option<Bound<'py, PyArray1<u8>>>> {
        let state = state_from_array(&self.0, &board)?;
        let player = player_from_sign(player)?;

        Ok(self.0.valid_moves(&state, player).map(|mask| {
            let vector: Vec<u8> = mask.into_iter().map(u8::from).collect();
            vector.into_pyarray_bound(py)
        }))
    }

    /// Get the terminal status: `2` not ended, `+1`/`-1` player-one
    /// win/loss, `0` draw.
    fn get_game_ended(&self, board: PyReadonlyArray2<'_, i8>, player: i8) -> PyResult<i8> {
        let state = state_from_array(&self.0, &board)?;
        let player = player_from_sign(player)?;

        Ok(match self.0.outcome(&state, player) {
            Outcome::NotEnded => 2,
            Outcome::Win => 1,
            Outcome::Loss => -1,
            Outcome::Draw => 0,
        })
    }

    /// Get the board normalized to `player`'s perspective.
    fn get_canonical_form<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, i8>,
        player: i8,
    ) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let state = state_from_array(&self.0, &board)?;
        let player = player_from_sign(player)?;

        Ok(array_from_state(py, &self.0.canonical_form(&state, player)))
    }

    /// Expand a board/policy pair into its 8 dihedral variants.
    fn get_symmetries<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, i8>,
        pi: PyReadonlyArray1<'_, f32>,
    ) -> PyResult<Vec<(Bound<'py, PyArray2<i8>>, Vec<f32>)>> {
        let state = state_from_array(&self.0, &board)?;
        let policy = pi.as_slice()?;

        let variants = self
            .0
            .symmetries(&state, policy)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(variants
            .into_iter()
            .map(|(b, p)| (array_from_state(py, &b), p))
            .collect())
    }

    /// Get the canonical byte key for transposition-table lookups.
    fn string_representation<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'_, i8>,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let state = state_from_array(&self.0, &board)?;
        Ok(PyBytes::new_bound(py, &self.0.serialize(&state)))
    }

    fn __repr__(&self) -> String {
        format!(
            "Rules(size={}, run_length={})",
            self.0.size(),
            self.0.run_length()
        )
    }
}
