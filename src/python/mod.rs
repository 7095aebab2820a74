//! Python bindings for the Gomoku rules engine.
//!
//! This module provides PyO3 bindings with the numpy calling convention
//! expected by AlphaZero-style Python training frameworks: boards cross
//! the boundary as `n x n` int8 arrays, policies as flat float32 vectors.
//!
//! # Quick Start
//!
//! ```python
//! import numpy as np
//! import rust_gomoku
//!
//! game = rust_gomoku.Rules(size=15, run_length=5)
//!
//! board = game.get_init_board()
//! board, player = game.get_next_state(board, 1, 7 * 15 + 7)
//!
//! valids = game.get_valid_moves(board, player)   # None when board is full
//! status = game.get_game_ended(board, player)    # 2 / +1 / -1 / 0
//! ```

use pyo3::prelude::*;

mod py_rules;

pub use py_rules::PyRules;

/// rust-gomoku: an N-in-a-row rules engine for AlphaZero-style training.
#[pymodule]
fn rust_gomoku(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRules>()?;
    Ok(())
}
