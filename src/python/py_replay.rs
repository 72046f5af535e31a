//! Replay and playout bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::playout::{PlayoutConfig, RandomPlayout};
use crate::replay::Replay;

use super::py_state::{to_move, PyGameState};

/// Python wrapper for Replay.
#[pyclass(name = "Replay", frozen)]
#[derive(Clone, Debug)]
pub struct PyReplay(pub Replay);

#[pymethods]
impl PyReplay {
    /// Build a replay from a complete game's moves.
    ///
    /// Raises ValueError if a move is illegal or the game is unfinished.
    #[new]
    fn new(moves: Vec<(u8, u8)>) -> PyResult<Self> {
        let moves = moves.into_iter().map(to_move).collect::<PyResult<Vec<_>>>()?;
        Replay::from_moves(moves)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Moves as `(board, cell)` pairs.
    #[getter]
    fn moves(&self) -> Vec<(u8, u8)> {
        self.0.moves.iter().map(|&m| m.into()).collect()
    }

    /// Result tag: "X", "O", or "draw".
    #[getter]
    fn result(&self) -> &'static str {
        self.0.result.tag()
    }

    /// Number of moves.
    #[getter]
    fn steps(&self) -> usize {
        self.0.steps
    }

    /// Replay the moves and return the final state.
    fn final_state(&self) -> PyResult<PyGameState> {
        self.0
            .reconstruct()
            .map(PyGameState)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Compact binary encoding.
    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        self.0
            .to_bytes()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Decode from `to_bytes` output.
    #[staticmethod]
    fn from_bytes(bytes: Vec<u8>) -> PyResult<Self> {
        Replay::from_bytes(&bytes)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __len__(&self) -> usize {
        self.0.steps
    }

    fn __repr__(&self) -> String {
        format!("Replay(steps={}, result={})", self.0.steps, self.0.result)
    }
}

/// Play one uniformly random game and return its replay.
#[pyfunction]
#[pyo3(signature = (seed = 0, game_index = 0))]
pub fn random_playout(seed: u64, game_index: u64) -> PyResult<PyReplay> {
    RandomPlayout::new(PlayoutConfig::default().with_seed(seed))
        .play(game_index)
        .replay()
        .map(PyReplay)
        .ok_or_else(|| PyValueError::new_err("playout did not finish"))
}
