//! Game state bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameState, Move, Target};
use crate::nn::{legal_mask, FlatEncoder, StateEncoder};
use crate::rules::{RulesEngine, UltimateTicTacToe};

const RULES: UltimateTicTacToe = UltimateTicTacToe::new();

/// Convert a Python `(board, cell)` pair into a move.
pub(crate) fn to_move(pair: (u8, u8)) -> PyResult<Move> {
    Move::try_from(pair).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Python wrapper for GameState.
///
/// Immutable: `apply_move` returns a new state.
#[pyclass(name = "GameState", frozen)]
#[derive(Clone, Copy, Debug)]
pub struct PyGameState(pub GameState);

#[pymethods]
impl PyGameState {
    /// Create the initial state.
    #[new]
    fn new() -> Self {
        Self(RULES.initial())
    }

    /// Legal moves as `(board, cell)` pairs, ordered by flat index.
    fn legal_moves(&self) -> Vec<(u8, u8)> {
        RULES
            .legal_moves(&self.0)
            .into_iter()
            .map(<(u8, u8)>::from)
            .collect()
    }

    /// Return the state after playing `(board, cell)`.
    ///
    /// Raises ValueError if the move is illegal.
    fn apply_move(&self, mv: (u8, u8)) -> PyResult<Self> {
        let mv = to_move(mv)?;
        RULES
            .try_apply_move(&self.0, mv)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Check if the game is over.
    fn is_terminal(&self) -> bool {
        RULES.is_terminal(&self.0)
    }

    /// Result tag: "X", "O", "draw", or None while the game continues.
    fn result(&self) -> Option<&'static str> {
        RULES.outcome(&self.0).map(|r| r.tag())
    }

    /// Side to move: "X" or "O".
    #[getter]
    fn current_player(&self) -> String {
        self.0.turn().to_string()
    }

    /// Active target: -1 for any board, 0..8 for a forced board, -2 when finished.
    #[getter]
    fn available_big(&self) -> i8 {
        match self.0.target() {
            Target::Any => -1,
            Target::Board(k) => k as i8,
            Target::Finished => -2,
        }
    }

    /// Capture owners per sub-board: "X", "O", or "".
    #[getter]
    fn big(&self) -> Vec<String> {
        self.0
            .captures()
            .iter()
            .map(|c| c.map(|p| p.to_string()).unwrap_or_default())
            .collect()
    }

    /// Cell contents per sub-board: "X", "O", or "".
    #[getter]
    fn small(&self) -> Vec<Vec<String>> {
        (0..9)
            .map(|b| {
                self.0
                    .sub_board(b)
                    .iter()
                    .map(|c| c.map(|p| p.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// 101-feature encoding from the side to move's perspective.
    fn encode<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_vec_bound(py, FlatEncoder::new().encode(&self.0).tensor)
    }

    /// 81-wide legal move mask.
    fn legal_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_vec_bound(py, legal_mask(&self.0))
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "GameState(turn={}, target={:?}, empty={})",
            self.0.turn(),
            self.0.target(),
            self.0.empty_cells()
        )
    }
}

/// Flat index `board * 9 + cell` of a move.
#[pyfunction]
pub fn move_to_index(mv: (u8, u8)) -> PyResult<usize> {
    Ok(to_move(mv)?.index())
}

/// Move for a flat index in `0..81`.
#[pyfunction]
pub fn index_to_move(index: u8) -> PyResult<(u8, u8)> {
    Move::from_index(index)
        .map(<(u8, u8)>::from)
        .ok_or_else(|| PyValueError::new_err(format!("move index {} out of range", index)))
}
