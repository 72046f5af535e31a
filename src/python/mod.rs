//! Python bindings for the Ultimate Tic-Tac-Toe engine.
//!
//! Exposes the game entry points to Python training code.
//!
//! # Quick Start
//!
//! ```python
//! import random
//! import ultimate_ttt as uttt
//!
//! state = uttt.GameState()
//! while not state.is_terminal():
//!     state = state.apply_move(random.choice(state.legal_moves()))
//!
//! print(state.result())
//! features = state.encode()      # numpy, shape (101,)
//! ```

use pyo3::prelude::*;

mod py_replay;
mod py_state;

pub use py_replay::*;
pub use py_state::*;

/// ultimate_ttt: Ultimate Tic-Tac-Toe rules for self-play and training.
#[pymodule]
fn ultimate_ttt(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameState>()?;
    m.add_class::<PyReplay>()?;

    m.add_function(wrap_pyfunction!(move_to_index, m)?)?;
    m.add_function(wrap_pyfunction!(index_to_move, m)?)?;
    m.add_function(wrap_pyfunction!(random_playout, m)?)?;

    Ok(())
}
