//! Python bindings that expose the pebbling session via PyO3.
use pyo3::{exceptions::PyValueError, prelude::*, types::PyModule};

use crate::{Phase, Session, SUPPORTED_DEPTHS};

/// Python-facing wrapper around a game session.
#[pyclass]
#[derive(Debug)]
pub struct PySession {
    session: Session,
}

#[pymethods]
impl PySession {
    #[new]
    /// Create a not-started session at the default depth.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    /// Depths offered on the start screen.
    #[staticmethod]
    pub fn supported_depths() -> Vec<usize> {
        SUPPORTED_DEPTHS.to_vec()
    }

    /// Change depth (resets the game).
    pub fn set_depth(&mut self, depth: usize) -> PyResult<()> {
        self.session
            .set_depth(depth)
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    /// Start a fresh game.
    pub fn start(&mut self) {
        self.session.start();
    }

    /// Return to the pre-game state.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Click a node. Returns `True` if this click won the game.
    pub fn activate(&mut self, node: usize) -> PyResult<bool> {
        self.session
            .try_activate(node)
            .map(|outcome| outcome.won)
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    /// True exactly once after an optimal win.
    pub fn take_celebration(&mut self) -> bool {
        self.session.take_celebration()
    }

    /// Snapshot as `(depth, started, won, in_play, peak, optimal, nodes)`
    /// where `nodes` is a list of `(id, has_pebble, layer)` tuples.
    #[allow(clippy::type_complexity)]
    pub fn snapshot(
        &self,
    ) -> (usize, bool, bool, usize, usize, bool, Vec<(usize, bool, usize)>) {
        let snapshot = self.session.snapshot();
        let nodes = snapshot
            .nodes
            .iter()
            .map(|node| (node.id, node.has_pebble, node.layer))
            .collect();
        (
            snapshot.depth,
            snapshot.phase != Phase::NotStarted,
            snapshot.phase == Phase::Won,
            snapshot.pebbles_in_play,
            snapshot.peak_pebbles_in_play,
            snapshot.optimal_win,
            nodes,
        )
    }
}

/// Create Python module.
#[pymodule]
pub fn pebble_tree_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    Ok(())
}
