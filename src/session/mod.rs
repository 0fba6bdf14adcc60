//! Session controller
//!
//! Wraps the engine with depth selection, start/reset, and the
//! one-shot celebration signal for optimal wins. Presentation layers
//! read `Snapshot`s and write only through these methods.

mod snapshot;

pub use snapshot::{NodeView, Snapshot};

use crate::engine::{Engine, Outcome, Phase};
use crate::tree::{NodeId, PerfectTree};
use crate::{GameConfig, PebbleError};
use tracing::info;

/// Edge-triggered celebration state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Celebration {
    /// Nothing to show
    #[default]
    Idle,

    /// Optimal win reached, not yet shown
    Pending,

    /// Already shown for this win
    Shown,
}

/// One player's game session
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    engine: Engine,
    celebration: Celebration,
}

impl Session {
    /// Not-started session at the default depth
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
            .unwrap_or_else(|_| unreachable!("default depth is valid"))
    }

    /// Not-started session for `config`
    pub fn with_config(config: GameConfig) -> Result<Self, PebbleError> {
        let tree = PerfectTree::new(config.depth)?;
        Ok(Self {
            engine: Engine::new(tree, config.track_history),
            config,
            celebration: Celebration::Idle,
        })
    }

    /// Current depth
    pub fn depth(&self) -> usize {
        self.config.depth
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    /// Read-only access to the engine
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Change depth; always resets
    ///
    /// An invalid depth leaves the session untouched.
    pub fn set_depth(&mut self, depth: usize) -> Result<(), PebbleError> {
        let tree = PerfectTree::new(depth)?;
        self.config.depth = depth;
        self.engine = Engine::new(tree, self.config.track_history);
        self.celebration = Celebration::Idle;
        info!(depth, nodes = tree.node_count(), "depth changed");
        Ok(())
    }

    /// Fresh board for the current depth, accepting activations
    pub fn start(&mut self) {
        self.engine.start();
        self.celebration = Celebration::Idle;
        info!(depth = self.depth(), "game started");
    }

    /// Fresh board, back to the pre-game state
    pub fn reset(&mut self) {
        self.engine.stop();
        self.celebration = Celebration::Idle;
        info!(depth = self.depth(), "game reset");
    }

    /// Forward a node click to the engine
    ///
    /// Panics if `node` is not in `0..N`.
    pub fn on_node_activated(&mut self, node: NodeId) -> Outcome {
        let outcome = self.engine.activate(node);
        if outcome.won {
            info!(
                peak = self.engine.peak_pebbles_in_play(),
                depth = self.depth(),
                optimal = self.engine.is_optimal_win(),
                "game won"
            );
            if self.engine.is_optimal_win() {
                self.celebration = Celebration::Pending;
            }
        }
        outcome
    }

    /// Checked activation for untrusted input
    pub fn try_activate(&mut self, node: NodeId) -> Result<Outcome, PebbleError> {
        let node_count = self.engine.tree().node_count();
        if node >= node_count {
            return Err(PebbleError::NodeOutOfRange { node, node_count });
        }
        Ok(self.on_node_activated(node))
    }

    /// Immutable copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.engine)
    }

    /// Celebration state without consuming it
    pub fn celebration(&self) -> Celebration {
        self.celebration
    }

    /// True exactly once per optimal win
    pub fn take_celebration(&mut self) -> bool {
        if self.celebration == Celebration::Pending {
            self.celebration = Celebration::Shown;
            true
        } else {
            false
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
