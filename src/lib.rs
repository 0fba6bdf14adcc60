//! # Pebbling a Perfect Binary Tree
//!
//! This library implements the game-state engine for the classic
//! binary-tree pebbling puzzle.
//!
//! ## Rules
//!
//! 1. **Placement**: an empty leaf takes a pebble when clicked
//! 2. **Promotion**: clicking a pebble whose sibling is also pebbled
//!    spends both and pebbles their parent
//! 3. **Removal**: clicking any other pebble takes it off the tree
//! 4. **Win**: a promotion onto the root
//!
//! Goal: win while keeping the peak number of pebbles in play low.
//! The minimum achievable peak equals the tree depth.
//!
//! ## Usage Example
//!
//! ```
//! use pebble_tree::Session;
//!
//! let mut session = Session::new();
//! session.set_depth(2)?;
//! session.start();
//! for node in [1, 2, 1] {
//!     session.on_node_activated(node);
//! }
//! let snapshot = session.snapshot();
//! assert!(snapshot.won());
//! assert!(snapshot.optimal_win);
//! # Ok::<(), pebble_tree::PebbleError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules
pub mod tree;       // Implicit perfect-tree topology
pub mod ledger;     // Per-node pebble bits
pub mod space;      // Pebble usage accounting
pub mod engine;     // Click rule and win detection
pub mod session;    // Start/reset/depth orchestration
pub mod solver;     // Optimal strategy and lower-bound search
/// Python bindings for exposing the session to external runtimes.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use engine::{Engine, IgnoreReason, Outcome, Phase, Transition};
pub use ledger::PebbleLedger;
pub use session::{Celebration, NodeView, Session, Snapshot};
pub use solver::{minimum_peak, OptimalStrategy};
pub use tree::{Children, NodeId, PerfectTree};

use thiserror::Error;

/// Smallest playable depth
pub const MIN_DEPTH: usize = 2;

/// Largest accepted depth
pub const MAX_DEPTH: usize = 16;

/// Depth of a fresh session
pub const DEFAULT_DEPTH: usize = 3;

/// Depths offered on the start screen
pub const SUPPORTED_DEPTHS: [usize; 4] = [2, 3, 4, 5];

/// Configuration parameters for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Tree depth (number of layers)
    pub depth: usize,

    /// Record a per-move pebble timeline
    pub track_history: bool,
}

impl GameConfig {
    /// Configuration for a given depth, no history
    pub fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Nodes in the tree: 2^depth − 1
    ///
    /// Fails for a depth outside `MIN_DEPTH..=MAX_DEPTH`.
    pub fn node_count(&self) -> Result<usize, PebbleError> {
        PerfectTree::new(self.depth).map(|tree| tree.node_count())
    }

    /// Fewest pebbles that can win at this depth
    pub fn optimal_peak(&self) -> usize {
        self.depth
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            track_history: false,
        }
    }
}

/// Errors surfaced to callers handling untrusted input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PebbleError {
    /// Depth outside the accepted range
    #[error("Invalid depth {depth}: must be between {min} and {max}")]
    InvalidDepth {
        /// Requested depth
        depth: usize,
        /// Smallest accepted depth
        min: usize,
        /// Largest accepted depth
        max: usize,
    },

    /// Node id not in the tree
    #[error("Node {node} out of range for tree of {node_count} nodes")]
    NodeOutOfRange {
        /// Requested node
        node: usize,
        /// Nodes in the tree
        node_count: usize,
    },

    /// Exhaustive search refused for a deep tree
    #[error("Search depth {depth} exceeds limit {max}")]
    SearchTooLarge {
        /// Requested depth
        depth: usize,
        /// Largest searchable depth
        max: usize,
    },
}
