//! Game state engine
//!
//! Owns the per-node pebble ledger and usage counters, applies the
//! click rule, and detects the win:
//! - Leaves take pebbles directly
//! - A pebble with a pebbled sibling promotes both into the parent
//! - Any other pebble is removed
//! - Promotion onto the root wins; the board then freezes

mod transition;

pub use transition::{IgnoreReason, Transition};

use crate::ledger::PebbleLedger;
use crate::space::{UsageProfile, UsageTracker};
use crate::tree::{NodeId, PerfectTree};
use tracing::debug;

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Phase {
    /// Waiting for `start`
    #[default]
    NotStarted,

    /// Accepting activations
    Started,

    /// Root pebbled; activations are inert
    Won,
}

/// Result of a single activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// What the rule did
    pub transition: Transition,

    /// Pebbles in play afterwards
    pub pebbles_in_play: usize,

    /// True only on the activation that won the game
    pub won: bool,
}

/// Pebbling engine for one tree
#[derive(Debug, Clone)]
pub struct Engine {
    tree: PerfectTree,
    ledger: PebbleLedger,
    usage: UsageTracker,
    phase: Phase,
}

impl Engine {
    /// Create engine in the not-started phase
    pub fn new(tree: PerfectTree, track_history: bool) -> Self {
        Self {
            tree,
            ledger: PebbleLedger::new(&tree),
            usage: UsageTracker::new(track_history),
            phase: Phase::NotStarted,
        }
    }

    /// Clear the board and counters, then accept activations
    pub fn start(&mut self) {
        self.clear();
        self.phase = Phase::Started;
    }

    /// Clear the board and counters, back to not started
    pub fn stop(&mut self) {
        self.clear();
        self.phase = Phase::NotStarted;
    }

    fn clear(&mut self) {
        self.ledger.clear_all();
        self.usage.reset();
    }

    /// Activate `node` (a click on it)
    ///
    /// Panics if `node` is not in `0..N`.
    pub fn activate(&mut self, node: NodeId) -> Outcome {
        assert!(
            self.tree.contains(node),
            "node {} out of range for tree of {} nodes",
            node,
            self.tree.node_count()
        );

        let transition = match self.phase {
            Phase::NotStarted => Transition::Ignore(IgnoreReason::NotStarted),
            Phase::Won => Transition::Ignore(IgnoreReason::AlreadyWon),
            Phase::Started => Transition::plan(&self.tree, &self.ledger, node),
        };

        if !transition.mutates() {
            debug!(node, %transition, "activation ignored");
            return Outcome {
                transition,
                pebbles_in_play: self.usage.current(),
                won: false,
            };
        }

        transition.apply(&mut self.ledger);
        self.usage.observe(self.ledger.count());

        let won = transition.reaches_root();
        if won {
            self.phase = Phase::Won;
        }

        debug!(
            node,
            %transition,
            pebbles = self.usage.current(),
            peak = self.usage.peak(),
            won,
            "activation applied"
        );

        Outcome {
            transition,
            pebbles_in_play: self.usage.current(),
            won,
        }
    }

    /// Tree topology
    pub fn tree(&self) -> &PerfectTree {
        &self.tree
    }

    /// Per-node pebble state
    pub fn ledger(&self) -> &PebbleLedger {
        &self.ledger
    }

    /// Whether `node` holds a pebble
    pub fn has_pebble(&self, node: NodeId) -> bool {
        self.ledger.has_pebble(node)
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pebbles currently on the tree
    pub fn pebbles_in_play(&self) -> usize {
        self.usage.current()
    }

    /// Most pebbles simultaneously on the tree since the last start
    pub fn peak_pebbles_in_play(&self) -> usize {
        self.usage.peak()
    }

    /// Board-changing activations since the last start
    pub fn moves(&self) -> usize {
        self.usage.moves()
    }

    /// Usage timeline, if history tracking is on
    pub fn profile(&self) -> Option<&UsageProfile> {
        self.usage.profile()
    }

    /// Won with peak usage equal to the depth
    pub fn is_optimal_win(&self) -> bool {
        self.phase == Phase::Won && self.usage.peak() == self.tree.depth()
    }
}
