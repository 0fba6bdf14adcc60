//! Click rule δ: (tree, ledger, node) → transition

use crate::ledger::PebbleLedger;
use crate::tree::{NodeId, PerfectTree};
use std::fmt;

/// Effect of activating one node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Put a pebble on an empty leaf
    Place(NodeId),

    /// Take a pebble off (no pebbled sibling, or the root)
    Remove(NodeId),

    /// Spend `node` and `sibling`, pebble `parent`
    Promote {
        /// Activated node
        node: NodeId,
        /// Its pebbled sibling
        sibling: NodeId,
        /// Shared parent receiving the pebble
        parent: NodeId,
    },

    /// Nothing happens
    Ignore(IgnoreReason),
}

/// Why an activation left the board untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// Game not started
    NotStarted,

    /// Game already won
    AlreadyWon,

    /// Empty internal node (only leaves take pebbles directly)
    EmptyInternal,
}

impl Transition {
    /// Decide what activating `node` does, without mutating anything
    ///
    /// Phase guards live in the engine; this is the pure board rule.
    pub fn plan(tree: &PerfectTree, ledger: &PebbleLedger, node: NodeId) -> Self {
        if ledger.has_pebble(node) {
            match (tree.parent(node), tree.sibling(node)) {
                (Some(parent), Some(sibling)) if ledger.has_pebble(sibling) => Transition::Promote {
                    node,
                    sibling,
                    parent,
                },
                _ => Transition::Remove(node),
            }
        } else if tree.is_leaf(node) {
            Transition::Place(node)
        } else {
            Transition::Ignore(IgnoreReason::EmptyInternal)
        }
    }

    /// Apply to a ledger
    pub fn apply(&self, ledger: &mut PebbleLedger) {
        match *self {
            Transition::Place(node) => ledger.set(node),
            Transition::Remove(node) => ledger.clear(node),
            Transition::Promote {
                node,
                sibling,
                parent,
            } => {
                ledger.clear(node);
                ledger.clear(sibling);
                ledger.set(parent);
            }
            Transition::Ignore(_) => {}
        }
    }

    /// Whether this transition changes the board
    pub fn mutates(&self) -> bool {
        !matches!(self, Transition::Ignore(_))
    }

    /// Whether this transition pebbles the root
    pub fn reaches_root(&self) -> bool {
        matches!(self, Transition::Promote { parent: 0, .. })
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Place(node) => write!(f, "place {}", node),
            Transition::Remove(node) => write!(f, "remove {}", node),
            Transition::Promote {
                node,
                sibling,
                parent,
            } => write!(f, "promote {}+{} -> {}", node, sibling, parent),
            Transition::Ignore(reason) => write!(f, "ignored ({:?})", reason),
        }
    }
}
