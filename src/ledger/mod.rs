//! Per-node pebble ledger
//!
//! One bit per node, fixed at N bits for the lifetime of a game.
//! Bits only flip; the ledger never grows or shrinks.

use crate::tree::{NodeId, PerfectTree};
use bitvec::prelude::*;

/// Pebble occupancy for every node of a tree
///
/// Space: N bits total
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PebbleLedger {
    /// Occupancy bitvector (1 bit per node)
    pebbles: BitVec,
}

impl PebbleLedger {
    /// Create an empty ledger sized for `tree`
    pub fn new(tree: &PerfectTree) -> Self {
        Self {
            pebbles: bitvec![0; tree.node_count()],
        }
    }

    /// Number of entries (always N)
    pub fn len(&self) -> usize {
        self.pebbles.len()
    }

    /// True only for a zero-node ledger, which a valid tree never produces
    pub fn is_empty(&self) -> bool {
        self.pebbles.is_empty()
    }

    /// Whether `node` holds a pebble
    ///
    /// Panics if `node` is outside the tree.
    pub fn has_pebble(&self, node: NodeId) -> bool {
        self.pebbles[node]
    }

    /// Put a pebble on `node`
    pub fn set(&mut self, node: NodeId) {
        self.pebbles.set(node, true);
    }

    /// Take the pebble off `node`
    pub fn clear(&mut self, node: NodeId) {
        self.pebbles.set(node, false);
    }

    /// Count pebbles by scanning every bit
    pub fn count(&self) -> usize {
        self.pebbles.count_ones()
    }

    /// Ids of pebbled nodes in level order
    pub fn pebbled(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.pebbles.iter_ones()
    }

    /// Clear every pebble (size unchanged)
    pub fn clear_all(&mut self) {
        self.pebbles.fill(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_sized_to_tree() {
        let tree = PerfectTree::new(4).unwrap();
        let ledger = PebbleLedger::new(&tree);
        assert_eq!(ledger.len(), 15);
        assert_eq!(ledger.count(), 0);
    }

    #[test]
    fn test_set_clear_count() {
        let tree = PerfectTree::new(3).unwrap();
        let mut ledger = PebbleLedger::new(&tree);

        ledger.set(3);
        ledger.set(6);
        assert!(ledger.has_pebble(3));
        assert!(!ledger.has_pebble(4));
        assert_eq!(ledger.count(), 2);
        assert_eq!(ledger.pebbled().collect::<Vec<_>>(), vec![3, 6]);

        ledger.clear(3);
        assert_eq!(ledger.count(), 1);

        ledger.clear_all();
        assert_eq!(ledger.count(), 0);
        assert_eq!(ledger.len(), 7);
    }
}
