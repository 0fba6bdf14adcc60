//! Pebbling strategies and lower-bound search
//!
//! `OptimalStrategy` pebbles the root with exactly `depth` pebbles at
//! peak: finish the left subtree down to one pebble, keep it, then do
//! the right subtree and promote. `minimum_peak` checks by exhaustive
//! search that no sequence of activations does better.

use std::collections::{HashSet, VecDeque};

use crate::engine::Transition;
use crate::ledger::PebbleLedger;
use crate::tree::{NodeId, PerfectTree, Step};
use crate::PebbleError;

/// Largest depth the exhaustive search accepts (N = 31 nodes)
pub const MAX_SEARCH_DEPTH: usize = 5;

/// Activation sequence reaching the root with peak = depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalStrategy {
    depth: usize,
    activations: Vec<NodeId>,
}

impl OptimalStrategy {
    /// Build the strategy from a post-order walk
    ///
    /// Every leaf is placed when reached; every merge clicks the left
    /// child, whose pebbled sibling triggers the promotion.
    pub fn for_depth(depth: usize) -> Result<Self, PebbleError> {
        let tree = PerfectTree::new(depth)?;
        let activations = tree
            .post_order()
            .map(|step| match step {
                Step::Leaf(leaf) => leaf,
                Step::Merge { left, .. } => left,
            })
            .collect();

        Ok(Self { depth, activations })
    }

    /// Tree depth this strategy solves
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Node ids to activate, in order
    pub fn activations(&self) -> &[NodeId] {
        &self.activations
    }

    /// Number of activations (one per node)
    pub fn len(&self) -> usize {
        self.activations.len()
    }

    /// Never true for a valid depth
    pub fn is_empty(&self) -> bool {
        self.activations.is_empty()
    }
}

/// Smallest peak pebble count with which the root can be pebbled
///
/// Breadth-first search over ledger states, retried with a growing
/// pebble budget; the first budget that reaches the root is the answer.
pub fn minimum_peak(depth: usize) -> Result<usize, PebbleError> {
    if depth > MAX_SEARCH_DEPTH {
        return Err(PebbleError::SearchTooLarge {
            depth,
            max: MAX_SEARCH_DEPTH,
        });
    }
    let tree = PerfectTree::new(depth)?;

    let budget = (1..=tree.node_count())
        .find(|&budget| winnable_within(&tree, budget))
        .unwrap_or_else(|| unreachable!("a full tree of pebbles always wins"));
    Ok(budget)
}

/// Whether the root is reachable never exceeding `budget` pebbles
pub fn winnable_within(tree: &PerfectTree, budget: usize) -> bool {
    let start = PebbleLedger::new(tree);
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start.clone());
    queue.push_back(start);

    while let Some(ledger) = queue.pop_front() {
        for node in tree.nodes() {
            let transition = Transition::plan(tree, &ledger, node);
            if !transition.mutates() {
                continue;
            }

            let mut next = ledger.clone();
            transition.apply(&mut next);
            if next.count() > budget {
                continue;
            }
            if transition.reaches_root() {
                return true;
            }
            if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_depth_three() {
        let strategy = OptimalStrategy::for_depth(3).unwrap();
        assert_eq!(strategy.activations(), &[3, 4, 3, 5, 6, 5, 1]);
    }

    #[test]
    fn test_strategy_length() {
        for depth in 2..=8 {
            let strategy = OptimalStrategy::for_depth(depth).unwrap();
            let tree = PerfectTree::new(depth).unwrap();
            assert_eq!(strategy.len(), tree.node_count());
            assert!(!strategy.is_empty());
        }
    }

    #[test]
    fn test_budget_below_depth_fails() {
        let tree = PerfectTree::new(3).unwrap();
        assert!(!winnable_within(&tree, 2));
        assert!(winnable_within(&tree, 3));
    }

    #[test]
    fn test_search_rejects_large_depth() {
        assert!(matches!(
            minimum_peak(MAX_SEARCH_DEPTH + 1),
            Err(PebbleError::SearchTooLarge { .. })
        ));
    }
}
