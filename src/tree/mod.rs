//! Perfect binary tree topology
//!
//! Implicit representation: No explicit tree stored!
//! A tree is just its depth; parent, children, sibling and layer
//! are computed on demand from level-order indices.

mod node;
mod traversal;

pub use node::{layer_of, Children, NodeId};
pub use traversal::{PostOrderWalk, Stage, Step};

use crate::{PebbleError, MAX_DEPTH, MIN_DEPTH};

/// Perfect binary tree of a fixed depth (implicit)
///
/// Never materialized - all navigation via arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PerfectTree {
    /// Number of layers (≥ 2)
    depth: usize,

    /// N = 2^depth − 1
    node_count: usize,
}

impl PerfectTree {
    /// Create tree of the given depth
    pub fn new(depth: usize) -> Result<Self, PebbleError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
            return Err(PebbleError::InvalidDepth {
                depth,
                min: MIN_DEPTH,
                max: MAX_DEPTH,
            });
        }

        Ok(Self {
            depth,
            node_count: (1usize << depth) - 1,
        })
    }

    /// Number of layers
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Total nodes N
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// First index on the leaf layer: 2^(depth−1) − 1
    #[inline]
    pub fn leaf_layer_start(&self) -> NodeId {
        (1usize << (self.depth - 1)) - 1
    }

    /// Whether `node` is a valid id for this tree
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node < self.node_count
    }

    /// Parent of `node`; `None` for the root
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        debug_assert!(self.contains(node), "node {} out of range", node);
        if node == 0 {
            None
        } else {
            Some((node - 1) / 2)
        }
    }

    /// Ordered children of `node`; empty on the leaf layer
    pub fn children(&self, node: NodeId) -> Children {
        debug_assert!(self.contains(node), "node {} out of range", node);
        Children::of(node, self.node_count)
    }

    /// Other child of `node`'s parent; `None` for the root
    pub fn sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        match self.children(parent) {
            Children::Pair(left, right) if left == node => Some(right),
            Children::Pair(left, _) => Some(left),
            Children::None => None,
        }
    }

    /// True iff `node` lies on the bottom layer
    #[inline]
    pub fn is_leaf(&self, node: NodeId) -> bool {
        debug_assert!(self.contains(node), "node {} out of range", node);
        node >= self.leaf_layer_start()
    }

    /// Layer of `node` (root = 0)
    #[inline]
    pub fn layer(&self, node: NodeId) -> usize {
        layer_of(node)
    }

    /// All node ids in level order
    pub fn nodes(&self) -> std::ops::Range<NodeId> {
        0..self.node_count
    }

    /// Leaf ids, left to right
    pub fn leaves(&self) -> std::ops::Range<NodeId> {
        self.leaf_layer_start()..self.node_count
    }

    /// Post-order walk from the root
    pub fn post_order(&self) -> PostOrderWalk<'_> {
        PostOrderWalk::new(self)
    }
}
