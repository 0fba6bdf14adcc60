//! Implicit node identifiers
//!
//! Node = level-order index i ∈ [0, N)
//! Children via arithmetic:
//!   Left child: 2i + 1
//!   Right child: 2i + 2

/// Level-order node index (0 = root)
pub type NodeId = usize;

/// Layer of a node: ⌊log2(i + 1)⌋
#[inline]
pub fn layer_of(node: NodeId) -> usize {
    (usize::BITS - 1 - (node + 1).leading_zeros()) as usize
}

/// Ordered children of a node (empty for leaves)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Children {
    /// Leaf: nothing below
    None,

    /// Internal node: (left, right)
    Pair(NodeId, NodeId),
}

impl Children {
    /// Compute children of `node` in a tree of `node_count` nodes
    ///
    /// A perfect tree never has a lone left child, so the right
    /// child exists whenever the left one does.
    pub fn of(node: NodeId, node_count: usize) -> Self {
        let left = 2 * node + 1;
        if left >= node_count {
            return Children::None;
        }
        debug_assert!(left + 1 < node_count, "perfect tree has paired children");
        Children::Pair(left, left + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_of() {
        assert_eq!(layer_of(0), 0);
        assert_eq!(layer_of(1), 1);
        assert_eq!(layer_of(2), 1);
        assert_eq!(layer_of(3), 2);
        assert_eq!(layer_of(6), 2);
        assert_eq!(layer_of(7), 3);
        assert_eq!(layer_of(14), 3);
        assert_eq!(layer_of(15), 4);
    }

    #[test]
    fn test_children_arithmetic() {
        // Depth 3: N = 7, leaves 3..=6
        assert_eq!(Children::of(0, 7), Children::Pair(1, 2));
        assert_eq!(Children::of(2, 7), Children::Pair(5, 6));
        assert_eq!(Children::of(3, 7), Children::None);
        assert_eq!(Children::of(6, 7), Children::None);
        assert_eq!(Children::of(1, 7), Children::Pair(3, 4));
    }
}
