//! Stack-driven post-order traversal
//!
//! Each level keeps one stage token (which child is next), so the
//! stack never exceeds `depth` frames.

use super::{Children, NodeId, PerfectTree};

/// Stage of an internal node on the traversal stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Left subtree not yet visited
    Left,

    /// Left subtree done, right subtree pending
    Right,

    /// Both subtrees done, ready to merge
    Merge,
}

/// One stack frame: node plus its stage
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    stage: Stage,
}

/// Step emitted by the walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Reached a leaf
    Leaf(NodeId),

    /// Both children of `parent` are complete
    Merge {
        /// Internal node whose subtrees are finished
        parent: NodeId,
        /// Its left child
        left: NodeId,
        /// Its right child
        right: NodeId,
    },
}

/// Post-order walk over a perfect tree
///
/// Leaves are emitted left to right, and every internal node is
/// emitted as a `Merge` right after its right subtree finishes.
#[derive(Debug)]
pub struct PostOrderWalk<'a> {
    tree: &'a PerfectTree,
    stack: Vec<Frame>,
}

impl<'a> PostOrderWalk<'a> {
    /// Start a walk at the root
    pub fn new(tree: &'a PerfectTree) -> Self {
        let mut stack = Vec::with_capacity(tree.depth());
        stack.push(Frame {
            node: 0,
            stage: Stage::Left,
        });
        Self { tree, stack }
    }
}

impl Iterator for PostOrderWalk<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            let frame = self.stack.last_mut()?;
            let node = frame.node;

            if self.tree.is_leaf(node) {
                self.stack.pop();
                return Some(Step::Leaf(node));
            }

            let Children::Pair(left, right) = self.tree.children(node) else {
                unreachable!("internal node {} has two children", node);
            };

            match frame.stage {
                Stage::Left => {
                    frame.stage = Stage::Right;
                    self.stack.push(Frame {
                        node: left,
                        stage: Stage::Left,
                    });
                }
                Stage::Right => {
                    frame.stage = Stage::Merge;
                    self.stack.push(Frame {
                        node: right,
                        stage: Stage::Left,
                    });
                }
                Stage::Merge => {
                    self.stack.pop();
                    return Some(Step::Merge {
                        parent: node,
                        left,
                        right,
                    });
                }
            }
        }
    }
}
