//! Immutable view handed to renderers

use crate::engine::{Engine, Phase};
use crate::tree::NodeId;

/// Render state of one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct NodeView {
    /// Level-order id
    pub id: NodeId,

    /// Whether a pebble sits here
    pub has_pebble: bool,

    /// Layer (root = 0)
    pub layer: usize,
}

/// Owned copy of the whole session state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Snapshot {
    /// Tree depth
    pub depth: usize,

    /// Lifecycle phase
    pub phase: Phase,

    /// One entry per node, in level order
    pub nodes: Vec<NodeView>,

    /// Pebbles currently on the tree
    pub pebbles_in_play: usize,

    /// Most pebbles simultaneously on the tree
    pub peak_pebbles_in_play: usize,

    /// Won using exactly `depth` pebbles at peak
    pub optimal_win: bool,
}

impl Snapshot {
    pub(crate) fn capture(engine: &Engine) -> Self {
        let tree = engine.tree();
        let nodes = tree
            .nodes()
            .map(|id| NodeView {
                id,
                has_pebble: engine.has_pebble(id),
                layer: tree.layer(id),
            })
            .collect();

        Self {
            depth: tree.depth(),
            phase: engine.phase(),
            nodes,
            pebbles_in_play: engine.pebbles_in_play(),
            peak_pebbles_in_play: engine.peak_pebbles_in_play(),
            optimal_win: engine.is_optimal_win(),
        }
    }

    /// Game has been started (and possibly won)
    pub fn started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    /// Root has been pebbled
    pub fn won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// Nodes of one layer, left to right
    pub fn layer(&self, layer: usize) -> impl Iterator<Item = &NodeView> + '_ {
        self.nodes.iter().filter(move |node| node.layer == layer)
    }

    /// Text rendering: one line per layer, `*` pebbled, `o` empty
    pub fn render(&self) -> String {
        let width = 1usize << (self.depth - 1);
        let mut lines = Vec::with_capacity(self.depth);
        for layer in 0..self.depth {
            let cells = 1usize << layer;
            let gap = (width / cells).max(1);
            let mut line = String::new();
            for node in self.layer(layer) {
                let mark = if node.has_pebble { '*' } else { 'o' };
                line.push_str(&format!("{:^w$}", mark, w = gap * 4));
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }
}
