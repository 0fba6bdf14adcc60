//! Test helpers for driving sessions

#![allow(dead_code)]
use pebble_tree::{Outcome, Session, Snapshot};

/// Started session at `depth`
pub fn started_session(depth: usize) -> Session {
    let mut session = Session::new();
    session.set_depth(depth).expect("valid depth");
    session.start();
    session
}

/// Click every node in order, returning the outcomes
pub fn play(session: &mut Session, clicks: &[usize]) -> Vec<Outcome> {
    clicks
        .iter()
        .map(|&node| session.on_node_activated(node))
        .collect()
}

/// Pebbled node ids in a snapshot
pub fn pebbled(snapshot: &Snapshot) -> Vec<usize> {
    snapshot
        .nodes
        .iter()
        .filter(|node| node.has_pebble)
        .map(|node| node.id)
        .collect()
}

/// Assert a snapshot is a pristine board for `depth`
pub fn assert_pristine(snapshot: &Snapshot, depth: usize) {
    assert_eq!(snapshot.depth, depth);
    assert_eq!(snapshot.nodes.len(), (1 << depth) - 1, "one entry per node");
    assert!(pebbled(snapshot).is_empty(), "no pebbles on a fresh board");
    assert_eq!(snapshot.pebbles_in_play, 0);
    assert_eq!(snapshot.peak_pebbles_in_play, 0);
    assert!(!snapshot.won());
    assert!(!snapshot.optimal_win);
}
