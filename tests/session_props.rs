//! Property tests over random click sequences and winning games

use pebble_tree::{IgnoreReason, OptimalStrategy, PerfectTree, Session, Transition};
use proptest::prelude::*;

mod common;
use common::{pebbled, started_session};

/// Depth plus a sequence of clicks that are valid for it
fn game() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (2usize..=5).prop_flat_map(|depth| {
        let node_count = (1usize << depth) - 1;
        (
            Just(depth),
            proptest::collection::vec(0..node_count, 0..64),
        )
    })
}

/// Depth, a warm-up click sequence, and one optional leaf detour per
/// strategy step
fn winning_game() -> impl Strategy<Value = (usize, Vec<usize>, Vec<Option<usize>>)> {
    (2usize..=5).prop_flat_map(|depth| {
        let node_count = (1usize << depth) - 1;
        let leaf_count = 1usize << (depth - 1);
        (
            Just(depth),
            proptest::collection::vec(0..node_count, 0..64),
            proptest::collection::vec(proptest::option::of(0..leaf_count), node_count),
        )
    })
}

/// Play a warm-up game, restart, then follow the optimal strategy.
///
/// Before each strategy click, a detour places and removes a leaf
/// whose sibling is empty, leaving the board as it was.
fn play_winning_game(depth: usize, warmup: &[usize], detours: &[Option<usize>]) -> Session {
    let tree = PerfectTree::new(depth).expect("valid depth");
    let strategy = OptimalStrategy::for_depth(depth).expect("valid depth");
    let mut session = started_session(depth);

    for &node in warmup {
        session.on_node_activated(node);
    }
    session.start();

    for (&node, detour) in strategy.activations().iter().zip(detours) {
        if let Some(offset) = *detour {
            let leaf = tree.leaf_layer_start() + offset;
            let sibling = tree.sibling(leaf).expect("leaves have siblings");
            let engine = session.engine();
            if !engine.has_pebble(leaf) && !engine.has_pebble(sibling) {
                session.on_node_activated(leaf);
                session.on_node_activated(leaf);
            }
        }
        session.on_node_activated(node);
    }
    session
}

proptest! {
    #[test]
    fn peak_is_monotone_and_counter_matches_scan((depth, clicks) in game()) {
        let mut session = started_session(depth);
        let mut previous_peak = 0;

        for node in clicks {
            session.on_node_activated(node);
            let snapshot = session.snapshot();

            prop_assert!(snapshot.peak_pebbles_in_play >= previous_peak, "peak must not decrease");
            prop_assert!(snapshot.peak_pebbles_in_play >= snapshot.pebbles_in_play);
            prop_assert_eq!(snapshot.pebbles_in_play, pebbled(&snapshot).len());
            prop_assert_eq!(snapshot.nodes.len(), (1 << depth) - 1);
            previous_peak = snapshot.peak_pebbles_in_play;
        }
    }

    #[test]
    fn empty_internal_clicks_change_nothing((depth, clicks) in game()) {
        let mut session = started_session(depth);
        let tree = PerfectTree::new(depth).unwrap();

        for node in clicks {
            session.on_node_activated(node);

            for internal in 0..tree.leaf_layer_start() {
                if session.engine().has_pebble(internal) || session.snapshot().won() {
                    continue;
                }
                let before = session.snapshot();
                let outcome = session.on_node_activated(internal);
                prop_assert_eq!(outcome.transition, Transition::Ignore(IgnoreReason::EmptyInternal));
                prop_assert_eq!(session.snapshot(), before);
            }
        }
    }

    #[test]
    fn won_sessions_are_frozen(
        (depth, warmup, detours) in winning_game(),
        extra in proptest::collection::vec(0usize..31, 1..16),
    ) {
        let mut session = play_winning_game(depth, &warmup, &detours);
        let node_count = (1usize << depth) - 1;
        prop_assert!(session.snapshot().won(), "strategy with detours must win");

        let frozen = session.snapshot();
        for node in extra {
            let outcome = session.on_node_activated(node % node_count);
            prop_assert_eq!(outcome.transition, Transition::Ignore(IgnoreReason::AlreadyWon));
            prop_assert!(!outcome.won);
            prop_assert_eq!(session.snapshot(), frozen.clone());
        }
    }

    #[test]
    fn winning_peak_never_beats_depth((depth, warmup, detours) in winning_game()) {
        let session = play_winning_game(depth, &warmup, &detours);
        let snapshot = session.snapshot();
        prop_assert!(snapshot.won(), "strategy with detours must win");

        prop_assert!(snapshot.peak_pebbles_in_play >= depth);
        prop_assert_eq!(snapshot.optimal_win, snapshot.peak_pebbles_in_play == depth);
        if detours.iter().all(Option::is_none) {
            prop_assert_eq!(snapshot.peak_pebbles_in_play, depth);
        }
    }

    #[test]
    fn reset_always_restores_pristine_board((depth, clicks) in game(), new_depth in 2usize..=6) {
        let mut session = started_session(depth);
        for node in clicks {
            session.on_node_activated(node);
        }

        session.set_depth(new_depth).unwrap();
        common::assert_pristine(&session.snapshot(), new_depth);

        session.start();
        session.reset();
        common::assert_pristine(&session.snapshot(), new_depth);
        prop_assert!(!Session::default().snapshot().started());
    }
}
