//! Pebble usage accounting and profiling
//!
//! Tracks current and peak pebbles in play

mod allocator;

pub use allocator::UsageTracker;

/// Detailed usage profile (if enabled)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageProfile {
    /// Peak pebbles in play
    pub peak: usize,

    /// Pebbles over time (snapshots)
    pub timeline: Vec<(usize, usize)>, // (move_index, pebbles_in_play)
}

impl UsageProfile {
    /// Generate report
    pub fn report(&self) -> String {
        let mut out = format!("Peak pebbles: {}\nTimeline:", self.peak);
        for (step, pebbles) in &self.timeline {
            out.push_str(&format!("\n  move {:>3}: {}", step, pebbles));
        }
        out
    }
}
