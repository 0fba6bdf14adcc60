//! Pebble usage tracking

/// Tracks pebbles in play during a game
#[derive(Debug, Clone)]
pub struct UsageTracker {
    /// Pebbles currently on the tree
    current: usize,

    /// Maximum seen since the last reset
    peak: usize,

    /// Activations that changed the board
    moves: usize,

    /// Profile data (if enabled)
    profile: Option<super::UsageProfile>,
}

impl UsageTracker {
    /// Create new tracker
    pub fn new(profile_enabled: bool) -> Self {
        Self {
            current: 0,
            peak: 0,
            moves: 0,
            profile: if profile_enabled {
                Some(super::UsageProfile::default())
            } else {
                None
            },
        }
    }

    /// Record the recounted total after a board mutation
    pub fn observe(&mut self, pebbles_in_play: usize) {
        self.current = pebbles_in_play;
        self.moves += 1;
        self.update_peak();

        if let Some(ref mut p) = self.profile {
            p.timeline.push((self.moves, pebbles_in_play));
        }
    }

    fn update_peak(&mut self) {
        self.peak = self.peak.max(self.current);

        if let Some(ref mut p) = self.profile {
            p.peak = self.peak;
        }
    }

    /// Pebbles currently in play
    pub fn current(&self) -> usize {
        self.current
    }

    /// Peak pebbles in play
    pub fn peak(&self) -> usize {
        self.peak
    }

    /// Number of board-changing moves observed
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Recorded profile, if enabled
    pub fn profile(&self) -> Option<&super::UsageProfile> {
        self.profile.as_ref()
    }

    /// Zero all counters, keeping the profiling choice
    pub fn reset(&mut self) {
        *self = Self::new(self.profile.is_some());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_never_decreases() {
        let mut tracker = UsageTracker::new(false);
        tracker.observe(1);
        tracker.observe(2);
        tracker.observe(1);
        assert_eq!(tracker.current(), 1);
        assert_eq!(tracker.peak(), 2);
        assert_eq!(tracker.moves(), 3);
        assert!(tracker.profile().is_none());
    }

    #[test]
    fn test_profile_timeline() {
        let mut tracker = UsageTracker::new(true);
        tracker.observe(1);
        tracker.observe(2);
        tracker.observe(1);

        let profile = tracker.profile().unwrap();
        assert_eq!(profile.timeline, vec![(1, 1), (2, 2), (3, 1)]);
        assert_eq!(profile.peak, 2);

        tracker.reset();
        assert_eq!(tracker.peak(), 0);
        assert!(tracker.profile().unwrap().timeline.is_empty());
    }
}
