//! Round timer
//!
//! Remaining time is a pure function of the timestamp passed in; the clock
//! never samples wall time itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundClock {
    /// Timestamp (seconds) the current round started
    pub start_time: f64,
    /// Round length in seconds
    pub duration: f64,
}

impl RoundClock {
    pub fn new(duration: f64, now: f64) -> Self {
        Self {
            start_time: now,
            duration,
        }
    }

    /// Restart the round at `now`
    pub fn reset(&mut self, now: f64) {
        self.start_time = now;
    }

    /// Seconds since the round started
    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.start_time
    }

    /// Whole seconds left, floored and clamped at zero
    pub fn remaining(&self, now: f64) -> u32 {
        let left = (self.duration - self.elapsed(now)).floor();
        if left > 0.0 { left as u32 } else { 0 }
    }

    /// Full-round value of `remaining`
    pub fn full(&self) -> u32 {
        self.remaining(self.start_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_remaining_floors() {
        let clock = RoundClock::new(40.0, 100.0);
        assert_eq!(clock.remaining(100.0), 40);
        assert_eq!(clock.remaining(100.2), 39);
        assert_eq!(clock.remaining(101.0), 39);
        assert_eq!(clock.remaining(139.5), 0);
        assert_eq!(clock.remaining(139.0), 1);
        assert_eq!(clock.remaining(140.0), 0);
    }

    #[test]
    fn test_remaining_clamps_at_zero() {
        let clock = RoundClock::new(40.0, 0.0);
        assert_eq!(clock.remaining(1000.0), 0);
    }

    #[test]
    fn test_reset_restores_full_duration() {
        let mut clock = RoundClock::new(40.0, 0.0);
        assert_eq!(clock.remaining(45.0), 0);
        clock.reset(45.0);
        assert_eq!(clock.remaining(45.0), 40);
        assert_eq!(clock.full(), 40);
    }

    proptest! {
        #[test]
        fn prop_remaining_non_increasing(
            start in 0.0f64..1e6,
            a in 0.0f64..100.0,
            b in 0.0f64..100.0,
        ) {
            let clock = RoundClock::new(40.0, start);
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(clock.remaining(start + late) <= clock.remaining(start + early));
        }
    }
}
