//! Countdown timers for power-ups, frenzy and hazards

use serde::{Deserialize, Serialize};

/// A countdown measured in seconds. Zero means inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    pub fn new(seconds: f32) -> Self {
        let mut timer = Self::default();
        timer.start(seconds);
        timer
    }

    /// (Re)arm the timer, replacing any remaining time
    pub fn start(&mut self, seconds: f32) {
        self.remaining = seconds.max(0.0);
    }

    /// Arm the timer only if that lengthens it
    pub fn extend_to(&mut self, seconds: f32) {
        self.remaining = self.remaining.max(seconds);
    }

    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Advance by `dt`. Returns true on the tick the timer runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        self.remaining == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_expires_once() {
        let mut timer = Countdown::new(1.0);
        assert!(timer.is_active());
        assert!(!timer.tick(0.6));
        assert!(timer.tick(0.6));
        assert!(!timer.is_active());
        assert!(!timer.tick(0.6));
    }

    #[test]
    fn test_extend_never_shortens() {
        let mut timer = Countdown::new(5.0);
        timer.extend_to(1.0);
        assert_eq!(timer.remaining(), 5.0);
        timer.extend_to(7.0);
        assert_eq!(timer.remaining(), 7.0);
    }

    #[test]
    fn test_negative_start_is_inactive() {
        assert!(!Countdown::new(-3.0).is_active());
    }
}
