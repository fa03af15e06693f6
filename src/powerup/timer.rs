//! Flute power-up: a single on/off effect with a fixed expiry.

use std::time::Duration;

/// How long one flute note keeps the jump boost active.
pub const POWER_UP_DURATION: Duration = Duration::from_millis(1000);

/// Deadline-based power-up state.
///
/// Time is passed in as elapsed time since startup, so the state is checked
/// against the frame clock instead of waiting on a callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerUp {
    expires_at: Option<Duration>,
}

impl PowerUp {
    /// Activate the effect until `now + POWER_UP_DURATION`.
    ///
    /// Triggering again replaces the deadline; windows never stack.
    pub fn trigger(&mut self, now: Duration) {
        self.expires_at = Some(now + POWER_UP_DURATION);
    }

    pub fn is_active(&self, now: Duration) -> bool {
        self.expires_at.is_some_and(|deadline| now < deadline)
    }

    /// Drop a deadline that has passed. Returns true on the call that drops it.
    pub fn expire(&mut self, now: Duration) -> bool {
        match self.expires_at {
            Some(deadline) if now >= deadline => {
                self.expires_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn expires_at(&self) -> Option<Duration> {
        self.expires_at
    }

    pub fn reset(&mut self) {
        self.expires_at = None;
    }
}
