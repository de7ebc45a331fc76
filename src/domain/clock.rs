//! Logical clock used for call deadlines.

use crate::error::AmmError;

/// A monotonically increasing logical counter.
///
/// Deadlines are compared against [`now`](Self::now) once, when a router
/// call starts.  The clock never moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Clock {
    now: u64,
}

impl Clock {
    /// A clock reading `now`.
    #[must_use]
    pub const fn new(now: u64) -> Self {
        Self { now }
    }

    /// Current reading.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Moves the clock forward by `ticks`, saturating at `u64::MAX`.
    pub fn advance(&mut self, ticks: u64) {
        self.now = self.now.saturating_add(ticks);
    }

    /// Sets the reading.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidState`] if `now` is before the current
    /// reading.
    pub fn set(&mut self, now: u64) -> Result<(), AmmError> {
        if now < self.now {
            return Err(AmmError::InvalidState("clock cannot move backwards"));
        }
        self.now = now;
        Ok(())
    }

    /// Returns `true` if a call with `deadline` may still start.
    #[must_use]
    pub const fn within(&self, deadline: u64) -> bool {
        self.now <= deadline
    }
}
