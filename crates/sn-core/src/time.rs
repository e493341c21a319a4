//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter, one tick per display
//! frame at 60 frames per second.  There is no wall clock: every "timer" in the
//! simulation (food re-targeting, temporary slowdowns) is an explicit
//! [`Countdown`] or tick counter stored on the thing it governs, decremented
//! exactly once per tick.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Countdown ─────────────────────────────────────────────────────────────────

/// A periodic trigger driven by explicit per-tick calls.
///
/// `tick()` returns `true` once every `period` calls, starting with the very
/// first call.  A period of 0 behaves like 1 (fires every call).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Countdown {
    period:    u32,
    remaining: u32,
}

impl Countdown {
    /// Fires on the first call, then every `period` calls.
    pub fn new(period: u32) -> Self {
        Self { period, remaining: 0 }
    }

    /// Advance by one tick.  Returns `true` when the countdown fires; it is
    /// then reset to a full period.
    #[inline]
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            self.remaining = self.period.max(1) - 1;
            true
        } else {
            self.remaining -= 1;
            false
        }
    }
}
