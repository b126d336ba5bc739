//! Simulation time model.
//!
//! # Design
//!
//! Time is a whole number of simulated seconds since midnight of the
//! operating day.  Using an integer as the canonical time unit means all
//! travel and dwell arithmetic is exact (no floating-point drift), events
//! have a total order, and comparisons are O(1).
//!
//! Quantities drawn from continuous distributions (inter-arrival gaps) are
//! rounded up to whole seconds by the code that samples them.

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulated instant, in seconds since 00:00.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Build an instant from a wall-clock `hh:mm:ss`.
    #[inline]
    pub const fn from_hms(hours: u64, minutes: u64, seconds: u64) -> SimTime {
        SimTime(hours * 3_600 + minutes * 60 + seconds)
    }

    /// Seconds elapsed from `earlier` to `self`, or 0 if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Hour of day (0–23, wrapping past midnight).
    #[inline]
    pub fn hour(self) -> u32 {
        ((self.0 / 3_600) % 24) as u32
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.0 / 3_600;
        let m = (self.0 % 3_600) / 60;
        let s = self.0 % 60;
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock for one operating day.
///
/// `now` only ever moves forward.  The clock starts at `open`; the event loop
/// stops once the next event lies past `close`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    pub open:  SimTime,
    pub close: SimTime,
    pub now:   SimTime,
}

impl SimClock {
    pub fn new(open: SimTime, close: SimTime) -> Self {
        Self { open, close, now: open }
    }

    /// Move the clock to `t`.
    ///
    /// # Panics
    /// Panics in debug mode if `t` is earlier than the current time.
    #[inline]
    pub fn advance_to(&mut self, t: SimTime) {
        debug_assert!(t >= self.now, "clock moved backwards: {} -> {}", self.now, t);
        self.now = self.now.max(t);
    }

    /// `true` once `t` lies beyond closing time.
    #[inline]
    pub fn is_after_close(&self, t: SimTime) -> bool {
        t > self.close
    }

    /// Length of the operating window in seconds.
    #[inline]
    pub fn window_secs(&self) -> u64 {
        self.close.since(self.open)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (open {}–{})", self.now, self.open, self.close)
    }
}
