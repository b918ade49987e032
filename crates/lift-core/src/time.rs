//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  The mapping to
//! simulated wall time is held in `SimClock`:
//!
//!   elapsed_ms = tick * tick_millis
//!
//! Floor travel and door dwell are scheduled as deadlines in ticks, so the
//! car's sweep can be resumed by whoever advances the clock (the live
//! periodic driver, or the offline `Sim` loop) and an emergency stop is seen
//! at the next deadline instead of after a blocking sleep.
//!
//! The default tick is 100 ms, the idle-check cadence of the periodic
//! driver.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, or zero if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated milliseconds.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// How many simulated milliseconds one tick represents.  Default: 100.
    pub tick_millis: u32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 with the given resolution.
    ///
    /// A zero resolution is bumped to 1 ms so tick arithmetic never divides
    /// by zero.
    pub fn new(tick_millis: u32) -> Self {
        Self {
            tick_millis: tick_millis.max(1),
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick and return the new current tick.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.current_tick
    }

    /// Elapsed simulated milliseconds since tick 0.
    #[inline]
    pub fn elapsed_millis(&self) -> u64 {
        self.current_tick.0 * self.tick_millis as u64
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_millis() as f64 / 1_000.0
    }

    /// How many ticks span `secs` seconds? Rounds up so a delay never ends early.
    #[inline]
    pub fn ticks_for_secs(&self, secs: u32) -> u64 {
        (secs as u64 * 1_000).div_ceil(self.tick_millis as u64)
    }

    /// Real-time length of one tick, for drivers that pace the clock.
    #[inline]
    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_millis as u64)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(100)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} s)", self.current_tick, self.elapsed_secs())
    }
}
