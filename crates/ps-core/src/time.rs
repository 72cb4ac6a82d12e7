//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter; one tick is one
//! simulated minute.  The port clock starts at 0 and is advanced by exactly
//! one before anything else happens in a tick, so the first tick processed is
//! tick 1.
//!
//! Integer ticks keep interval arithmetic exact: "every 10 minutes" is simply
//! `tick % 10 == 0`.

use std::fmt;

use crate::{PsError, PsResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter (minutes since simulation start).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }

    /// `true` if this tick falls on a multiple of `interval`.
    ///
    /// An interval of 0 never matches.
    #[inline]
    pub fn is_every(self, interval: u64) -> bool {
        interval != 0 && self.0 % interval == 0
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

/// The port clock.  Holds no heap data and is cheap to copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock resumed at `tick` (used when restoring a saved port).
    pub fn starting_at(tick: Tick) -> Self {
        Self { current_tick: tick }
    }

    /// Advance the clock by one tick and return the new value.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.current_tick
    }

    /// Break elapsed time into (day, hour, minute) components.
    pub fn elapsed_dhm(&self) -> (u64, u32, u32) {
        let minutes = self.current_tick.0;
        let days = minutes / 1_440;
        let hours = ((minutes % 1_440) / 60) as u32;
        let mins = (minutes % 60) as u32;
        (days, hours, mins)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.elapsed_dhm();
        write!(f, "{} (day {} {:02}:{:02})", self.current_tick, d, h, m)
    }
}

// ── DockFailurePolicy ─────────────────────────────────────────────────────────

/// What happens to a ship polled from the queue when no compatible empty quay
/// exists.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DockFailurePolicy {
    /// Re-append the ship to the tail of the queue.
    #[default]
    Requeue,
    /// Drop the ship from the queue.  It stays in the registry and may still
    /// be the subject of later movements.
    Discard,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and passed to the port builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total ticks `Port::run` simulates.  One day is 1 440.
    pub total_ticks: u64,

    /// Master RNG seed for traffic generators.
    pub seed: u64,

    /// Poll the ship queue and try to dock every N ticks.  Default: 10.
    pub dock_interval_ticks: u64,

    /// Unload docked ships every N ticks.  Default: 5.
    pub unload_interval_ticks: u64,

    /// Fate of a polled ship that finds no quay.
    pub dock_failure: DockFailurePolicy,

    /// Report a tick summary to observers every N ticks.  1 = every tick.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:           1_440,
            seed:                  42,
            dock_interval_ticks:   10,
            unload_interval_ticks: 5,
            dock_failure:          DockFailurePolicy::Requeue,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The tick at which `Port::run` stops (inclusive: the last processed tick).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject configurations whose intervals would never fire.
    pub fn validate(&self) -> PsResult<()> {
        if self.dock_interval_ticks == 0 {
            return Err(PsError::Config("dock_interval_ticks must be > 0".into()));
        }
        if self.unload_interval_ticks == 0 {
            return Err(PsError::Config("unload_interval_ticks must be > 0".into()));
        }
        if self.output_interval_ticks == 0 {
            return Err(PsError::Config("output_interval_ticks must be > 0".into()));
        }
        Ok(())
    }
}
