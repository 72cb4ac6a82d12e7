//! `MovementScheduler` — sparse tick-keyed queue of pending movements.
//!
//! # Why this shape
//!
//! Most ticks have nothing scheduled.  Keying movements by tick means each
//! tick the port removes only the bucket for that tick: one `BTreeMap`
//! removal instead of a scan of every pending movement.
//!
//! Within a bucket, movements keep insertion order, which is the tie-break
//! for movements sharing a tick.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log W) insert and drain where W = number of distinct
//! ticks with something pending.  Port traffic keeps W in the hundreds.

use std::collections::BTreeMap;

use ps_core::Tick;
use tracing::trace;

use crate::{Movement, ScheduleError, ScheduleResult};

/// Pending movements keyed by the tick they must execute at.
#[derive(Clone, Debug, Default)]
pub struct MovementScheduler {
    inner: BTreeMap<Tick, Vec<Movement>>,
    /// Cached total movement count for O(1) `len()`.
    total: usize,
}

impl MovementScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `movement` for execution at its tick.
    ///
    /// Fails with [`ScheduleError::OutOfOrderSchedule`] if the movement's tick
    /// is strictly before `now`.  A movement for `now` itself is accepted; it
    /// only runs if `now`'s drain has not happened yet.
    pub fn schedule(&mut self, movement: Movement, now: Tick) -> ScheduleResult<()> {
        let tick = movement.tick();
        if tick < now {
            return Err(ScheduleError::OutOfOrderSchedule { scheduled: tick, now });
        }
        trace!(%tick, %now, kind = movement.class_name(), "movement scheduled");
        self.inner.entry(tick).or_default().push(movement);
        self.total += 1;
        Ok(())
    }

    /// Remove and return every movement scheduled for exactly `now`, in
    /// insertion order.
    ///
    /// Returns an empty `Vec` (no allocation) when nothing is due.
    pub fn drain_due(&mut self, now: Tick) -> Vec<Movement> {
        match self.inner.remove(&now) {
            None => Vec::new(),
            Some(due) => {
                self.total -= due.len();
                due
            }
        }
    }

    /// Remove and return every movement scheduled strictly before `now`.
    ///
    /// These can only exist if they were scheduled for a tick whose drain had
    /// already run; they are never executed.
    pub fn discard_stale(&mut self, now: Tick) -> Vec<Movement> {
        if self.inner.first_key_value().is_none_or(|(&first, _)| first >= now) {
            return Vec::new();
        }
        let keep = self.inner.split_off(&now);
        let stale: Vec<Movement> = std::mem::replace(&mut self.inner, keep)
            .into_values()
            .flatten()
            .collect();
        self.total -= stale.len();
        stale
    }

    /// Iterate pending movements by tick, then insertion order.
    pub fn pending(&self) -> impl Iterator<Item = &Movement> + '_ {
        self.inner.values().flatten()
    }

    /// Owned copy of every pending movement, by tick then insertion order.
    pub fn snapshot(&self) -> Vec<Movement> {
        self.pending().cloned().collect()
    }

    /// The earliest tick with at least one pending movement.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of pending movements.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct ticks that have at least one pending movement.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}
