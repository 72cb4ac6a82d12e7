//! `ps-schedule` — movements and the tick-ordered movement scheduler.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`movement`]  | `Movement`, `MovementDirection`, `Payload`                |
//! | [`scheduler`] | `MovementScheduler` (`BTreeMap<Tick, Vec<Movement>>`)     |
//! | [`loader`]    | `load_movements_csv`, `load_movements_reader`             |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Scheduling model (summary)
//!
//! ```text
//! schedule(m, now)  → Err(OutOfOrderSchedule) if m.tick < now
//! drain_due(now)    → every movement with tick == now, insertion order
//! snapshot()        → all pending, by tick then insertion order
//! ```
//!
//! The port drains exactly once per tick, so a movement scheduled for the
//! current tick after that tick's drain never runs.  The port discards such
//! stale entries on the following tick.

pub mod error;
pub mod loader;
pub mod movement;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_movements_csv, load_movements_reader};
pub use movement::{Movement, MovementDirection, Payload};
pub use scheduler::MovementScheduler;
