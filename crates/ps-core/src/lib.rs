//! `ps-core` — foundational types for the `rust_portsim` port simulator.
//!
//! This crate is a dependency of every other `ps-*` crate.  It has no `ps-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `ShipId` (IMO number), `CargoId`, `QuayId`                 |
//! | [`time`]   | `Tick`, `SimClock`, `SimConfig`, `DockFailurePolicy`       |
//! | [`rng`]    | `SimRng` (seeded, deterministic)                           |
//! | [`error`]  | `PsError`, `PsResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PsError, PsResult};
pub use ids::{CargoId, QuayId, ShipId};
pub use rng::SimRng;
pub use time::{DockFailurePolicy, SimClock, SimConfig, Tick};
