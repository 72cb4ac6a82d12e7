//! `ps-port` — where ships wait and where they berth.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                     |
//! |-----------|--------------------------------------------------------------|
//! | [`queue`] | `ShipQueue`: arrival-ordered ids, priority picked on demand  |
//! | [`pool`]  | `QuayPool`: quays in registration order, first-fit docking   |
//!
//! Both hold ids only.  Anything that needs a ship's flag or variant looks it
//! up in the [`ShipRegistry`](ps_model::ShipRegistry) passed in by the caller.
//!
//! # Queue priority (summary)
//!
//! ```text
//! 1. BRAVO    dangerous cargo
//! 2. WHISKEY  medical emergency
//! 3. HOTEL    ready to dock
//! 4. any container ship
//! otherwise   the longest-waiting ship
//! ```
//!
//! Ties at each level go to the ship that joined the queue first.

pub mod pool;
pub mod queue;

#[cfg(test)]
mod tests;

pub use pool::QuayPool;
pub use queue::ShipQueue;
