//! `ps-sim` — the port orchestrator for rust_portsim.
//!
//! # Tick loop
//!
//! ```text
//! each tick:
//!   ① Clock      — advance one minute; `now` is the new value.
//!   ② Docking    — if now % dock_interval == 0: poll the ship queue,
//!                  berth the ship at the first compatible empty quay,
//!                  otherwise apply DockFailurePolicy (Requeue | Discard).
//!   ③ Unloading  — if now % unload_interval == 0: every docked ship's
//!                  cargo goes into storage; empty ships are skipped.
//!   ④ Movements  — drain movements due at `now`, execute in insertion order:
//!                    INBOUND  ship  → join the queue
//!                    OUTBOUND ship  → load what it accepts, then undock
//!                    INBOUND  cargo → into storage
//!                    OUTBOUND cargo → out of storage
//!                  each evaluator.on_movement after each movement.
//!   ⑤ Evaluators — each evaluator.on_tick.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Notifies evaluators on Rayon's thread pool after ④.         |
//! | `fx-hash`  | FxHash distribution maps in `ps-eval`.                      |
//! | `serde`    | Adds `Serialize`/`Deserialize` to snapshots and summaries.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ps_core::SimConfig;
//! use ps_sim::{NoopObserver, PortBuilder};
//!
//! let mut port = PortBuilder::new("Brisbane", SimConfig::default())
//!     .ships(ships)
//!     .cargo(cargo)
//!     .quays(quays)
//!     .movements(movements)
//!     .all_evaluators()
//!     .build()?;
//! port.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod port;
pub mod snapshot;


pub use builder::PortBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use port::Port;
pub use snapshot::PortSnapshot;
