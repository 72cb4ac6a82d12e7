//! `ps-model` — the things a port handles: ships, cargo, and quays.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`cargo`]    | `Cargo`, `CargoKind`, `ContainerType`, `BulkCargoType`     |
//! | [`ship`]     | `Ship`, `ShipKind`, `NauticalFlag`                         |
//! | [`quay`]     | `Quay`, `QuayKind`                                         |
//! | [`registry`] | `ShipRegistry`, `CargoRegistry`                            |
//! | [`error`]    | `ModelError`, `ModelResult<T>`                             |
//!
//! # Capability model
//!
//! Ships and cargo are closed enums.  Every compatibility question the port
//! asks is a method on [`Ship`] that matches on both sides:
//!
//! | Question                       | Method                 |
//! |--------------------------------|------------------------|
//! | May this ship berth here?      | [`Ship::can_dock`]     |
//! | May this cargo go aboard?      | [`Ship::can_load`]     |
//! | Take everything off the ship   | [`Ship::unload`]       |
//!
//! Registries own every ship and cargo item for a run.  Everything else
//! (queue, quays, movements) refers to them by id.

pub mod cargo;
pub mod error;
pub mod quay;
pub mod registry;
pub mod ship;


pub use cargo::{BulkCargoType, Cargo, CargoKind, ContainerType};
pub use error::{ModelError, ModelResult};
pub use quay::{Quay, QuayKind};
pub use registry::{CargoRegistry, ShipRegistry};
pub use ship::{NauticalFlag, Ship, ShipKind};
