//! Ship and cargo registries.
//!
//! # Why explicit registries?
//!
//! Every ship and cargo item in a run is created once and looked up by id
//! thereafter.  Rather than process-wide statics, each run owns one
//! `ShipRegistry` and one `CargoRegistry`; the port takes them by value at
//! construction.  Starting a fresh run is simply building fresh registries.
//!
//! Both are backed by `BTreeMap` so iteration is in ascending id order, which
//! keeps the save format deterministic.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use ps_core::{CargoId, ShipId};

use crate::{Cargo, ModelError, ModelResult, Ship};

// ── ShipRegistry ──────────────────────────────────────────────────────────────

/// Owner of every ship in a simulation run, keyed by IMO number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShipRegistry {
    ships: BTreeMap<ShipId, Ship>,
}

impl ShipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `ship`.  Fails if its IMO number is already taken.
    pub fn register(&mut self, ship: Ship) -> ModelResult<ShipId> {
        let id = ship.id();
        match self.ships.entry(id) {
            Entry::Occupied(_) => Err(ModelError::DuplicateShip(id)),
            Entry::Vacant(slot) => {
                slot.insert(ship);
                Ok(id)
            }
        }
    }

    #[inline]
    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.get_mut(&id)
    }

    #[inline]
    pub fn contains(&self, id: ShipId) -> bool {
        self.ships.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Ships in ascending IMO order.
    pub fn iter(&self) -> impl Iterator<Item = &Ship> + '_ {
        self.ships.values()
    }

    /// Register every ship, failing on the first duplicate IMO number.
    pub fn try_from_iter(ships: impl IntoIterator<Item = Ship>) -> ModelResult<Self> {
        let mut registry = ShipRegistry::new();
        for ship in ships {
            registry.register(ship)?;
        }
        Ok(registry)
    }
}

impl FromIterator<Ship> for ShipRegistry {
    /// Later duplicates are dropped; use [`ShipRegistry::try_from_iter`] to detect them.
    fn from_iter<I: IntoIterator<Item = Ship>>(iter: I) -> Self {
        let mut registry = ShipRegistry::new();
        for ship in iter {
            let _ = registry.register(ship);
        }
        registry
    }
}

// ── CargoRegistry ─────────────────────────────────────────────────────────────

/// Owner of every cargo item in a simulation run.
///
/// Items are never removed: cargo that has been shipped out stays here so
/// movements and evaluators can still describe it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CargoRegistry {
    cargo: BTreeMap<CargoId, Cargo>,
}

impl CargoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `cargo`.  Fails if its id is already taken.
    pub fn register(&mut self, cargo: Cargo) -> ModelResult<CargoId> {
        let id = cargo.id();
        match self.cargo.entry(id) {
            Entry::Occupied(_) => Err(ModelError::DuplicateCargo(id)),
            Entry::Vacant(slot) => {
                slot.insert(cargo);
                Ok(id)
            }
        }
    }

    #[inline]
    pub fn get(&self, id: CargoId) -> Option<&Cargo> {
        self.cargo.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: CargoId) -> bool {
        self.cargo.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.cargo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cargo.is_empty()
    }

    /// Cargo in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Cargo> + '_ {
        self.cargo.values()
    }

    /// Next unused id (one past the largest registered).
    ///
    /// Fails with [`ModelError::CargoIdsExhausted`] once `u32::MAX` is taken.
    pub fn next_id(&self) -> ModelResult<CargoId> {
        match self.cargo.keys().next_back() {
            None => Ok(CargoId(0)),
            Some(last) => last
                .0
                .checked_add(1)
                .map(CargoId)
                .ok_or(ModelError::CargoIdsExhausted),
        }
    }

    /// Register every cargo item, failing on the first duplicate id.
    pub fn try_from_iter(cargo: impl IntoIterator<Item = Cargo>) -> ModelResult<Self> {
        let mut registry = CargoRegistry::new();
        for item in cargo {
            registry.register(item)?;
        }
        Ok(registry)
    }
}

impl FromIterator<Cargo> for CargoRegistry {
    /// Later duplicates are dropped; use [`CargoRegistry::try_from_iter`] to detect them.
    fn from_iter<I: IntoIterator<Item = Cargo>>(iter: I) -> Self {
        let mut registry = CargoRegistry::new();
        for cargo in iter {
            let _ = registry.register(cargo);
        }
        registry
    }
}
