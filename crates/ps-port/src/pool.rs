//! `QuayPool` — the port's berths.

use ps_core::{QuayId, ShipId};
use ps_model::{Quay, Ship};
use tracing::debug;

/// Every quay in the port, in registration order.
///
/// Docking is first-fit over that order, so the order quays are added in is
/// part of the port's behaviour.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuayPool {
    quays: Vec<Quay>,
}

impl QuayPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register another quay after the existing ones.
    pub fn add(&mut self, quay: Quay) {
        self.quays.push(quay);
    }

    /// Dock `ship` at the first empty quay it fits.
    ///
    /// Returns the chosen quay, or `None` if every compatible quay is taken
    /// (or none exists).  A ship already docked somewhere is never given a
    /// second quay.
    pub fn try_dock_next(&mut self, ship: &Ship) -> Option<QuayId> {
        if self.find_ship(ship.id()).is_some() {
            return None;
        }
        let quay = self
            .quays
            .iter_mut()
            .find(|quay| quay.is_empty() && ship.can_dock(quay))?;
        quay.dock(ship.id());
        debug!(ship = %ship.id(), quay = %quay.id(), "ship docked");
        Some(quay.id())
    }

    /// The quay `ship` is docked at, if any.
    pub fn find_ship(&self, ship: ShipId) -> Option<QuayId> {
        self.quays
            .iter()
            .find(|quay| quay.occupant() == Some(ship))
            .map(Quay::id)
    }

    /// Release `ship` from every quay that holds it.  Returns the freed
    /// quays in registration order; empty if the ship was not docked.
    pub fn undock_ship(&mut self, ship: ShipId) -> Vec<QuayId> {
        let mut freed = Vec::new();
        for quay in self.quays.iter_mut().filter(|quay| quay.occupant() == Some(ship)) {
            quay.undock();
            debug!(ship = %ship, quay = %quay.id(), "ship undocked");
            freed.push(quay.id());
        }
        freed
    }

    #[inline]
    pub fn get(&self, id: QuayId) -> Option<&Quay> {
        self.quays.iter().find(|quay| quay.id() == id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: QuayId) -> Option<&mut Quay> {
        self.quays.iter_mut().find(|quay| quay.id() == id)
    }

    /// Quays in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Quay> + '_ {
        self.quays.iter()
    }

    /// Ships currently docked, in quay registration order.
    pub fn docked_ships(&self) -> impl Iterator<Item = ShipId> + '_ {
        self.quays.iter().filter_map(Quay::occupant)
    }

    pub fn occupied_count(&self) -> usize {
        self.quays.iter().filter(|quay| quay.is_occupied()).count()
    }

    pub fn len(&self) -> usize {
        self.quays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quays.is_empty()
    }
}

impl FromIterator<Quay> for QuayPool {
    fn from_iter<I: IntoIterator<Item = Quay>>(iter: I) -> Self {
        Self { quays: iter.into_iter().collect() }
    }
}
