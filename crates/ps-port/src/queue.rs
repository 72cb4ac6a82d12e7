//! `ShipQueue` — ships waiting outside the port for a berth.
//!
//! # Selection
//!
//! The queue stores ids in arrival order and decides who goes next only when
//! asked.  Flags can change while a ship waits (see
//! [`Ship::set_flag`](ps_model::Ship::set_flag)), so no ordering is cached:
//! every [`peek`](ShipQueue::peek) and [`poll`](ShipQueue::poll) is one
//! O(n) scan.  Queues hold tens of ships, not thousands.

use ps_core::ShipId;
use ps_model::{NauticalFlag, Ship, ShipRegistry};

/// Priority levels, most urgent first.  `None` means the ship only qualifies
/// for the fallback (longest waiting).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Priority {
    DangerousCargo,
    MedicalEmergency,
    ReadyToDock,
    ContainerShip,
}

impl Priority {
    /// The first criterion `ship` meets.  A flagged ship is ranked by its flag
    /// alone, even when it is also a container ship.
    fn of(ship: &Ship) -> Option<Priority> {
        match ship.flag() {
            NauticalFlag::Bravo => Some(Priority::DangerousCargo),
            NauticalFlag::Whiskey => Some(Priority::MedicalEmergency),
            NauticalFlag::Hotel => Some(Priority::ReadyToDock),
            NauticalFlag::November if ship.is_container_ship() => Some(Priority::ContainerShip),
            NauticalFlag::November => None,
        }
    }
}

/// Ships waiting to dock, in the order they arrived.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipQueue {
    waiting: Vec<ShipId>,
}

impl ShipQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the back of the queue.
    pub fn add(&mut self, ship: ShipId) {
        self.waiting.push(ship);
    }

    /// The ship that would be polled next, without removing it.
    pub fn peek(&self, ships: &ShipRegistry) -> Option<ShipId> {
        self.select(ships).map(|index| self.waiting[index])
    }

    /// Remove and return the highest-priority ship.
    pub fn poll(&mut self, ships: &ShipRegistry) -> Option<ShipId> {
        let index = self.select(ships)?;
        Some(self.waiting.remove(index))
    }

    /// Index of the ship to release next.
    ///
    /// Records the first index meeting each criterion in one pass, then picks
    /// the most urgent one found.  Ids with no registry entry are never
    /// prioritised but can still be released by the fallback.
    fn select(&self, ships: &ShipRegistry) -> Option<usize> {
        if self.waiting.is_empty() {
            return None;
        }
        let mut best: Option<(Priority, usize)> = None;
        for (index, id) in self.waiting.iter().enumerate() {
            let Some(priority) = ships.get(*id).and_then(Priority::of) else {
                continue;
            };
            if best.is_none_or(|(current, _)| priority < current) {
                best = Some((priority, index));
                if priority == Priority::DangerousCargo {
                    break;
                }
            }
        }
        Some(best.map_or(0, |(_, index)| index))
    }

    /// Drop `ship` from the queue wherever it is.  Returns `false` if it was
    /// not waiting.
    pub fn remove(&mut self, ship: ShipId) -> bool {
        match self.waiting.iter().position(|id| *id == ship) {
            Some(index) => {
                self.waiting.remove(index);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, ship: ShipId) -> bool {
        self.waiting.contains(&ship)
    }

    /// Waiting ships in arrival order.
    pub fn ids(&self) -> &[ShipId] {
        &self.waiting
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }
}

impl FromIterator<ShipId> for ShipQueue {
    fn from_iter<I: IntoIterator<Item = ShipId>>(iter: I) -> Self {
        Self { waiting: iter.into_iter().collect() }
    }
}
