//! Quays: berths where one ship at a time moors to load or unload.

use std::fmt;

use ps_core::{QuayId, ShipId};

/// Which ships a quay is built for, and how large they may be.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuayKind {
    Container { max_containers: u32 },
    Bulk { max_tonnage: u32 },
}

/// A single berth.
///
/// Occupancy is `Option<ShipId>`, so a quay is always either empty or holding
/// exactly one ship.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quay {
    id:       QuayId,
    kind:     QuayKind,
    occupant: Option<ShipId>,
}

impl Quay {
    pub fn container(id: QuayId, max_containers: u32) -> Self {
        Self { id, kind: QuayKind::Container { max_containers }, occupant: None }
    }

    pub fn bulk(id: QuayId, max_tonnage: u32) -> Self {
        Self { id, kind: QuayKind::Bulk { max_tonnage }, occupant: None }
    }

    #[inline]
    pub fn id(&self) -> QuayId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> QuayKind {
        self.kind
    }

    /// Max containers or max tonnage, depending on the variant.
    pub fn capacity(&self) -> u32 {
        match self.kind {
            QuayKind::Container { max_containers } => max_containers,
            QuayKind::Bulk { max_tonnage } => max_tonnage,
        }
    }

    #[inline]
    pub fn occupant(&self) -> Option<ShipId> {
        self.occupant
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Moor `ship` here.
    ///
    /// Returns `false` and leaves the current occupant in place if the quay
    /// is already taken.
    pub fn dock(&mut self, ship: ShipId) -> bool {
        if self.occupant.is_some() {
            return false;
        }
        self.occupant = Some(ship);
        true
    }

    /// Release the docked ship, if any.  Undocking an empty quay is a no-op.
    pub fn undock(&mut self) -> Option<ShipId> {
        self.occupant.take()
    }

    /// Variant name used in reports and the save format.
    pub fn class_name(&self) -> &'static str {
        match self.kind {
            QuayKind::Container { .. } => "ContainerQuay",
            QuayKind::Bulk { .. } => "BulkQuay",
        }
    }
}

impl fmt::Display for Quay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [Ship: ", self.class_name(), self.id)?;
        match self.occupant {
            Some(ship) => write!(f, "{ship}")?,
            None => f.write_str("None")?,
        }
        write!(f, "] - {}", self.capacity())
    }
}
