//! Ships and their cargo-handling capabilities.

use std::fmt;
use std::str::FromStr;

use ps_core::{CargoId, PsError, ShipId};

use crate::{Cargo, CargoKind, ModelError, ModelResult, Quay, QuayKind};

// ── NauticalFlag ──────────────────────────────────────────────────────────────

/// The maritime signal flag a ship is flying.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum NauticalFlag {
    /// No signal.
    #[default]
    November,
    /// Carrying dangerous cargo.
    Bravo,
    /// Ready to dock.
    Hotel,
    /// Medical emergency aboard.
    Whiskey,
}

impl NauticalFlag {
    pub const ALL: [NauticalFlag; 4] = [
        NauticalFlag::November,
        NauticalFlag::Bravo,
        NauticalFlag::Hotel,
        NauticalFlag::Whiskey,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NauticalFlag::November => "NOVEMBER",
            NauticalFlag::Bravo    => "BRAVO",
            NauticalFlag::Hotel    => "HOTEL",
            NauticalFlag::Whiskey  => "WHISKEY",
        }
    }
}

impl fmt::Display for NauticalFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NauticalFlag {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, PsError> {
        NauticalFlag::ALL
            .into_iter()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| PsError::Parse(format!("unknown nautical flag {s:?}")))
    }
}

// ── ShipKind ──────────────────────────────────────────────────────────────────

/// Variant-specific capacity and what is currently aboard.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    /// Carries up to `capacity` containers.
    Container { capacity: u32, containers: Vec<CargoId> },
    /// Carries a single bulk load of at most `tonnage_capacity` tonnes.
    Bulk { tonnage_capacity: u32, cargo: Option<CargoId> },
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id:     ShipId,
    name:   String,
    origin: String,
    flag:   NauticalFlag,
    kind:   ShipKind,
}

impl Ship {
    pub fn container_ship(
        id:       ShipId,
        name:     impl Into<String>,
        origin:   impl Into<String>,
        flag:     NauticalFlag,
        capacity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            origin: origin.into(),
            flag,
            kind: ShipKind::Container { capacity, containers: Vec::new() },
        }
    }

    pub fn bulk_carrier(
        id:               ShipId,
        name:             impl Into<String>,
        origin:           impl Into<String>,
        flag:             NauticalFlag,
        tonnage_capacity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            origin: origin.into(),
            flag,
            kind: ShipKind::Bulk { tonnage_capacity, cargo: None },
        }
    }

    #[inline]
    pub fn id(&self) -> ShipId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Port of origin; also the only destination this ship accepts cargo for.
    #[inline]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[inline]
    pub fn flag(&self) -> NauticalFlag {
        self.flag
    }

    /// Hoist a different signal flag.  Queue priority picks this up on the
    /// next selection.
    pub fn set_flag(&mut self, flag: NauticalFlag) {
        self.flag = flag;
    }

    #[inline]
    pub fn kind(&self) -> &ShipKind {
        &self.kind
    }

    #[inline]
    pub fn is_container_ship(&self) -> bool {
        matches!(self.kind, ShipKind::Container { .. })
    }

    /// Container count or bulk tonnage capacity.
    pub fn capacity(&self) -> u32 {
        match self.kind {
            ShipKind::Container { capacity, .. } => capacity,
            ShipKind::Bulk { tonnage_capacity, .. } => tonnage_capacity,
        }
    }

    /// Ids of the cargo currently aboard, in loading order.
    pub fn cargo(&self) -> Vec<CargoId> {
        match &self.kind {
            ShipKind::Container { containers, .. } => containers.clone(),
            ShipKind::Bulk { cargo, .. } => cargo.iter().copied().collect(),
        }
    }

    /// `true` if this ship may berth at `quay` (ignores occupancy).
    pub fn can_dock(&self, quay: &Quay) -> bool {
        match (&self.kind, quay.kind()) {
            (ShipKind::Container { capacity, .. }, QuayKind::Container { max_containers }) => {
                max_containers >= *capacity
            }
            (ShipKind::Bulk { tonnage_capacity, .. }, QuayKind::Bulk { max_tonnage }) => {
                max_tonnage >= *tonnage_capacity
            }
            _ => false,
        }
    }

    /// `true` if `cargo` can go aboard given what is already loaded.
    pub fn can_load(&self, cargo: &Cargo) -> bool {
        if cargo.destination() != self.origin {
            return false;
        }
        match (&self.kind, cargo.kind()) {
            (ShipKind::Container { capacity, containers }, CargoKind::Container { .. }) => {
                (containers.len() as u64) < *capacity as u64
            }
            (ShipKind::Bulk { tonnage_capacity, cargo: aboard }, CargoKind::Bulk { tonnage, .. }) => {
                aboard.is_none() && tonnage <= tonnage_capacity
            }
            _ => false,
        }
    }

    /// Put `cargo` aboard, failing if [`can_load`](Self::can_load) says no.
    pub fn load(&mut self, cargo: &Cargo) -> ModelResult<()> {
        if !self.can_load(cargo) {
            return Err(ModelError::IncompatibleLoad { ship: self.id, cargo: cargo.id() });
        }
        match &mut self.kind {
            ShipKind::Container { containers, .. } => containers.push(cargo.id()),
            ShipKind::Bulk { cargo: aboard, .. } => *aboard = Some(cargo.id()),
        }
        Ok(())
    }

    /// Take everything off the ship.
    ///
    /// Bulk carriers yield their single load; container ships yield every
    /// container in loading order.  Fails with [`ModelError::NoCargo`] when
    /// nothing is aboard.
    pub fn unload(&mut self) -> ModelResult<Vec<CargoId>> {
        let unloaded = match &mut self.kind {
            ShipKind::Container { containers, .. } => std::mem::take(containers),
            ShipKind::Bulk { cargo, .. } => cargo.take().into_iter().collect(),
        };
        if unloaded.is_empty() {
            return Err(ModelError::NoCargo(self.id));
        }
        Ok(unloaded)
    }

    /// Variant name used in reports and the save format.
    pub fn class_name(&self) -> &'static str {
        match self.kind {
            ShipKind::Container { .. } => "ContainerShip",
            ShipKind::Bulk { .. } => "BulkCarrier",
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} from {} [{}]", self.class_name(), self.name, self.origin, self.flag)
    }
}
