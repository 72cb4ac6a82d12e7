//! Cargo items and their variants.

use std::fmt;
use std::str::FromStr;

use ps_core::{CargoId, PsError};

/// Kinds of shipping container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ContainerType {
    Standard,
    Reefer,
    OpenTop,
    FlatRack,
    Tanker,
    Other,
}

impl ContainerType {
    pub const ALL: [ContainerType; 6] = [
        ContainerType::Standard,
        ContainerType::Reefer,
        ContainerType::OpenTop,
        ContainerType::FlatRack,
        ContainerType::Tanker,
        ContainerType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContainerType::Standard => "STANDARD",
            ContainerType::Reefer   => "REEFER",
            ContainerType::OpenTop  => "OPEN_TOP",
            ContainerType::FlatRack => "FLAT_RACK",
            ContainerType::Tanker   => "TANKER",
            ContainerType::Other    => "OTHER",
        }
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerType {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, PsError> {
        ContainerType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PsError::Parse(format!("unknown container type {s:?}")))
    }
}

/// Kinds of loose bulk cargo.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum BulkCargoType {
    Grain,
    Minerals,
    Coal,
    Oil,
    Other,
}

impl BulkCargoType {
    pub const ALL: [BulkCargoType; 5] = [
        BulkCargoType::Grain,
        BulkCargoType::Minerals,
        BulkCargoType::Coal,
        BulkCargoType::Oil,
        BulkCargoType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BulkCargoType::Grain    => "GRAIN",
            BulkCargoType::Minerals => "MINERALS",
            BulkCargoType::Coal     => "COAL",
            BulkCargoType::Oil      => "OIL",
            BulkCargoType::Other    => "OTHER",
        }
    }
}

impl fmt::Display for BulkCargoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BulkCargoType {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, PsError> {
        BulkCargoType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PsError::Parse(format!("unknown bulk cargo type {s:?}")))
    }
}

/// Variant-specific payload of a cargo item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CargoKind {
    Container { container_type: ContainerType },
    Bulk { bulk_type: BulkCargoType, tonnage: u32 },
}

/// A piece of cargo moved by ship or land transport.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cargo {
    id:          CargoId,
    destination: String,
    kind:        CargoKind,
}

impl Cargo {
    pub fn container(id: CargoId, destination: impl Into<String>, container_type: ContainerType) -> Self {
        Self {
            id,
            destination: destination.into(),
            kind: CargoKind::Container { container_type },
        }
    }

    pub fn bulk(
        id:          CargoId,
        destination: impl Into<String>,
        tonnage:     u32,
        bulk_type:   BulkCargoType,
    ) -> Self {
        Self {
            id,
            destination: destination.into(),
            kind: CargoKind::Bulk { bulk_type, tonnage },
        }
    }

    #[inline]
    pub fn id(&self) -> CargoId {
        self.id
    }

    #[inline]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    #[inline]
    pub fn kind(&self) -> &CargoKind {
        &self.kind
    }

    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self.kind, CargoKind::Container { .. })
    }

    /// Bulk tonnage, or `None` for containers.
    pub fn tonnage(&self) -> Option<u32> {
        match self.kind {
            CargoKind::Bulk { tonnage, .. } => Some(tonnage),
            CargoKind::Container { .. } => None,
        }
    }

    /// Variant name used in reports and the save format.
    pub fn class_name(&self) -> &'static str {
        match self.kind {
            CargoKind::Container { .. } => "Container",
            CargoKind::Bulk { .. } => "BulkCargo",
        }
    }
}

impl fmt::Display for Cargo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} to {}", self.class_name(), self.id, self.destination)
    }
}
