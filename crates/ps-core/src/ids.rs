//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  They display as the bare number,
//! which is also the form used by the text save format.

use std::fmt;
use std::str::FromStr;

use crate::{PsError, PsResult};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw integer value.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for u64 {
            #[inline(always)]
            fn from(id: $name) -> u64 {
                id.0 as u64
            }
        }
    };
}

typed_id! {
    /// A ship's IMO number.  Always exactly 7 decimal digits with no leading
    /// zero when built through [`ShipId::from_imo`].
    pub struct ShipId(u32);
}

typed_id! {
    /// Unique cargo identifier.
    pub struct CargoId(u32);
}

typed_id! {
    /// Quay (berth) identifier.
    pub struct QuayId(u32);
}

impl ShipId {
    pub const MIN_IMO: u64 = 1_000_000;
    pub const MAX_IMO: u64 = 9_999_999;

    /// Validate `imo` and wrap it.
    pub fn from_imo(imo: u64) -> PsResult<ShipId> {
        if (Self::MIN_IMO..=Self::MAX_IMO).contains(&imo) {
            Ok(ShipId(imo as u32))
        } else {
            Err(PsError::InvalidImo(imo))
        }
    }
}

impl FromStr for ShipId {
    type Err = PsError;

    fn from_str(s: &str) -> PsResult<ShipId> {
        let imo = s
            .trim()
            .parse::<u64>()
            .map_err(|_| PsError::Parse(format!("invalid IMO number {s:?}")))?;
        ShipId::from_imo(imo)
    }
}

impl FromStr for CargoId {
    type Err = PsError;

    fn from_str(s: &str) -> PsResult<CargoId> {
        s.trim()
            .parse::<u32>()
            .map(CargoId)
            .map_err(|_| PsError::Parse(format!("invalid cargo id {s:?}")))
    }
}

impl FromStr for QuayId {
    type Err = PsError;

    fn from_str(s: &str) -> PsResult<QuayId> {
        s.trim()
            .parse::<u32>()
            .map(QuayId)
            .map_err(|_| PsError::Parse(format!("invalid quay id {s:?}")))
    }
}
