//! Movements: ships or cargo entering or leaving the port's custody.

use std::fmt;
use std::str::FromStr;

use ps_core::{CargoId, PsError, ShipId, Tick};

/// Whether something is arriving at or leaving the port.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum MovementDirection {
    Inbound,
    Outbound,
}

impl MovementDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            MovementDirection::Inbound => "INBOUND",
            MovementDirection::Outbound => "OUTBOUND",
        }
    }
}

impl fmt::Display for MovementDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementDirection {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, PsError> {
        match s.trim() {
            "INBOUND" => Ok(MovementDirection::Inbound),
            "OUTBOUND" => Ok(MovementDirection::Outbound),
            other => Err(PsError::Parse(format!("unknown movement direction {other:?}"))),
        }
    }
}

/// What a movement moves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Payload {
    Ship(ShipId),
    /// Ordered list of cargo items delivered or collected together.
    Cargo(Vec<CargoId>),
}

/// A state change bound to a simulation tick.
///
/// Fields are private: once built, a movement's tick never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movement {
    tick:      Tick,
    direction: MovementDirection,
    payload:   Payload,
}

impl Movement {
    pub fn ship(tick: Tick, direction: MovementDirection, ship: ShipId) -> Self {
        Self { tick, direction, payload: Payload::Ship(ship) }
    }

    pub fn cargo(tick: Tick, direction: MovementDirection, cargo: Vec<CargoId>) -> Self {
        Self { tick, direction, payload: Payload::Cargo(cargo) }
    }

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn direction(&self) -> MovementDirection {
        self.direction
    }

    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    #[inline]
    pub fn is_inbound(&self) -> bool {
        self.direction == MovementDirection::Inbound
    }

    /// The ship moved, if this is a ship movement.
    pub fn ship_id(&self) -> Option<ShipId> {
        match self.payload {
            Payload::Ship(id) => Some(id),
            Payload::Cargo(_) => None,
        }
    }

    /// The cargo moved; empty for ship movements.
    pub fn cargo_ids(&self) -> &[CargoId] {
        match &self.payload {
            Payload::Cargo(ids) => ids,
            Payload::Ship(_) => &[],
        }
    }

    /// Variant name used in reports and the save format.
    pub fn class_name(&self) -> &'static str {
        match self.payload {
            Payload::Ship(_) => "ShipMovement",
            Payload::Cargo(_) => "CargoMovement",
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} to occur at {}", self.direction, self.class_name(), self.tick.0)?;
        match &self.payload {
            Payload::Ship(id) => write!(f, " involving ship {id}"),
            Payload::Cargo(ids) => write!(f, " involving {} piece(s) of cargo", ids.len()),
        }
    }
}
