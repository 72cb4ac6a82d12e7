use ps_core::{CargoId, PsError, ShipId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("ship {0} is already registered")]
    DuplicateShip(ShipId),

    #[error("cargo {0} is already registered")]
    DuplicateCargo(CargoId),

    /// Raised by `Ship::unload` when nothing is aboard.  The port treats this
    /// as a normal steady-state outcome.
    #[error("ship {0} has no cargo to unload")]
    NoCargo(ShipId),

    #[error("no cargo ids left: {} is already registered", u32::MAX)]
    CargoIdsExhausted,

    #[error("cargo {cargo} cannot be loaded onto ship {ship}")]
    IncompatibleLoad { ship: ShipId, cargo: CargoId },

    #[error(transparent)]
    Core(#[from] PsError),
}

pub type ModelResult<T> = Result<T, ModelError>;
