use ps_core::{CargoId, ShipId};
use ps_model::ModelError;
use ps_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("port configuration error: {0}")]
    Config(String),

    #[error("ship {0} is not registered with the port")]
    UnknownShip(ShipId),

    #[error("cargo {0} is not registered with the port")]
    UnknownCargo(CargoId),

    #[error("scheduling error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

pub type SimResult<T> = Result<T, SimError>;
