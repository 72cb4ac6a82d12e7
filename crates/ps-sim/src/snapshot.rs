//! `PortSnapshot` — everything needed to rebuild a port mid-run.

use ps_core::{CargoId, ShipId, Tick};
use ps_eval::EvaluatorKind;
use ps_model::Quay;
use ps_schedule::Movement;

/// A port's mutable state at one instant.
///
/// Ships and cargo themselves live in the registries, which are saved and
/// restored alongside the snapshot.  Evaluator statistics are not captured:
/// a restored port starts each evaluator afresh.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortSnapshot {
    pub name:         String,
    /// Clock value when the snapshot was taken.
    pub tick:         Tick,
    /// Quays in registration order, with their occupants.
    pub quays:        Vec<Quay>,
    /// Waiting ships in arrival order.
    pub queue:        Vec<ShipId>,
    pub stored_cargo: Vec<CargoId>,
    /// Pending movements by tick, then insertion order.
    pub movements:    Vec<Movement>,
    pub evaluators:   Vec<EvaluatorKind>,
}
