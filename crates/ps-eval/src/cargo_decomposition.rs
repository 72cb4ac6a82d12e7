//! Breakdown of cargo arriving at the port.

use std::any::Any;

use ps_core::CargoId;
use ps_model::{BulkCargoType, CargoKind, ContainerType};
use ps_schedule::{Movement, Payload};
use tracing::warn;

use crate::{DistMap, EvalContext, EvaluatorKind, StatisticsEvaluator};

/// Counts inbound cargo by class, container type and bulk cargo type.
///
/// An inbound ship contributes whatever it has aboard when it arrives; an
/// inbound cargo movement contributes every listed item.  Outbound movements
/// are ignored.
#[derive(Clone, Debug, Default)]
pub struct CargoDecompositionEvaluator {
    /// Keyed by class name: `"Container"` or `"BulkCargo"`.
    cargo:      DistMap<&'static str>,
    containers: DistMap<ContainerType>,
    bulk:       DistMap<BulkCargoType>,
}

impl CargoDecompositionEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cargo_distribution(&self) -> &DistMap<&'static str> {
        &self.cargo
    }

    pub fn container_distribution(&self) -> &DistMap<ContainerType> {
        &self.containers
    }

    pub fn bulk_cargo_distribution(&self) -> &DistMap<BulkCargoType> {
        &self.bulk
    }

    /// Inbound items of the given class name (0 if none seen).
    pub fn count_of_class(&self, class_name: &str) -> u32 {
        self.cargo.get(class_name).copied().unwrap_or(0)
    }

    fn record(&mut self, id: CargoId, ctx: &EvalContext<'_>) {
        let Some(cargo) = ctx.cargo.get(id) else {
            warn!(cargo = %id, "inbound cargo not in registry; not counted");
            return;
        };
        *self.cargo.entry(cargo.class_name()).or_insert(0) += 1;
        match *cargo.kind() {
            CargoKind::Container { container_type } => {
                *self.containers.entry(container_type).or_insert(0) += 1;
            }
            CargoKind::Bulk { bulk_type, .. } => {
                *self.bulk.entry(bulk_type).or_insert(0) += 1;
            }
        }
    }
}

impl StatisticsEvaluator for CargoDecompositionEvaluator {
    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::CargoDecomposition
    }

    fn on_movement(&mut self, movement: &Movement, ctx: &EvalContext<'_>) {
        if !movement.is_inbound() {
            return;
        }
        let arrived = match movement.payload() {
            Payload::Ship(id) => ctx.ships.get(*id).map(|ship| ship.cargo()).unwrap_or_default(),
            Payload::Cargo(ids) => ids.clone(),
        };
        for id in arrived {
            self.record(id, ctx);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
