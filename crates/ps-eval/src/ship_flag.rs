//! Where arriving ships come from.

use std::any::Any;

use ps_schedule::{Movement, Payload};
use tracing::warn;

use crate::{DistMap, EvalContext, EvaluatorKind, StatisticsEvaluator};

/// Counts inbound ship movements by the ship's origin flag (its home
/// country, not its signal flag).
#[derive(Clone, Debug, Default)]
pub struct ShipFlagEvaluator {
    flags: DistMap<String>,
}

impl ShipFlagEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag_distribution(&self) -> &DistMap<String> {
        &self.flags
    }

    /// Inbound ships seen from `origin` (0 if none).
    pub fn flag_statistics(&self, origin: &str) -> u32 {
        self.flags.get(origin).copied().unwrap_or(0)
    }
}

impl StatisticsEvaluator for ShipFlagEvaluator {
    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::ShipFlag
    }

    fn on_movement(&mut self, movement: &Movement, ctx: &EvalContext<'_>) {
        let (true, Payload::Ship(id)) = (movement.is_inbound(), movement.payload()) else {
            return;
        };
        match ctx.ships.get(*id) {
            Some(ship) => *self.flags.entry(ship.origin().to_owned()).or_insert(0) += 1,
            None => warn!(ship = %id, "inbound ship not in registry; flag not counted"),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
