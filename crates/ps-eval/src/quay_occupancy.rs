//! How many berths are in use.

use std::any::Any;

use ps_schedule::Movement;

use crate::{EvalContext, EvaluatorKind, StatisticsEvaluator};

/// Tracks the number of occupied quays.
///
/// The count is read when the evaluator is attached, then re-read after every
/// movement and at the end of every tick, so it always matches the port as of
/// the latest callback.
#[derive(Clone, Debug, Default)]
pub struct QuayOccupancyEvaluator {
    occupied: usize,
    total:    usize,
}

impl QuayOccupancyEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quays_occupied(&self) -> usize {
        self.occupied
    }

    /// Number of quays in the port as of the latest callback.
    pub fn quay_count(&self) -> usize {
        self.total
    }

    fn refresh(&mut self, ctx: &EvalContext<'_>) {
        self.occupied = ctx.quays.occupied_count();
        self.total = ctx.quays.len();
    }
}

impl StatisticsEvaluator for QuayOccupancyEvaluator {
    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::QuayOccupancy
    }

    fn on_attach(&mut self, ctx: &EvalContext<'_>) {
        self.refresh(ctx);
    }

    fn on_movement(&mut self, _movement: &Movement, ctx: &EvalContext<'_>) {
        self.refresh(ctx);
    }

    fn on_tick(&mut self, ctx: &EvalContext<'_>) {
        self.refresh(ctx);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
