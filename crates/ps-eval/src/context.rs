//! Read-only port state passed to every evaluator callback.

use ps_core::Tick;
use ps_model::{CargoRegistry, ShipRegistry};
use ps_port::QuayPool;

/// A read-only view of the port handed to
/// [`StatisticsEvaluator`][crate::StatisticsEvaluator] callbacks.
///
/// Built by the port after each movement and at the end of each tick.  The
/// port never mutates these structures while a context is live, so
/// evaluators observe a consistent state.
#[derive(Clone, Copy)]
pub struct EvalContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Every ship known to the port.
    pub ships: &'a ShipRegistry,

    /// Every cargo item known to the port.
    pub cargo: &'a CargoRegistry,

    /// The port's quays and their occupants.
    pub quays: &'a QuayPool,
}

impl<'a> EvalContext<'a> {
    #[inline]
    pub fn new(
        tick:  Tick,
        ships: &'a ShipRegistry,
        cargo: &'a CargoRegistry,
        quays: &'a QuayPool,
    ) -> Self {
        Self { tick, ships, cargo, quays }
    }
}
