//! The `StatisticsEvaluator` trait and the closed set of evaluator kinds.

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use ps_schedule::Movement;

use crate::{
    CargoDecompositionEvaluator, EvalContext, EvalError, QuayOccupancyEvaluator,
    ShipFlagEvaluator, ShipThroughputEvaluator,
};

/// Passive statistics collector attached to a port.
///
/// The port calls [`on_movement`][Self::on_movement] once for every movement
/// it executes, in execution order, and [`on_tick`][Self::on_tick] once at
/// the end of every tick.  Both receive a read-only [`EvalContext`];
/// evaluators observe the port but never change it.
///
/// # Thread safety
///
/// With the `parallel` feature of `ps-sim`, different evaluators are
/// notified on different Rayon threads, so implementations must be
/// `Send + Sync`.  Each evaluator is still called from one thread at a time.
///
/// # Downcasting
///
/// The port stores evaluators as `Box<dyn StatisticsEvaluator>`.  Use
/// `Port::evaluator::<T>()` to get a concrete one back; it relies on
/// [`as_any`][Self::as_any].
pub trait StatisticsEvaluator: Any + Send + Sync {
    /// Which built-in evaluator this is.  A port holds at most one evaluator
    /// per kind.
    fn kind(&self) -> EvaluatorKind;

    /// Called once when the evaluator is attached to a port, with the port as
    /// it stands at that moment.
    ///
    /// Default: does nothing.
    fn on_attach(&mut self, _ctx: &EvalContext<'_>) {}

    /// Called after each executed movement.
    ///
    /// Default: ignores the movement.
    fn on_movement(&mut self, _movement: &Movement, _ctx: &EvalContext<'_>) {}

    /// Called once per tick, after every movement of that tick.
    ///
    /// Default: does nothing.
    fn on_tick(&mut self, _ctx: &EvalContext<'_>) {}

    fn as_any(&self) -> &dyn Any;
}

// ── EvaluatorKind ─────────────────────────────────────────────────────────────

/// The built-in evaluators.
///
/// Ordering is declaration order; the port keys its evaluators by kind, so
/// this is also the order they are notified in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvaluatorKind {
    CargoDecomposition,
    QuayOccupancy,
    ShipFlag,
    ShipThroughput,
}

impl EvaluatorKind {
    pub const ALL: [EvaluatorKind; 4] = [
        EvaluatorKind::CargoDecomposition,
        EvaluatorKind::QuayOccupancy,
        EvaluatorKind::ShipFlag,
        EvaluatorKind::ShipThroughput,
    ];

    /// Name used in reports and the save format.
    pub fn class_name(self) -> &'static str {
        match self {
            EvaluatorKind::CargoDecomposition => "CargoDecompositionEvaluator",
            EvaluatorKind::QuayOccupancy      => "QuayOccupancyEvaluator",
            EvaluatorKind::ShipFlag           => "ShipFlagEvaluator",
            EvaluatorKind::ShipThroughput     => "ShipThroughputEvaluator",
        }
    }

    /// A fresh evaluator of this kind with empty statistics.
    pub fn instantiate(self) -> Box<dyn StatisticsEvaluator> {
        match self {
            EvaluatorKind::CargoDecomposition => Box::new(CargoDecompositionEvaluator::new()),
            EvaluatorKind::QuayOccupancy      => Box::new(QuayOccupancyEvaluator::new()),
            EvaluatorKind::ShipFlag           => Box::new(ShipFlagEvaluator::new()),
            EvaluatorKind::ShipThroughput     => Box::new(ShipThroughputEvaluator::new()),
        }
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for EvaluatorKind {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, EvalError> {
        EvaluatorKind::ALL
            .into_iter()
            .find(|kind| kind.class_name() == s.trim())
            .ok_or_else(|| EvalError::UnknownKind(s.to_owned()))
    }
}
