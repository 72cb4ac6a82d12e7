//! Departures over the last hour.

use std::any::Any;
use std::collections::VecDeque;

use ps_schedule::Movement;

use crate::{EvalContext, EvaluatorKind, StatisticsEvaluator};

/// Length of the sliding window, in minutes.
pub const THROUGHPUT_WINDOW_MINUTES: u64 = 60;

/// Counts outbound ship movements in a sliding one-hour window.
///
/// Keeps its own minute counter, started at 0 when the evaluator is created
/// and advanced by each [`on_tick`](StatisticsEvaluator::on_tick).  A
/// departure logged at minute `t` counts until the counter passes
/// `t + 60`.
#[derive(Clone, Debug, Default)]
pub struct ShipThroughputEvaluator {
    minutes:    u64,
    /// Minute of each departure, oldest first.
    departures: VecDeque<u64>,
}

impl ShipThroughputEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ships that left within the last hour.
    pub fn throughput_per_hour(&self) -> usize {
        self.departures.len()
    }

    /// Minutes elapsed since this evaluator was created.
    pub fn time(&self) -> u64 {
        self.minutes
    }
}

impl StatisticsEvaluator for ShipThroughputEvaluator {
    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::ShipThroughput
    }

    fn on_movement(&mut self, movement: &Movement, _ctx: &EvalContext<'_>) {
        if !movement.is_inbound() && movement.ship_id().is_some() {
            self.departures.push_back(self.minutes);
        }
    }

    fn on_tick(&mut self, _ctx: &EvalContext<'_>) {
        self.minutes += 1;
        while self
            .departures
            .front()
            .is_some_and(|&t| self.minutes - t > THROUGHPUT_WINDOW_MINUTES)
        {
            self.departures.pop_front();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
