//! Plain data row types written by output backends.

use ps_sim::TickSummary;

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:               u64,
    /// Simulated day (0-based); one day is 1 440 ticks.
    pub day:                u64,
    pub movements_executed: u64,
    pub ships_docked:       u64,
    pub cargo_unloaded:     u64,
    pub queue_len:          u64,
    pub quays_occupied:     u64,
    pub stored_cargo:       u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:               s.tick.0,
            day:                s.tick.0 / 1_440,
            movements_executed: s.movements_executed as u64,
            ships_docked:       s.ships_docked as u64,
            cargo_unloaded:     s.cargo_unloaded as u64,
            queue_len:          s.queue_len as u64,
            quays_occupied:     s.quays_occupied as u64,
            stored_cargo:       s.stored_cargo as u64,
        }
    }
}
