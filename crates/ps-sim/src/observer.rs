//! Simulation observer trait and the per-tick summary it receives.

use ps_core::Tick;

/// What happened during one tick, plus the port's state at its end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub tick:               Tick,
    /// Movements drained from the scheduler and executed this tick.
    pub movements_executed: usize,
    /// 1 if a polled ship found a quay this tick, else 0.
    pub ships_docked:       usize,
    /// Cargo items taken off docked ships this tick.
    pub cargo_unloaded:     usize,
    pub queue_len:          usize,
    pub quays_occupied:     usize,
    /// Cargo held at the port (not aboard any ship) at the end of the tick.
    pub stored_cargo:       usize,
}

impl TickSummary {
    pub fn new(tick: Tick) -> Self {
        Self { tick, ..Self::default() }
    }
}

/// Callbacks invoked by [`Port::run`][crate::Port::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.is_every(60) {
///             println!("{}: {} waiting", summary.tick, summary.queue_len);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    /// `tick` is the tick about to be processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of every tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at report intervals (every `config.output_interval_ticks`
    /// ticks), after `on_tick_end`.  Output writers record rows here.
    fn on_report(&mut self, _summary: &TickSummary) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
