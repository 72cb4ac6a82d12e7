//! The `Port` struct and its tick loop.

use std::collections::BTreeMap;

use ps_core::{CargoId, DockFailurePolicy, ShipId, SimClock, SimConfig, Tick};
use ps_eval::{EvalContext, EvaluatorKind, StatisticsEvaluator};
use ps_model::{Cargo, CargoRegistry, ModelError, Ship, ShipRegistry};
use ps_port::{QuayPool, ShipQueue};
use ps_schedule::{Movement, MovementDirection, MovementScheduler, Payload};
use tracing::{debug, info, warn};

use crate::builder::{check_movement, require_cargo};
use crate::{PortBuilder, PortSnapshot, SimObserver, SimResult, TickSummary};

/// A running port.
///
/// `Port` owns every piece of simulation state and drives the tick loop:
///
/// 1. **Clock**: advance one minute.
/// 2. **Docking** (every `dock_interval_ticks`): poll the ship queue and berth
///    the chosen ship at the first compatible empty quay.  A ship that finds
///    none is handled by [`DockFailurePolicy`].
/// 3. **Unloading** (every `unload_interval_ticks`): take all cargo off every
///    docked ship into storage.  Empty ships are skipped.
/// 4. **Movements**: drain the movements due this tick and execute them in
///    insertion order.  Each evaluator sees each movement right after it runs.
/// 5. **Evaluators**: every evaluator is told the minute has elapsed.
///
/// Later steps see the effects of earlier ones: a ship arriving in step 4 can
/// be docked no earlier than the next docking tick.
///
/// Create via [`PortBuilder`] or [`Port::restore`].
pub struct Port {
    pub(crate) name:         String,
    pub(crate) config:       SimConfig,
    pub(crate) clock:        SimClock,
    pub(crate) ships:        ShipRegistry,
    pub(crate) cargo:        CargoRegistry,
    pub(crate) queue:        ShipQueue,
    pub(crate) quays:        QuayPool,
    /// Cargo at the port and not aboard any ship, in arrival order.
    pub(crate) stored_cargo: Vec<CargoId>,
    pub(crate) scheduler:    MovementScheduler,
    /// At most one evaluator per kind, notified in kind order.
    pub(crate) evaluators:   BTreeMap<EvaluatorKind, Box<dyn StatisticsEvaluator>>,
}

impl Port {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// The last tick processed (0 before the first `tick()`).
    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn ships(&self) -> &ShipRegistry {
        &self.ships
    }

    /// Mutable access to one ship, e.g. to change its signal flag while it
    /// waits.
    pub fn ship_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.get_mut(id)
    }

    pub fn cargo(&self) -> &CargoRegistry {
        &self.cargo
    }

    pub fn queue(&self) -> &ShipQueue {
        &self.queue
    }

    pub fn quays(&self) -> &QuayPool {
        &self.quays
    }

    pub fn stored_cargo(&self) -> &[CargoId] {
        &self.stored_cargo
    }

    pub fn scheduler(&self) -> &MovementScheduler {
        &self.scheduler
    }

    /// Attached evaluators in kind order.
    pub fn evaluators(&self) -> impl Iterator<Item = &dyn StatisticsEvaluator> + '_ {
        self.evaluators.values().map(|e| e.as_ref())
    }

    pub fn has_evaluator(&self, kind: EvaluatorKind) -> bool {
        self.evaluators.contains_key(&kind)
    }

    /// The attached evaluator of concrete type `E`, if any.
    pub fn evaluator<E: StatisticsEvaluator>(&self) -> Option<&E> {
        self.evaluators
            .values()
            .find_map(|e| e.as_any().downcast_ref::<E>())
    }

    // ── Mutation outside the tick loop ────────────────────────────────────

    /// Register a ship created after the port was built.
    pub fn register_ship(&mut self, ship: Ship) -> SimResult<ShipId> {
        Ok(self.ships.register(ship)?)
    }

    /// Register a cargo item created after the port was built.
    pub fn register_cargo(&mut self, cargo: Cargo) -> SimResult<CargoId> {
        Ok(self.cargo.register(cargo)?)
    }

    /// Put registered cargo into storage directly, without a movement.
    pub fn store_cargo(&mut self, id: CargoId) -> SimResult<()> {
        require_cargo(&self.cargo, id)?;
        self.stored_cargo.push(id);
        Ok(())
    }

    /// Schedule `movement`.
    ///
    /// # Errors
    ///
    /// - [`SimError::UnknownShip`][crate::SimError::UnknownShip] /
    ///   [`SimError::UnknownCargo`][crate::SimError::UnknownCargo] if it names
    ///   an unregistered id.
    /// - [`SimError::Schedule`][crate::SimError::Schedule] with
    ///   `OutOfOrderSchedule` if its tick is before the current clock.
    pub fn add_movement(&mut self, movement: Movement) -> SimResult<()> {
        check_movement(&self.ships, &self.cargo, &movement)?;
        self.scheduler.schedule(movement, self.now())?;
        Ok(())
    }

    /// Attach `evaluator`.  Returns `false` (and drops it) if one of the same
    /// kind is already attached.
    pub fn add_evaluator(&mut self, mut evaluator: Box<dyn StatisticsEvaluator>) -> bool {
        let kind = evaluator.kind();
        if self.evaluators.contains_key(&kind) {
            return false;
        }
        evaluator.on_attach(&EvalContext::new(self.now(), &self.ships, &self.cargo, &self.quays));
        self.evaluators.insert(kind, evaluator);
        true
    }

    // ── Run control ───────────────────────────────────────────────────────

    /// Run from the current tick until `config.end_tick()` has been processed.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let end = self.config.end_tick();
        info!(port = %self.name, from = %self.now(), to = %end, "port run starting");
        while self.now() < end {
            self.step(observer);
        }
        observer.on_sim_end(self.now());
        info!(
            port = %self.name,
            tick = %self.now(),
            waiting = self.queue.len(),
            stored = self.stored_cargo.len(),
            pending = self.scheduler.len(),
            "port run finished",
        );
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_tick_start(self.now() + 1);
        let summary = self.tick();
        observer.on_tick_end(&summary);
        if summary.tick.is_every(self.config.output_interval_ticks) {
            observer.on_report(&summary);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Advance the port by one minute.
    pub fn tick(&mut self) -> TickSummary {
        let now = self.clock.advance();
        let mut summary = TickSummary::new(now);

        if now.is_every(self.config.dock_interval_ticks) {
            summary.ships_docked = usize::from(self.dock_next_ship());
        }
        if now.is_every(self.config.unload_interval_ticks) {
            summary.cargo_unloaded = self.unload_docked_ships();
        }

        for stale in self.scheduler.discard_stale(now) {
            warn!(%now, movement = %stale, "stale movement discarded");
        }
        let due = self.scheduler.drain_due(now);
        summary.movements_executed = due.len();
        self.process_movements(now, &due);

        summary.queue_len = self.queue.len();
        summary.quays_occupied = self.quays.occupied_count();
        summary.stored_cargo = self.stored_cargo.len();
        summary
    }

    /// Poll one ship and try to berth it.  Returns `true` if it docked.
    fn dock_next_ship(&mut self) -> bool {
        let Some(id) = self.queue.poll(&self.ships) else {
            return false;
        };
        let Some(ship) = self.ships.get(id) else {
            warn!(ship = %id, "queued ship not in registry; dropped");
            return false;
        };
        if let Some(quay) = self.quays.find_ship(id) {
            debug!(ship = %id, %quay, "queued ship already docked; dropped");
            return false;
        }
        if self.quays.try_dock_next(ship).is_some() {
            return true;
        }
        match self.config.dock_failure {
            DockFailurePolicy::Requeue => {
                debug!(ship = %id, "no free quay; ship requeued");
                self.queue.add(id);
            }
            DockFailurePolicy::Discard => {
                warn!(ship = %id, "no free quay; ship dropped from queue");
            }
        }
        false
    }

    /// Move everything aboard docked ships into storage.  Returns the number
    /// of cargo items unloaded.
    fn unload_docked_ships(&mut self) -> usize {
        let docked: Vec<ShipId> = self.quays.docked_ships().collect();
        let mut unloaded = 0;
        for id in docked {
            let Some(ship) = self.ships.get_mut(id) else {
                continue;
            };
            match ship.unload() {
                Ok(cargo) => {
                    debug!(ship = %id, items = cargo.len(), "ship unloaded");
                    unloaded += cargo.len();
                    self.stored_cargo.extend(cargo);
                }
                Err(ModelError::NoCargo(_)) => {}
                Err(e) => warn!(ship = %id, error = %e, "unload failed"),
            }
        }
        unloaded
    }

    /// Apply one movement to the port state.
    fn execute(&mut self, movement: &Movement) {
        debug!(%movement, "executing movement");
        match (movement.direction(), movement.payload()) {
            (MovementDirection::Inbound, Payload::Ship(id)) => {
                self.queue.add(*id);
            }
            (MovementDirection::Outbound, Payload::Ship(id)) => {
                self.depart(*id);
            }
            (MovementDirection::Inbound, Payload::Cargo(ids)) => {
                self.stored_cargo.extend_from_slice(ids);
            }
            (MovementDirection::Outbound, Payload::Cargo(ids)) => {
                self.stored_cargo.retain(|id| !ids.contains(id));
            }
        }
    }

    /// Load every stored cargo item the ship accepts, then undock it.
    ///
    /// Each item is checked against the ship as loaded so far, so a container
    /// ship stops taking containers once full and a bulk carrier takes at most
    /// one load.
    fn depart(&mut self, id: ShipId) {
        let Some(ship) = self.ships.get_mut(id) else {
            warn!(ship = %id, "departing ship not in registry");
            return;
        };
        let registry = &self.cargo;
        let before = self.stored_cargo.len();
        self.stored_cargo.retain(|cargo_id| {
            !registry
                .get(*cargo_id)
                .is_some_and(|cargo| ship.load(cargo).is_ok())
        });
        debug!(ship = %id, loaded = before - self.stored_cargo.len(), "cargo loaded");
        self.quays.undock_ship(id);
    }

    /// Execute the tick's movements and notify evaluators.
    #[cfg(not(feature = "parallel"))]
    fn process_movements(&mut self, now: Tick, due: &[Movement]) {
        for movement in due {
            self.execute(movement);
            let ctx = EvalContext::new(now, &self.ships, &self.cargo, &self.quays);
            for evaluator in self.evaluators.values_mut() {
                evaluator.on_movement(movement, &ctx);
            }
        }
        let ctx = EvalContext::new(now, &self.ships, &self.cargo, &self.quays);
        for evaluator in self.evaluators.values_mut() {
            evaluator.on_tick(&ctx);
        }
    }

    /// Execute the tick's movements, then notify evaluators in parallel.
    ///
    /// Every evaluator still sees the movements in execution order followed by
    /// `on_tick`, but against the end-of-tick state.
    #[cfg(feature = "parallel")]
    fn process_movements(&mut self, now: Tick, due: &[Movement]) {
        use rayon::prelude::*;

        for movement in due {
            self.execute(movement);
        }
        let ctx = EvalContext::new(now, &self.ships, &self.cargo, &self.quays);
        self.evaluators.par_iter_mut().for_each(|(_, evaluator)| {
            for movement in due {
                evaluator.on_movement(movement, &ctx);
            }
            evaluator.on_tick(&ctx);
        });
    }

    // ── Persistence boundary ──────────────────────────────────────────────

    /// Capture the port's mutable state.
    pub fn snapshot(&self) -> PortSnapshot {
        PortSnapshot {
            name:         self.name.clone(),
            tick:         self.now(),
            quays:        self.quays.iter().cloned().collect(),
            queue:        self.queue.ids().to_vec(),
            stored_cargo: self.stored_cargo.clone(),
            movements:    self.scheduler.snapshot(),
            evaluators:   self.evaluators.keys().copied().collect(),
        }
    }

    /// Rebuild a port from `snapshot` and the registries it refers to.
    ///
    /// Fails like [`PortBuilder::build`], including `OutOfOrderSchedule` for a
    /// movement earlier than the snapshot's tick.
    pub fn restore(
        snapshot: PortSnapshot,
        ships:    ShipRegistry,
        cargo:    CargoRegistry,
        config:   SimConfig,
    ) -> SimResult<Port> {
        PortBuilder::new(snapshot.name, config)
            .ships(ships)
            .cargo(cargo)
            .quays(snapshot.quays)
            .queue(snapshot.queue)
            .stored_cargo(snapshot.stored_cargo)
            .movements(snapshot.movements)
            .start_tick(snapshot.tick)
            .evaluators(snapshot.evaluators)
            .build()
    }
}
