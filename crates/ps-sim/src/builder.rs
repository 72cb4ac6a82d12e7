//! Fluent builder for constructing a [`Port`].

use std::collections::{BTreeMap, BTreeSet};

use ps_core::{CargoId, ShipId, SimClock, SimConfig, Tick};
use ps_eval::{EvalContext, EvaluatorKind, StatisticsEvaluator};
use ps_model::{CargoRegistry, Quay, ShipRegistry};
use ps_port::{QuayPool, ShipQueue};
use ps_schedule::{Movement, MovementScheduler};

use crate::{Port, SimError, SimResult};

/// Fluent builder for [`Port`].
///
/// # Required inputs
///
/// - a port name
/// - [`SimConfig`]: intervals, dock failure policy, run length
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                  |
/// |------------------------|--------------------------|
/// | `.ships(r)`            | empty `ShipRegistry`     |
/// | `.cargo(r)`            | empty `CargoRegistry`    |
/// | `.quay(q)`/`.quays(v)` | no quays                 |
/// | `.queue(v)`            | nobody waiting           |
/// | `.stored_cargo(v)`     | nothing in storage       |
/// | `.movement(m)`         | nothing scheduled        |
/// | `.evaluator(k)`        | no evaluators            |
/// | `.start_tick(t)`       | `Tick(0)`                |
///
/// # Example
///
/// ```rust,ignore
/// let mut port = PortBuilder::new("Brisbane", SimConfig::default())
///     .ships(ships)
///     .cargo(cargo)
///     .quay(Quay::container(QuayId(0), 50))
///     .movement(Movement::ship(Tick(5), MovementDirection::Inbound, imo))
///     .all_evaluators()
///     .build()?;
/// port.run(&mut NoopObserver);
/// ```
pub struct PortBuilder {
    name:         String,
    config:       SimConfig,
    ships:        ShipRegistry,
    cargo:        CargoRegistry,
    quays:        Vec<Quay>,
    queue:        Vec<ShipId>,
    stored_cargo: Vec<CargoId>,
    movements:    Vec<Movement>,
    evaluators:   Vec<EvaluatorKind>,
    start_tick:   Tick,
}

impl PortBuilder {
    pub fn new(name: impl Into<String>, config: SimConfig) -> Self {
        Self {
            name:         name.into(),
            config,
            ships:        ShipRegistry::new(),
            cargo:        CargoRegistry::new(),
            quays:        Vec::new(),
            queue:        Vec::new(),
            stored_cargo: Vec::new(),
            movements:    Vec::new(),
            evaluators:   Vec::new(),
            start_tick:   Tick::ZERO,
        }
    }

    /// Every ship the port will ever refer to.
    pub fn ships(mut self, ships: ShipRegistry) -> Self {
        self.ships = ships;
        self
    }

    /// Every cargo item the port will ever refer to.
    pub fn cargo(mut self, cargo: CargoRegistry) -> Self {
        self.cargo = cargo;
        self
    }

    /// Add one quay after those already added.  Docking is first-fit in this
    /// order.
    pub fn quay(mut self, quay: Quay) -> Self {
        self.quays.push(quay);
        self
    }

    pub fn quays(mut self, quays: impl IntoIterator<Item = Quay>) -> Self {
        self.quays.extend(quays);
        self
    }

    /// Ships already waiting, in arrival order.
    pub fn queue(mut self, ships: impl IntoIterator<Item = ShipId>) -> Self {
        self.queue.extend(ships);
        self
    }

    /// Cargo already held at the port.
    pub fn stored_cargo(mut self, cargo: impl IntoIterator<Item = CargoId>) -> Self {
        self.stored_cargo.extend(cargo);
        self
    }

    pub fn movement(mut self, movement: Movement) -> Self {
        self.movements.push(movement);
        self
    }

    pub fn movements(mut self, movements: impl IntoIterator<Item = Movement>) -> Self {
        self.movements.extend(movements);
        self
    }

    /// Attach a fresh evaluator of `kind`.  Repeats are ignored.
    pub fn evaluator(mut self, kind: EvaluatorKind) -> Self {
        self.evaluators.push(kind);
        self
    }

    pub fn evaluators(mut self, kinds: impl IntoIterator<Item = EvaluatorKind>) -> Self {
        self.evaluators.extend(kinds);
        self
    }

    /// Attach one of each built-in evaluator.
    pub fn all_evaluators(mut self) -> Self {
        self.evaluators.extend(EvaluatorKind::ALL);
        self
    }

    /// Start the clock at `tick` instead of 0 (used when restoring).
    pub fn start_tick(mut self, tick: Tick) -> Self {
        self.start_tick = tick;
        self
    }

    /// Validate inputs, schedule the movements, and return a ready-to-run
    /// [`Port`].
    ///
    /// # Errors
    ///
    /// - [`SimError::Config`] for a zero interval, duplicate quay ids, or a
    ///   ship docked at more than one quay.
    /// - [`SimError::UnknownShip`] / [`SimError::UnknownCargo`] for any id
    ///   (queued, docked, stored or in a movement) missing from the registries.
    /// - [`SimError::Schedule`] for a movement earlier than the start tick.
    pub fn build(self) -> SimResult<Port> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        // ── Validate references ───────────────────────────────────────────
        let mut quay_ids = BTreeSet::new();
        let mut docked = BTreeSet::new();
        for quay in &self.quays {
            if !quay_ids.insert(quay.id()) {
                return Err(SimError::Config(format!("duplicate quay id {}", quay.id())));
            }
            if let Some(ship) = quay.occupant() {
                require_ship(&self.ships, ship)?;
                if !docked.insert(ship) {
                    return Err(SimError::Config(format!(
                        "ship {ship} is docked at more than one quay"
                    )));
                }
            }
        }
        for &ship in &self.queue {
            require_ship(&self.ships, ship)?;
        }
        for &cargo in &self.stored_cargo {
            require_cargo(&self.cargo, cargo)?;
        }
        for movement in &self.movements {
            check_movement(&self.ships, &self.cargo, movement)?;
        }

        // ── Schedule movements relative to the start tick ─────────────────
        let mut scheduler = MovementScheduler::new();
        for movement in self.movements {
            scheduler.schedule(movement, self.start_tick)?;
        }

        let quays = self.quays.into_iter().collect::<QuayPool>();
        let ctx = EvalContext::new(self.start_tick, &self.ships, &self.cargo, &quays);
        let mut evaluators: BTreeMap<EvaluatorKind, Box<dyn StatisticsEvaluator>> = BTreeMap::new();
        for kind in self.evaluators {
            evaluators.entry(kind).or_insert_with(|| {
                let mut evaluator = kind.instantiate();
                evaluator.on_attach(&ctx);
                evaluator
            });
        }

        Ok(Port {
            name:         self.name,
            clock:        SimClock::starting_at(self.start_tick),
            config:       self.config,
            ships:        self.ships,
            cargo:        self.cargo,
            queue:        self.queue.into_iter().collect::<ShipQueue>(),
            quays,
            stored_cargo: self.stored_cargo,
            scheduler,
            evaluators,
        })
    }
}

// ── Reference checks (shared with Port::add_movement) ─────────────────────────

pub(crate) fn require_ship(ships: &ShipRegistry, id: ShipId) -> SimResult<()> {
    if ships.contains(id) { Ok(()) } else { Err(SimError::UnknownShip(id)) }
}

pub(crate) fn require_cargo(cargo: &CargoRegistry, id: CargoId) -> SimResult<()> {
    if cargo.contains(id) { Ok(()) } else { Err(SimError::UnknownCargo(id)) }
}

/// Every id a movement names must be registered.
pub(crate) fn check_movement(
    ships:    &ShipRegistry,
    cargo:    &CargoRegistry,
    movement: &Movement,
) -> SimResult<()> {
    if let Some(ship) = movement.ship_id() {
        require_ship(ships, ship)?;
    }
    for &id in movement.cargo_ids() {
        require_cargo(cargo, id)?;
    }
    Ok(())
}
