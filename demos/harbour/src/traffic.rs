//! Random port traffic: a fleet with cargo aboard, cargo waiting ashore, and
//! arrival/departure movements spread across the run.

use anyhow::Result;

use ps_core::{CargoId, ShipId, SimRng, Tick};
use ps_model::{
    BulkCargoType, Cargo, CargoRegistry, ContainerType, NauticalFlag, Ship, ShipRegistry,
};
use ps_schedule::{Movement, MovementDirection};

const ORIGINS: [&str; 4] = ["Australia", "Japan", "Singapore", "New Zealand"];

/// Everything the generator produced.
pub struct Traffic {
    pub ships:        ShipRegistry,
    pub cargo:        CargoRegistry,
    pub stored_cargo: Vec<CargoId>,
    pub movements:    Vec<Movement>,
}

/// Build `ship_count` ships and their visits over `total_ticks` minutes.
///
/// Each ship arrives somewhere in the first half of the run and departs
/// 2 to 10 hours later.  Containers or bulk loads aboard are bound for the
/// ship's origin, so a ship that departs can also take on cargo from storage.
pub fn generate(rng: &mut SimRng, ship_count: u32, total_ticks: u64) -> Result<Traffic> {
    let mut ships = ShipRegistry::new();
    let mut cargo = CargoRegistry::new();
    let mut stored_cargo = Vec::new();
    let mut movements = Vec::new();

    // Cargo waiting ashore from the start.
    for _ in 0..ship_count {
        let destination = pick_origin(rng);
        let id = cargo.next_id()?;
        cargo.register(random_cargo(rng, id, destination))?;
        stored_cargo.push(id);
    }

    let latest_arrival = (total_ticks / 2).max(2);
    for i in 0..ship_count {
        let imo = ShipId::from_imo(ShipId::MIN_IMO + 104_729 * u64::from(i + 1))?;
        let origin = pick_origin(rng);
        let flag = *rng.choose(&NauticalFlag::ALL).unwrap_or(&NauticalFlag::November);

        let mut ship = if rng.gen_bool(0.6) {
            let capacity = rng.gen_range(4..=40);
            let mut ship = Ship::container_ship(imo, format!("Box{i}"), origin, flag, capacity);
            for _ in 0..rng.gen_range(0..=capacity.min(8)) {
                let kind = *rng.choose(&ContainerType::ALL).unwrap_or(&ContainerType::Standard);
                let id = cargo.next_id()?;
                cargo.register(Cargo::container(id, origin, kind))?;
                load(&mut ship, &cargo, id)?;
            }
            ship
        } else {
            let capacity = rng.gen_range(200..=1_000);
            let mut ship = Ship::bulk_carrier(imo, format!("Bulk{i}"), origin, flag, capacity);
            if rng.gen_bool(0.7) {
                let kind = *rng.choose(&BulkCargoType::ALL).unwrap_or(&BulkCargoType::Other);
                let tonnage = rng.gen_range(50..=capacity);
                let id = cargo.next_id()?;
                cargo.register(Cargo::bulk(id, origin, tonnage, kind))?;
                load(&mut ship, &cargo, id)?;
            }
            ship
        };
        if i == 0 {
            // Keep at least one ship flying no signal.
            ship.set_flag(NauticalFlag::November);
        }
        ships.register(ship)?;

        let arrival = rng.gen_range(1..latest_arrival);
        let departure = arrival + rng.gen_range(120..=600);
        movements.push(Movement::ship(Tick(arrival), MovementDirection::Inbound, imo));
        movements.push(Movement::ship(Tick(departure), MovementDirection::Outbound, imo));
    }

    // A few mid-run deliveries to the yard.
    for _ in 0..ship_count / 2 {
        let destination = pick_origin(rng);
        let id = cargo.next_id()?;
        cargo.register(random_cargo(rng, id, destination))?;
        let at = rng.gen_range(1..latest_arrival);
        movements.push(Movement::cargo(Tick(at), MovementDirection::Inbound, vec![id]));
    }

    Ok(Traffic { ships, cargo, stored_cargo, movements })
}

fn pick_origin(rng: &mut SimRng) -> &'static str {
    rng.choose(&ORIGINS).copied().unwrap_or(ORIGINS[0])
}

fn random_cargo(rng: &mut SimRng, id: CargoId, destination: &str) -> Cargo {
    if rng.gen_bool(0.5) {
        let kind = *rng.choose(&ContainerType::ALL).unwrap_or(&ContainerType::Standard);
        Cargo::container(id, destination, kind)
    } else {
        let kind = *rng.choose(&BulkCargoType::ALL).unwrap_or(&BulkCargoType::Other);
        Cargo::bulk(id, destination, rng.gen_range(50..=400), kind)
    }
}

fn load(ship: &mut Ship, cargo: &CargoRegistry, id: CargoId) -> Result<()> {
    if let Some(item) = cargo.get(id) {
        ship.load(item)?;
    }
    Ok(())
}
