//! Unit tests for ps-port.

use ps_core::{QuayId, ShipId};
use ps_model::{NauticalFlag, Quay, Ship, ShipRegistry};

use crate::{QuayPool, ShipQueue};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn imo(n: u32) -> ShipId {
    ShipId(1_000_000 + n)
}

fn container_ship(n: u32, flag: NauticalFlag, capacity: u32) -> Ship {
    Ship::container_ship(imo(n), format!("Box {n}"), "Australia", flag, capacity)
}

fn bulk_carrier(n: u32, flag: NauticalFlag, tonnage: u32) -> Ship {
    Ship::bulk_carrier(imo(n), format!("Bulk {n}"), "Australia", flag, tonnage)
}

fn registry(ships: Vec<Ship>) -> ShipRegistry {
    ShipRegistry::try_from_iter(ships).unwrap()
}

fn queue_of(ids: &[u32]) -> ShipQueue {
    ids.iter().map(|n| imo(*n)).collect()
}

// ── ShipQueue ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;

    #[test]
    fn empty_queue_yields_nothing() {
        let ships = ShipRegistry::new();
        let mut q = ShipQueue::new();
        assert_eq!(q.peek(&ships), None);
        assert_eq!(q.poll(&ships), None);
    }

    #[test]
    fn priority_order_dangerous_medical_ready_container_then_arrival() {
        let ships = registry(vec![
            bulk_carrier(1, NauticalFlag::November, 100),
            container_ship(2, NauticalFlag::November, 10),
            bulk_carrier(3, NauticalFlag::Hotel, 100),
            bulk_carrier(4, NauticalFlag::Whiskey, 100),
            bulk_carrier(5, NauticalFlag::Bravo, 100),
            bulk_carrier(6, NauticalFlag::November, 100),
        ]);
        let mut q = queue_of(&[1, 2, 3, 4, 5, 6]);

        let order: Vec<ShipId> = std::iter::from_fn(|| q.poll(&ships)).collect();
        assert_eq!(order, vec![imo(5), imo(4), imo(3), imo(2), imo(1), imo(6)]);
        assert!(q.is_empty());
    }

    #[test]
    fn ties_go_to_earliest_arrival() {
        let ships = registry(vec![
            bulk_carrier(1, NauticalFlag::Bravo, 100),
            container_ship(2, NauticalFlag::Bravo, 10),
        ]);
        let mut q = queue_of(&[1, 2]);
        assert_eq!(q.poll(&ships), Some(imo(1)));
        assert_eq!(q.poll(&ships), Some(imo(2)));
    }

    #[test]
    fn peek_does_not_remove() {
        let ships = registry(vec![
            bulk_carrier(1, NauticalFlag::November, 100),
            bulk_carrier(2, NauticalFlag::Whiskey, 100),
        ]);
        let q = queue_of(&[1, 2]);
        assert_eq!(q.peek(&ships), Some(imo(2)));
        assert_eq!(q.peek(&ships), Some(imo(2)));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn flagged_container_ship_ranks_by_its_flag() {
        // A HOTEL container ship is a criterion-3 candidate, so the plain
        // container ship arriving later does not beat the WHISKEY bulk carrier.
        let ships = registry(vec![
            container_ship(1, NauticalFlag::Hotel, 10),
            bulk_carrier(2, NauticalFlag::Whiskey, 100),
            container_ship(3, NauticalFlag::November, 10),
        ]);
        let mut q = queue_of(&[1, 2, 3]);
        assert_eq!(q.poll(&ships), Some(imo(2)));
        assert_eq!(q.poll(&ships), Some(imo(1)));
        assert_eq!(q.poll(&ships), Some(imo(3)));
    }

    #[test]
    fn flag_change_while_waiting_is_seen_by_next_poll() {
        let mut ships = registry(vec![
            bulk_carrier(1, NauticalFlag::November, 100),
            bulk_carrier(2, NauticalFlag::November, 100),
        ]);
        let mut q = queue_of(&[1, 2]);
        assert_eq!(q.peek(&ships), Some(imo(1)));

        ships.get_mut(imo(2)).unwrap().set_flag(NauticalFlag::Bravo);
        assert_eq!(q.poll(&ships), Some(imo(2)));
    }

    #[test]
    fn unknown_ids_fall_back_to_arrival_order() {
        let ships = ShipRegistry::new();
        let mut q = queue_of(&[7, 8]);
        assert_eq!(q.poll(&ships), Some(imo(7)));
    }

    #[test]
    fn remove_and_contains() {
        let mut q = queue_of(&[1, 2, 3]);
        assert!(q.contains(imo(2)));
        assert!(q.remove(imo(2)));
        assert!(!q.remove(imo(2)));
        assert_eq!(q.ids(), &[imo(1), imo(3)]);
    }
}

// ── QuayPool ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pool {
    use super::*;

    fn pool() -> QuayPool {
        [
            Quay::bulk(QuayId(0), 120),
            Quay::container(QuayId(1), 5),
            Quay::container(QuayId(2), 50),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn docks_at_first_compatible_empty_quay() {
        let mut p = pool();
        let big = container_ship(1, NauticalFlag::November, 40);
        let small = container_ship(2, NauticalFlag::November, 5);

        assert_eq!(p.try_dock_next(&big), Some(QuayId(2)));
        assert_eq!(p.try_dock_next(&small), Some(QuayId(1)));
        assert_eq!(p.occupied_count(), 2);
        assert_eq!(p.find_ship(imo(1)), Some(QuayId(2)));
    }

    #[test]
    fn skips_occupied_and_incompatible_quays() {
        let mut p = pool();
        let first = container_ship(1, NauticalFlag::November, 5);
        let second = container_ship(2, NauticalFlag::November, 5);
        let third = container_ship(3, NauticalFlag::November, 5);

        assert_eq!(p.try_dock_next(&first), Some(QuayId(1)));
        assert_eq!(p.try_dock_next(&second), Some(QuayId(2)));
        assert_eq!(p.try_dock_next(&third), None);
        assert_eq!(p.find_ship(imo(3)), None);
    }

    #[test]
    fn bulk_carrier_needs_enough_tonnage() {
        let mut p = pool();
        assert_eq!(p.try_dock_next(&bulk_carrier(1, NauticalFlag::November, 200)), None);
        assert_eq!(p.try_dock_next(&bulk_carrier(2, NauticalFlag::November, 120)), Some(QuayId(0)));
    }

    #[test]
    fn undock_ship_frees_its_quay() {
        let mut p = pool();
        let ship = bulk_carrier(1, NauticalFlag::November, 100);
        p.try_dock_next(&ship);

        assert_eq!(p.undock_ship(imo(1)), vec![QuayId(0)]);
        assert!(p.get(QuayId(0)).unwrap().is_empty());
        assert!(p.undock_ship(imo(1)).is_empty());
    }

    #[test]
    fn docked_ship_is_not_given_a_second_quay() {
        let mut p: QuayPool = [Quay::bulk(QuayId(0), 200), Quay::bulk(QuayId(1), 200)]
            .into_iter()
            .collect();
        let ship = bulk_carrier(1, NauticalFlag::November, 100);

        assert_eq!(p.try_dock_next(&ship), Some(QuayId(0)));
        assert_eq!(p.try_dock_next(&ship), None);
        assert_eq!(p.occupied_count(), 1);
        assert!(p.get(QuayId(1)).unwrap().is_empty());
    }

    #[test]
    fn undock_ship_frees_every_quay_it_holds() {
        let mut first = Quay::bulk(QuayId(0), 200);
        let mut second = Quay::bulk(QuayId(1), 200);
        first.dock(imo(1));
        second.dock(imo(1));
        let mut p: QuayPool = [first, second, Quay::bulk(QuayId(2), 200)].into_iter().collect();

        assert_eq!(p.undock_ship(imo(1)), vec![QuayId(0), QuayId(1)]);
        assert_eq!(p.occupied_count(), 0);
        assert_eq!(p.find_ship(imo(1)), None);
    }

    #[test]
    fn docked_ships_in_registration_order() {
        let mut p = pool();
        p.try_dock_next(&container_ship(1, NauticalFlag::November, 40));
        p.try_dock_next(&bulk_carrier(2, NauticalFlag::November, 100));
        let docked: Vec<ShipId> = p.docked_ships().collect();
        assert_eq!(docked, vec![imo(2), imo(1)]);
    }

    #[test]
    fn quay_dock_on_occupied_keeps_occupant() {
        let mut quay = Quay::container(QuayId(9), 10);
        assert!(quay.dock(imo(1)));
        assert!(!quay.dock(imo(2)));
        assert_eq!(quay.occupant(), Some(imo(1)));
        assert_eq!(quay.undock(), Some(imo(1)));
        assert_eq!(quay.undock(), None);
    }
}
