//! Unit tests for ps-schedule.

use std::io::Cursor;

use ps_core::{CargoId, ShipId, Tick};

use crate::{
    load_movements_reader, Movement, MovementDirection, MovementScheduler, Payload, ScheduleError,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ship(n: u32) -> ShipId {
    ShipId(1_000_000 + n)
}

fn arrive(tick: u64, n: u32) -> Movement {
    Movement::ship(Tick(tick), MovementDirection::Inbound, ship(n))
}

fn deliver(tick: u64, ids: &[u32]) -> Movement {
    Movement::cargo(
        Tick(tick),
        MovementDirection::Inbound,
        ids.iter().copied().map(CargoId).collect(),
    )
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use super::*;

    #[test]
    fn accessors() {
        let m = arrive(5, 1);
        assert_eq!(m.tick(), Tick(5));
        assert!(m.is_inbound());
        assert_eq!(m.ship_id(), Some(ship(1)));
        assert!(m.cargo_ids().is_empty());
        assert_eq!(m.class_name(), "ShipMovement");

        let c = deliver(3, &[4, 7]);
        assert_eq!(c.ship_id(), None);
        assert_eq!(c.cargo_ids(), &[CargoId(4), CargoId(7)]);
        assert_eq!(c.class_name(), "CargoMovement");
        assert_eq!(c.payload(), &Payload::Cargo(vec![CargoId(4), CargoId(7)]));
    }

    #[test]
    fn display() {
        assert_eq!(
            arrive(5, 234_567).to_string(),
            "INBOUND ShipMovement to occur at 5 involving ship 1234567"
        );
        let out = Movement::cargo(Tick(9), MovementDirection::Outbound, vec![CargoId(1)]);
        assert_eq!(out.to_string(), "OUTBOUND CargoMovement to occur at 9 involving 1 piece(s) of cargo");
    }

    #[test]
    fn direction_parses_both_ways() {
        for dir in [MovementDirection::Inbound, MovementDirection::Outbound] {
            assert_eq!(dir.as_str().parse::<MovementDirection>().unwrap(), dir);
        }
        assert!("SIDEWAYS".parse::<MovementDirection>().is_err());
    }
}

// ── MovementScheduler ─────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use super::*;

    #[test]
    fn drain_returns_only_due_movements() {
        let mut s = MovementScheduler::new();
        s.schedule(arrive(5, 1), Tick(0)).unwrap();
        s.schedule(arrive(6, 2), Tick(0)).unwrap();
        assert_eq!(s.len(), 2);

        assert!(s.drain_due(Tick(4)).is_empty());
        let due = s.drain_due(Tick(5));
        assert_eq!(due, vec![arrive(5, 1)]);
        assert_eq!(s.len(), 1);
        assert_eq!(s.next_tick(), Some(Tick(6)));
    }

    #[test]
    fn same_tick_keeps_insertion_order() {
        let mut s = MovementScheduler::new();
        s.schedule(arrive(3, 1), Tick(0)).unwrap();
        s.schedule(deliver(3, &[0]), Tick(0)).unwrap();
        s.schedule(arrive(3, 2), Tick(0)).unwrap();

        let due = s.drain_due(Tick(3));
        assert_eq!(due, vec![arrive(3, 1), deliver(3, &[0]), arrive(3, 2)]);
        assert!(s.is_empty());
    }

    #[test]
    fn rejects_past_tick() {
        let mut s = MovementScheduler::new();
        let err = s.schedule(arrive(4, 1), Tick(5)).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::OutOfOrderSchedule { scheduled: Tick(4), now: Tick(5) }
        ));
        assert!(s.is_empty());
    }

    #[test]
    fn accepts_current_tick() {
        let mut s = MovementScheduler::new();
        s.schedule(arrive(5, 1), Tick(5)).unwrap();
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn snapshot_is_ordered_and_non_destructive() {
        let mut s = MovementScheduler::new();
        s.schedule(arrive(9, 1), Tick(0)).unwrap();
        s.schedule(arrive(2, 2), Tick(0)).unwrap();
        s.schedule(deliver(9, &[1]), Tick(0)).unwrap();

        let snap = s.snapshot();
        assert_eq!(snap, vec![arrive(2, 2), arrive(9, 1), deliver(9, &[1])]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.tick_count(), 2);
    }

    #[test]
    fn discard_stale_removes_only_past_entries() {
        let mut s = MovementScheduler::new();
        s.schedule(arrive(3, 1), Tick(0)).unwrap();
        s.schedule(arrive(4, 2), Tick(0)).unwrap();
        s.schedule(arrive(8, 3), Tick(0)).unwrap();

        let stale = s.discard_stale(Tick(5));
        assert_eq!(stale, vec![arrive(3, 1), arrive(4, 2)]);
        assert_eq!(s.len(), 1);
        assert_eq!(s.next_tick(), Some(Tick(8)));

        assert!(s.discard_stale(Tick(5)).is_empty());
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn empty_scheduler() {
        let mut s = MovementScheduler::new();
        assert!(s.is_empty());
        assert_eq!(s.next_tick(), None);
        assert!(s.drain_due(Tick(0)).is_empty());
        assert!(s.discard_stale(Tick(100)).is_empty());
        assert!(s.snapshot().is_empty());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn loads_ship_and_cargo_rows_in_file_order() {
        let csv = "\
tick,direction,kind,ids
5,INBOUND,ship,1234567
8,INBOUND,cargo,0 1 2
60,OUTBOUND,ship,1234567
";
        let movements = load_movements_reader(Cursor::new(csv)).unwrap();
        let imo = ShipId(1_234_567);
        assert_eq!(
            movements,
            vec![
                Movement::ship(Tick(5), MovementDirection::Inbound, imo),
                Movement::cargo(
                    Tick(8),
                    MovementDirection::Inbound,
                    vec![CargoId(0), CargoId(1), CargoId(2)],
                ),
                Movement::ship(Tick(60), MovementDirection::Outbound, imo),
            ]
        );
    }

    #[test]
    fn rejects_invalid_imo() {
        let csv = "tick,direction,kind,ids\n5,INBOUND,ship,123\n";
        let err = load_movements_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(msg) if msg.starts_with("row 2")));
    }

    #[test]
    fn rejects_unknown_kind() {
        let csv = "tick,direction,kind,ids\n5,INBOUND,crane,1\n";
        assert!(matches!(
            load_movements_reader(Cursor::new(csv)),
            Err(ScheduleError::Parse(_))
        ));
    }

    #[test]
    fn rejects_ship_row_with_two_ids() {
        let csv = "tick,direction,kind,ids\n5,OUTBOUND,ship,1234567 7654321\n";
        assert!(load_movements_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn rejects_empty_cargo_list() {
        let csv = "tick,direction,kind,ids\n5,INBOUND,cargo,\n";
        assert!(load_movements_reader(Cursor::new(csv)).is_err());
    }
}
