//! Unit tests for ps-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CargoId, PsError, QuayId, ShipId};

    #[test]
    fn imo_accepts_seven_digits() {
        assert_eq!(ShipId::from_imo(1_234_567).unwrap(), ShipId(1_234_567));
        assert_eq!(ShipId::from_imo(9_999_999).unwrap().get(), 9_999_999);
    }

    #[test]
    fn imo_rejects_wrong_length() {
        assert_eq!(ShipId::from_imo(999_999), Err(PsError::InvalidImo(999_999)));
        assert_eq!(ShipId::from_imo(10_000_000), Err(PsError::InvalidImo(10_000_000)));
        assert!(ShipId::from_imo(0).is_err());
    }

    #[test]
    fn imo_parse_rejects_leading_zero() {
        // "0123456" parses to 123456, which is only 6 digits.
        assert!("0123456".parse::<ShipId>().is_err());
        assert_eq!("7654321".parse::<ShipId>().unwrap(), ShipId(7_654_321));
        assert!(matches!("abc".parse::<ShipId>(), Err(PsError::Parse(_))));
    }

    #[test]
    fn cargo_and_quay_parse() {
        assert_eq!("17".parse::<CargoId>().unwrap(), CargoId(17));
        assert_eq!(" 3 ".parse::<QuayId>().unwrap(), QuayId(3));
        assert!("-1".parse::<CargoId>().is_err());
    }

    #[test]
    fn ordering_and_display() {
        assert!(CargoId(0) < CargoId(1));
        assert_eq!(ShipId(2_313_212).to_string(), "2313212");
        assert_eq!(u64::from(QuayId(9)), 9);
    }
}

#[cfg(test)]
mod time {
    use crate::{DockFailurePolicy, SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(5)), 10);
    }

    #[test]
    fn tick_is_every() {
        assert!(Tick(10).is_every(10));
        assert!(Tick(10).is_every(5));
        assert!(!Tick(11).is_every(5));
        assert!(!Tick(10).is_every(0));
    }

    #[test]
    fn clock_advances_by_one() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick::ZERO);
        assert_eq!(clock.advance(), Tick(1));
        assert_eq!(clock.advance(), Tick(2));
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn clock_display() {
        let clock = SimClock::starting_at(Tick(1_440 + 61));
        assert_eq!(clock.elapsed_dhm(), (1, 1, 1));
        assert_eq!(clock.to_string(), "T1501 (day 1 01:01)");
    }

    #[test]
    fn default_config_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dock_interval_ticks, 10);
        assert_eq!(config.unload_interval_ticks, 5);
        assert_eq!(config.dock_failure, DockFailurePolicy::Requeue);
        assert_eq!(config.end_tick(), Tick(1_440));
    }

    #[test]
    fn zero_interval_rejected() {
        let config = SimConfig { unload_interval_ticks: 0, ..SimConfig::default() };
        assert!(config.validate().is_err());
        let config = SimConfig { dock_interval_ticks: 0, ..SimConfig::default() };
        assert!(config.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<u32> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5]), Some(&5));
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(3);
        for _ in 0..100 {
            let v = rng.gen_range(10..20u32);
            assert!((10..20).contains(&v));
        }
    }
}
