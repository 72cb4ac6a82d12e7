//! Integration tests for ps-output.

use ps_core::{CargoId, QuayId, ShipId, SimConfig, Tick};
use ps_eval::EvaluatorKind;
use ps_model::{
    BulkCargoType, Cargo, CargoRegistry, ContainerType, NauticalFlag, Quay, Ship, ShipRegistry,
};
use ps_schedule::{Movement, MovementDirection};
use ps_sim::{Port, PortBuilder};

const BOXER: ShipId = ShipId(1_234_567);
const HAULER: ShipId = ShipId(7_654_321);

fn config(total_ticks: u64, output_interval_ticks: u64) -> SimConfig {
    SimConfig { total_ticks, output_interval_ticks, ..SimConfig::default() }
}

/// Boxer berthed at quay 0 with container 0 aboard, Hauler waiting with
/// grain aboard, one reefer in storage, two departures scheduled.
fn sample_port(config: SimConfig) -> Port {
    let cargo = CargoRegistry::try_from_iter([
        Cargo::container(CargoId(0), "Australia", ContainerType::Standard),
        Cargo::bulk(CargoId(1), "Japan", 50, BulkCargoType::Grain),
        Cargo::container(CargoId(2), "Japan", ContainerType::Reefer),
    ])
    .unwrap();

    let mut boxer = Ship::container_ship(BOXER, "Boxer", "Australia", NauticalFlag::November, 10);
    boxer.load(cargo.get(CargoId(0)).unwrap()).unwrap();
    let mut hauler = Ship::bulk_carrier(HAULER, "Hauler", "Japan", NauticalFlag::Bravo, 100);
    hauler.load(cargo.get(CargoId(1)).unwrap()).unwrap();
    let ships = ShipRegistry::try_from_iter([boxer, hauler]).unwrap();

    let mut berth = Quay::container(QuayId(0), 20);
    berth.dock(BOXER);

    PortBuilder::new("Brisbane", config)
        .ships(ships)
        .cargo(cargo)
        .quay(berth)
        .quay(Quay::bulk(QuayId(1), 200))
        .queue([HAULER])
        .stored_cargo([CargoId(2)])
        .movement(Movement::ship(Tick(30), MovementDirection::Outbound, BOXER))
        .movement(Movement::cargo(Tick(40), MovementDirection::Outbound, vec![CargoId(2)]))
        .evaluator(EvaluatorKind::ShipFlag)
        .evaluator(EvaluatorKind::QuayOccupancy)
        .build()
        .unwrap()
}

const SAMPLE_TEXT: &str = "\
Brisbane
0
3
Container:0:Australia:STANDARD
BulkCargo:1:Japan:GRAIN:50
Container:2:Japan:REEFER
2
ContainerShip:1234567:Boxer:Australia:NOVEMBER:10:1:0
BulkCarrier:7654321:Hauler:Japan:BRAVO:100:1
2
ContainerQuay:0:1234567:20
BulkQuay:1:None:200
ShipQueue:1:7654321
StoredCargo:1:2
Movements:2
ShipMovement:30:OUTBOUND:1234567
CargoMovement:40:OUTBOUND:1:2
Evaluators:2:QuayOccupancyEvaluator,ShipFlagEvaluator
";

// ── CSV backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{CsvWriter, TICK_SUMMARY_HEADER};
    use crate::row::TickSummaryRow;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            day:                tick / 1_440,
            movements_executed: 1,
            ships_docked:       0,
            cargo_unloaded:     2,
            queue_len:          3,
            quays_occupied:     1,
            stored_cargo:       4,
        }
    }

    #[test]
    fn csv_file_created_with_header() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, TICK_SUMMARY_HEADER);
    }

    #[test]
    fn csv_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(1_440)).unwrap();
        w.write_tick_summary(&summary_row(1_441)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1440");
        assert_eq!(&rows[0][1], "1");
        assert_eq!(&rows[1][0], "1441");
        assert_eq!(&rows[1][7], "4");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── SimOutputObserver ─────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::{CsvWriter, SimOutputObserver};

    #[test]
    fn rows_follow_output_interval() {
        let dir = tempfile::tempdir().unwrap();
        let mut port = sample_port(config(20, 5));
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        port.run(&mut obs);

        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows_written(), 4);

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let ticks: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(ticks, ["5", "10", "15", "20"]);
    }

    #[test]
    fn rows_reflect_port_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut port = sample_port(config(10, 1));
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        port.run(&mut obs);

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 10);
        // Tick 5: Boxer's container comes ashore.
        assert_eq!(&rows[4][4], "1");
        assert_eq!(&rows[4][7], "2");
        // Tick 10: Hauler berths at the bulk quay.
        assert_eq!(&rows[9][3], "1");
        assert_eq!(&rows[9][5], "0");
        assert_eq!(&rows[9][6], "2");
    }
}

// ── Save file codec ───────────────────────────────────────────────────────────

#[cfg(test)]
mod codec_tests {
    use super::*;
    use crate::{OutputError, decode_port, encode_port, load_port, save_port};

    fn decode_err(text: &str) -> OutputError {
        match decode_port(text, SimConfig::default()) {
            Ok(_) => panic!("expected decode failure"),
            Err(e) => e,
        }
    }

    fn bad_line(text: &str) -> usize {
        match decode_err(text) {
            OutputError::BadEncoding { line, .. } => line,
            other => panic!("expected BadEncoding, got {other}"),
        }
    }

    #[test]
    fn encodes_expected_text() {
        let port = sample_port(SimConfig::default());
        assert_eq!(encode_port(&port), SAMPLE_TEXT);
    }

    #[test]
    fn decode_restores_state() {
        let original = sample_port(SimConfig::default());
        let decoded = decode_port(SAMPLE_TEXT, SimConfig::default()).unwrap();

        assert_eq!(decoded.snapshot(), original.snapshot());
        assert_eq!(decoded.ships(), original.ships());
        assert_eq!(decoded.cargo(), original.cargo());
        assert!(decoded.has_evaluator(EvaluatorKind::ShipFlag));
        assert!(!decoded.has_evaluator(EvaluatorKind::ShipThroughput));
    }

    #[test]
    fn mid_run_port_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("port.txt");

        let mut port = sample_port(config(60, 1));
        port.run_ticks(12, &mut ps_sim::NoopObserver);
        save_port(&port, &path).unwrap();

        let mut loaded = load_port(&path, config(60, 1)).unwrap();
        assert_eq!(loaded.now(), Tick(12));
        assert_eq!(loaded.snapshot(), port.snapshot());
        assert_eq!(encode_port(&loaded), encode_port(&port));

        // Both continue identically.
        port.run(&mut ps_sim::NoopObserver);
        loaded.run(&mut ps_sim::NoopObserver);
        assert_eq!(loaded.snapshot(), port.snapshot());
        assert_eq!(loaded.ships(), port.ships());
    }

    #[test]
    fn blank_trailing_lines_are_accepted() {
        let text = format!("{SAMPLE_TEXT}\n\n");
        assert!(decode_port(&text, SimConfig::default()).is_ok());
    }

    #[test]
    fn trailing_content_is_rejected() {
        let text = format!("{SAMPLE_TEXT}extra\n");
        assert_eq!(bad_line(&text), 19);
    }

    #[test]
    fn truncated_text_reports_next_line() {
        let text: String = SAMPLE_TEXT.lines().take(17).map(|l| format!("{l}\n")).collect();
        assert_eq!(bad_line(&text), 18);
        assert_eq!(bad_line(""), 1);
    }

    #[test]
    fn malformed_fields_report_their_line() {
        let cases = [
            ("BRAVO", "PURPLE", 9),
            ("GRAIN", "SAND", 5),
            ("ShipQueue:1:", "ShipQueue:2:", 13),
            ("BulkQuay", "DryDock", 12),
            ("Movements:2", "Movements:two", 15),
            ("CargoMovement:40:OUTBOUND:1:2", "CargoMovement:40:OUTBOUND:0:", 17),
            ("ShipMovement:30:OUTBOUND", "ShipMovement:30:SIDEWAYS", 16),
            ("ShipFlagEvaluator", "WeatherEvaluator", 18),
            ("1234567:Boxer", "123:Boxer", 8),
        ];
        for (from, to, line) in cases {
            let text = SAMPLE_TEXT.replacen(from, to, 1);
            assert_eq!(bad_line(&text), line, "replacing {from:?} with {to:?}");
        }
    }

    #[test]
    fn duplicate_cargo_is_rejected() {
        let text = SAMPLE_TEXT.replacen("Container:2:", "Container:0:", 1);
        assert_eq!(bad_line(&text), 6);
    }

    #[test]
    fn cargo_aboard_must_be_listed() {
        let text = SAMPLE_TEXT.replacen("NOVEMBER:10:1:0", "NOVEMBER:10:1:9", 1);
        assert_eq!(bad_line(&text), 8);
    }

    #[test]
    fn movement_before_saved_tick_is_inconsistent() {
        let text = SAMPLE_TEXT.replacen("Brisbane\n0\n", "Brisbane\n35\n", 1);
        assert!(matches!(decode_err(&text), OutputError::Sim(_)));
    }

    #[test]
    fn unknown_queued_ship_is_inconsistent() {
        let text = SAMPLE_TEXT.replacen("ShipQueue:1:7654321", "ShipQueue:1:9999999", 1);
        assert!(matches!(
            decode_err(&text),
            OutputError::Sim(ps_sim::SimError::UnknownShip(ShipId(9_999_999)))
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_port(&dir.path().join("nope.txt"), SimConfig::default()).err();
        assert!(matches!(err, Some(OutputError::Io(_))));
    }
}

// ── SQLite backend ────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::{OutputWriter, SimOutputObserver, SqliteWriter};

    #[test]
    fn observer_writes_rows_to_db() {
        let dir = tempfile::tempdir().unwrap();
        let mut port = sample_port(config(30, 10));
        let mut obs = SimOutputObserver::new(SqliteWriter::new(dir.path()).unwrap());
        port.run(&mut obs);
        assert!(obs.take_error().is_none());
        obs.into_writer().finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM tick_summaries", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);

        let docked: i64 = conn
            .query_row("SELECT ships_docked FROM tick_summaries WHERE tick = 10", [], |r| r.get(0))
            .unwrap();
        assert_eq!(docked, 1);
    }
}
