//! CSV movement loader.
//!
//! # CSV format
//!
//! One row per movement.  `ids` is a space-separated list: exactly one IMO
//! number for ship movements, one or more cargo ids for cargo movements.
//!
//! ```csv
//! tick,direction,kind,ids
//! 5,INBOUND,ship,1234567
//! 8,INBOUND,cargo,0 1 2
//! 60,OUTBOUND,ship,1234567
//! ```
//!
//! Rows are returned in file order; feeding them to a scheduler preserves
//! that order among movements sharing a tick.  Ids are only checked for
//! syntax here; whether they exist is the port's concern.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ps_core::{CargoId, ShipId, Tick};

use crate::{Movement, MovementDirection, ScheduleError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct MovementRecord {
    tick:      u64,
    direction: String,
    kind:      String,
    ids:       String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load movements from a CSV file.
pub fn load_movements_csv(path: &Path) -> Result<Vec<Movement>, ScheduleError> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_movements_reader(file)
}

/// Like [`load_movements_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scenarios.
pub fn load_movements_reader<R: Read>(reader: R) -> Result<Vec<Movement>, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut movements = Vec::new();

    for (row_no, result) in csv_reader.deserialize::<MovementRecord>().enumerate() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        movements.push(parse_record(row).map_err(|msg| {
            // +2: one for the header, one for 1-based numbering.
            ScheduleError::Parse(format!("row {}: {msg}", row_no + 2))
        })?);
    }

    Ok(movements)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_record(row: MovementRecord) -> Result<Movement, String> {
    let tick = Tick(row.tick);
    let direction: MovementDirection = row.direction.parse().map_err(|e| format!("{e}"))?;
    let ids: Vec<&str> = row.ids.split_whitespace().collect();

    match row.kind.trim() {
        "ship" => {
            let [imo] = ids.as_slice() else {
                return Err(format!("ship movement needs exactly one IMO number, got {}", ids.len()));
            };
            let ship: ShipId = imo.parse().map_err(|e| format!("{e}"))?;
            Ok(Movement::ship(tick, direction, ship))
        }
        "cargo" => {
            if ids.is_empty() {
                return Err("cargo movement needs at least one cargo id".into());
            }
            let cargo = ids
                .iter()
                .map(|s| s.parse::<CargoId>().map_err(|e| format!("{e}")))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Movement::cargo(tick, direction, cargo))
        }
        other => Err(format!("invalid kind {other:?}: expected \"ship\" or \"cargo\"")),
    }
}
