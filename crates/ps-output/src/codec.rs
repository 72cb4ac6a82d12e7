//! Text save format for a whole port.
//!
//! # Layout
//!
//! One record per line, fields separated by `:`, id lists by `,`:
//!
//! ```text
//! <port name>
//! <tick>
//! <number of cargo items>
//! Container:<id>:<destination>:<TYPE>
//! BulkCargo:<id>:<destination>:<TYPE>:<tonnage>
//! <number of ships>
//! ContainerShip:<imo>:<name>:<origin>:<FLAG>:<capacity>:<n>:<cargo ids>
//! BulkCarrier:<imo>:<name>:<origin>:<FLAG>:<tonnage capacity>:<cargo id or empty>
//! <number of quays>
//! ContainerQuay:<id>:<imo or None>:<max containers>
//! BulkQuay:<id>:<imo or None>:<max tonnage>
//! ShipQueue:<n>:<imos>
//! StoredCargo:<n>:<cargo ids>
//! Movements:<n>
//! ShipMovement:<tick>:<INBOUND|OUTBOUND>:<imo>
//! CargoMovement:<tick>:<INBOUND|OUTBOUND>:<n>:<cargo ids>
//! Evaluators:<n>:<class names>
//! ```
//!
//! Cargo and ships appear in ascending id order, quays in registration order,
//! movements by tick then insertion order.  Encoding the same port twice
//! yields the same text.
//!
//! Names, origins and destinations must not contain `:` or line breaks; such
//! ports encode, but the text does not decode.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use ps_core::{CargoId, QuayId, ShipId, SimConfig, Tick};
use ps_eval::EvaluatorKind;
use ps_model::{
    BulkCargoType, Cargo, CargoKind, CargoRegistry, ContainerType, NauticalFlag, Quay, Ship,
    ShipKind, ShipRegistry,
};
use ps_schedule::{Movement, MovementDirection, Payload};
use ps_sim::{Port, PortSnapshot};
use tracing::info;

use crate::{OutputError, OutputResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Encode `port` in the save format.
pub fn encode_port(port: &Port) -> String {
    PortEncoding(port).to_string()
}

/// Decode a port from save-format text.
///
/// `config` supplies everything the save format does not carry (intervals,
/// dock failure policy, run length).
///
/// # Errors
///
/// - [`OutputError::BadEncoding`] for any malformed line, a count that does
///   not match its list, or missing lines.
/// - [`OutputError::Sim`] if the text is well-formed but inconsistent, e.g.
///   a movement earlier than the saved tick or a queue entry naming a ship
///   that was not listed.
pub fn decode_port(text: &str, config: SimConfig) -> OutputResult<Port> {
    let mut lines = LineReader::new(text);

    let (_, name) = lines.next()?;
    let (n, time) = lines.next()?;
    let tick = Tick(parse_field(time, n, "tick")?);

    let cargo = decode_cargo_section(&mut lines)?;
    let ships = decode_ship_section(&mut lines, &cargo)?;

    let (n, count) = lines.next()?;
    let quay_count: usize = parse_field(count, n, "quay count")?;
    let mut quays = Vec::with_capacity(quay_count);
    for _ in 0..quay_count {
        let (n, line) = lines.next()?;
        quays.push(decode_quay(line, n)?);
    }

    let (n, line) = lines.next()?;
    let queue: Vec<ShipId> = decode_id_list(line, n, "ShipQueue")?;

    let (n, line) = lines.next()?;
    let stored_cargo: Vec<CargoId> = decode_id_list(line, n, "StoredCargo")?;

    let (n, line) = lines.next()?;
    let movement_count = match line.split(':').collect::<Vec<_>>().as_slice() {
        ["Movements", count] => parse_field::<usize>(count, n, "movement count")?,
        _ => return Err(bad(n, "expected Movements:<n>")),
    };
    let mut movements = Vec::with_capacity(movement_count);
    for _ in 0..movement_count {
        let (n, line) = lines.next()?;
        movements.push(decode_movement(line, n)?);
    }

    let (n, line) = lines.next()?;
    let evaluators: Vec<EvaluatorKind> = decode_id_list(line, n, "Evaluators")?;

    lines.expect_end()?;

    let snapshot = PortSnapshot {
        name: name.to_owned(),
        tick,
        quays,
        queue,
        stored_cargo,
        movements,
        evaluators,
    };
    Ok(Port::restore(snapshot, ships, cargo, config)?)
}

/// Write `port` to `path` in the save format.
pub fn save_port(port: &Port, path: &Path) -> OutputResult<()> {
    std::fs::write(path, encode_port(port))?;
    info!(port = port.name(), tick = %port.now(), path = %path.display(), "port saved");
    Ok(())
}

/// Read a port saved with [`save_port`].
pub fn load_port(path: &Path, config: SimConfig) -> OutputResult<Port> {
    let text = std::fs::read_to_string(path)?;
    let port = decode_port(&text, config)?;
    info!(port = port.name(), tick = %port.now(), path = %path.display(), "port loaded");
    Ok(port)
}

// ── Encoding ──────────────────────────────────────────────────────────────────

struct PortEncoding<'a>(&'a Port);

impl fmt::Display for PortEncoding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let port = self.0;
        let snapshot = port.snapshot();

        writeln!(f, "{}", snapshot.name)?;
        writeln!(f, "{}", snapshot.tick.0)?;

        writeln!(f, "{}", port.cargo().len())?;
        for cargo in port.cargo().iter() {
            write_cargo(f, cargo)?;
        }

        writeln!(f, "{}", port.ships().len())?;
        for ship in port.ships().iter() {
            write_ship(f, ship)?;
        }

        writeln!(f, "{}", snapshot.quays.len())?;
        for quay in &snapshot.quays {
            let occupant = quay.occupant().map_or_else(|| "None".to_owned(), |s| s.to_string());
            writeln!(f, "{}:{}:{}:{}", quay.class_name(), quay.id(), occupant, quay.capacity())?;
        }

        writeln!(f, "ShipQueue:{}:{}", snapshot.queue.len(), join(&snapshot.queue))?;
        writeln!(f, "StoredCargo:{}:{}", snapshot.stored_cargo.len(), join(&snapshot.stored_cargo))?;

        writeln!(f, "Movements:{}", snapshot.movements.len())?;
        for movement in &snapshot.movements {
            write!(f, "{}:{}:{}", movement.class_name(), movement.tick().0, movement.direction())?;
            match movement.payload() {
                Payload::Ship(id) => writeln!(f, ":{id}")?,
                Payload::Cargo(ids) => writeln!(f, ":{}:{}", ids.len(), join(ids))?,
            }
        }

        writeln!(f, "Evaluators:{}:{}", snapshot.evaluators.len(), join(&snapshot.evaluators))
    }
}

fn write_cargo(f: &mut fmt::Formatter<'_>, cargo: &Cargo) -> fmt::Result {
    write!(f, "{}:{}:{}", cargo.class_name(), cargo.id(), cargo.destination())?;
    match cargo.kind() {
        CargoKind::Container { container_type } => writeln!(f, ":{container_type}"),
        CargoKind::Bulk { bulk_type, tonnage } => writeln!(f, ":{bulk_type}:{tonnage}"),
    }
}

fn write_ship(f: &mut fmt::Formatter<'_>, ship: &Ship) -> fmt::Result {
    write!(
        f,
        "{}:{}:{}:{}:{}",
        ship.class_name(),
        ship.id(),
        ship.name(),
        ship.origin(),
        ship.flag(),
    )?;
    match ship.kind() {
        ShipKind::Container { capacity, containers } => {
            writeln!(f, ":{capacity}:{}:{}", containers.len(), join(containers))
        }
        ShipKind::Bulk { tonnage_capacity, cargo } => {
            let aboard = cargo.map(|id| id.to_string()).unwrap_or_default();
            writeln!(f, ":{tonnage_capacity}:{aboard}")
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

// ── Decoding ──────────────────────────────────────────────────────────────────

/// Numbered line cursor.  Line numbers are 1-based.
struct LineReader<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    last:  usize,
}

impl<'a> LineReader<'a> {
    fn new(text: &'a str) -> Self {
        Self { lines: text.lines().enumerate(), last: 0 }
    }

    fn next(&mut self) -> OutputResult<(usize, &'a str)> {
        match self.lines.next() {
            Some((i, line)) => {
                self.last = i + 1;
                Ok((i + 1, line))
            }
            None => Err(bad(self.last + 1, "unexpected end of input")),
        }
    }

    /// Only blank lines may follow the last record.
    fn expect_end(&mut self) -> OutputResult<()> {
        for (i, line) in self.lines.by_ref() {
            if !line.trim().is_empty() {
                return Err(bad(i + 1, "unexpected content after Evaluators line"));
            }
        }
        Ok(())
    }
}

fn bad(line: usize, reason: impl Into<String>) -> OutputError {
    OutputError::BadEncoding { line, reason: reason.into() }
}

fn parse_field<T>(s: &str, line: usize, what: &str) -> OutputResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    s.parse::<T>().map_err(|e| bad(line, format!("invalid {what} {s:?}: {e}")))
}

/// Parse a comma-separated list; an empty string is an empty list.
fn parse_list<T>(s: &str, line: usize, what: &str) -> OutputResult<Vec<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',').map(|item| parse_field(item, line, what)).collect()
}

/// Parse `<count>` and `<list>` fields, checking they agree.
fn parse_counted_list<T>(count: &str, list: &str, line: usize, what: &str) -> OutputResult<Vec<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let expected: usize = parse_field(count, line, "count")?;
    let items = parse_list(list, line, what)?;
    if items.len() != expected {
        return Err(bad(line, format!("{what} count is {expected} but {} listed", items.len())));
    }
    Ok(items)
}

/// `<Tag>:<n>:<items>` lines (queue, stored cargo, evaluators).
fn decode_id_list<T>(line: &str, n: usize, tag: &str) -> OutputResult<Vec<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match line.split(':').collect::<Vec<_>>().as_slice() {
        [found, count, list] if *found == tag => parse_counted_list(count, list, n, tag),
        _ => Err(bad(n, format!("expected {tag}:<n>:<list>"))),
    }
}

fn decode_cargo_section(lines: &mut LineReader<'_>) -> OutputResult<CargoRegistry> {
    let (n, count) = lines.next()?;
    let count: usize = parse_field(count, n, "cargo count")?;
    let mut registry = CargoRegistry::new();
    for _ in 0..count {
        let (n, line) = lines.next()?;
        let cargo = decode_cargo(line, n)?;
        registry
            .register(cargo)
            .map_err(|e| bad(n, e.to_string()))?;
    }
    Ok(registry)
}

fn decode_cargo(line: &str, n: usize) -> OutputResult<Cargo> {
    match line.split(':').collect::<Vec<_>>().as_slice() {
        ["Container", id, dest, kind] => Ok(Cargo::container(
            parse_field::<CargoId>(id, n, "cargo id")?,
            *dest,
            parse_field::<ContainerType>(kind, n, "container type")?,
        )),
        ["BulkCargo", id, dest, kind, tonnage] => Ok(Cargo::bulk(
            parse_field::<CargoId>(id, n, "cargo id")?,
            *dest,
            parse_field(tonnage, n, "tonnage")?,
            parse_field::<BulkCargoType>(kind, n, "bulk cargo type")?,
        )),
        _ => Err(bad(n, "expected a Container or BulkCargo record")),
    }
}

fn decode_ship_section(
    lines: &mut LineReader<'_>,
    cargo: &CargoRegistry,
) -> OutputResult<ShipRegistry> {
    let (n, count) = lines.next()?;
    let count: usize = parse_field(count, n, "ship count")?;
    let mut registry = ShipRegistry::new();
    for _ in 0..count {
        let (n, line) = lines.next()?;
        let ship = decode_ship(line, n, cargo)?;
        registry
            .register(ship)
            .map_err(|e| bad(n, e.to_string()))?;
    }
    Ok(registry)
}

fn decode_ship(line: &str, n: usize, registry: &CargoRegistry) -> OutputResult<Ship> {
    let fields: Vec<&str> = line.split(':').collect();
    let (mut ship, aboard) = match fields.as_slice() {
        ["ContainerShip", imo, name, origin, flag, capacity, count, ids] => {
            let ship = Ship::container_ship(
                parse_field::<ShipId>(imo, n, "IMO number")?,
                *name,
                *origin,
                parse_field::<NauticalFlag>(flag, n, "nautical flag")?,
                parse_field(capacity, n, "capacity")?,
            );
            (ship, parse_counted_list::<CargoId>(count, ids, n, "container")?)
        }
        ["BulkCarrier", imo, name, origin, flag, tonnage, id] => {
            let ship = Ship::bulk_carrier(
                parse_field::<ShipId>(imo, n, "IMO number")?,
                *name,
                *origin,
                parse_field::<NauticalFlag>(flag, n, "nautical flag")?,
                parse_field(tonnage, n, "tonnage capacity")?,
            );
            (ship, parse_list::<CargoId>(id, n, "bulk cargo")?)
        }
        _ => return Err(bad(n, "expected a ContainerShip or BulkCarrier record")),
    };
    for id in aboard {
        let cargo = registry
            .get(id)
            .ok_or_else(|| bad(n, format!("cargo {id} aboard ship is not listed")))?;
        ship.load(cargo).map_err(|e| bad(n, e.to_string()))?;
    }
    Ok(ship)
}

fn decode_quay(line: &str, n: usize) -> OutputResult<Quay> {
    let fields: Vec<&str> = line.split(':').collect();
    let &[class, id, occupant, capacity] = fields.as_slice() else {
        return Err(bad(n, "expected <Kind>:<id>:<imo or None>:<capacity>"));
    };
    let id: QuayId = parse_field(id, n, "quay id")?;
    let capacity: u32 = parse_field(capacity, n, "quay capacity")?;
    let mut quay = match class {
        "ContainerQuay" => Quay::container(id, capacity),
        "BulkQuay" => Quay::bulk(id, capacity),
        other => return Err(bad(n, format!("unknown quay kind {other:?}"))),
    };
    if occupant != "None" {
        quay.dock(parse_field::<ShipId>(occupant, n, "occupant IMO number")?);
    }
    Ok(quay)
}

fn decode_movement(line: &str, n: usize) -> OutputResult<Movement> {
    match line.split(':').collect::<Vec<_>>().as_slice() {
        ["ShipMovement", tick, dir, imo] => Ok(Movement::ship(
            Tick(parse_field(tick, n, "movement tick")?),
            parse_field::<MovementDirection>(dir, n, "direction")?,
            parse_field::<ShipId>(imo, n, "IMO number")?,
        )),
        ["CargoMovement", tick, dir, count, ids] => {
            let cargo = parse_counted_list::<CargoId>(count, ids, n, "cargo")?;
            if cargo.is_empty() {
                return Err(bad(n, "cargo movement lists no cargo"));
            }
            Ok(Movement::cargo(
                Tick(parse_field(tick, n, "movement tick")?),
                parse_field::<MovementDirection>(dir, n, "direction")?,
                cargo,
            ))
        }
        _ => Err(bad(n, "expected a ShipMovement or CargoMovement record")),
    }
}
