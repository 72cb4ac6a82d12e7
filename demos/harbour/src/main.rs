//! harbour — small end-to-end run of the rust_portsim port simulator.
//!
//! Generates a random fleet and its visits, runs the port for three days,
//! writes per-tick summaries to `output/harbour/tick_summaries.csv`, saves
//! the final port to `output/harbour/port.txt`, and prints what each
//! evaluator saw.
//!
//! ```text
//! cargo run -p harbour                       # default config
//! cargo run -p harbour -- config.json        # SimConfig as JSON
//! RUST_LOG=ps_sim=debug cargo run -p harbour # per-movement events
//! ```

mod traffic;

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ps_core::{QuayId, SimConfig, SimRng};
use ps_eval::{
    CargoDecompositionEvaluator, QuayOccupancyEvaluator, ShipFlagEvaluator,
    ShipThroughputEvaluator,
};
use ps_model::Quay;
use ps_output::{CsvWriter, SimOutputObserver, load_port, save_port};
use ps_schedule::load_movements_reader;
use ps_sim::{PortBuilder, SimObserver, TickSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

const SHIP_COUNT: u32 = 12;
const SIM_DAYS:   u64 = 3;
const OUTPUT_DIR: &str = "output/harbour";

// Yard clearances: cargo that leaves by road rather than by ship.
const YARD_CSV: &str = "\
tick,direction,kind,ids
720,OUTBOUND,cargo,0 1
1440,OUTBOUND,cargo,2
";

// ── Observer wrapper ──────────────────────────────────────────────────────────

/// Forwards to the CSV observer and keeps a few totals for the final report.
struct TallyObserver<W: ps_output::OutputWriter> {
    inner:          SimOutputObserver<W>,
    movements:      usize,
    ships_docked:   usize,
    cargo_unloaded: usize,
    peak_queue:     usize,
}

impl<W: ps_output::OutputWriter> TallyObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, movements: 0, ships_docked: 0, cargo_unloaded: 0, peak_queue: 0 }
    }
}

impl<W: ps_output::OutputWriter> SimObserver for TallyObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.movements += summary.movements_executed;
        self.ships_docked += summary.ships_docked;
        self.cargo_unloaded += summary.cargo_unloaded;
        self.peak_queue = self.peak_queue.max(summary.queue_len);
    }

    fn on_report(&mut self, summary: &TickSummary) {
        self.inner.on_report(summary);
    }

    fn on_sim_end(&mut self, final_tick: ps_core::Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Config: JSON file from the command line, or defaults.
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str::<SimConfig>(&text)
                .with_context(|| format!("parsing config {path}"))?
        }
        None => SimConfig { total_ticks: SIM_DAYS * 1_440, ..SimConfig::default() },
    };
    config.validate()?;

    println!("=== harbour — rust_portsim ===");
    println!(
        "Ships: {SHIP_COUNT}  |  Ticks: {}  |  Seed: {}",
        config.total_ticks, config.seed
    );
    println!();

    // 2. Traffic.
    let mut rng = SimRng::new(config.seed);
    let mut traffic_rng = rng.child(1);
    let traffic = traffic::generate(&mut traffic_rng, SHIP_COUNT, config.total_ticks)?;
    let yard = load_movements_reader(Cursor::new(YARD_CSV))?;
    println!(
        "Traffic: {} ships, {} cargo items, {} movements (+{} yard)",
        traffic.ships.len(),
        traffic.cargo.len(),
        traffic.movements.len(),
        yard.len(),
    );

    // 3. Port.
    let mut port = PortBuilder::new("Brisbane", config.clone())
        .ships(traffic.ships)
        .cargo(traffic.cargo)
        .quays((0..3).map(|i| Quay::container(QuayId(i), 50)))
        .quays((3..5).map(|i| Quay::bulk(QuayId(i), 1_000)))
        .stored_cargo(traffic.stored_cargo)
        .movements(traffic.movements)
        .movements(yard)
        .all_evaluators()
        .build()?;

    // 4. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = TallyObserver::new(SimOutputObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    port.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    let save_path = Path::new(OUTPUT_DIR).join("port.txt");
    save_port(&port, &save_path)?;
    let reloaded = load_port(&save_path, config)?;
    info!(matches = reloaded.snapshot() == port.snapshot(), "save file re-read");

    // 6. Summary.
    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), port.clock());
    println!("  tick_summaries.csv : {} rows", obs.inner.rows_written());
    println!("  movements executed : {}", obs.movements);
    println!("  ships docked       : {}", obs.ships_docked);
    println!("  cargo unloaded     : {}", obs.cargo_unloaded);
    println!("  peak queue length  : {}", obs.peak_queue);
    println!("  still waiting      : {}", port.queue().len());
    println!("  cargo in storage   : {}", port.stored_cargo().len());
    println!();

    // 7. Evaluators.
    if let Some(eval) = port.evaluator::<CargoDecompositionEvaluator>() {
        println!("Inbound cargo by class:");
        let mut classes: Vec<_> = eval.cargo_distribution().iter().collect();
        classes.sort();
        for (class, count) in classes {
            println!("  {class:<12} {count}");
        }
    }
    if let Some(eval) = port.evaluator::<ShipFlagEvaluator>() {
        println!("Arrivals by origin:");
        let mut origins: Vec<_> = eval.flag_distribution().iter().collect();
        origins.sort();
        for (origin, count) in origins {
            println!("  {origin:<12} {count}");
        }
    }
    if let Some(eval) = port.evaluator::<QuayOccupancyEvaluator>() {
        println!("Quays occupied: {} of {}", eval.quays_occupied(), eval.quay_count());
    }
    if let Some(eval) = port.evaluator::<ShipThroughputEvaluator>() {
        println!("Departures in the last hour: {}", eval.throughput_per_hour());
    }

    Ok(())
}
