//! lobby: a two-lift bank serving a ten-floor building.
//!
//! Plays a short scripted morning (one call up, one call down, one panel
//! press) on top of seeded random hall-call traffic, writes CSV snapshots to
//! `output/lobby/` and the final state as JSON.
//!
//! ```text
//! cargo run -p lobby                    # built-in script
//! cargo run -p lobby -- my_script.csv   # script from a file
//! RUST_LOG=lift_sim=debug cargo run -p lobby
//! ```

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use lift_car::Lift;
use lift_core::{FloorRange, SimConfig, Tick};
use lift_output::{CsvWriter, OutputWriter, SimOutputObserver};
use lift_schedule::{TrafficGenerator, load_script_csv, load_script_reader};
use lift_sim::{SimObserver, SystemBuilder, SystemSnapshot, TickSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                  u64 = 42;
const TOTAL_TICKS:           u64 = 120;
const TRAFFIC_TICKS:         u64 = 90;   // no new calls in the last 30 ticks
const CALL_PROBABILITY:      f64 = 0.12;
const OUTPUT_INTERVAL_TICKS: u64 = 1;
const OUTPUT_DIR:            &str = "output/lobby";

// ── Script CSV ────────────────────────────────────────────────────────────────

const SCRIPT_CSV: &str = "\
tick,kind,lift,floor,direction\n\
0,call,,5,up\n\
8,call,,2,down\n\
16,panel,A,5,\n\
";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:     SimOutputObserver<W>,
    assigned:  usize,
    fulfilled: usize,
    snapshots: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, assigned: 0, fulfilled: 0, snapshots: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_assigned(&mut self, _tick: Tick, _call: lift_core::CallId, _lift: &str) {
        self.assigned += 1;
    }

    fn on_fulfilled(&mut self, _tick: Tick, _call: lift_core::CallId, _lift: &str) {
        self.fulfilled += 1;
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.inner.on_tick_end(summary);
    }

    fn on_snapshot(&mut self, snapshot: &SystemSnapshot) {
        self.snapshots += 1;
        self.inner.on_snapshot(snapshot);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    // 1. Script: from the command line, or the built-in one.
    let mut script = match std::env::args().nth(1) {
        Some(path) => load_script_csv(Path::new(&path))?,
        None       => load_script_reader(Cursor::new(SCRIPT_CSV))?,
    };
    info!(events = script.len(), "script loaded");

    // 2. Random traffic on top.
    let floors = FloorRange::from_floors(0..=9)?;
    TrafficGenerator::new(floors, CALL_PROBABILITY, SEED)?
        .fill(&mut script, Tick::ZERO, TRAFFIC_TICKS);
    info!(events = script.len(), ticks = TRAFFIC_TICKS, "traffic generated");

    // 3. Build the bank.
    let config = SimConfig {
        total_ticks:           TOTAL_TICKS,
        seed:                  SEED,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
    };
    let mut system = SystemBuilder::new()
        .floors(floors.iter())
        .lift(Lift::new("A", 4).with_requests([3, 7]))
        .lift(Lift::new("B", 4).with_requests([4, 8]))
        .script(script)
        .config(config)
        .build()?;

    // 4. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    system.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "output error");
    }

    // 6. Final state.
    let snapshot = system.snapshot();
    let json_path = Path::new(OUTPUT_DIR).join("final_state.json");
    std::fs::write(&json_path, serde_json::to_string_pretty(&snapshot)?)?;

    info!(
        ticks     = TOTAL_TICKS,
        assigned  = obs.assigned,
        fulfilled = obs.fulfilled,
        pending   = snapshot.calls.len(),
        snapshots = obs.snapshots,
        elapsed_s = elapsed.as_secs_f64(),
        "simulation complete",
    );

    println!("{:<6} {:<6} {:<6} {:<12} {:<16}", "Lift", "Floor", "Doors", "State", "Requests");
    println!("{}", "-".repeat(48));
    for lift in &snapshot.lifts {
        println!(
            "{:<6} {:<6} {:<6} {:<12} {:<16}",
            lift.id,
            lift.floor,
            if lift.doors_open { "open" } else { "shut" },
            lift.state.to_string(),
            format!("{:?}", lift.requests),
        );
    }
    println!("Final state written to {}", json_path.display());

    Ok(())
}
