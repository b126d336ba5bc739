//! tower: a 26-floor office building, 100 working days under each dispatch
//! policy.
//!
//! ```text
//! cargo run --release -p tower [-- arrival_table.csv]
//! ```
//!
//! Without an argument the built-in office-day arrival table is used.
//! Per-day metrics go to `output/tower/<mode>/day_metrics.csv`; the first
//! day's full event trace goes to `events.csv` next to it.  Set `RUST_LOG`
//! (e.g. `RUST_LOG=lift_sim=debug`) for dispatch and breakdown logs.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_core::{DispatchMode, SimConfig};
use lift_output::{CsvWriter, SimOutputObserver, Summary};
use lift_schedule::{ArrivalTable, HourlyArrivals, load_table_csv};
use lift_sim::{SimBuilder, run_days};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:     u64 = 42;
const SIM_DAYS: u32 = 100;
const OUT_DIR:  &str = "output/tower";

// ── Helpers ───────────────────────────────────────────────────────────────────

fn arrival_table() -> Result<ArrivalTable> {
    match std::env::args().nth(1) {
        Some(path) => load_table_csv(Path::new(&path))
            .with_context(|| format!("loading arrival table from {path}")),
        None => Ok(ArrivalTable::default()),
    }
}

/// Run every day for one policy, write its CSV files, and return the summary.
fn run_mode(mode: DispatchMode, table: &ArrivalTable) -> Result<Summary> {
    let config = SimConfig { seed: SEED, ..SimConfig::default() }.with_mode(mode);
    let dir: PathBuf = Path::new(OUT_DIR).join(mode.as_str());
    let mut obs = SimOutputObserver::new(CsvWriter::new(&dir)?);

    // Day 0 once more with the event trace attached; it replays exactly.
    let mut first = SimBuilder::new(config.clone(), HourlyArrivals::new(table.clone())?).build()?;
    obs.start_day(0);
    first.run(&mut obs)?;

    let t0 = Instant::now();
    let days = run_days(&config, SIM_DAYS, |_| HourlyArrivals::new(table.clone()))?;
    info!(mode = mode.as_str(), days = days.len(), secs = t0.elapsed().as_secs_f64(), "run complete");

    for day in days.iter().skip(1) {
        obs.record_day(day);
    }
    obs.finish();
    if let Some(e) = obs.take_error() {
        eprintln!("output error ({}): {e}", dir.display());
    }

    Ok(Summary::from_days(&days))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("=== tower: rust_lift elevator simulator ===");
    println!("Floors: 26 (0 + 1–15 low, 16–25 high)  |  Cars: 4  |  Days: {SIM_DAYS}  |  Seed: {SEED}");
    println!();

    let table = arrival_table()?;
    for band in table.bands() {
        println!(
            "  {:02}:00–{:02}:00  mean gap {:>5.0} s  from ground {:.2}  to ground {:.2}",
            band.start_hour, band.end_hour, band.mean_gap_secs, band.from_ground, band.to_ground,
        );
    }
    println!();

    for mode in [DispatchMode::FreeRunning, DispatchMode::OnDemand] {
        let t0 = Instant::now();
        let summary = run_mode(mode, &table)?;
        println!("{summary}");
        println!("  ({:.2} s, output in {OUT_DIR}/{})", t0.elapsed().as_secs_f64(), mode.as_str());
        println!();
    }

    Ok(())
}
