//! evac-analysis — summary report and figures for a table of evacuation runs.
//!
//! Reads the simulator's results CSV, prints survival statistics, and writes
//! an overview and a detailed six-panel PNG.  Paths and resolution come from
//! the JSON file named by `EVAC_ANALYSIS_CONFIG`, or the built-in defaults.
//!
//! Logging goes to stderr and honours `RUST_LOG`; the report goes to stdout.

mod config;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use ev_core::{derive_metrics, load_runs_csv};
use ev_plot::{DetailedData, FigureContext, OverviewData, ensure_writable, render_detailed, render_overview};
use ev_report::{Report, closing_banner, saved_line};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,evac_analysis=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let config = config::load()?;

    // ── Compute ───────────────────────────────────────────────────────────────
    // Everything fallible except the PNG encoding runs before the first line
    // of output.

    let table = derive_metrics(load_runs_csv(&config.input)?);
    let report = Report::build(&table)?;
    let overview = OverviewData::build(&table)?;
    let detailed = DetailedData::build(&table)?;
    ensure_writable(&config.overview_output)?;
    ensure_writable(&config.detailed_output)?;
    info!(runs = table.len(), "statistics ready");

    // ── Report ────────────────────────────────────────────────────────────────

    println!("{report}");
    println!();

    // ── Figures ───────────────────────────────────────────────────────────────

    render_overview(&overview, &FigureContext::overview(config.dpi), &config.overview_output)?;
    render_detailed(&detailed, &FigureContext::detailed(config.dpi), &config.detailed_output)?;

    println!("{}", saved_line(&config.overview_output));
    println!("{}", saved_line(&config.detailed_output));
    println!();
    println!("{}", closing_banner());
    Ok(())
}
