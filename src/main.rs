/*!
 * schedsim - Main Entry Point
 *
 * Usage: schedsim <config.json>
 *
 * Runs one simulation and prints its report as JSON on stdout.
 */

use miette::{IntoDiagnostic, WrapErr};
use schedsim::{init_tracing, run_config, SimulationConfig};
use tracing::info;

fn main() -> miette::Result<()> {
    init_tracing();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| miette::miette!("usage: schedsim <config.json>"))?;

    let config = SimulationConfig::load(&path)?;
    info!(
        policy = %config.policy,
        quantum = config.quantum.get(),
        processes = config.processes.len(),
        "Starting simulation"
    );

    let report = run_config(&config)?;
    info!(schedule = %report.schedule_string(), "Schedule");

    let json = serde_json::to_string_pretty(&report)
        .into_diagnostic()
        .wrap_err("failed to serialize report")?;
    println!("{}", json);

    Ok(())
}
