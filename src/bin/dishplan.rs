//! Plan a radio observation: telescope and source summaries, daily visibility and
//! integration time at a target SNR.
//!
//! ```text
//! dishplan --date 2024-03-01 --snr 10
//! dishplan --config my_plan.toml --date 2024-06-21 --min-altitude 15
//! RUST_LOG=debug dishplan --snr 5
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dishplan::config::PlanConfig;
use dishplan::constants::{HORIZON_ALTITUDE, LOW_ELEVATION_LIMIT};
use dishplan::planner::ObservationPlanner;

#[derive(Parser, Debug)]
#[command(author, version, about = "Radio telescope observation planner")]
struct Args {
    /// TOML plan with [telescope] and [source] tables (bundled 42-ft / B0833-45 plan if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// UTC date of the visibility profile (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,

    /// Target signal-to-noise ratio of the integration time estimate
    #[arg(long)]
    snr: Option<String>,

    /// Minimum usable altitude in degrees
    #[arg(long, default_value_t = LOW_ELEVATION_LIMIT, allow_negative_numbers = true)]
    min_altitude: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PlanConfig::from_file(path)
            .with_context(|| format!("cannot load plan {}", path.display()))?,
        None => PlanConfig::example().context("cannot load the bundled plan")?,
    };
    let planner = ObservationPlanner::from_config(&config).context("invalid plan")?;

    println!("{:#}", planner.telescope());
    println!("{}", planner.source());

    if let Some(date) = &args.date {
        let profile = planner
            .visibility(date)
            .with_context(|| format!("cannot compute visibility on '{date}'"))?;

        println!("{}", profile.table().with_min_altitude(args.min_altitude));
        println!(
            "Above the horizon: {:.1} h, above {}°: {:.1} h",
            profile.time_above(HORIZON_ALTITUDE).to_seconds() / 3600.0,
            args.min_altitude,
            profile.time_above(args.min_altitude).to_seconds() / 3600.0,
        );
    }

    if let Some(snr) = &args.snr {
        let estimate = planner
            .integration_time(snr)
            .with_context(|| format!("cannot estimate integration time for SNR '{snr}'"))?;
        println!("{estimate} ({:.2} min)", estimate.minutes());
    }

    Ok(())
}
