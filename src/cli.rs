use crate::{config::Config, gateways, report};
use anyhow::Result;
use clap::Parser;
use hubfee_boundary::Report;
use hubfee_core::{
    entities::districts_from_zones,
    usecases::{estimate_delivery_fees, BatchOutcome, BatchParams, GeocoderParams, Progress},
};
use hubfee_gateways::rate_limit::FixedInterval;
use std::{
    io::{self, Write},
    path::PathBuf,
};

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Estimate delivery distances and fees from the hub to all districts"
)]
pub struct Args {
    /// Configuration file (default: hubfee.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON report file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    let output_path = args.output.unwrap_or_else(|| cfg.output.path.clone());

    // Lookups are blocking and strictly sequential.
    let BatchOutcome { estimates, failed } =
        tokio::task::spawn_blocking(move || run_batch(cfg)).await??;

    if !failed.is_empty() {
        println!("\nFailed to geocode: {}", failed.join(", "));
    }

    let report: Report = estimates.iter().collect();
    report::write_json_report(&output_path, &report)?;
    println!("\nWritten to {}", output_path.display());
    Ok(())
}

fn batch_params(cfg: &Config) -> BatchParams {
    let geocoder = GeocoderParams {
        overrides: cfg.geocoding.overrides.clone(),
        fallback_queries: cfg.geocoding.fallback_queries.clone(),
        query_suffix: cfg.geocoding.query_suffix.clone(),
    };
    BatchParams {
        hub: cfg.hub,
        road_factor: cfg.road_factor,
        fee_schedule: cfg.fee_schedule.clone(),
        geocoder,
    }
}

fn run_batch(cfg: Config) -> Result<BatchOutcome> {
    let params = batch_params(&cfg);
    let districts = districts_from_zones(&cfg.zones);
    let geo_gw = gateways::geocoding_gateway(cfg.geocoding.gateway)?;
    let mut rate_limiter = FixedInterval::new(cfg.rate_limit.delay);
    let outcome = estimate_delivery_fees(
        &geo_gw,
        &mut rate_limiter,
        &params,
        &districts,
        print_progress,
    )?;
    Ok(outcome)
}

fn print_progress(progress: Progress<'_>) {
    match progress {
        Progress::Locating {
            index,
            total,
            district,
        } => {
            print!("[{index}/{total}] {}... ", district.name);
            // The result follows once the lookup has finished.
            let _ = io::stdout().flush();
        }
        Progress::Estimated { estimate, .. } => match estimate.km {
            Some(km) => println!("{km} km"),
            None => println!("FAILED"),
        },
    }
}
