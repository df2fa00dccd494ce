// Copyright (c) 2026 VoltPlan Developers
//
// This file is part of VoltPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;
use voltplan_core::plan_schedule;
use voltplan_types::PriceSample;

#[derive(Parser)]
#[command(name = "voltplan")]
#[command(about = "Plan cheapest on/off intervals from a price forecast", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "voltplan.toml")]
    config: PathBuf,

    /// Path to the price series (.csv with a start,price header, or a
    /// .json array of {start, price} objects)
    #[arg(short, long)]
    prices: PathBuf,

    /// Emit the plan as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize tracing with env filter support
    // Respects RUST_LOG environment variable
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber")?;

    let cli = Cli::parse();
    let app_config = config::AppConfig::load(&cli.config)?;
    let plan_config = app_config.to_plan_config()?;

    let samples = read_prices(&cli.prices)?;
    info!(
        "Planning {} samples: window {}-{}, {}h on, strategy {}, cap {:?}, tz {}",
        samples.len(),
        plan_config.window.from_hour,
        plan_config.window.to_hour,
        plan_config.on_hours,
        if plan_config.contiguous {
            "contiguous-block"
        } else {
            "cheapest-intervals"
        },
        plan_config.max_price,
        plan_config.timezone
    );

    let schedule = plan_schedule(&samples, &plan_config)?;
    info!(
        "{} of {} intervals on ({} switch events)",
        schedule.count_on(),
        schedule.entries.len(),
        schedule.events().len()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
    } else {
        print_table(&schedule);
    }
    Ok(())
}

fn read_prices(path: &Path) -> Result<Vec<PriceSample>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    match extension {
        "csv" => read_csv_prices(path),
        "json" => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read price file {}", path.display()))?;
            let samples: Vec<PriceSample> = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse price file {}", path.display()))?;
            Ok(samples)
        }
        _ => bail!(
            "Unsupported price file extension '{extension}' ({})",
            path.display()
        ),
    }
}

fn read_csv_prices(path: &Path) -> Result<Vec<PriceSample>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open price file {}", path.display()))?;
    let mut samples = Vec::new();
    for (line, record) in reader.deserialize::<PriceSample>().enumerate() {
        let sample =
            record.with_context(|| format!("Invalid price record on line {}", line + 2))?;
        samples.push(sample);
    }
    Ok(samples)
}

fn print_table(schedule: &voltplan_types::Plan) {
    println!("{:<25} {:>10}  state", "start", "price");
    for entry in &schedule.entries {
        println!(
            "{:<25} {:>10.4}  {}",
            entry.start.to_rfc3339(),
            entry.price,
            if entry.on { "ON" } else { "off" }
        );
    }
    println!();
    println!("Switch events:");
    for event in schedule.events() {
        println!(
            "  {} -> {}",
            event.time.to_rfc3339(),
            if event.on { "ON" } else { "off" }
        );
    }
}
