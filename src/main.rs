//! # Tide Predictor Application Entry Point
//!
//! This binary coordinates the prediction engine for terminal use: it loads
//! the runtime configuration and station record, samples a prediction window
//! centered on the current time, refines the high/low waters, and renders an
//! ASCII chart plus a tide table to stdout.

// Test modules
#[cfg(test)]
mod tests;

use std::env;

use anyhow::Context;
use chrono::{Duration, Utc};
use tide_predict_lib::{config::Config, extrema, renderer, Station, TidePredictor};

/// Resolve the station record from a CLI flag, the config file, or the
/// built-in example constants, in that order.
fn load_station(station_arg: Option<String>, config: &Config) -> anyhow::Result<Station> {
    let path = station_arg.or_else(|| config.station.file.clone());
    match path {
        Some(path) => Station::from_json_file(&path)
            .with_context(|| format!("loading station file {}", path)),
        None => {
            let station = Station::example();
            eprintln!(
                "Info: no station file configured, using built-in constants for {}",
                station.name
            );
            Ok(station)
        }
    }
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let table_only = args.iter().any(|arg| arg == "--table");
    let chart_only = args.iter().any(|arg| arg == "--chart");
    let station_arg = args
        .windows(2)
        .find(|pair| pair[0] == "--station")
        .map(|pair| pair[1].clone());

    let config = Config::load();
    let station = load_station(station_arg, &config)?;
    let predictor = TidePredictor::new(&station);

    if !predictor.unresolved().is_empty() {
        eprintln!(
            "Warning: {} constituent(s) excluded; predictions use {} of {} constants",
            predictor.unresolved().len(),
            predictor.constituent_count(),
            station.constituents.len()
        );
    }

    // Sample a window centered on the current instant
    let now = Utc::now();
    let half_window = Duration::hours(config.prediction.window_hours.max(2) / 2);
    let start = now - half_window;
    let end = now + half_window;

    let series = predictor
        .collect_series(start, end, config.prediction.interval_minutes)
        .context("sampling prediction series")?;

    if !table_only {
        println!(
            "Tide prediction for {} ({} constituents)",
            station.name,
            predictor.constituent_count()
        );
        renderer::draw_ascii(&series, now);
        println!();
    }

    if !chart_only {
        let extremes = extrema::find_extremes(&predictor, &series);
        renderer::print_tide_table(&station.name, &extremes);
    }

    Ok(())
}
