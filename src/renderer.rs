//! # Terminal Rendering
//!
//! ASCII rendering of predicted tide series and tide tables for the CLI.
//! The chart plots one column per sample with a labeled height axis and a
//! marker at the current instant; the table lists refined high/low waters.
//! Everything here is presentation glue over the prediction engine and
//! writes to stdout.

use chrono::{DateTime, Utc};

use crate::extrema::{Extreme, ExtremeKind};
use crate::TidePoint;

/// Chart rows between the minimum and maximum height
const CHART_HEIGHT: usize = 15;
/// Characters reserved on the left for height labels plus the axis line
const Y_AXIS_WIDTH: usize = 8;
/// Label every n-th chart row
const LABEL_EVERY: usize = 3;

/// Format a height in meters with an explicit sign, e.g. "+1.82 m".
pub fn format_height(height: f64) -> String {
    if height >= 0.0 {
        format!("+{:.2} m", height)
    } else {
        format!("{:.2} m", height)
    }
}

/// Render a tide series as an ASCII chart.
///
/// One column per sample; the column closest to `now` is marked with `X`,
/// all other samples with `•`. Series shorter than two points are skipped.
pub fn draw_ascii(series: &[TidePoint], now: DateTime<Utc>) {
    if series.len() < 2 {
        return;
    }

    let (min_height, max_height) = series
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), point| {
            (min.min(point.height), max.max(point.height))
        });
    // Keep a sensible scale when the tide is nearly flat.
    let range = (max_height - min_height).max(0.2);

    let height_to_row = |height: f64| {
        let normalized = (height - min_height) / range;
        CHART_HEIGHT - 1 - (normalized * (CHART_HEIGHT - 1) as f64).round() as usize
    };

    let columns = series.len();
    let mut grid = vec![vec![' '; Y_AXIS_WIDTH + columns]; CHART_HEIGHT];

    // Height labels and axis line
    for (row, grid_row) in grid.iter_mut().enumerate() {
        if row % LABEL_EVERY == 0 {
            let value = max_height - range * row as f64 / (CHART_HEIGHT - 1) as f64;
            let label = format!("{:>6.2}", value);
            for (i, ch) in label.chars().enumerate().take(Y_AXIS_WIDTH - 2) {
                grid_row[i] = ch;
            }
        }
        grid_row[Y_AXIS_WIDTH - 1] = '│';
    }

    // Plot the samples, marking the column nearest to "now"
    let now_column = series
        .iter()
        .enumerate()
        .min_by_key(|(_, point)| (point.time - now).num_seconds().abs())
        .map(|(i, _)| i)
        .unwrap_or(0);

    for (column, point) in series.iter().enumerate() {
        let row = height_to_row(point.height);
        grid[row][Y_AXIS_WIDTH + column] = if column == now_column { 'X' } else { '•' };
    }

    for row in grid {
        println!("{}", row.into_iter().collect::<String>());
    }

    // Time ruler below the chart
    let padding = " ".repeat(Y_AXIS_WIDTH);
    let ruler: String = (0..columns)
        .map(|i| if i % 6 == 0 { '|' } else { ' ' })
        .collect();
    println!("{}{}", padding, ruler);

    let start_label = series.first().unwrap().time.format("%H:%M").to_string();
    let end_label = series.last().unwrap().time.format("%H:%M").to_string();
    let middle_width = columns.saturating_sub(start_label.len() + end_label.len());
    println!(
        "{}{}{:>width$}",
        padding,
        start_label,
        end_label,
        width = middle_width + end_label.len()
    );
}

/// Print a table of refined high/low waters.
pub fn print_tide_table(station_name: &str, extremes: &[Extreme]) {
    println!("High and low water, {}", station_name);
    if extremes.is_empty() {
        println!("  (no turning points in the requested window)");
        return;
    }
    for extreme in extremes {
        let label = match extreme.kind {
            ExtremeKind::High => "HIGH",
            ExtremeKind::Low => "LOW ",
        };
        println!(
            "  {}  {}  {:>8}",
            label,
            extreme.time.format("%Y-%m-%d %H:%M UTC"),
            format_height(extreme.height)
        );
    }
}
