// File: crates/timebar-demo/src/main.rs
// Summary: Demo loads the GDP feed, renders the bar chart to SVG/PNG, and replays one hover.

mod source;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use timebar_core::{BarChart, ChartOptions, Point, Viewport};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::source::Source;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    report(run())
}

/// Log a failed run once through tracing and map it to the process exit status.
fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("render aborted: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Accept URL / .json / .csv from CLI or fall back to the public feed
    let source = Source::from_arg(std::env::args().nth(1));
    let records = source
        .load()
        .with_context(|| format!("failed to load dataset from {source}"))?;
    info!(records = records.len(), "normalized dataset");

    let viewport = Viewport::default();
    let mut chart = BarChart::new(&records, viewport, ChartOptions::default())
        .context("failed to lay out chart")?;
    info!(
        labels = chart.labels().len(),
        bar_width = chart.scales().bar_width,
        "chart ready"
    );

    let out = PathBuf::from("target/out");
    chart.render_to_svg(out.join("timebar.svg"))?;
    chart.render_to_png(out.join("timebar.png"))?;

    // Hover the most recent bar at its middle, as a pointer would.
    if let Some(last) = chart.bars().last().copied() {
        let origin = chart.plot_origin();
        let pointer = Point::new(
            origin.x + last.x + last.width * 0.5,
            origin.y + last.y + last.height * 0.5,
        );
        let hit = chart
            .bar_at(pointer)
            .context("hit test missed the hovered bar")?;
        chart.pointer_enter(hit, pointer)?;
        info!(content = %chart.tooltip().content.replace('\n', " "), "tooltip");

        chart.render_to_svg(out.join("timebar_hover.svg"))?;
        chart.render_to_png(out.join("timebar_hover.png"))?;
        chart.pointer_leave();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_run_maps_to_failure_status() {
        assert_eq!(report(Ok(())), ExitCode::SUCCESS);
        assert_eq!(report(Err(anyhow::anyhow!("no data"))), ExitCode::FAILURE);
    }
}
