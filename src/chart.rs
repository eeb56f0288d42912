//! SVG comparison charts.
//!
//! Four bar charts in a 2x2 grid (execution time, selected songs, total
//! duration, total score), dataset size on the x axis and one bar colour per
//! algorithm.

use crate::algorithm::Algorithm;
use crate::experiment::{ExperimentResult, ExperimentRun};
use anyhow::{bail, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1200, 800);
/// Share of one x slot taken by a group of bars.
const GROUP_WIDTH: f64 = 0.8;

#[derive(Debug, Clone, Copy)]
enum Metric {
    ExecutionTime,
    SongCount,
    TotalDuration,
    TotalScore,
}

impl Metric {
    const ALL: [Metric; 4] = [
        Metric::ExecutionTime,
        Metric::SongCount,
        Metric::TotalDuration,
        Metric::TotalScore,
    ];

    fn title(self) -> &'static str {
        match self {
            Metric::ExecutionTime => "Execution Time",
            Metric::SongCount => "Selected Songs",
            Metric::TotalDuration => "Total Playlist Duration",
            Metric::TotalScore => "Total Preference Score",
        }
    }

    fn axis(self) -> &'static str {
        match self {
            Metric::ExecutionTime => "Time (ms)",
            Metric::SongCount => "Songs",
            Metric::TotalDuration => "Duration (min)",
            Metric::TotalScore => "Score",
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn value(self, result: &ExperimentResult) -> f64 {
        match self {
            Metric::ExecutionTime => result.execution_time_ms,
            Metric::SongCount => result.song_count as f64,
            Metric::TotalDuration => result.total_duration,
            Metric::TotalScore => f64::from(result.total_score),
        }
    }
}

fn algorithm_color(algorithm: Algorithm) -> RGBColor {
    match algorithm {
        Algorithm::Greedy => RGBColor(135, 206, 235),
        Algorithm::Dynamic => RGBColor(240, 128, 128),
        Algorithm::DivideConquer => RGBColor(147, 112, 219),
    }
}

/// Label for an x position: the dataset size at whole slots, blank between.
fn size_label(x: f64, sizes: &[usize]) -> String {
    let slot = x.round();
    if (x - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    sizes
        .get(slot as usize)
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Renders `runs` to an SVG file at `path`.
///
/// The x axis comes from the first run's dataset sizes; every run is
/// expected to cover the same sizes.
pub fn render_chart(path: &Path, runs: &[ExperimentRun]) -> Result<()> {
    let Some(first) = runs.first() else {
        bail!("No experiment results to plot");
    };
    let sizes: Vec<usize> = first.results.iter().map(|r| r.dataset_size).collect();
    if sizes.is_empty() {
        bail!("No dataset sizes to plot");
    }

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    for (area, metric) in root.split_evenly((2, 2)).iter().zip(Metric::ALL) {
        draw_panel(area, metric, &sizes, runs)?;
    }

    root.present()?;
    log::info!("Wrote chart to {}", path.display());
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    metric: Metric,
    sizes: &[usize],
    runs: &[ExperimentRun],
) -> Result<()> {
    let caption = match runs {
        [only] => format!("{} ({})", metric.title(), only.algorithm.name()),
        _ => metric.title().to_string(),
    };

    let y_max = runs
        .iter()
        .flat_map(|run| run.results.iter())
        .map(|result| metric.value(result))
        .fold(0.0, f64::max);
    let y_top = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let slots = sizes.len() as f64;
    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(slots - 0.5), 0f64..y_top)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Dataset Size")
        .y_desc(metric.axis())
        .x_labels(sizes.len())
        .x_label_formatter(&|x| size_label(*x, sizes))
        .draw()?;

    let bar_width = GROUP_WIDTH / runs.len() as f64;
    for (j, run) in runs.iter().enumerate() {
        let color = algorithm_color(run.algorithm);
        let offset = j as f64 * bar_width - GROUP_WIDTH / 2.0;

        chart
            .draw_series(run.results.iter().enumerate().map(|(i, result)| {
                let x0 = i as f64 + offset;
                Rectangle::new([(x0, 0.0), (x0 + bar_width, metric.value(result))], color.filled())
            }))?
            .label(run.algorithm.name())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    if runs.len() > 1 {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    Ok(())
}
