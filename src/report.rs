//! Console and JSON reporting of experiment results.

use crate::experiment::ExperimentRun;
use anyhow::{Context, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const RULE_WIDTH: usize = 55;

/// Per-size report for one algorithm, listing every selected song.
pub struct RunReport<'a>(pub &'a ExperimentRun);

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let run = self.0;
        let title = format!("AUTOMATIC PLAYLIST - {} ALGORITHM", run.algorithm.name().to_uppercase());
        writeln!(f, "{title}")?;
        writeln!(f, "{}", "=".repeat(title.len().max(RULE_WIDTH)))?;
        writeln!(f, "Target Duration: {:.1} min", run.target_duration)?;

        for result in &run.results {
            writeln!(f)?;
            writeln!(f, "DATASET SIZE: {} songs", result.dataset_size)?;
            writeln!(f, "Execution Time: {:.2} ms", result.execution_time_ms)?;
            writeln!(f, "Selected Songs: {}", result.song_count)?;
            writeln!(f, "Total Duration: {:.1} min", result.total_duration)?;
            writeln!(f, "Total Preference Score: {}", result.total_score)?;

            writeln!(f)?;
            writeln!(f, "Playlist:")?;
            for (i, song) in result.selected_songs.iter().enumerate() {
                writeln!(
                    f,
                    "{}. {} - {} ({}, {:.1}m)",
                    i + 1,
                    song.title,
                    song.artist,
                    song.genre,
                    song.duration
                )?;
            }
        }
        Ok(())
    }
}

/// Size-by-algorithm summary table.
pub struct ComparisonTable<'a>(pub &'a [ExperimentRun]);

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let runs = self.0;
        writeln!(
            f,
            "{:<8} {:<22} {:>7} {:>10} {:>6} {:>12}",
            "Size", "Algorithm", "Score", "Duration", "Songs", "Time (ms)"
        )?;
        writeln!(f, "{}", "-".repeat(70))?;

        let sizes: Vec<usize> = runs
            .first()
            .map(|run| run.results.iter().map(|r| r.dataset_size).collect())
            .unwrap_or_default();

        for (row, size) in sizes.iter().enumerate() {
            for run in runs {
                if let Some(result) = run.results.get(row) {
                    writeln!(
                        f,
                        "{:<8} {:<22} {:>7} {:>10.1} {:>6} {:>12.3}",
                        size,
                        run.algorithm.name(),
                        result.total_score,
                        result.total_duration,
                        result.song_count,
                        result.execution_time_ms
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[must_use]
pub fn format_run(run: &ExperimentRun) -> String {
    RunReport(run).to_string()
}

pub fn print_run(run: &ExperimentRun) {
    print!("{}", RunReport(run));
}

#[must_use]
pub fn format_comparison(runs: &[ExperimentRun]) -> String {
    ComparisonTable(runs).to_string()
}

pub fn print_comparison(runs: &[ExperimentRun]) {
    print!("{}", ComparisonTable(runs));
}

/// Exports the runs as pretty JSON.
pub fn write_json(path: &Path, runs: &[ExperimentRun]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, runs)
        .with_context(|| format!("Failed to write results to {}", path.display()))?;
    writer.flush()?;
    log::info!("Wrote results to {}", path.display());
    Ok(())
}
