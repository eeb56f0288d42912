//! # playlist-bench
//!
//! Builds playlists that fit a duration budget while maximizing a listener
//! preference score, and compares three ways of doing it: greedy, dynamic
//! programming and divide & conquer.
//!
//! ## Usage
//!
//! ```bash
//! # Make a catalog to experiment with
//! playlist-bench generate songs.csv --count 200
//!
//! # One algorithm, default sizes 10, 20, 30 and a 30 minute budget
//! playlist-bench run greedy --catalog songs.csv
//!
//! # All three side by side, with a chart
//! playlist-bench compare --catalog songs.csv --sizes 50,100,200 --chart out.svg
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::info;
use playlist_bench::algorithm::Algorithm;
use playlist_bench::config::{ExperimentConfig, Overrides};
use playlist_bench::experiment::{self, ExperimentRun};
use playlist_bench::song::Preferences;
use playlist_bench::{catalog, chart, cli, completion, report};
use std::path::Path;

/// Resolves configuration for an experiment command: file or defaults, then
/// command-line overrides.
fn resolve_config(args: &cli::ExperimentArgs) -> Result<ExperimentConfig> {
    let config = ExperimentConfig::load(args.config.as_deref())?.apply_overrides(args.overrides());
    config.validate()?;
    Ok(config)
}

/// Writes the optional JSON export and chart.
fn write_outputs(args: &cli::ExperimentArgs, runs: &[ExperimentRun]) -> Result<()> {
    if let Some(path) = &args.json {
        report::write_json(path, runs)?;
    }
    if let Some(path) = &args.chart {
        chart::render_chart(path, runs)?;
    }
    Ok(())
}

fn print_scores(catalog_path: &Path, prefs: &Preferences) -> Result<()> {
    let songs = catalog::load_catalog(catalog_path)?;
    for (i, song) in songs.iter().enumerate() {
        println!(
            "{:>4}. [{}] {} - {} ({}, {:.1}m)",
            i + 1,
            prefs.score(song),
            song.title,
            song.artist,
            song.genre,
            song.duration
        );
    }
    Ok(())
}

/// Main entry point.
///
/// Logging is controlled via `RUST_LOG`:
/// - `RUST_LOG=debug playlist-bench compare -c songs.csv` - per-run timings
/// - `RUST_LOG=playlist_bench::algorithm=trace ...` - selector decisions
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    match args.command {
        cli::Command::Run { algorithm, experiment: inputs } => {
            let config = resolve_config(&inputs)?;
            let songs = catalog::load_catalog(&inputs.catalog)?;
            let algorithm: Algorithm = algorithm.into();

            info!("Running {algorithm} over sizes {:?}", config.dataset_sizes);
            let run = experiment::run_sizes(
                &songs,
                &config.dataset_sizes,
                algorithm,
                &config.preferences(),
                config.target_duration,
            );

            report::print_run(&run);
            write_outputs(&inputs, std::slice::from_ref(&run))?;
        }
        cli::Command::Compare { experiment: inputs, verbose } => {
            let config = resolve_config(&inputs)?;
            let songs = catalog::load_catalog(&inputs.catalog)?;

            info!("Comparing all algorithms over sizes {:?}", config.dataset_sizes);
            let runs = experiment::run_comparison(
                &songs,
                &config.dataset_sizes,
                &config.preferences(),
                config.target_duration,
            );

            if verbose {
                for run in &runs {
                    report::print_run(run);
                    println!();
                }
            }
            report::print_comparison(&runs);
            write_outputs(&inputs, &runs)?;
        }
        cli::Command::Scores { catalog, config, genres, artists } => {
            let config = ExperimentConfig::load(config.as_deref())?.apply_overrides(Overrides {
                preferred_genres: genres,
                preferred_artists: artists,
                ..Default::default()
            });
            print_scores(&catalog, &config.preferences())?;
        }
        cli::Command::Generate { output, count, seed } => {
            info!("Generating {count} songs with seed {seed}");
            let songs = catalog::generate_catalog(count, seed);
            catalog::save_catalog(&output, &songs)?;
            println!("Wrote {} songs to {}", songs.len(), output.display());
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(shell), &mut cmd);
        }
    }

    Ok(())
}
