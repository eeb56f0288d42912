//! # Command-Line Interface Module
//!
//! Clap definitions for `playlist-bench`.
//!
//! ## Commands
//!
//! - `run`: Run one selection algorithm over the configured dataset sizes
//! - `compare`: Run all three algorithms on the same inputs
//! - `scores`: Show every catalog song with its preference score
//! - `generate`: Write a synthetic catalog
//! - `completion`: Print a shell completion script
//!
//! ## Examples
//!
//! ```bash
//! playlist-bench generate songs.csv --count 200
//! playlist-bench run dp --catalog songs.csv --budget 30 --sizes 10,20,30
//! playlist-bench compare --catalog songs.csv --chart comparison.svg
//! ```

use crate::algorithm::Algorithm;
use crate::config::Overrides;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Selection algorithm as named on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum AlgorithmChoice {
    /// Highest score per minute first
    Greedy,
    /// Exact 0/1 knapsack (dynamic programming)
    #[value(alias = "dynamic")]
    Dp,
    /// Recursive halving with a three-way merge
    #[value(alias = "divide")]
    Dnc,
}

impl From<AlgorithmChoice> for Algorithm {
    fn from(choice: AlgorithmChoice) -> Self {
        match choice {
            AlgorithmChoice::Greedy => Algorithm::Greedy,
            AlgorithmChoice::Dp => Algorithm::Dynamic,
            AlgorithmChoice::Dnc => Algorithm::DivideConquer,
        }
    }
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "playlist-bench")]
#[command(about = "Build duration-budgeted playlists and compare greedy, DP and divide & conquer selection")]
#[command(version)]
pub struct Args {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Inputs shared by every command that runs an experiment.
#[derive(ClapArgs, Debug, Clone)]
pub struct ExperimentArgs {
    /// Catalog file (.csv, .json, .db, .sqlite, .sqlite3)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub catalog: PathBuf,

    /// JSON config file (defaults to the platform config location)
    #[arg(long, value_hint = clap::ValueHint::FilePath, env = "PLAYLIST_BENCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Playlist budget in minutes
    #[arg(short, long)]
    pub budget: Option<f64>,

    /// Dataset sizes to run, comma separated
    #[arg(short, long, value_delimiter = ',')]
    pub sizes: Vec<usize>,

    /// Preferred genre (repeatable)
    #[arg(short, long = "genre")]
    pub genres: Vec<String>,

    /// Preferred artist (repeatable)
    #[arg(short, long = "artist")]
    pub artists: Vec<String>,

    /// Also write the results as JSON
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub json: Option<PathBuf>,

    /// Also render an SVG comparison chart
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub chart: Option<PathBuf>,
}

impl ExperimentArgs {
    /// Command-line values that override the loaded configuration.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            preferred_genres: self.genres.clone(),
            preferred_artists: self.artists.clone(),
            target_duration: self.budget,
            dataset_sizes: self.sizes.clone(),
        }
    }
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one selection algorithm
    ///
    /// For each dataset size, takes that many songs from the front of the
    /// catalog, runs the algorithm once and prints the timed result with the
    /// chosen playlist.
    Run {
        /// Algorithm to run
        algorithm: AlgorithmChoice,

        #[command(flatten)]
        experiment: ExperimentArgs,
    },

    /// Run all three algorithms on the same inputs
    ///
    /// Prints a size-by-algorithm table of score, duration, song count and
    /// execution time.
    Compare {
        #[command(flatten)]
        experiment: ExperimentArgs,

        /// Also print each algorithm's full playlist report
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show every catalog song with its preference score
    Scores {
        /// Catalog file (.csv, .json, .db, .sqlite, .sqlite3)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        catalog: PathBuf,

        /// JSON config file (defaults to the platform config location)
        #[arg(long, value_hint = clap::ValueHint::FilePath, env = "PLAYLIST_BENCH_CONFIG")]
        config: Option<PathBuf>,

        /// Preferred genre (repeatable)
        #[arg(short, long = "genre")]
        genres: Vec<String>,

        /// Preferred artist (repeatable)
        #[arg(short, long = "artist")]
        artists: Vec<String>,
    },

    /// Write a synthetic catalog
    ///
    /// The same count and seed always produce the same catalog. The output
    /// format follows the file extension.
    Generate {
        /// Output file (.csv, .json, .db, .sqlite, .sqlite3)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        output: PathBuf,

        /// Number of songs
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Generate shell completions
    ///
    /// Usage: playlist-bench completion bash > ~/.local/share/bash-completion/completions/playlist-bench
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
