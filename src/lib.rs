//! Duration-budgeted playlist selection.
//!
//! Picks songs from a catalog so their total duration fits a budget while
//! the listener preference score is as high as possible, and measures how
//! three classic strategies trade quality for speed as the catalog grows.
//!
//! Core modules:
//! - [`song`] - Song record, preferences and the 0-2 preference score
//! - [`algorithm`] - Greedy, dynamic programming and divide & conquer selectors
//! - [`experiment`] - Timed runs over growing catalog prefixes
//!
//! ### Supporting Modules
//!
//! - [`catalog`] - CSV / JSON / SQLite catalogs and synthetic generation
//! - [`config`] - Preferences, budget and dataset sizes
//! - [`report`] - Console tables and JSON export
//! - [`chart`] - SVG comparison charts
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```
//! use playlist_bench::algorithm::Algorithm;
//! use playlist_bench::song::{Preferences, Song};
//!
//! let catalog = vec![
//!     Song::new("A", "Queen", "Rock", 4.0),
//!     Song::new("B", "X", "Jazz", 5.0),
//!     Song::new("C", "Ed Sheeran", "Pop", 3.0),
//! ];
//! let prefs = Preferences::new(["Rock", "Pop"], ["Queen", "Ed Sheeran"]);
//!
//! let best = Algorithm::Dynamic.select(&catalog, 7.0, &prefs);
//! assert_eq!(best.total_score, 4);
//! assert_eq!(best.total_duration, 7.0);
//! ```
//!
//! ## Algorithm Details
//!
//! ### Greedy
//! - Ranks songs by score per minute (zero-length songs rank at 0)
//! - Takes every song that still fits, in rank order
//! - O(n log n), no optimality guarantee
//!
//! ### Dynamic Programming
//! - 0/1 knapsack over tenths of a minute, durations truncated
//! - Optimal on that quantized axis; the reference for the other two
//! - O(n x capacity) time and memory
//!
//! ### Divide and Conquer
//! - Halves the catalog, solves each half against the full budget
//! - Keeps the best of left, right, or both when they fit together
//! - Fast, but can miss subsets an exact search finds
//!
//! ## Error Handling
//!
//! Selectors are infallible: a budget of zero or less, or an empty catalog,
//! gives an empty playlist. Everything that touches files returns
//! `anyhow::Result`; the catalog loader rejects negative or non-finite
//! durations before a selector ever sees them.

pub mod algorithm;
pub mod catalog;
pub mod chart;
pub mod cli;
pub mod completion;
pub mod config;
pub mod experiment;
pub mod report;
pub mod song;
