//! Experiment harness.
//!
//! For each dataset size: take that many songs off the front of the catalog,
//! run one selector once, time it, and record the outcome. No warm-up, no
//! repetitions, no averaging.

use crate::algorithm::{Algorithm, Selection};
use crate::catalog;
use crate::song::{Preferences, Song};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Outcome of one timed selector run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentResult {
    /// Requested prefix length, even when the catalog is shorter.
    pub dataset_size: usize,
    pub execution_time_ms: f64,
    pub song_count: usize,
    pub total_duration: f64,
    pub total_score: u32,
    pub selected_songs: Vec<Song>,
}

impl ExperimentResult {
    fn new(dataset_size: usize, execution_time_ms: f64, selection: Selection) -> Self {
        Self {
            dataset_size,
            execution_time_ms,
            song_count: selection.song_count(),
            total_duration: selection.total_duration,
            total_score: selection.total_score,
            selected_songs: selection.songs,
        }
    }
}

/// All results of one algorithm across the requested sizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentRun {
    pub algorithm: Algorithm,
    pub target_duration: f64,
    pub results: Vec<ExperimentResult>,
}

/// Runs `algorithm` once on the first `dataset_size` songs.
#[must_use]
pub fn run_experiment(
    catalog: &[Song],
    dataset_size: usize,
    algorithm: Algorithm,
    preferences: &Preferences,
    target_duration: f64,
) -> ExperimentResult {
    let songs = catalog::prefix(catalog, dataset_size);

    let start = Instant::now();
    let selection = algorithm.select(songs, target_duration, preferences);
    let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    debug!(
        "{} on {} songs: {} selected, {:.1} min, score {} in {:.3} ms",
        algorithm.key(),
        songs.len(),
        selection.song_count(),
        selection.total_duration,
        selection.total_score,
        execution_time_ms
    );

    ExperimentResult::new(dataset_size, execution_time_ms, selection)
}

/// Runs `algorithm` over every size, in the order given.
#[must_use]
pub fn run_sizes(
    catalog: &[Song],
    sizes: &[usize],
    algorithm: Algorithm,
    preferences: &Preferences,
    target_duration: f64,
) -> ExperimentRun {
    let results = sizes
        .iter()
        .map(|&size| run_experiment(catalog, size, algorithm, preferences, target_duration))
        .collect();

    ExperimentRun {
        algorithm,
        target_duration,
        results,
    }
}

/// Runs every algorithm over the same sizes.
#[must_use]
pub fn run_comparison(
    catalog: &[Song],
    sizes: &[usize],
    preferences: &Preferences,
    target_duration: f64,
) -> Vec<ExperimentRun> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| run_sizes(catalog, sizes, algorithm, preferences, target_duration))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::test_support::{default_prefs, random_catalog, scenario};

    #[test]
    fn test_record_fields() {
        let (songs, prefs) = scenario();
        let result = run_experiment(&songs, 3, Algorithm::Dynamic, &prefs, 7.0);

        assert_eq!(result.dataset_size, 3);
        assert_eq!(result.song_count, 2);
        assert_eq!(result.total_duration, 7.0);
        assert_eq!(result.total_score, 4);
        assert_eq!(result.selected_songs.len(), result.song_count);
        assert!(result.execution_time_ms >= 0.0);
    }

    #[test]
    fn test_uses_prefix_of_catalog() {
        let (songs, prefs) = scenario();

        // Only A is visible with size 1.
        let result = run_experiment(&songs, 1, Algorithm::Greedy, &prefs, 7.0);
        assert_eq!(result.song_count, 1);
        assert_eq!(result.selected_songs[0].title, "A");
    }

    #[test]
    fn test_oversized_request_keeps_requested_size() {
        let (songs, prefs) = scenario();
        let result = run_experiment(&songs, 100, Algorithm::DivideConquer, &prefs, 7.0);

        assert_eq!(result.dataset_size, 100);
        assert_eq!(result.total_score, 4);
    }

    #[test]
    fn test_comparison_covers_every_algorithm_and_size() {
        let songs = random_catalog(5, 30);
        let runs = run_comparison(&songs, &[10, 20, 30], &default_prefs(), 30.0);

        assert_eq!(runs.len(), 3);
        for (run, algorithm) in runs.iter().zip(Algorithm::ALL) {
            assert_eq!(run.algorithm, algorithm);
            let sizes: Vec<usize> = run.results.iter().map(|r| r.dataset_size).collect();
            assert_eq!(sizes, vec![10, 20, 30]);
        }
    }

    #[test]
    fn test_result_serializes_expected_keys() {
        let (songs, prefs) = scenario();
        let result = run_experiment(&songs, 3, Algorithm::Greedy, &prefs, 7.0);
        let json = serde_json::to_value(&result).unwrap();

        for key in [
            "dataset_size",
            "execution_time_ms",
            "song_count",
            "total_duration",
            "total_score",
            "selected_songs",
        ] {
            assert!(json.get(key).is_some(), "Missing `{key}'");
        }
    }
}
