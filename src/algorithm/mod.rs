//! Playlist selection algorithms.
//!
//! Three ways of filling a duration budget with the highest-scoring songs:
//!
//! - [`greedy`] - rank by score per minute, take whatever still fits
//! - [`dynamic`] - exact 0/1 knapsack over tenths of a minute
//! - [`divide`] - split the catalog in half, solve, merge three candidates
//!
//! Every selector borrows the catalog, never mutates it, and returns a fresh
//! [`Selection`]. Preferences are always passed in explicitly.

pub mod divide;
pub mod dynamic;
pub mod greedy;

use crate::song::{Preferences, Song};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Songs chosen by a selector plus their aggregate duration and score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selection {
    pub songs: Vec<Song>,
    pub total_duration: f64,
    pub total_score: u32,
}

impl Selection {
    /// Nothing selected, zero duration, zero score.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Materializes a selection from catalog positions, in the given order.
    pub(crate) fn from_indices(
        catalog: &[Song],
        indices: &[usize],
        total_duration: f64,
        total_score: u32,
    ) -> Self {
        Self {
            songs: indices.iter().map(|&i| catalog[i].clone()).collect(),
            total_duration,
            total_score,
        }
    }
}

/// Common interface of the three selectors.
pub trait Selector {
    /// Picks songs from `songs` whose durations fit in `target_duration`.
    fn select(&self, songs: &[Song], target_duration: f64, preferences: &Preferences) -> Selection;
}

/// The available selection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "greedy")]
    Greedy,
    #[serde(rename = "dp")]
    Dynamic,
    #[serde(rename = "dnc")]
    DivideConquer,
}

impl Algorithm {
    /// All strategies, in the order reports list them.
    pub const ALL: [Algorithm; 3] = [Algorithm::Greedy, Algorithm::Dynamic, Algorithm::DivideConquer];

    /// Short identifier, as accepted on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Dynamic => "dp",
            Algorithm::DivideConquer => "dnc",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Greedy => "Greedy",
            Algorithm::Dynamic => "Dynamic Programming",
            Algorithm::DivideConquer => "Divide and Conquer",
        }
    }

    #[must_use]
    pub fn selector(self) -> &'static dyn Selector {
        match self {
            Algorithm::Greedy => &greedy::GreedySelector,
            Algorithm::Dynamic => &dynamic::DynamicSelector,
            Algorithm::DivideConquer => &divide::DivideConquerSelector,
        }
    }

    /// Runs this strategy once.
    #[must_use]
    pub fn select(self, songs: &[Song], target_duration: f64, preferences: &Preferences) -> Selection {
        self.selector().select(songs, target_duration, preferences)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A budget that can hold nothing. NaN counts as degenerate too.
#[inline]
pub(crate) fn is_degenerate_budget(target_duration: f64) -> bool {
    !(target_duration > 0.0)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::song::{Preferences, Song};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    /// The three-song catalog used throughout the selector tests.
    pub fn scenario() -> (Vec<Song>, Preferences) {
        let songs = vec![
            Song::new("A", "Queen", "Rock", 4.0),
            Song::new("B", "X", "Jazz", 5.0),
            Song::new("C", "Ed Sheeran", "Pop", 3.0),
        ];
        let prefs = Preferences::new(["Rock", "Pop"], ["Queen", "Ed Sheeran"]);
        (songs, prefs)
    }

    /// Random catalog whose durations are whole half-minutes, so that
    /// quantizing to tenths is exact and all selectors see the same sizes.
    pub fn random_catalog(seed: u64, count: usize) -> Vec<Song> {
        let mut rng = StdRng::seed_from_u64(seed);
        let artists = ["Queen", "Ed Sheeran", "Michael Jackson", "Adele", "Miles Davis"];
        let genres = ["Rock", "Pop", "Jazz", "Blues", "Electronic"];

        (0..count)
            .map(|i| {
                let artist = artists.choose(&mut rng).copied().unwrap_or("Adele");
                let genre = genres.choose(&mut rng).copied().unwrap_or("Jazz");
                let halves: u32 = rng.gen_range(0..=16);
                Song::new(&format!("Song {i:03}"), artist, genre, f64::from(halves) * 0.5)
            })
            .collect()
    }

    pub fn default_prefs() -> Preferences {
        Preferences::new(["Rock", "Pop"], ["Queen", "Ed Sheeran", "Michael Jackson"])
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    const BUDGETS: [f64; 5] = [0.0, 2.5, 7.0, 15.5, 30.0];

    #[test]
    fn test_empty_catalog_everywhere() {
        let prefs = default_prefs();

        for algorithm in Algorithm::ALL {
            let selection = algorithm.select(&[], 30.0, &prefs);
            assert!(selection.is_empty(), "{algorithm} selected from nothing");
            assert_eq!(selection.total_duration, 0.0);
            assert_eq!(selection.total_score, 0);
        }
    }

    #[test]
    fn test_degenerate_budget_everywhere() {
        let (songs, prefs) = scenario();

        for algorithm in Algorithm::ALL {
            for budget in [0.0, -3.0, 0.05, f64::NAN] {
                let selection = algorithm.select(&songs, budget, &prefs);
                assert_eq!(selection, Selection::empty(), "{algorithm} with budget {budget}");
            }
        }
    }

    #[test]
    fn test_budget_invariant() {
        let prefs = default_prefs();

        for seed in 0..20 {
            let songs = random_catalog(seed, 24);
            for budget in BUDGETS {
                for algorithm in Algorithm::ALL {
                    let selection = algorithm.select(&songs, budget, &prefs);
                    assert!(
                        selection.total_duration <= budget || selection.is_empty(),
                        "{algorithm} overran budget {budget}: {}",
                        selection.total_duration
                    );
                }
            }
        }
    }

    #[test]
    fn test_dynamic_programming_is_ground_truth() {
        let prefs = default_prefs();

        for seed in 0..20 {
            let songs = random_catalog(seed, 24);
            for budget in BUDGETS {
                let optimal = Algorithm::Dynamic.select(&songs, budget, &prefs).total_score;
                let greedy = Algorithm::Greedy.select(&songs, budget, &prefs).total_score;
                let divide = Algorithm::DivideConquer.select(&songs, budget, &prefs).total_score;

                assert!(optimal >= greedy, "seed {seed}, budget {budget}: dp {optimal} < greedy {greedy}");
                assert!(optimal >= divide, "seed {seed}, budget {budget}: dp {optimal} < dnc {divide}");
            }
        }
    }

    #[test]
    fn test_selectors_are_idempotent() {
        let prefs = default_prefs();
        let songs = random_catalog(7, 30);

        for algorithm in Algorithm::ALL {
            let first = algorithm.select(&songs, 30.0, &prefs);
            let second = algorithm.select(&songs, 30.0, &prefs);
            assert_eq!(first, second, "{algorithm} is not deterministic");
        }
    }

    #[test]
    fn test_reported_score_matches_songs() {
        let prefs = default_prefs();
        let songs = random_catalog(11, 30);

        for algorithm in Algorithm::ALL {
            let selection = algorithm.select(&songs, 30.0, &prefs);
            let recomputed: u32 = selection.songs.iter().map(|s| prefs.score(s)).sum();
            let duration: f64 = selection.songs.iter().map(|s| s.duration).sum();

            assert_eq!(selection.total_score, recomputed, "{algorithm} score mismatch");
            assert!((selection.total_duration - duration).abs() < 1e-9, "{algorithm} duration mismatch");
        }
    }

    #[test]
    fn test_catalog_is_not_mutated() {
        let prefs = default_prefs();
        let songs = random_catalog(3, 16);
        let before = songs.clone();

        for algorithm in Algorithm::ALL {
            let _ = algorithm.select(&songs, 12.0, &prefs);
        }
        assert_eq!(songs, before);
    }

    #[test]
    fn test_algorithm_keys() {
        assert_eq!(Algorithm::Greedy.key(), "greedy");
        assert_eq!(Algorithm::Dynamic.key(), "dp");
        assert_eq!(Algorithm::DivideConquer.key(), "dnc");
        assert_eq!(Algorithm::Dynamic.to_string(), "Dynamic Programming");
    }
}
