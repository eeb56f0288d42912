//! Divide-and-conquer selection.
//!
//! Halve the catalog, solve each half against the *whole* budget, then keep
//! the best of three candidates: left alone, right alone, or both halves
//! concatenated when they fit together. Halves never share the budget and
//! interleavings are never tried, so this is a fast approximation that can
//! miss subsets an exhaustive search would find.

use super::{is_degenerate_budget, Selection, Selector};
use crate::song::{Preferences, Song};

/// [`Selector`] wrapper around [`select`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DivideConquerSelector;

impl Selector for DivideConquerSelector {
    fn select(&self, songs: &[Song], target_duration: f64, preferences: &Preferences) -> Selection {
        select(songs, target_duration, preferences)
    }
}

/// Partial result over catalog positions.
#[derive(Debug, Clone, Default)]
struct Partial {
    picks: Vec<usize>,
    duration: f64,
    score: u32,
}

/// Runs the recursive split over the whole catalog.
///
/// Songs come back in catalog order because merges always put the left half
/// first.
#[must_use]
pub fn select(songs: &[Song], target_duration: f64, preferences: &Preferences) -> Selection {
    if is_degenerate_budget(target_duration) {
        return Selection::empty();
    }

    let best = solve(songs, 0, songs.len(), target_duration, preferences);
    Selection::from_indices(songs, &best.picks, best.duration, best.score)
}

/// Solves `songs[start..end]`.
fn solve(songs: &[Song], start: usize, end: usize, target: f64, preferences: &Preferences) -> Partial {
    match end - start {
        0 => Partial::default(),
        1 => {
            let song = &songs[start];
            if song.duration <= target {
                Partial {
                    picks: vec![start],
                    duration: song.duration,
                    score: preferences.score(song),
                }
            } else {
                Partial::default()
            }
        }
        len => {
            let mid = start + len / 2;
            let left = solve(songs, start, mid, target, preferences);
            let right = solve(songs, mid, end, target, preferences);
            combine(left, right, target)
        }
    }
}

/// Best of left, right, left + right. Only a strictly higher score displaces
/// an earlier candidate.
fn combine(left: Partial, right: Partial, target: f64) -> Partial {
    let combined_duration = left.duration + right.duration;
    let combined_score = left.score + right.score;
    let both_present = !left.picks.is_empty() && !right.picks.is_empty();

    // Decide before moving either half.
    let right_wins = right.score > left.score;
    let best_score = left.score.max(right.score);

    if combined_duration <= target && combined_score > best_score && both_present {
        let mut picks = left.picks;
        picks.extend(right.picks);
        return Partial {
            picks,
            duration: combined_duration,
            score: combined_score,
        };
    }

    if right_wins {
        right
    } else {
        left
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::scenario;
    use super::*;

    fn titles(selection: &Selection) -> Vec<&str> {
        selection.songs.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_scenario() {
        let (songs, prefs) = scenario();
        let selection = select(&songs, 7.0, &prefs);

        // [A] | [B, C]: right half yields C, and A + C fits exactly.
        assert_eq!(titles(&selection), vec!["A", "C"]);
        assert_eq!(selection.total_duration, 7.0);
        assert_eq!(selection.total_score, 4);
    }

    #[test]
    fn test_single_song_base_case() {
        let prefs = Preferences::new(["Rock"], Vec::<String>::new());
        let songs = vec![Song::new("only", "x", "Rock", 3.0)];

        assert_eq!(select(&songs, 3.0, &prefs).song_count(), 1);
        assert!(select(&songs, 2.9, &prefs).is_empty());
    }

    #[test]
    fn test_left_wins_score_ties() {
        let prefs = Preferences::new(["Rock"], Vec::<String>::new());
        let songs = vec![
            Song::new("left", "x", "Rock", 4.0),
            Song::new("right", "y", "Rock", 4.0),
        ];

        // Both fit alone, not together; equal scores keep the left one.
        let selection = select(&songs, 6.0, &prefs);
        assert_eq!(titles(&selection), vec!["left"]);
    }

    #[test]
    fn test_merge_needs_strictly_better_score() {
        let prefs = Preferences::new(["Rock"], Vec::<String>::new());
        let songs = vec![
            Song::new("hit", "x", "Rock", 2.0),
            Song::new("filler", "y", "Jazz", 2.0),
        ];

        // Adding a zero-score song does not raise the score, so no merge.
        let selection = select(&songs, 10.0, &prefs);
        assert_eq!(titles(&selection), vec!["hit"]);
        assert_eq!(selection.total_duration, 2.0);
    }

    #[test]
    fn test_misses_what_an_exact_search_finds() {
        let prefs = Preferences::new(["Rock"], Vec::<String>::new());
        let songs = vec![
            Song::new("a", "x", "Rock", 5.0),
            Song::new("b", "x", "Rock", 5.0),
            Song::new("c", "x", "Rock", 1.0),
            Song::new("d", "x", "Rock", 5.0),
        ];

        // Each half merges to score 2 ([a, b] in 10 minutes, [c, d] in 6),
        // the halves overflow together, and {a, b, c} at exactly 11 minutes
        // is never considered.
        let heuristic = select(&songs, 11.0, &prefs);
        let exact = super::super::dynamic::select(&songs, 11.0, &prefs);

        assert_eq!(heuristic.total_score, 2);
        assert_eq!(exact.total_score, 3);
    }

    #[test]
    fn test_result_stays_in_catalog_order() {
        let prefs = Preferences::new(["Pop"], ["Adele"]);
        let songs = vec![
            Song::new("one", "Adele", "Pop", 1.0),
            Song::new("two", "x", "Pop", 1.0),
            Song::new("three", "Adele", "Soul", 1.0),
            Song::new("four", "y", "Pop", 1.0),
        ];

        let selection = select(&songs, 10.0, &prefs);
        assert_eq!(titles(&selection), vec!["one", "two", "three", "four"]);
        assert_eq!(selection.total_score, 5);
    }
}
