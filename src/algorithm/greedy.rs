//! Greedy selection by score density.
//!
//! The fractional-knapsack rule applied to whole songs: highest score per
//! minute first, skip anything that no longer fits and keep looking.
//! O(n log n), no optimality guarantee.

use super::{is_degenerate_budget, Selection, Selector};
use crate::song::{Preferences, Song};
use std::cmp::Ordering;

/// [`Selector`] wrapper around [`select`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySelector;

impl Selector for GreedySelector {
    fn select(&self, songs: &[Song], target_duration: f64, preferences: &Preferences) -> Selection {
        select(songs, target_duration, preferences)
    }
}

/// Score per minute. Zero-length songs get 0 instead of a division by zero.
#[inline]
#[must_use]
pub fn efficiency(score: u32, duration: f64) -> f64 {
    if duration > 0.0 {
        f64::from(score) / duration
    } else {
        0.0
    }
}

/// Fills `target_duration` with the densest songs first.
///
/// Songs come back in the order they were accepted, not catalog order.
/// Equal efficiencies are ranked by score, then by catalog order (the sort
/// is stable), so a zero-length favourite still goes ahead of songs that
/// score nothing.
#[must_use]
pub fn select(songs: &[Song], target_duration: f64, preferences: &Preferences) -> Selection {
    if is_degenerate_budget(target_duration) {
        return Selection::empty();
    }

    let mut ranked: Vec<(usize, u32, f64)> = songs
        .iter()
        .enumerate()
        .map(|(i, song)| {
            let score = preferences.score(song);
            (i, score, efficiency(score, song.duration))
        })
        .collect();

    // `sort_by` is stable, which is what keeps full ties in catalog order.
    ranked.sort_by(|(_, score_a, a), (_, score_b, b)| {
        b.partial_cmp(a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| score_b.cmp(score_a))
    });

    let mut picked = Vec::new();
    let mut total_duration = 0.0;
    let mut total_score = 0;

    for (i, score, _) in ranked {
        let duration = songs[i].duration;
        if total_duration + duration <= target_duration {
            picked.push(i);
            total_duration += duration;
            total_score += score;
        } else {
            log::trace!("Greedy skipped `{}' ({} min)", songs[i].title, duration);
        }
    }

    Selection::from_indices(songs, &picked, total_duration, total_score)
}
