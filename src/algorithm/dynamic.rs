//! Exact selection as a 0/1 knapsack.
//!
//! Durations and the budget are quantized to whole tenths of a minute by
//! truncation, so `2.34` counts as 23 units and so does `2.3` when its f64
//! product lands just below 23. The table is `(n + 1) × (capacity + 1)` and
//! lives in one flat vector.
//!
//! This is the reference the heuristics are measured against. Memory grows
//! with `n × capacity`; callers bound either one.

use super::{is_degenerate_budget, Selection, Selector};
use crate::song::{Preferences, Song};

/// Tenths of a minute per minute.
pub const UNITS_PER_MINUTE: f64 = 10.0;

/// [`Selector`] wrapper around [`select`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicSelector;

impl Selector for DynamicSelector {
    fn select(&self, songs: &[Song], target_duration: f64, preferences: &Preferences) -> Selection {
        select(songs, target_duration, preferences)
    }
}

/// Minutes to table units, truncating. Negative and NaN inputs map to 0.
#[inline]
#[must_use]
pub fn quantize(minutes: f64) -> usize {
    // Float-to-int `as` saturates: negatives and NaN become 0.
    (minutes * UNITS_PER_MINUTE).floor() as usize
}

/// Dense score table, row `i` = first `i` songs, column `w` = capacity.
struct Table {
    width: usize,
    cells: Vec<u32>,
}

impl Table {
    fn new(rows: usize, width: usize) -> Self {
        Self {
            width,
            cells: vec![0; rows * width],
        }
    }

    #[inline]
    fn get(&self, i: usize, w: usize) -> u32 {
        self.cells[i * self.width + w]
    }

    #[inline]
    fn set(&mut self, i: usize, w: usize, value: u32) {
        self.cells[i * self.width + w] = value;
    }
}

/// Best total score that fits in `target_duration`.
///
/// The selection is returned in catalog order: backtracking finds songs from
/// the last index down, and the picks are reversed before returning.
/// `total_duration` sums the real durations, not the quantized ones.
#[must_use]
pub fn select(songs: &[Song], target_duration: f64, preferences: &Preferences) -> Selection {
    if is_degenerate_budget(target_duration) {
        return Selection::empty();
    }
    let capacity = quantize(target_duration);
    if capacity == 0 {
        return Selection::empty();
    }

    let items: Vec<(u32, usize)> = songs
        .iter()
        .map(|song| (preferences.score(song), quantize(song.duration)))
        .collect();

    let n = items.len();
    let mut table = Table::new(n + 1, capacity + 1);

    for i in 1..=n {
        let (score, units) = items[i - 1];
        for w in 0..=capacity {
            let mut best = table.get(i - 1, w);
            if units <= w {
                best = best.max(table.get(i - 1, w - units) + score);
            }
            table.set(i, w, best);
        }
    }

    let mut picked = Vec::new();
    let mut w = capacity;
    for i in (1..=n).rev() {
        if table.get(i, w) != table.get(i - 1, w) {
            picked.push(i - 1);
            w -= items[i - 1].1;
        }
    }
    picked.reverse();

    let total_duration = picked.iter().map(|&i| songs[i].duration).sum();
    let total_score = table.get(n, capacity);
    log::trace!(
        "DP filled {}x{} table, best score {}",
        n + 1,
        capacity + 1,
        total_score
    );

    Selection::from_indices(songs, &picked, total_duration, total_score)
}
