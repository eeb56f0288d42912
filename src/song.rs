use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One catalog entry.
///
/// Songs carry no id: identity is the position inside the catalog, and every
/// selector keeps that order wherever it has to break a tie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub genre: String,
    /// Minutes. One decimal is meaningful; the DP selector truncates anything
    /// finer.
    pub duration: f64,
}

impl Song {
    #[must_use]
    pub fn new(title: &str, artist: &str, genre: &str, duration: f64) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            genre: genre.to_string(),
            duration,
        }
    }
}

/// What the listener likes. Both sets match exactly and case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub genres: HashSet<String>,
    pub artists: HashSet<String>,
}

impl Preferences {
    #[must_use]
    pub fn new<G, A>(genres: G, artists: A) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            genres: genres.into_iter().map(Into::into).collect(),
            artists: artists.into_iter().map(Into::into).collect(),
        }
    }

    /// Shorthand for [`preference_score`] with these two sets.
    #[must_use]
    pub fn score(&self, song: &Song) -> u32 {
        preference_score(song, &self.genres, &self.artists)
    }
}

/// Scores a song against the listener's preferences.
///
/// +1 when the genre is preferred, +1 when the artist is preferred, so the
/// result is always 0, 1 or 2.
#[must_use]
pub fn preference_score(
    song: &Song,
    preferred_genres: &HashSet<String>,
    preferred_artists: &HashSet<String>,
) -> u32 {
    let score = u32::from(preferred_genres.contains(&song.genre))
        + u32::from(preferred_artists.contains(&song.artist));

    log::trace!("Scored `{}' by `{}': {}", song.title, song.artist, score);
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> Preferences {
        Preferences::new(["Rock", "Pop"], ["Queen", "Ed Sheeran"])
    }

    #[test]
    fn test_score_counts_genre_and_artist() {
        let prefs = prefs();

        assert_eq!(prefs.score(&Song::new("A", "Queen", "Rock", 4.0)), 2);
        assert_eq!(prefs.score(&Song::new("B", "X", "Jazz", 5.0)), 0);
        assert_eq!(prefs.score(&Song::new("C", "Ed Sheeran", "Jazz", 3.0)), 1);
        assert_eq!(prefs.score(&Song::new("D", "Nobody", "Pop", 3.0)), 1);
    }

    #[test]
    fn test_score_is_case_sensitive() {
        let prefs = prefs();
        let song = Song::new("Lower", "queen", "rock", 3.0);

        assert_eq!(prefs.score(&song), 0, "Matching must be exact");
    }

    #[test]
    fn test_score_range() {
        let prefs = prefs();
        let artists = ["Queen", "Ed Sheeran", "X", ""];
        let genres = ["Rock", "Pop", "Jazz", ""];

        for artist in artists {
            for genre in genres {
                let score = prefs.score(&Song::new("t", artist, genre, 1.0));
                assert!(score <= 2, "Score out of range for {artist}/{genre}");
            }
        }
    }

    #[test]
    fn test_free_function_matches_method() {
        let prefs = prefs();
        let song = Song::new("A", "Queen", "Pop", 2.5);

        assert_eq!(
            preference_score(&song, &prefs.genres, &prefs.artists),
            prefs.score(&song)
        );
    }

    #[test]
    fn test_empty_preferences_score_zero() {
        let prefs = Preferences::default();
        assert_eq!(prefs.score(&Song::new("A", "Queen", "Rock", 4.0)), 0);
    }
}
