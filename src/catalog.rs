//! # Catalog Module
//!
//! Reads and writes the song catalog the experiments run over. The format is
//! picked from the file extension:
//!
//! - `.csv` - header row `title,artist,genre,duration`, other columns ignored
//! - `.json` - an array of song objects
//! - `.db`, `.sqlite`, `.sqlite3` - a `songs` table, read in insertion order
//!
//! Loading validates durations so the selectors never see a negative, NaN or
//! infinite value. Order is always preserved: experiments take prefixes of
//! the catalog, and ties between songs are broken by position.

use crate::song::Song;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rusqlite::Connection;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// On-disk catalog formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Csv,
    Json,
    Sqlite,
}

impl CatalogFormat {
    /// Guesses the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "db" | "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            other => bail!(
                "Unsupported catalog format `{other}' for {}. Use .csv, .json, .db, .sqlite or .sqlite3",
                path.display()
            ),
        }
    }
}

/// Loads and validates a catalog.
///
/// # Errors
///
/// Fails if the file cannot be read, does not parse, or holds a song whose
/// duration is negative or not a finite number.
pub fn load_catalog(path: &Path) -> Result<Vec<Song>> {
    let format = CatalogFormat::from_path(path)?;
    debug!("Loading {format:?} catalog from {}", path.display());

    let songs = match format {
        CatalogFormat::Csv => read_csv(path)?,
        CatalogFormat::Json => read_json(path)?,
        CatalogFormat::Sqlite => read_sqlite(path)?,
    };

    validate(&songs).with_context(|| format!("Invalid catalog {}", path.display()))?;
    info!("Loaded {} songs from {}", songs.len(), path.display());
    Ok(songs)
}

/// Writes `songs` to `path`, replacing whatever catalog was there.
pub fn save_catalog(path: &Path, songs: &[Song]) -> Result<()> {
    match CatalogFormat::from_path(path)? {
        CatalogFormat::Csv => write_csv(path, songs)?,
        CatalogFormat::Json => write_json(path, songs)?,
        CatalogFormat::Sqlite => write_sqlite(path, songs)?,
    }
    info!("Wrote {} songs to {}", songs.len(), path.display());
    Ok(())
}

/// Rejects durations the selectors cannot handle.
pub fn validate(songs: &[Song]) -> Result<()> {
    for (i, song) in songs.iter().enumerate() {
        if !song.duration.is_finite() || song.duration < 0.0 {
            bail!(
                "Song #{} (`{}' by `{}') has invalid duration {}; durations must be non-negative minutes",
                i + 1,
                song.title,
                song.artist,
                song.duration
            );
        }
    }
    Ok(())
}

/// First `size` songs, or the whole catalog when it is shorter.
#[must_use]
pub fn prefix(catalog: &[Song], size: usize) -> &[Song] {
    &catalog[..size.min(catalog.len())]
}

fn read_csv(path: &Path) -> Result<Vec<Song>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV catalog {}", path.display()))?;

    let mut songs = Vec::new();
    for (i, record) in reader.deserialize::<Song>().enumerate() {
        // Header is line 1.
        songs.push(record.with_context(|| format!("Malformed CSV record on line {}", i + 2))?);
    }
    Ok(songs)
}

fn write_csv(path: &Path, songs: &[Song]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV catalog {}", path.display()))?;
    for song in songs {
        writer.serialize(song)?;
    }
    writer.flush()?;
    Ok(())
}

fn read_json(path: &Path) -> Result<Vec<Song>> {
    let file = File::open(path).with_context(|| format!("Failed to open JSON catalog {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Malformed JSON catalog {}", path.display()))
}

fn write_json(path: &Path, songs: &[Song]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create JSON catalog {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, songs)?;
    writer.flush()?;
    Ok(())
}

fn read_sqlite(path: &Path) -> Result<Vec<Song>> {
    if !path.exists() {
        bail!("SQLite catalog {} does not exist", path.display());
    }
    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open SQLite catalog {}", path.display()))?;

    let mut stmt = conn
        .prepare("SELECT title, artist, genre, duration FROM songs ORDER BY rowid")
        .context("Catalog database has no usable `songs` table")?;

    let song_iter = stmt
        .query_map([], |row| {
            Ok(Song {
                title: row.get(0)?,
                artist: row.get(1)?,
                genre: row.get(2)?,
                duration: row.get(3)?,
            })
        })
        .context("Cannot query songs")?;

    let mut songs = Vec::new();
    for song in song_iter {
        songs.push(song.context("Malformed song row")?);
    }
    Ok(songs)
}

fn write_sqlite(path: &Path, songs: &[Song]) -> Result<()> {
    let mut conn = Connection::open(path)
        .with_context(|| format!("Failed to create SQLite catalog {}", path.display()))?;

    conn.execute_batch(
        "DROP TABLE IF EXISTS songs;
         CREATE TABLE songs (
            id       INTEGER PRIMARY KEY,
            title    TEXT NOT NULL,
            artist   TEXT NOT NULL,
            genre    TEXT NOT NULL,
            duration REAL NOT NULL
         );",
    )
    .context("Failed to create songs table")?;

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare("INSERT INTO songs (title, artist, genre, duration) VALUES (?1, ?2, ?3, ?4)")?;
        for song in songs {
            stmt.execute((&song.title, &song.artist, &song.genre, song.duration))
                .with_context(|| format!("Failed to insert song `{}'", song.title))?;
        }
    }
    tx.commit().context("Committing catalog transaction failed")?;
    Ok(())
}

const ARTISTS: [&str; 10] = [
    "Queen",
    "Ed Sheeran",
    "Michael Jackson",
    "Adele",
    "Miles Davis",
    "Daft Punk",
    "Nina Simone",
    "Metallica",
    "Taylor Swift",
    "B.B. King",
];

const GENRES: [&str; 6] = ["Rock", "Pop", "Jazz", "Electronic", "Blues", "Metal"];

const WORDS: [&str; 12] = [
    "Midnight", "River", "Golden", "Echo", "Summer", "Broken", "Neon", "Silent", "Wild", "Paper",
    "Heart", "Road",
];

/// Deterministic synthetic catalog for scaling experiments.
///
/// Same `count` and `seed`, same catalog. Durations are 2.0 to 7.0 minutes
/// at one decimal.
#[must_use]
pub fn generate_catalog(count: usize, seed: u64) -> Vec<Song> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let first = WORDS.choose(&mut rng).copied().unwrap_or("Untitled");
            let second = WORDS.choose(&mut rng).copied().unwrap_or("Song");
            let artist = ARTISTS.choose(&mut rng).copied().unwrap_or("Unknown");
            let genre = GENRES.choose(&mut rng).copied().unwrap_or("Pop");
            let tenths: u32 = rng.gen_range(20..=70);

            Song::new(
                &format!("{first} {second} {}", i + 1),
                artist,
                genre,
                f64::from(tenths) / 10.0,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(CatalogFormat::from_path(Path::new("a.csv")).unwrap(), CatalogFormat::Csv);
        assert_eq!(CatalogFormat::from_path(Path::new("a.JSON")).unwrap(), CatalogFormat::Json);
        assert_eq!(CatalogFormat::from_path(Path::new("a.sqlite3")).unwrap(), CatalogFormat::Sqlite);
        assert!(CatalogFormat::from_path(Path::new("a.xlsx")).is_err());
        assert!(CatalogFormat::from_path(&PathBuf::from("no_extension")).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_durations() {
        let good = vec![Song::new("ok", "a", "Rock", 0.0), Song::new("ok2", "b", "Pop", 4.2)];
        assert!(validate(&good).is_ok());

        for bad in [-0.1, f64::NAN, f64::INFINITY] {
            let songs = vec![Song::new("bad", "a", "Rock", bad)];
            assert!(validate(&songs).is_err(), "Duration {bad} should be rejected");
        }
    }

    #[test]
    fn test_prefix_is_order_preserving_and_clamped() {
        let songs = generate_catalog(5, 1);

        assert_eq!(prefix(&songs, 3), &songs[..3]);
        assert_eq!(prefix(&songs, 50).len(), 5);
        assert!(prefix(&songs, 0).is_empty());
    }

    #[test]
    fn test_generated_catalog_is_deterministic() {
        let first = generate_catalog(40, 42);
        let second = generate_catalog(40, 42);
        let other = generate_catalog(40, 43);

        assert_eq!(first, second);
        assert_ne!(first, other);
        assert!(validate(&first).is_ok());
        assert!(first.iter().all(|s| (2.0..=7.0).contains(&s.duration)));
    }
}
