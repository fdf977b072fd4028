//! Game dataset loading.
//!
//! A [`Catalog`] is the ordered list of rows of the games table. Row position
//! is the identity of a game: the similarity matrix is indexed by the same
//! positions.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

/// A single game row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Lookup name, expected to be unique across the catalog
    pub name: String,
    /// Genre label
    pub genre: String,
    /// Aggregated player rating
    pub overall_player_rating: f64,
    /// Number of English-language reviews
    pub number_of_english_reviews: u64,
    /// Display name used by popularity reports
    #[serde(default)]
    pub game_name: String,
}

impl GameRecord {
    /// Create a record whose display name equals its lookup name.
    pub fn new(
        name: impl Into<String>,
        genre: impl Into<String>,
        overall_player_rating: f64,
        number_of_english_reviews: u64,
    ) -> Self {
        let name = name.into();
        Self {
            game_name: name.clone(),
            name,
            genre: genre.into(),
            overall_player_rating,
            number_of_english_reviews,
        }
    }

    /// Set the display name.
    pub fn with_game_name(mut self, game_name: impl Into<String>) -> Self {
        self.game_name = game_name.into();
        self
    }
}

/// Ordered collection of game rows.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<GameRecord>,
}

impl Catalog {
    /// Build a catalog from records already in memory.
    pub fn from_records(records: Vec<GameRecord>) -> Self {
        let records = records.into_iter().map(normalize).collect();
        Self { records }
    }

    /// Load a catalog from a CSV file with a header row.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!(path = %path.as_ref().display(), "Loading game dataset");
        let reader = csv::Reader::from_path(path)?;
        Self::from_csv(reader)
    }

    /// Load a catalog from any CSV source with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_csv(csv::Reader::from_reader(reader))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: GameRecord = row?;
            records.push(normalize(record));
        }

        info!(rows = records.len(), "Loaded game dataset");
        Ok(Self { records })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&GameRecord> {
        self.records.get(index)
    }

    /// Iterate rows in positional order.
    pub fn iter(&self) -> impl Iterator<Item = &GameRecord> {
        self.records.iter()
    }

    /// All rows.
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    /// Distinct genres in first-seen order.
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = Vec::new();
        for record in &self.records {
            if !genres.contains(&record.genre.as_str()) {
                genres.push(&record.genre);
            }
        }
        debug!(count = genres.len(), "Collected distinct genres");
        genres
    }

    /// Check whether `genre` is one of the catalog's genres.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.records.iter().any(|r| r.genre == genre)
    }
}

fn normalize(mut record: GameRecord) -> GameRecord {
    if record.game_name.is_empty() {
        record.game_name = record.name.clone();
    }
    record
}
