//! Popularity ranking within a genre.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::DEFAULT_LIMIT;
use crate::dataset::{Catalog, GameRecord};
use crate::error::{Error, Result};

/// Which column ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMetric {
    /// Player rating, then review count (option "A")
    Rating,
    /// Review count, then player rating (option "B")
    Reviews,
}

impl RankingMetric {
    /// Dataset column used as the primary sort key.
    pub fn primary_column(&self) -> &'static str {
        match self {
            RankingMetric::Rating => "overall_player_rating",
            RankingMetric::Reviews => "number_of_english_reviews",
        }
    }

    /// Dataset column used to break ties on the primary key.
    pub fn secondary_column(&self) -> &'static str {
        match self {
            RankingMetric::Rating => "number_of_english_reviews",
            RankingMetric::Reviews => "overall_player_rating",
        }
    }

    /// Menu letter for this metric.
    pub fn option(&self) -> char {
        match self {
            RankingMetric::Rating => 'A',
            RankingMetric::Reviews => 'B',
        }
    }

    /// Descending order on (primary, secondary).
    fn compare(&self, a: &GameRecord, b: &GameRecord) -> Ordering {
        let by_rating = b.overall_player_rating.total_cmp(&a.overall_player_rating);
        let by_reviews = b.number_of_english_reviews.cmp(&a.number_of_english_reviews);
        match self {
            RankingMetric::Rating => by_rating.then(by_reviews),
            RankingMetric::Reviews => by_reviews.then(by_rating),
        }
    }
}

impl FromStr for RankingMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(RankingMetric::Rating),
            "b" => Ok(RankingMetric::Reviews),
            _ => Err(Error::InvalidOption { option: s.to_string() }),
        }
    }
}

impl fmt::Display for RankingMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.primary_column())
    }
}

/// Top games of a genre, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularGames {
    pub genre: String,
    pub metric: RankingMetric,
    /// Display names in rank order
    pub names: Vec<String>,
}

impl PopularGames {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Rank a single genre's games by `metric`.
pub fn rank_genre<'a>(
    catalog: &'a Catalog,
    genre: &str,
    metric: RankingMetric,
    limit: usize,
) -> Result<Vec<&'a GameRecord>> {
    if !catalog.has_genre(genre) {
        return Err(Error::UnknownGenre { genre: genre.to_string() });
    }

    let mut games: Vec<&GameRecord> = catalog.iter().filter(|r| r.genre == genre).collect();
    games.sort_by(|a, b| metric.compare(a, b));
    debug!(genre, candidates = games.len(), %metric, "Ranked genre");

    games.truncate(limit);
    Ok(games)
}

/// Top `limit` display names of `genre` ranked by `metric`.
pub fn recommend_popular(
    catalog: &Catalog,
    genre: &str,
    metric: RankingMetric,
    limit: usize,
) -> Result<PopularGames> {
    let names = rank_genre(catalog, genre, metric, limit)?
        .into_iter()
        .map(|r| r.game_name.clone())
        .collect::<Vec<_>>();

    info!(genre, %metric, results = names.len(), "Computed popular games");

    Ok(PopularGames {
        genre: genre.to_string(),
        metric,
        names,
    })
}

/// Top ten games of `genre` ranked by `metric`.
pub fn top_popular(catalog: &Catalog, genre: &str, metric: RankingMetric) -> Result<PopularGames> {
    recommend_popular(catalog, genre, metric, DEFAULT_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            GameRecord::new("rpg_a", "RPG", 8.0, 100).with_game_name("RPG Eight"),
            GameRecord::new("rpg_b", "RPG", 9.0, 50).with_game_name("RPG Nine"),
            GameRecord::new("fps_a", "FPS", 10.0, 10).with_game_name("FPS Ten"),
        ])
    }

    #[test]
    fn test_parse_metric() {
        assert_eq!("A".parse::<RankingMetric>().unwrap(), RankingMetric::Rating);
        assert_eq!("a".parse::<RankingMetric>().unwrap(), RankingMetric::Rating);
        assert_eq!("B".parse::<RankingMetric>().unwrap(), RankingMetric::Reviews);
        assert_eq!(" b\n".parse::<RankingMetric>().unwrap(), RankingMetric::Reviews);
    }

    #[test]
    fn test_parse_invalid_metric() {
        let err = "c".parse::<RankingMetric>().unwrap_err();
        assert!(matches!(err, Error::InvalidOption { ref option } if option == "c"));
        assert!("".parse::<RankingMetric>().is_err());
        assert!("ab".parse::<RankingMetric>().is_err());
    }

    #[test]
    fn test_rating_order() {
        let top = top_popular(&catalog(), "RPG", RankingMetric::Rating).unwrap();
        assert_eq!(top.names, vec!["RPG Nine", "RPG Eight"]);
    }

    #[test]
    fn test_reviews_order() {
        let top = top_popular(&catalog(), "RPG", RankingMetric::Reviews).unwrap();
        assert_eq!(top.names, vec!["RPG Eight", "RPG Nine"]);
    }

    #[test]
    fn test_single_genre_item() {
        let top = top_popular(&catalog(), "FPS", RankingMetric::Rating).unwrap();
        assert_eq!(top.names, vec!["FPS Ten"]);
    }

    #[test]
    fn test_unknown_genre() {
        let err = top_popular(&catalog(), "MOBA", RankingMetric::Rating).unwrap_err();
        assert!(matches!(err, Error::UnknownGenre { ref genre } if genre == "MOBA"));
    }

    #[test]
    fn test_secondary_breaks_ties() {
        let catalog = Catalog::from_records(vec![
            GameRecord::new("low", "RPG", 9.0, 10),
            GameRecord::new("high", "RPG", 9.0, 500),
            GameRecord::new("mid", "RPG", 9.0, 100),
        ]);
        let top = top_popular(&catalog, "RPG", RankingMetric::Rating).unwrap();
        assert_eq!(top.names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_full_ties_keep_row_order() {
        let catalog = Catalog::from_records(vec![
            GameRecord::new("first", "RPG", 7.0, 10),
            GameRecord::new("second", "RPG", 7.0, 10),
        ]);
        let top = top_popular(&catalog, "RPG", RankingMetric::Reviews).unwrap();
        assert_eq!(top.names, vec!["first", "second"]);
    }

    #[test]
    fn test_limit() {
        let catalog = Catalog::from_records(
            (0..25)
                .map(|i| GameRecord::new(format!("g{}", i), "RPG", i as f64, 1))
                .collect(),
        );
        let top = top_popular(&catalog, "RPG", RankingMetric::Rating).unwrap();
        assert_eq!(top.len(), 10);
        assert_eq!(top.names[0], "g24");
        assert_eq!(top.names[9], "g15");
    }

    #[test]
    fn test_metric_columns() {
        assert_eq!(RankingMetric::Rating.to_string(), "overall_player_rating");
        assert_eq!(RankingMetric::Reviews.secondary_column(), "overall_player_rating");
        assert_eq!(RankingMetric::Reviews.option(), 'B');
    }
}
