//! Content recommendation using a precomputed similarity matrix.
//!
//! This module ranks games by how close they are to a seed game:
//!
//! - **Ranking**: every score in the seed's matrix row, sorted descending
//! - **Self exclusion**: the top entry (the seed against itself) is dropped
//! - **Top-K**: the next `limit` entries are kept and named

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::RecommendConfig;
use crate::dataset::Catalog;
use crate::error::{Error, Result};
use crate::index::{index_of, title_of};
use crate::similarity::SimilarityMatrix;

/// A single similar game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarGame {
    /// Game name
    pub name: String,
    /// Similarity to the seed, rounded
    pub score: f64,
}

/// Ranked games similar to a seed, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarGames {
    /// Seed title as entered
    pub seed: String,
    /// Results in rank order
    pub entries: Vec<SimilarGame>,
}

impl SimilarGames {
    /// Number of results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in rank order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Scores in rank order.
    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.score).collect()
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Rank row `index` of `matrix`.
///
/// Pairs are stable-sorted by score descending, so equal scores keep row order.
/// The first pair after sorting is treated as the seed itself and skipped.
pub fn rank_similar(
    matrix: &SimilarityMatrix,
    index: usize,
    limit: usize,
) -> Result<Vec<(usize, f64)>> {
    let row = matrix.row(index)?;

    let mut pairs: Vec<(usize, f64)> = row.iter().copied().enumerate().collect();
    pairs.sort_by(|a, b| b.1.total_cmp(&a.1));

    debug!(index, candidates = pairs.len(), limit, "Ranked similarity row");

    Ok(pairs.into_iter().skip(1).take(limit).collect())
}

/// Content-based recommender over a catalog and its similarity matrix.
pub struct ContentRecommender<'a> {
    matrix: &'a SimilarityMatrix,
    catalog: &'a Catalog,
    config: RecommendConfig,
}

impl<'a> ContentRecommender<'a> {
    /// Create a recommender with the default configuration.
    ///
    /// The matrix must have one row per catalog row.
    pub fn new(matrix: &'a SimilarityMatrix, catalog: &'a Catalog) -> Result<Self> {
        Self::with_config(matrix, catalog, RecommendConfig::default())
    }

    /// Create a recommender with custom configuration.
    pub fn with_config(
        matrix: &'a SimilarityMatrix,
        catalog: &'a Catalog,
        config: RecommendConfig,
    ) -> Result<Self> {
        if matrix.len() != catalog.len() {
            return Err(Error::DimensionMismatch {
                matrix: matrix.len(),
                catalog: catalog.len(),
            });
        }
        Ok(Self { matrix, catalog, config })
    }

    /// Games most similar to `title`, excluding the title itself.
    pub fn recommend(&self, title: &str) -> Result<SimilarGames> {
        let index = index_of(title, self.catalog)?;
        let ranked = rank_similar(self.matrix, index, self.config.limit)?;

        let entries = ranked
            .into_iter()
            .map(|(i, score)| {
                Ok(SimilarGame {
                    name: title_of(i, self.catalog)?.to_string(),
                    score: self.config.round_score(score),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!(seed = title, results = entries.len(), "Computed similar games");

        Ok(SimilarGames {
            seed: title.to_string(),
            entries,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }
}

/// Games most similar to `title` with the default configuration.
pub fn recommend_similar(
    matrix: &SimilarityMatrix,
    catalog: &Catalog,
    title: &str,
) -> Result<SimilarGames> {
    ContentRecommender::new(matrix, catalog)?.recommend(title)
}
