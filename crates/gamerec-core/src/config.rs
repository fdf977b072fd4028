//! Recommendation and chart settings.

use serde::{Deserialize, Serialize};

/// Default number of recommendations returned.
pub const DEFAULT_LIMIT: usize = 10;

/// Configuration for the recommenders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Maximum number of results
    pub limit: usize,
    /// Decimal places kept on similarity scores
    pub score_decimals: u32,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            score_decimals: 2,
        }
    }
}

impl RecommendConfig {
    /// Override the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Round `score` to the configured number of decimal places.
    ///
    /// Halves round to the even neighbour: 0.625 -> 0.62, 0.375 -> 0.38.
    pub fn round_score(&self, score: f64) -> f64 {
        let factor = 10f64.powi(self.score_decimals as i32);
        (score * factor).round_ties_even() / factor
    }
}

/// Output size for rendered charts, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl ChartConfig {
    /// Size used for scatter plots.
    pub fn scatter() -> Self {
        Self { width: 1000, height: 500 }
    }

    /// Size used for bar charts.
    pub fn bar() -> Self {
        Self { width: 1000, height: 600 }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::bar()
    }
}
