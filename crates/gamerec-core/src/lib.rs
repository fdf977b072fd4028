//! gamerec Core - Game Recommendation Library
//!
//! This crate provides the building blocks for recommending video games:
//! - Dataset and feature table loading from CSV
//! - Title <-> row position resolution
//! - Content-based recommendations from a precomputed similarity matrix
//! - Popularity rankings within a genre
//! - Scatter and bar chart rendering (optional, `charts` feature)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       gamerec Core                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐      │
//! │  │   Catalog    │  │  Similarity  │  │   Feature    │      │
//! │  │  (dataset)   │  │    Matrix    │  │    Table     │      │
//! │  └──────┬───────┘  └──────┬───────┘  └──────┬───────┘      │
//! │         │                 │                 │               │
//! │  ┌──────┴───────┐         │                 │               │
//! │  │    Index     │         │                 │               │
//! │  │   Resolver   │         │                 │               │
//! │  └──────┬───────┘         │                 │               │
//! │         │                 │                 │               │
//! │  ┌──────┴─────────────────┴─┐  ┌────────────┴──┐            │
//! │  │   Content Recommender    │  │    Scatter    │            │
//! │  └────────────┬─────────────┘  │    Plotter    │            │
//! │               │                └───────────────┘            │
//! │        ┌──────┴──────┐   ┌────────────────────────┐         │
//! │        │  Bar Chart  │   │ Popularity Recommender │         │
//! │        └─────────────┘   └────────────────────────┘         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use gamerec_core::{Catalog, GameRecord, SimilarityMatrix, recommend_similar};
//!
//! let catalog = Catalog::from_records(vec![
//!     GameRecord::new("Portal", "Puzzle", 9.0, 5000),
//!     GameRecord::new("Portal 2", "Puzzle", 9.5, 9000),
//!     GameRecord::new("Doom", "FPS", 8.8, 7000),
//! ]);
//! let matrix = SimilarityMatrix::from_rows(vec![
//!     vec![1.0, 0.9, 0.2],
//!     vec![0.9, 1.0, 0.1],
//!     vec![0.2, 0.1, 1.0],
//! ])?;
//!
//! let similar = recommend_similar(&matrix, &catalog, "Portal")?;
//! assert_eq!(similar.names(), vec!["Portal 2", "Doom"]);
//! # Ok::<(), gamerec_core::Error>(())
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
pub mod index;
pub mod plot;
pub mod popularity;
pub mod recommend;
pub mod similarity;

pub use config::{ChartConfig, RecommendConfig, DEFAULT_LIMIT};
pub use dataset::{Catalog, GameRecord};
pub use error::{Error, Result};
pub use features::FeatureTable;
pub use index::{index_of, title_of};
pub use plot::{AnnotatedPoint, Bar, BarChart, ScatterPlot};
pub use popularity::{recommend_popular, top_popular, PopularGames, RankingMetric};
pub use recommend::{rank_similar, recommend_similar, ContentRecommender, SimilarGame, SimilarGames};
pub use similarity::SimilarityMatrix;

#[cfg(feature = "charts")]
pub use plot::plot;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log library initialization
pub fn init() {
    tracing::info!(version = VERSION, "gamerec core initialized");
}
