//! gamerec CLI - Video Game Recommendations
//!
//! Features:
//! - Title <-> row lookup
//! - Similar games from a precomputed similarity matrix
//! - Top games of a genre by rating or review count
//! - Feature scatter plots and similarity bar charts (SVG)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gamerec_core::{Catalog, FeatureTable, SimilarityMatrix, DEFAULT_LIMIT};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod prompt;

use output::OutputFormat;
use prompt::TermPrompter;

/// gamerec CLI - Video game recommendation toolkit
#[derive(Parser)]
#[command(name = "gamerec")]
#[command(version)]
#[command(about = "Content and popularity based video game recommendations", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json, table)
    #[arg(short, long, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a title to its row position, or a row position to its title
    Lookup {
        /// Games dataset (CSV)
        #[arg(short, long)]
        dataset: PathBuf,

        /// Title to resolve
        #[arg(short, long, conflicts_with = "index")]
        title: Option<String>,

        /// Row position to resolve
        #[arg(short, long)]
        index: Option<usize>,
    },

    /// Recommend games similar to the last game played
    Similar {
        /// Games dataset (CSV)
        #[arg(short, long)]
        dataset: PathBuf,

        /// Precomputed similarity matrix (headerless CSV)
        #[arg(short, long)]
        matrix: PathBuf,

        /// Seed title (prompted for when omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Number of results to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Write a bar chart of the results to this SVG file
        #[arg(short, long)]
        chart: Option<PathBuf>,
    },

    /// Recommend the top games of a genre
    Popular {
        /// Games dataset (CSV)
        #[arg(short, long)]
        dataset: PathBuf,

        /// Genre (prompted for when omitted)
        #[arg(short, long)]
        genre: Option<String>,

        /// Ranking: A = rating, B = number of reviews (prompted for when omitted)
        #[arg(short, long)]
        metric: Option<String>,

        /// Number of results to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Plot two items against each other in feature space
    Plot {
        /// Feature table (CSV, one row per item)
        #[arg(long)]
        features: PathBuf,

        /// Item on the x axis
        item_a: String,

        /// Item on the y axis
        item_b: String,

        /// Output SVG file
        #[arg(short, long, default_value = "scatter.svg")]
        output: PathBuf,
    },

    /// List the genres present in a dataset
    Genres {
        /// Games dataset (CSV)
        #[arg(short, long)]
        dataset: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    gamerec_core::init();

    let format = OutputFormat::from(cli.format.as_str());
    let mut stdout = std::io::stdout();
    let mut prompter = TermPrompter::new();

    match cli.command {
        Commands::Lookup { dataset, title, index } => {
            let catalog = Catalog::from_csv_path(&dataset)?;
            commands::lookup(&catalog, title.as_deref(), index, format, &mut stdout)?;
        }
        Commands::Similar { dataset, matrix, title, limit, chart } => {
            let catalog = Catalog::from_csv_path(&dataset)?;
            let matrix = SimilarityMatrix::from_csv_path(&matrix)?;
            let options = commands::SimilarOptions { title, limit, chart };
            commands::similar(&catalog, &matrix, &options, format, &mut prompter, &mut stdout)?;
        }
        Commands::Popular { dataset, genre, metric, limit } => {
            let catalog = Catalog::from_csv_path(&dataset)?;
            let options = commands::PopularOptions { genre, metric, limit };
            commands::popular(&catalog, &options, format, &mut prompter, &mut stdout)?;
        }
        Commands::Plot { features, item_a, item_b, output } => {
            let table = FeatureTable::from_csv_path(&features)?;
            commands::plot(&table, &item_a, &item_b, &output, format, &mut stdout)?;
        }
        Commands::Genres { dataset } => {
            let catalog = Catalog::from_csv_path(&dataset)?;
            commands::genres(&catalog, format, &mut stdout)?;
        }
    }

    Ok(())
}
