//! Output formatting for CLI

use std::io::Write;

use anyhow::Result;
use console::style;
use gamerec_core::{PopularGames, SimilarGames};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "table" => OutputFormat::Table,
            _ => OutputFormat::Text,
        }
    }
}

#[derive(Tabled)]
struct SimilarRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Game")]
    name: String,
    #[tabled(rename = "Similarity")]
    score: String,
}

#[derive(Tabled)]
struct PopularRow {
    #[tabled(rename = "Game")]
    name: String,
}

/// Write a value as pretty JSON.
pub fn write_json<T: Serialize>(out: &mut impl Write, data: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(data)?)?;
    Ok(())
}

/// Write an operator-facing failure message.
pub fn write_failure(out: &mut impl Write, format: OutputFormat, code: &str, message: &str) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &serde_json::json!({ "error": code, "message": message })),
        OutputFormat::Text | OutputFormat::Table => {
            writeln!(out, "{}", style(message).red())?;
            Ok(())
        }
    }
}

/// Write games similar to a seed.
pub fn write_similar(out: &mut impl Write, format: OutputFormat, similar: &SimilarGames) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, similar),
        OutputFormat::Table => {
            writeln!(out, "{}", style(format!("Games similar to {}:", similar.seed)).bold())?;
            let rows = similar.entries.iter().enumerate().map(|(i, e)| SimilarRow {
                rank: i + 1,
                name: e.name.clone(),
                score: format!("{:.2}", e.score),
            });
            writeln!(out, "{}", Table::new(rows).with(Style::rounded()))?;
            Ok(())
        }
        OutputFormat::Text => {
            writeln!(out, "{}", style(format!("Games similar to {}:", similar.seed)).bold())?;
            for (i, e) in similar.entries.iter().enumerate() {
                writeln!(out, "  {:>2}. {:<40} {:.2}", i + 1, e.name, e.score)?;
            }
            Ok(())
        }
    }
}

/// Write a genre top list.
pub fn write_popular(out: &mut impl Write, format: OutputFormat, popular: &PopularGames) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, popular);
    }

    let header = format!(
        "Top {} recommended games by {} for genre {}:",
        popular.len(),
        popular.metric,
        popular.genre
    );
    writeln!(out, "{}", style(header).bold())?;

    if format == OutputFormat::Table {
        let rows = popular.names.iter().map(|name| PopularRow { name: name.clone() });
        writeln!(out, "{}", Table::new(rows).with(Style::rounded()))?;
    } else {
        for name in &popular.names {
            writeln!(out, "  {}", name)?;
        }
    }
    Ok(())
}
