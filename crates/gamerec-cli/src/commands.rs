//! CLI command implementations

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;
use gamerec_core::{
    index_of, recommend_popular, title_of, BarChart, Catalog, ChartConfig, ContentRecommender,
    Error, FeatureTable, RankingMetric, RecommendConfig, ScatterPlot, SimilarityMatrix,
};
use tracing::{debug, info};

use crate::output::{self, OutputFormat};
use crate::prompt::Prompter;

pub const TITLE_PROMPT: &str = "Enter the last game you played: ";
pub const GENRE_PROMPT: &str = "Enter the desired genre: ";
pub const METRIC_PROMPT: &str = "Rank recommendations by:\n  A - Rating\n  B - Number of reviews\n> ";

pub const TITLE_NOT_FOUND: &str = "The game you entered does not exist.";
pub const INVALID_GENRE: &str = "Invalid genre";
pub const INVALID_OPTION: &str = "Invalid option";

/// Strip the line terminator from a prompted answer, keeping other whitespace.
fn answer(line: String) -> String {
    line.trim_end_matches(['\r', '\n']).to_string()
}

/// Print the message for an operator-input error, or pass any other error on.
fn report_selection(out: &mut impl Write, format: OutputFormat, err: Error) -> Result<()> {
    if !err.is_selection_error() {
        return Err(err.into());
    }

    debug!(code = err.error_code(), error = %err, "Selection rejected");
    let message = match &err {
        Error::TitleNotFound { .. } => TITLE_NOT_FOUND.to_string(),
        Error::UnknownGenre { .. } => INVALID_GENRE.to_string(),
        Error::InvalidOption { .. } => INVALID_OPTION.to_string(),
        other => other.to_string(),
    };
    output::write_failure(out, format, err.error_code(), &message)
}

/// Options for `similar`.
pub struct SimilarOptions {
    pub title: Option<String>,
    pub limit: usize,
    pub chart: Option<PathBuf>,
}

/// Options for `popular`.
pub struct PopularOptions {
    pub genre: Option<String>,
    pub metric: Option<String>,
    pub limit: usize,
}

/// Resolve a title to its row, or a row to its title.
pub fn lookup(
    catalog: &Catalog,
    title: Option<&str>,
    index: Option<usize>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let result = match (title, index) {
        (Some(title), _) => index_of(title, catalog).map(|i| (i, title.to_string())),
        (None, Some(i)) => title_of(i, catalog).map(|t| (i, t.to_string())),
        (None, None) => anyhow::bail!("either --title or --index is required"),
    };

    let (index, title) = match result {
        Ok(found) => found,
        Err(e) => return report_selection(out, format, e),
    };

    match format {
        OutputFormat::Json => output::write_json(out, &serde_json::json!({ "index": index, "title": title }))?,
        OutputFormat::Text | OutputFormat::Table => writeln!(out, "{}\t{}", index, title)?,
    }
    Ok(())
}

/// Recommend games similar to a seed title.
///
/// The title is prompted for when not given. An unknown title prints a
/// message and returns without ranking or rendering.
pub fn similar(
    catalog: &Catalog,
    matrix: &SimilarityMatrix,
    options: &SimilarOptions,
    format: OutputFormat,
    prompter: &mut impl Prompter,
    out: &mut impl Write,
) -> Result<()> {
    let config = RecommendConfig::default().with_limit(options.limit);
    let recommender = ContentRecommender::with_config(matrix, catalog, config)?;

    let title = match &options.title {
        Some(title) => title.clone(),
        None => answer(prompter.ask(TITLE_PROMPT)?),
    };

    let similar = match recommender.recommend(&title) {
        Ok(similar) => similar,
        Err(e) => return report_selection(out, format, e),
    };

    output::write_similar(out, format, &similar)?;

    if let Some(path) = &options.chart {
        BarChart::from_similar(&similar).render(path, ChartConfig::bar())?;
        if format != OutputFormat::Json {
            writeln!(out, "\nChart saved to: {}", path.display())?;
        }
    }

    Ok(())
}

/// List the top games of a genre.
///
/// Genre and ranking option are prompted for when not given. An unknown
/// genre or option prints a message and returns without a list.
pub fn popular(
    catalog: &Catalog,
    options: &PopularOptions,
    format: OutputFormat,
    prompter: &mut impl Prompter,
    out: &mut impl Write,
) -> Result<()> {
    let genre = match &options.genre {
        Some(genre) => genre.clone(),
        None => answer(prompter.ask(GENRE_PROMPT)?),
    };

    if !catalog.has_genre(&genre) {
        return report_selection(out, format, Error::UnknownGenre { genre });
    }

    let option = match &options.metric {
        Some(option) => option.clone(),
        None => prompter.ask(METRIC_PROMPT)?,
    };

    let metric = match option.parse::<RankingMetric>() {
        Ok(metric) => metric,
        Err(e) => return report_selection(out, format, e),
    };

    let top = recommend_popular(catalog, &genre, metric, options.limit)?;
    output::write_popular(out, format, &top)
}

/// Render a scatter plot of two items' features.
///
/// An unknown item prints a message and returns without writing a file.
pub fn plot(
    table: &FeatureTable,
    item_a: &str,
    item_b: &str,
    output: &Path,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let scatter = match ScatterPlot::new(item_a, item_b, table) {
        Ok(scatter) => scatter,
        Err(e) => return report_selection(out, format, e),
    };
    scatter.render(output, ChartConfig::scatter())?;

    info!(points = scatter.points.len(), "Scatter plot written");
    match format {
        OutputFormat::Json => output::write_json(out, &scatter)?,
        OutputFormat::Text | OutputFormat::Table => {
            writeln!(out, "{}", style(&scatter.title).bold())?;
            writeln!(out, "  Dimensions: {}", scatter.points.len())?;
            writeln!(out, "  Saved to: {}", output.display())?;
        }
    }
    Ok(())
}

/// List distinct genres.
pub fn genres(catalog: &Catalog, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let genres = catalog.genres();
    match format {
        OutputFormat::Json => output::write_json(out, &genres)?,
        OutputFormat::Text | OutputFormat::Table => {
            for genre in genres {
                writeln!(out, "{}", genre)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use gamerec_core::GameRecord;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            GameRecord::new("rpg_a", "RPG", 8.0, 100).with_game_name("RPG Eight"),
            GameRecord::new("rpg_b", "RPG", 9.0, 50).with_game_name("RPG Nine"),
            GameRecord::new("fps_a", "FPS", 10.0, 10).with_game_name("FPS Ten"),
        ])
    }

    fn matrix() -> SimilarityMatrix {
        SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.8333, 0.2],
            vec![0.8333, 1.0, 0.4],
            vec![0.2, 0.4, 1.0],
        ])
        .unwrap()
    }

    fn run(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn popular_options() -> PopularOptions {
        PopularOptions { genre: None, metric: None, limit: 10 }
    }

    #[test]
    fn test_similar_prompts_for_title() {
        let mut prompter = ScriptedPrompter::new(&["rpg_a\n"]);
        let options = SimilarOptions { title: None, limit: 10, chart: None };

        let text = run(|out| similar(&catalog(), &matrix(), &options, OutputFormat::Text, &mut prompter, out));

        assert_eq!(prompter.asked, vec![TITLE_PROMPT]);
        assert!(text.contains("rpg_b"));
        assert!(text.contains("0.83"));
        assert!(text.contains("fps_a"));
    }

    #[test]
    fn test_similar_unknown_title_returns_early() {
        let mut prompter = ScriptedPrompter::new(&["Quake"]);
        let dir = tempfile::tempdir().unwrap();
        let chart = dir.path().join("chart.svg");
        let options = SimilarOptions { title: None, limit: 10, chart: Some(chart.clone()) };

        let text = run(|out| similar(&catalog(), &matrix(), &options, OutputFormat::Text, &mut prompter, out));

        assert!(text.contains(TITLE_NOT_FOUND));
        assert!(!text.contains("Games similar"));
        assert!(!chart.exists());
    }

    #[test]
    fn test_similar_writes_chart() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let dir = tempfile::tempdir().unwrap();
        let chart = dir.path().join("chart.svg");
        let options = SimilarOptions {
            title: Some("fps_a".to_string()),
            limit: 10,
            chart: Some(chart.clone()),
        };

        let text = run(|out| similar(&catalog(), &matrix(), &options, OutputFormat::Text, &mut prompter, out));

        assert!(prompter.asked.is_empty());
        assert!(text.contains("Chart saved to"));
        assert!(chart.exists());
    }

    #[test]
    fn test_popular_rating() {
        let mut prompter = ScriptedPrompter::new(&["RPG", "A"]);
        let text = run(|out| popular(&catalog(), &popular_options(), OutputFormat::Text, &mut prompter, out));

        assert_eq!(prompter.asked, vec![GENRE_PROMPT, METRIC_PROMPT]);
        let nine = text.find("RPG Nine").unwrap();
        let eight = text.find("RPG Eight").unwrap();
        assert!(nine < eight);
    }

    #[test]
    fn test_popular_single_fps() {
        let mut prompter = ScriptedPrompter::new(&["FPS", "b"]);
        let text = run(|out| popular(&catalog(), &popular_options(), OutputFormat::Text, &mut prompter, out));

        assert!(text.contains("FPS Ten"));
        assert!(!text.contains("RPG"));
    }

    #[test]
    fn test_popular_unknown_genre_skips_metric_prompt() {
        let mut prompter = ScriptedPrompter::new(&["MOBA"]);
        let text = run(|out| popular(&catalog(), &popular_options(), OutputFormat::Text, &mut prompter, out));

        assert_eq!(prompter.asked.len(), 1);
        assert!(text.contains(INVALID_GENRE));
        assert!(!text.contains("Top"));
    }

    #[test]
    fn test_popular_invalid_option() {
        let mut prompter = ScriptedPrompter::new(&["RPG", "c"]);
        let text = run(|out| popular(&catalog(), &popular_options(), OutputFormat::Text, &mut prompter, out));

        assert!(text.contains(INVALID_OPTION));
        assert!(!text.contains("RPG Nine"));
    }

    #[test]
    fn test_popular_from_flags() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let options = PopularOptions {
            genre: Some("RPG".to_string()),
            metric: Some("b".to_string()),
            limit: 1,
        };
        let text = run(|out| popular(&catalog(), &options, OutputFormat::Json, &mut prompter, out));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["names"], serde_json::json!(["RPG Eight"]));
        assert_eq!(value["metric"], "reviews");
    }

    #[test]
    fn test_lookup() {
        let text = run(|out| lookup(&catalog(), Some("fps_a"), None, OutputFormat::Text, out));
        assert_eq!(text.trim(), "2\tfps_a");

        let text = run(|out| lookup(&catalog(), None, Some(1), OutputFormat::Text, out));
        assert_eq!(text.trim(), "1\trpg_b");

        let text = run(|out| lookup(&catalog(), Some("nope"), None, OutputFormat::Text, out));
        assert!(text.contains(TITLE_NOT_FOUND));
    }

    #[test]
    fn test_lookup_index_out_of_range() {
        let mut buf = Vec::new();
        assert!(lookup(&catalog(), None, Some(9), OutputFormat::Text, &mut buf).is_err());
    }

    #[test]
    fn test_genres() {
        let text = run(|out| genres(&catalog(), OutputFormat::Text, out));
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["RPG", "FPS"]);
    }

    #[test]
    fn test_plot() {
        let table = FeatureTable::from_reader("name,a,b\nx,1,2\ny,3,4\n".as_bytes()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scatter.svg");

        let text = run(|out| plot(&table, "x", "y", &path, OutputFormat::Text, out));

        assert!(text.contains("Space for x VS. y"));
        assert!(path.exists());
    }

    #[test]
    fn test_plot_unknown_item_prints_message() {
        let table = FeatureTable::from_reader("name,a,b\nx,1,2\ny,3,4\n".as_bytes()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scatter.svg");

        let text = run(|out| plot(&table, "x", "z", &path, OutputFormat::Json, out));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["error"], "LABEL_NOT_FOUND");
        assert!(value["message"].as_str().unwrap().contains('z'));
        assert!(!path.exists());
    }

    #[test]
    fn test_prompted_title_keeps_inner_whitespace() {
        let mut prompter = ScriptedPrompter::new(&[" rpg_a\r\n"]);
        let options = SimilarOptions { title: None, limit: 10, chart: None };

        let text = run(|out| similar(&catalog(), &matrix(), &options, OutputFormat::Text, &mut prompter, out));

        assert!(text.contains(TITLE_NOT_FOUND));
        assert!(!text.contains("rpg_b"));
    }

    #[test]
    fn test_prompted_genre_is_exact() {
        let mut prompter = ScriptedPrompter::new(&[" RPG\n"]);
        let text = run(|out| popular(&catalog(), &popular_options(), OutputFormat::Json, &mut prompter, out));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["error"], "UNKNOWN_GENRE");
        assert_eq!(value["message"], INVALID_GENRE);
        assert_eq!(prompter.asked.len(), 1);
    }

    #[test]
    fn test_prompted_genre_strips_line_ending() {
        let mut prompter = ScriptedPrompter::new(&["FPS\r\n", " b \n"]);
        let text = run(|out| popular(&catalog(), &popular_options(), OutputFormat::Text, &mut prompter, out));

        assert!(text.contains("FPS Ten"));
    }
}
