//! Recommendation example
//!
//! Demonstrates title lookup, similar games, and genre top lists on a small
//! in-memory dataset.
//!
//! Run with: cargo run -p gamerec-core --example recommendations

use gamerec_core::{
    index_of, title_of, top_popular, BarChart, Catalog, ContentRecommender, GameRecord,
    RankingMetric, SimilarityMatrix,
};

fn main() -> gamerec_core::Result<()> {
    println!("gamerec Core - Recommendation Example");
    println!("=====================================\n");

    let catalog = Catalog::from_records(vec![
        GameRecord::new("the-witcher-3", "RPG", 9.6, 700_000).with_game_name("The Witcher 3"),
        GameRecord::new("skyrim", "RPG", 9.0, 900_000).with_game_name("Skyrim"),
        GameRecord::new("doom-eternal", "FPS", 8.9, 250_000).with_game_name("DOOM Eternal"),
        GameRecord::new("mass-effect", "RPG", 9.1, 150_000).with_game_name("Mass Effect"),
        GameRecord::new("half-life-2", "FPS", 9.7, 200_000).with_game_name("Half-Life 2"),
    ]);

    let matrix = SimilarityMatrix::from_rows(vec![
        vec![1.00, 0.88, 0.12, 0.74, 0.20],
        vec![0.88, 1.00, 0.15, 0.66, 0.22],
        vec![0.12, 0.15, 1.00, 0.18, 0.81],
        vec![0.74, 0.66, 0.18, 1.00, 0.35],
        vec![0.20, 0.22, 0.81, 0.35, 1.00],
    ])?;

    // Lookup
    println!("Index Resolver:");
    let index = index_of("skyrim", &catalog)?;
    println!("  skyrim -> row {}", index);
    println!("  row 4 -> {}", title_of(4, &catalog)?);
    if let Err(e) = index_of("portal", &catalog) {
        println!("  portal -> {} ({})", e, e.error_code());
    }

    // Similar games
    println!("\nSimilar to the-witcher-3:");
    let similar = ContentRecommender::new(&matrix, &catalog)?.recommend("the-witcher-3")?;
    for (rank, game) in similar.entries.iter().enumerate() {
        println!("  {}. {:<15} {:.2}", rank + 1, game.name, game.score);
    }

    let chart = BarChart::from_similar(&similar);
    println!("\nBar chart: \"{}\" with {} bars", chart.title, chart.bars.len());

    // Popularity
    for metric in [RankingMetric::Rating, RankingMetric::Reviews] {
        let top = top_popular(&catalog, "RPG", metric)?;
        println!("\nTop RPGs by {} (option {}):", metric, metric.option());
        for name in &top.names {
            println!("  {}", name);
        }
    }

    Ok(())
}
