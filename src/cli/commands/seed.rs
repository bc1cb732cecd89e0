//! Seed command handler

use crate::config::Config;
use crate::db::{Store, seed::seed_demo_catalog};

pub async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;
    let report = seed_demo_catalog(&store).await?;

    if report.is_empty() {
        println!("Catalog already has genres, nothing seeded.");
        return Ok(());
    }

    println!("Seeded {}", config.general.database_path);
    println!("{:-<40}", "");
    println!("  Genres: {}", report.genres);
    println!("  Movies: {}", report.movies);
    println!("  Actors: {}", report.actors);
    println!("  Cast links: {}", report.links);

    Ok(())
}
