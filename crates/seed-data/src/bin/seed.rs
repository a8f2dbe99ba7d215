//! Seeds the bike service database with bikes, users, and rents.
//!
//! Run with:
//! ```
//! HOST=localhost HOST_PORT=27017 DB=bikeService cargo run -p seed-data --bin seed
//! ```

use seed_data::config::SeedConfig;
use seed_data::loader::BulkLoader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();
    tracing::info!("Seeding {}", config.target.uri());

    BulkLoader::new(config).run().await?;

    Ok(())
}
