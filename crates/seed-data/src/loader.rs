//! End-to-end seeding run: connect, generate, insert, disconnect.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::builders::{ScenarioBuilder, ScenarioMetrics};
use crate::config::SeedConfig;
use crate::db::{DocumentStore, MongoStore};
use crate::error::SeedError;
use crate::generators::{IdGenerator, ObjectIdGenerator};

/// Drives a full seeding run from a resolved [`SeedConfig`].
pub struct BulkLoader {
    config: SeedConfig,
}

impl BulkLoader {
    pub fn new(config: SeedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Connects to MongoDB and seeds it.
    ///
    /// A failed connection returns before any record is generated.
    pub async fn run(&self) -> Result<ScenarioMetrics, SeedError> {
        let store = MongoStore::connect(&self.config.target).await?;

        let mut rng = match self.config.seed {
            Some(seed) => {
                info!("Using random seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        self.run_with(store, &mut rng, &mut ObjectIdGenerator).await
    }

    /// Seeds an already connected store, then disconnects it.
    ///
    /// The store is disconnected whether or not seeding succeeds. When both
    /// fail, the seeding error is returned and the disconnect error is logged.
    pub async fn run_with<S: DocumentStore>(
        &self,
        store: S,
        rng: &mut impl Rng,
        ids: &mut impl IdGenerator,
    ) -> Result<ScenarioMetrics, SeedError> {
        let builder = ScenarioBuilder::new()
            .with_catalog(self.config.catalog.clone())
            .with_generation(self.config.generation.clone());

        let outcome = builder.build(&store, rng, ids).await;
        let closed = store.disconnect().await;

        match (outcome, closed) {
            (Ok(result), Ok(())) => {
                let metrics = result.metrics;
                info!("Seed completed!");
                info!("  Bikes: {}", metrics.bike_count);
                info!("  Users: {}", metrics.user_count);
                info!("  Rents: {}", metrics.rent_count);
                Ok(metrics)
            }
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(disconnect_error)) => {
                warn!("Disconnect also failed: {}", disconnect_error);
                Err(e)
            }
        }
    }
}
