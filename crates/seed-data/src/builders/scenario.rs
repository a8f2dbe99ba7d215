//! Fluent builder for constructing seed scenarios.

use std::time::Instant;

use rand::Rng;
use rentals::{Bike, Rent, User};
use tracing::info;

use crate::catalog::Catalog;
use crate::config::GenerationConfig;
use crate::db::{DocumentStore, Seeder};
use crate::error::SeedError;
use crate::generators::{BikeGenerator, IdGenerator, RentLinker, UserGenerator};

/// Records produced for one scenario.
#[derive(Debug)]
pub struct ScenarioResult {
    pub bikes: Vec<Bike>,
    pub users: Vec<User>,
    pub rents: Vec<Rent>,
    pub metrics: ScenarioMetrics,
}

/// Timing and count metrics from a scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioMetrics {
    /// Time spent generating data (milliseconds).
    pub generation_time_ms: u64,
    /// Time spent seeding the database (milliseconds, 0 if build_data used).
    pub seeding_time_ms: u64,
    pub bike_count: usize,
    pub user_count: usize,
    pub rent_count: usize,
}

/// Builder for generating and seeding bikes, users, and rents.
///
/// # Example
///
/// ```rust,ignore
/// let result = ScenarioBuilder::new()
///     .with_bikes(100)
///     .with_users(100)
///     .with_rents(500)
///     .build(&store, &mut rng, &mut ObjectIdGenerator)
///     .await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder {
    catalog: Catalog,
    generation: GenerationConfig,
}

impl ScenarioBuilder {
    /// Creates a builder with the default catalog and record counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pools records are drawn from.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replaces every generation parameter at once.
    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Sets the number of bikes to generate.
    pub fn with_bikes(mut self, count: usize) -> Self {
        self.generation.bike_count = count;
        self
    }

    /// Sets the number of users to generate.
    pub fn with_users(mut self, count: usize) -> Self {
        self.generation.user_count = count;
        self
    }

    /// Sets the number of rents to generate.
    pub fn with_rents(mut self, count: usize) -> Self {
        self.generation.rent_count = count;
        self
    }

    /// Sets how many leading bikes and users rents draw from.
    pub fn with_pairing_window(mut self, window: usize) -> Self {
        self.generation.pairing_window = window;
        self
    }

    pub fn generation(&self) -> &GenerationConfig {
        &self.generation
    }

    /// Builds the scenario (generates data but doesn't seed database).
    ///
    /// Bikes come first, then users from `rng`, then rents linking the two.
    pub fn build_data(
        &self,
        rng: &mut impl Rng,
        ids: &mut impl IdGenerator,
    ) -> Result<ScenarioResult, SeedError> {
        let start = Instant::now();

        let bike_gen = BikeGenerator::with_config(self.catalog.clone(), &self.generation)?;
        let user_gen = UserGenerator::with_catalog(self.catalog.clone())?;

        let bikes = bike_gen.generate_batch(self.generation.bike_count, ids);
        let users = user_gen.generate_batch(self.generation.user_count, rng, ids);

        let linker = RentLinker::new(self.generation.pairing_window);
        let rents = linker.link(self.generation.rent_count, &bikes, &users, ids)?;

        let metrics = ScenarioMetrics {
            generation_time_ms: start.elapsed().as_millis() as u64,
            seeding_time_ms: 0,
            bike_count: bikes.len(),
            user_count: users.len(),
            rent_count: rents.len(),
        };

        info!(
            "Generated {} bikes, {} users, {} rents in {}ms",
            metrics.bike_count, metrics.user_count, metrics.rent_count, metrics.generation_time_ms
        );

        Ok(ScenarioResult {
            bikes,
            users,
            rents,
            metrics,
        })
    }

    /// Builds the scenario and seeds it into `store`.
    pub async fn build<S: DocumentStore>(
        &self,
        store: &S,
        rng: &mut impl Rng,
        ids: &mut impl IdGenerator,
    ) -> Result<ScenarioResult, SeedError> {
        let mut result = self.build_data(rng, ids)?;
        let seed_start = Instant::now();

        Seeder::new(store)
            .with_progress_interval(self.generation.progress_interval)
            .seed_all(&result.bikes, &result.users, &result.rents)
            .await?;

        result.metrics.seeding_time_ms = seed_start.elapsed().as_millis() as u64;
        Ok(result)
    }
}
