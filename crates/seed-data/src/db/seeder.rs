//! Database seeding utilities.

use rentals::{Bike, Rent, User};
use serde::Serialize;
use tracing::{debug, info};

use crate::db::store::{DocumentStore, RecordSink};
use crate::error::SeedError;

pub const BIKES_COLLECTION: &str = "bikes";
pub const USERS_COLLECTION: &str = "users";
pub const RENTS_COLLECTION: &str = "rents";

/// Inserts generated records into a store, one document at a time.
///
/// The first failed insert aborts the run; records already written stay written.
pub struct Seeder<'a, S> {
    store: &'a S,
    progress_interval: usize,
}

impl<'a, S: DocumentStore> Seeder<'a, S> {
    /// Creates a new seeder over a connected store.
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            progress_interval: 1_000,
        }
    }

    /// Sets how many records pass between progress log lines.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Seeds bikes, then users, then rents into their collections.
    pub async fn seed_all(
        &self,
        bikes: &[Bike],
        users: &[User],
        rents: &[Rent],
    ) -> Result<(), SeedError> {
        let bikes_sink = self.store.collection(BIKES_COLLECTION);
        let users_sink = self.store.collection(USERS_COLLECTION);
        let rents_sink = self.store.collection(RENTS_COLLECTION);

        self.insert_all(&bikes_sink, bikes).await?;
        self.insert_all(&users_sink, users).await?;
        self.insert_all(&rents_sink, rents).await?;
        Ok(())
    }

    /// Inserts every record into `sink` in order, returning the count inserted.
    pub async fn insert_all<T>(&self, sink: &S::Sink, records: &[T]) -> Result<usize, SeedError>
    where
        T: Serialize + Sync,
    {
        info!("Seeding {} {}...", records.len(), sink.name());

        for (i, record) in records.iter().enumerate() {
            let document = bson::to_document(record).map_err(|source| SeedError::Encode {
                collection: sink.name().to_string(),
                source,
            })?;
            sink.insert_one(document).await?;

            if (i + 1) % self.progress_interval == 0 {
                debug!("  Seeded {}/{} {}", i + 1, records.len(), sink.name());
            }
        }

        info!("Seeded {} {}", records.len(), sink.name());
        Ok(records.len())
    }
}
