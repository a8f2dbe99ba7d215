//! MongoDB implementation of the storage abstraction.

use async_trait::async_trait;
use bson::{Document, doc};
use mongodb::{Client, Collection, Database};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::ConnectionTarget;
use crate::db::store::{DocumentStore, RecordSink};
use crate::error::SeedError;

/// A connected MongoDB database.
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Connects to the target and pings the database.
    ///
    /// The driver connects lazily, so the ping is what surfaces an
    /// unreachable server before anything is generated or inserted.
    pub async fn connect(target: &ConnectionTarget) -> Result<Self, SeedError> {
        let uri = target.uri();
        let connection_error = |source: mongodb::error::Error| SeedError::Connection {
            uri: uri.clone(),
            source,
        };

        info!("Connecting to {}", uri);

        let client = Client::with_uri_str(&uri).await.map_err(connection_error)?;
        let database = client.database(&target.database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(connection_error)?;

        info!("Connected to database {}", target.database);

        Ok(Self { client, database })
    }

    /// Returns the underlying database handle.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Reads back the first document in `collection` whose `field` equals `id`.
    pub async fn find_by_id<T>(
        &self,
        collection: &str,
        field: &str,
        id: &str,
    ) -> Result<Option<T>, mongodb::error::Error>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let mut filter = Document::new();
        filter.insert(field, id);
        self.database
            .collection::<T>(collection)
            .find_one(filter)
            .await
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    type Sink = MongoCollection;

    fn collection(&self, name: &str) -> MongoCollection {
        MongoCollection {
            inner: self.database.collection(name),
        }
    }

    async fn disconnect(&self) -> Result<(), SeedError> {
        debug!("Shutting down MongoDB client");
        self.client.clone().shutdown().await;
        Ok(())
    }
}

/// A MongoDB collection of raw documents.
pub struct MongoCollection {
    inner: Collection<Document>,
}

#[async_trait]
impl RecordSink for MongoCollection {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn insert_one(&self, record: Document) -> Result<(), SeedError> {
        self.inner
            .insert_one(record)
            .await
            .map_err(|e| SeedError::Insert {
                collection: self.inner.name().to_string(),
                source: Box::new(e),
            })?;
        Ok(())
    }
}
