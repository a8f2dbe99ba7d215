//! Storage abstraction used by the seeder.

use async_trait::async_trait;
use bson::Document;

use crate::error::SeedError;

/// A named collection that accepts records one at a time.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Name of the underlying collection.
    fn name(&self) -> &str;

    /// Persists one document as-is. The document carries its own identifier.
    async fn insert_one(&self, record: Document) -> Result<(), SeedError>;
}

/// A connected document datastore.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    type Sink: RecordSink;

    /// Resolves a collection by name. Collections are created on first insert.
    fn collection(&self, name: &str) -> Self::Sink;

    /// Releases the connection. Called exactly once per connected store.
    async fn disconnect(&self) -> Result<(), SeedError>;
}
