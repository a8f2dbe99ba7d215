//! In-memory document store for exercising the loader without MongoDB.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use bson::Document;
use seed_data::config::{GenerationConfig, SeedConfig};
use seed_data::db::{DocumentStore, RecordSink};
use seed_data::error::SeedError;

#[derive(Debug, Default)]
pub struct State {
    pub collections: HashMap<String, Vec<Document>>,
    /// Collection name of every successful insert, in order.
    pub insert_log: Vec<String>,
    pub disconnects: usize,
    /// Fail the insert after this many successful ones.
    pub fail_after: Option<usize>,
    pub fail_disconnect: bool,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(inserts: usize) -> Self {
        let store = Self::new();
        store.state().fail_after = Some(inserts);
        store
    }

    pub fn failing_disconnect(self) -> Self {
        self.state().fail_disconnect = true;
        self
    }

    pub fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.state()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn total_documents(&self) -> usize {
        self.state().collections.values().map(Vec::len).sum()
    }
}

pub struct MemorySink {
    name: String,
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl RecordSink for MemorySink {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert_one(&self, record: Document) -> Result<(), SeedError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_after == Some(state.insert_log.len()) {
            return Err(SeedError::Insert {
                collection: self.name.clone(),
                source: "simulated write failure".into(),
            });
        }
        state.insert_log.push(self.name.clone());
        state
            .collections
            .entry(self.name.clone())
            .or_default()
            .push(record);
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    type Sink = MemorySink;

    fn collection(&self, name: &str) -> MemorySink {
        MemorySink {
            name: name.to_string(),
            state: Arc::clone(&self.state),
        }
    }

    async fn disconnect(&self) -> Result<(), SeedError> {
        let mut state = self.state();
        state.disconnects += 1;
        if state.fail_disconnect {
            return Err(SeedError::Disconnect("simulated disconnect failure".into()));
        }
        Ok(())
    }
}

/// A config small enough to seed in a unit test.
pub fn small_config(bikes: usize, users: usize, rents: usize) -> SeedConfig {
    SeedConfig {
        generation: GenerationConfig {
            bike_count: bikes,
            user_count: users,
            rent_count: rents,
            progress_interval: 10,
            ..GenerationConfig::default()
        },
        ..SeedConfig::default()
    }
}
