//! Synthetic data seeding for the bike rental service.
//!
//! This crate generates plausible bikes, users, and rents in memory and loads
//! them into the `bikes`, `users`, and `rents` collections of a MongoDB database.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::from_env();
//! let metrics = BulkLoader::new(config).run().await?;
//! ```
//!
//! Every run mints fresh identifiers, so seeding the same database twice leaves
//! two disjoint sets of records side by side.

pub mod builders;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod generators;
pub mod loader;

// Re-export record types from the rentals crate
pub use rentals::{Bike, Rent, User};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{ScenarioBuilder, ScenarioMetrics, ScenarioResult};
    pub use crate::catalog::Catalog;
    pub use crate::config::{ConnectionTarget, GenerationConfig, SeedConfig};
    pub use crate::db::{DocumentStore, MongoStore, RecordSink, Seeder};
    pub use crate::error::SeedError;
    pub use crate::generators::{
        BikeGenerator, IdGenerator, ObjectIdGenerator, RentLinker, SequentialIdGenerator,
        UserGenerator,
    };
    pub use crate::loader::BulkLoader;
    pub use crate::{Bike, Rent, User};
}
