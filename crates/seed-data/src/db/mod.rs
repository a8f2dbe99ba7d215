//! Database integration for seeding.
//!
//! [`DocumentStore`] and [`RecordSink`] hide the datastore behind the few
//! operations seeding needs. [`MongoStore`] implements them over MongoDB, and
//! the [`Seeder`] drives record insertion through them.

mod mongo;
mod seeder;
mod store;

pub use mongo::{MongoCollection, MongoStore};
pub use seeder::{BIKES_COLLECTION, RENTS_COLLECTION, Seeder, USERS_COLLECTION};
pub use store::{DocumentStore, RecordSink};
