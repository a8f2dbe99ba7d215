//! Record types persisted by the bike rental service.
//!
//! Field names on the serialized form are a storage contract shared with every
//! reader of the `bikes`, `users` and `rents` collections.

pub mod models;

pub use models::{Bike, Rent, User};
