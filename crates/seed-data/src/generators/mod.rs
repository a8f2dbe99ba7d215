//! Entity generators for seed data.
//!
//! - [`IdGenerator`]: Mint unique record identifiers
//! - [`BikeGenerator`]: Generate bikes by cycling through the catalog pools
//! - [`UserGenerator`]: Generate users by sampling the catalog pools at random
//! - [`RentLinker`]: Pair generated bikes and users into rents

pub mod bike;
pub mod id;
pub mod rent;
pub mod user;

pub use bike::BikeGenerator;
pub use id::{IdGenerator, ObjectIdGenerator, SequentialIdGenerator};
pub use rent::RentLinker;
pub use user::UserGenerator;
