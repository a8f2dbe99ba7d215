//! Fluent builder APIs for seed scenarios.
//!
//! The [`ScenarioBuilder`] generates bikes, users, and rents together and
//! optionally seeds them into a store.

mod scenario;

pub use scenario::{ScenarioBuilder, ScenarioMetrics, ScenarioResult};
