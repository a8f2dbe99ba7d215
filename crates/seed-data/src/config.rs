//! Configuration types for seeding.

use std::env;

use tracing::warn;

use crate::catalog::Catalog;

/// URI scheme of the target datastore.
pub const URI_SCHEME: &str = "mongodb";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: &str = "27017";
pub const DEFAULT_DATABASE: &str = "bikeService";

/// Where the seeded records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub host: String,
    pub port: String,
    /// Database name, used both in the URI path and to select the database.
    pub database: String,
}

impl Default for ConnectionTarget {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl ConnectionTarget {
    /// Returns the connection URI, `mongodb://<host>:<port>/<database>`.
    pub fn uri(&self) -> String {
        format!(
            "{URI_SCHEME}://{}:{}/{}",
            self.host, self.port, self.database
        )
    }
}

/// Record counts and numeric parameters for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub bike_count: usize,
    pub user_count: usize,
    pub rent_count: usize,

    /// Number of leading bikes and users reused cyclically by rents.
    pub pairing_window: usize,

    /// Lowest hourly price.
    pub base_price: u16,
    /// Number of distinct prices, starting at `base_price`.
    pub price_range: u16,

    /// Log insertion progress every this many records.
    pub progress_interval: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            bike_count: 10_000,
            user_count: 10_000,
            rent_count: 10_000,
            pairing_window: 20,
            base_price: 21,
            price_range: 20,
            progress_interval: 1_000,
        }
    }
}

/// Configuration for a seeding run, resolved once at process start.
#[derive(Debug, Clone, Default)]
pub struct SeedConfig {
    pub target: ConnectionTarget,

    /// Seed for the user random source. Entropy is used when unset.
    pub seed: Option<u64>,

    pub generation: GenerationConfig,
    pub catalog: Catalog,
}

impl SeedConfig {
    /// Reads `HOST`, `HOST_PORT`, `DB`, and `SEED` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let defaults = ConnectionTarget::default();
        let target = ConnectionTarget {
            host: get("HOST").unwrap_or(defaults.host),
            port: get("HOST_PORT").unwrap_or(defaults.port),
            database: get("DB").unwrap_or(defaults.database),
        };

        let seed = get("SEED").and_then(|raw| match raw.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                warn!("Ignoring SEED={raw}: {e}");
                None
            }
        });

        Self {
            target,
            seed,
            ..Self::default()
        }
    }
}
