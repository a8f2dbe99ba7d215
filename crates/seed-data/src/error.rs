//! Error types for seeding.

use thiserror::Error;

/// Boxed error raised by a storage backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while generating or loading records.
///
/// None of these are recovered from: the loader stops at the first one.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The datastore could not be reached.
    #[error("Connection error for {uri}: {source}")]
    Connection {
        uri: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// A single record failed to persist.
    #[error("Insert into '{collection}' failed: {source}")]
    Insert {
        collection: String,
        #[source]
        source: BoxError,
    },

    /// Releasing the connection failed.
    #[error("Disconnect error: {0}")]
    Disconnect(#[source] BoxError),

    /// A record could not be converted to a BSON document.
    #[error("Encoding record for '{collection}' failed: {source}")]
    Encode {
        collection: String,
        #[source]
        source: bson::ser::Error,
    },

    /// Rents pair records from a window larger than what was generated.
    #[error("Pairing window {window} needs at least {window} bikes and users (have {bikes} bikes, {users} users)")]
    PairingWindow {
        window: usize,
        bikes: usize,
        users: usize,
    },

    /// The highest price `base_price + price_range - 1` does not fit in a u16.
    #[error("Price range {price_range} from base price {base_price} exceeds {max}", max = u16::MAX)]
    PriceOverflow { base_price: u16, price_range: u16 },

    /// A catalog pool has no entries to select from.
    #[error("Catalog pool '{0}' is empty")]
    EmptyPool(&'static str),
}
