//! Bike generation by round-robin selection.

use rentals::Bike;

use crate::catalog::Catalog;
use crate::config::GenerationConfig;
use crate::error::SeedError;
use crate::generators::IdGenerator;

/// Generates bikes whose fields depend only on their index.
///
/// The i-th bike takes `pool[i % pool.len()]` from each pool, so every pool
/// entry is covered evenly and a bike can be predicted from its index alone.
pub struct BikeGenerator {
    catalog: Catalog,
    base_price: u16,
    price_range: u16,
}

impl BikeGenerator {
    /// Creates a generator over the default catalog and prices.
    pub fn new() -> Self {
        let config = GenerationConfig::default();
        Self {
            catalog: Catalog::default(),
            base_price: config.base_price,
            price_range: config.price_range,
        }
    }

    /// Creates a generator with custom pools and prices.
    ///
    /// Fails if a bike pool is empty or the highest price overflows a u16.
    pub fn with_config(catalog: Catalog, config: &GenerationConfig) -> Result<Self, SeedError> {
        catalog.validate_bike_pools()?;

        let highest = u32::from(config.base_price) + u32::from(config.price_range.max(1)) - 1;
        if highest > u32::from(u16::MAX) {
            return Err(SeedError::PriceOverflow {
                base_price: config.base_price,
                price_range: config.price_range,
            });
        }

        Ok(Self {
            catalog,
            base_price: config.base_price,
            price_range: config.price_range,
        })
    }

    /// Generates the bike at `index`.
    pub fn generate(&self, index: usize, ids: &mut impl IdGenerator) -> Bike {
        Bike {
            id: ids.next_id(),
            name: cyclic(&self.catalog.brands, index),
            kind: cyclic(&self.catalog.bike_types, index),
            price_per_hour: self.price_for(index),
            owner: cyclic(&self.catalog.owners, index),
        }
    }

    /// Generates bikes for indices `0..count`.
    pub fn generate_batch(&self, count: usize, ids: &mut impl IdGenerator) -> Vec<Bike> {
        (0..count).map(|i| self.generate(i, ids)).collect()
    }

    /// Hourly price of the bike at `index`: `base_price + index % price_range`.
    ///
    /// A zero range pins every bike to the base price.
    pub fn price_for(&self, index: usize) -> u16 {
        let range = usize::from(self.price_range.max(1));
        // Checked in with_config: base_price + range - 1 fits in a u16
        self.base_price + (index % range) as u16
    }
}

impl Default for BikeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Pools are non-empty, checked in `with_config`.
fn cyclic(pool: &[String], index: usize) -> String {
    pool[index % pool.len()].clone()
}
