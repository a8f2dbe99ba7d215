//! Rent generation from already generated bikes and users.

use rentals::{Bike, Rent, User};
use time::OffsetDateTime;

use crate::error::SeedError;
use crate::generators::IdGenerator;

/// Pairs bikes and users into rents.
///
/// Rent `i` embeds copies of `bikes[i % window]` and `users[i % window]`, so
/// only the first `window` bikes and users ever appear in rents and the same
/// pairs repeat once the rent count exceeds the window.
pub struct RentLinker {
    pairing_window: usize,
}

impl RentLinker {
    pub fn new(pairing_window: usize) -> Self {
        Self { pairing_window }
    }

    pub fn pairing_window(&self) -> usize {
        self.pairing_window
    }

    /// Links `count` rents, stamping each with the current time.
    ///
    /// Fails unless `0 < window <= bikes.len()` and `window <= users.len()`.
    pub fn link(
        &self,
        count: usize,
        bikes: &[Bike],
        users: &[User],
        ids: &mut impl IdGenerator,
    ) -> Result<Vec<Rent>, SeedError> {
        let window = self.pairing_window;
        if window == 0 || window > bikes.len() || window > users.len() {
            return Err(SeedError::PairingWindow {
                window,
                bikes: bikes.len(),
                users: users.len(),
            });
        }

        let rents = (0..count)
            .map(|i| {
                let slot = i % window;
                Rent::new(
                    ids.next_id(),
                    OffsetDateTime::now_utc(),
                    users[slot].clone(),
                    bikes[slot].clone(),
                )
            })
            .collect();

        Ok(rents)
    }
}

impl Default for RentLinker {
    fn default() -> Self {
        Self::new(20)
    }
}
