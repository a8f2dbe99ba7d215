//! User generation by uniform random selection.

use rand::Rng;
use rentals::User;

use crate::catalog::Catalog;
use crate::error::SeedError;
use crate::generators::IdGenerator;

/// Generates users with independently sampled name, surname, and phone.
///
/// Output is only reproducible when the caller supplies a seeded `Rng`.
pub struct UserGenerator {
    catalog: Catalog,
}

impl UserGenerator {
    /// Creates a user generator over the default catalog.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::default(),
        }
    }

    /// Creates a generator with custom pools. Fails if a user pool is empty.
    pub fn with_catalog(catalog: Catalog) -> Result<Self, SeedError> {
        catalog.validate_user_pools()?;
        Ok(Self { catalog })
    }

    /// Generates the user at `index`.
    ///
    /// The index only feeds the email local part, `email<index>@<domain>`.
    pub fn generate(&self, index: usize, rng: &mut impl Rng, ids: &mut impl IdGenerator) -> User {
        let id = ids.next_id();
        let name = pick(&self.catalog.names, rng);
        let surname = pick(&self.catalog.surnames, rng);
        let phone_number = pick(&self.catalog.phone_numbers, rng);
        let domain = pick(&self.catalog.email_domains, rng);

        User {
            id,
            name,
            surname,
            phone_number,
            email: format!("email{index}@{domain}"),
        }
    }

    /// Generates users for indices `0..count`.
    pub fn generate_batch(
        &self,
        count: usize,
        rng: &mut impl Rng,
        ids: &mut impl IdGenerator,
    ) -> Vec<User> {
        (0..count).map(|i| self.generate(i, rng, ids)).collect()
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Pools are non-empty, checked in `with_catalog`.
fn pick(pool: &[String], rng: &mut impl Rng) -> String {
    pool[rng.gen_range(0..pool.len())].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{ObjectIdGenerator, SequentialIdGenerator};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_user() {
        let user_gen = UserGenerator::new();
        let catalog = Catalog::default();
        let mut rng = rand::thread_rng();
        let mut ids = ObjectIdGenerator;
        let user = user_gen.generate(3, &mut rng, &mut ids);

        assert!(catalog.names.contains(&user.name));
        assert!(catalog.surnames.contains(&user.surname));
        assert!(catalog.phone_numbers.contains(&user.phone_number));

        let (local, domain) = user.email.split_once('@').unwrap();
        assert_eq!(local, "email3");
        assert!(catalog.email_domains.iter().any(|d| d == domain));
    }

    #[test]
    fn test_generate_batch() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();
        let mut ids = ObjectIdGenerator;
        let users = user_gen.generate_batch(10, &mut rng, &mut ids);

        assert_eq!(users.len(), 10);

        // All ids should be unique
        let unique: HashSet<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(unique.len(), 10);

        for (i, user) in users.iter().enumerate() {
            assert!(user.email.starts_with(&format!("email{i}@")));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let user_gen = UserGenerator::new();

        let mut rng = StdRng::seed_from_u64(12345);
        let first = user_gen.generate_batch(50, &mut rng, &mut SequentialIdGenerator::default());

        let mut rng = StdRng::seed_from_u64(12345);
        let second = user_gen.generate_batch(50, &mut rng, &mut SequentialIdGenerator::default());

        assert_eq!(first, second);
    }

    #[test]
    fn test_single_entry_pools_are_fixed() {
        let catalog = Catalog {
            names: vec!["Ada".to_string()],
            surnames: vec!["Lovelace".to_string()],
            phone_numbers: vec!["555-0000".to_string()],
            email_domains: vec!["example.org".to_string()],
            ..Catalog::default()
        };
        let user_gen = UserGenerator::with_catalog(catalog).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let user = user_gen.generate(12, &mut rng, &mut SequentialIdGenerator::default());

        assert_eq!(user.name, "Ada");
        assert_eq!(user.surname, "Lovelace");
        assert_eq!(user.phone_number, "555-0000");
        assert_eq!(user.email, "email12@example.org");
    }

    #[test]
    fn test_empty_user_pool_rejected() {
        let catalog = Catalog {
            phone_numbers: Vec::new(),
            ..Catalog::default()
        };

        assert!(matches!(
            UserGenerator::with_catalog(catalog),
            Err(SeedError::EmptyPool("phone_numbers"))
        ));
    }

    #[test]
    fn test_random_selection_covers_pools() {
        let user_gen = UserGenerator::new();
        let mut rng = StdRng::seed_from_u64(99);
        let users = user_gen.generate_batch(2000, &mut rng, &mut SequentialIdGenerator::default());

        let names: HashSet<_> = users.iter().map(|u| u.name.as_str()).collect();
        let phones: HashSet<_> = users.iter().map(|u| u.phone_number.as_str()).collect();
        assert_eq!(names.len(), 7);
        assert_eq!(phones.len(), 5);
    }
}
