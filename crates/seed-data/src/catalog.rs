//! Fixed lookup pools used as raw material for synthetic records.

use crate::error::SeedError;

pub const BIKE_BRANDS: [&str; 8] = [
    "Specialized",
    "Giant",
    "Trek",
    "Scott",
    "BMC",
    "Santa Cruz",
    "Norco",
    "Cube",
];

pub const BIKE_TYPES: [&str; 4] = ["MTB", "Downhill", "Freeride", "Gravel"];

/// First names, shared by bike owners and users.
pub const FIRST_NAMES: [&str; 7] = ["John", "Mike", "Tom", "Jack", "Thomas", "Jonny", "Martin"];

pub const SURNAMES: [&str; 7] = ["Smith", "Johnson", "Brown", "Wilson", "Lee", "Davis", "Evans"];

pub const PHONE_NUMBERS: [&str; 5] = ["555-1234", "555-5678", "555-9876", "555-4321", "555-8765"];

pub const EMAIL_DOMAINS: [&str; 4] = ["example.com", "gmail.com", "yahoo.com", "hotmail.com"];

/// The full set of pools the generators draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub brands: Vec<String>,
    pub bike_types: Vec<String>,
    pub owners: Vec<String>,
    pub names: Vec<String>,
    pub surnames: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub email_domains: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            brands: to_pool(&BIKE_BRANDS),
            bike_types: to_pool(&BIKE_TYPES),
            owners: to_pool(&FIRST_NAMES),
            names: to_pool(&FIRST_NAMES),
            surnames: to_pool(&SURNAMES),
            phone_numbers: to_pool(&PHONE_NUMBERS),
            email_domains: to_pool(&EMAIL_DOMAINS),
        }
    }
}

impl Catalog {
    /// Checks that every pool has at least one entry.
    pub fn validate(&self) -> Result<(), SeedError> {
        self.validate_bike_pools()?;
        self.validate_user_pools()
    }

    /// Checks the pools bikes are drawn from.
    pub fn validate_bike_pools(&self) -> Result<(), SeedError> {
        require_entries(&[
            ("brands", &self.brands),
            ("bike_types", &self.bike_types),
            ("owners", &self.owners),
        ])
    }

    /// Checks the pools users are drawn from.
    pub fn validate_user_pools(&self) -> Result<(), SeedError> {
        require_entries(&[
            ("names", &self.names),
            ("surnames", &self.surnames),
            ("phone_numbers", &self.phone_numbers),
            ("email_domains", &self.email_domains),
        ])
    }
}

fn require_entries(pools: &[(&'static str, &Vec<String>)]) -> Result<(), SeedError> {
    match pools.iter().find(|(_, pool)| pool.is_empty()) {
        Some((name, _)) => Err(SeedError::EmptyPool(*name)),
        None => Ok(()),
    }
}

fn to_pool(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
