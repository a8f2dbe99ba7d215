//! Record identifier generation.

use bson::oid::ObjectId;

/// Produces identifiers that do not repeat.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Mints fresh ObjectIds and renders them as 24-character hex strings.
///
/// ObjectIds combine a timestamp, a per-process random value, and a counter,
/// so ids stay unique across runs as well as within one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectIdGenerator;

impl IdGenerator for ObjectIdGenerator {
    fn next_id(&mut self) -> String {
        ObjectId::new().to_hex()
    }
}

/// Deterministic `<prefix><counter>` ids for tests and dry runs.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id-")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_object_ids_are_unique_hex() {
        let mut ids = ObjectIdGenerator;
        let generated: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();

        assert_eq!(generated.len(), 1000);
        for id in &generated {
            assert_eq!(id.len(), 24);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIdGenerator::new("bike-");
        assert_eq!(ids.next_id(), "bike-0");
        assert_eq!(ids.next_id(), "bike-1");
    }
}
