use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A bike available for rent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bike {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "pricePerHour")]
    pub price_per_hour: u16,
    pub owner: String,
}

/// A customer of the rental service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub surname: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub email: String,
}

/// A rental event.
///
/// The customer and bike are embedded copies taken when the rent is created;
/// nothing links them back to the documents in `users` and `bikes`.
///
/// Unlike [`Bike`] and [`User`], the identifier is stored under `id` rather
/// than `_id`, so the datastore assigns its own `_id` to every rent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rent {
    pub id: String,
    #[serde(with = "bson_datetime")]
    pub day: OffsetDateTime,
    pub customer: User,
    pub bike: Bike,
}

impl Rent {
    /// Creates a rent, truncating `day` to the millisecond precision of a
    /// BSON datetime so the value survives a round trip through storage.
    pub fn new(id: String, day: OffsetDateTime, customer: User, bike: Bike) -> Self {
        Self {
            id,
            day: truncate_to_millis(day),
            customer,
            bike,
        }
    }
}

fn truncate_to_millis(day: OffsetDateTime) -> OffsetDateTime {
    let nanos = day.nanosecond() / 1_000_000 * 1_000_000;
    day.replace_nanosecond(nanos).unwrap_or(day)
}

/// Serializes an [`OffsetDateTime`] as a BSON UTC datetime.
mod bson_datetime {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use time::OffsetDateTime;

    pub fn serialize<S>(day: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = day.unix_timestamp_nanos() / 1_000_000;
        bson::DateTime::from_millis(millis as i64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stored = bson::DateTime::deserialize(deserializer)?;
        let nanos = i128::from(stored.timestamp_millis()) * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::Bson;

    fn bike() -> Bike {
        Bike {
            id: "650000000000000000000001".to_string(),
            name: "Trek".to_string(),
            kind: "Gravel".to_string(),
            price_per_hour: 23,
            owner: "Tom".to_string(),
        }
    }

    fn user() -> User {
        User {
            id: "650000000000000000000002".to_string(),
            name: "Jack".to_string(),
            surname: "Lee".to_string(),
            phone_number: "555-4321".to_string(),
            email: "email7@gmail.com".to_string(),
        }
    }

    #[test]
    fn test_bike_field_names() {
        let doc = bson::to_document(&bike()).unwrap();
        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, ["_id", "name", "type", "pricePerHour", "owner"]);
        assert_eq!(doc.get("pricePerHour"), Some(&Bson::Int32(23)));
    }

    #[test]
    fn test_user_field_names() {
        let doc = bson::to_document(&user()).unwrap();
        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, ["_id", "name", "surname", "phoneNumber", "email"]);
    }

    #[test]
    fn test_rent_embeds_copies_under_id() {
        let rent = Rent::new(
            "650000000000000000000003".to_string(),
            OffsetDateTime::now_utc(),
            user(),
            bike(),
        );
        let doc = bson::to_document(&rent).unwrap();
        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "day", "customer", "bike"]);
        assert!(matches!(doc.get("day"), Some(Bson::DateTime(_))));
        assert_eq!(
            doc.get_document("bike").unwrap().get_str("_id").unwrap(),
            "650000000000000000000001"
        );
        assert_eq!(
            doc.get_document("customer").unwrap().get_str("email").unwrap(),
            "email7@gmail.com"
        );
    }

    #[test]
    fn test_rent_survives_bson_round_trip() {
        let rent = Rent::new(
            "650000000000000000000003".to_string(),
            OffsetDateTime::now_utc(),
            user(),
            bike(),
        );
        let doc = bson::to_document(&rent).unwrap();
        let back: Rent = bson::from_document(doc).unwrap();
        assert_eq!(back, rent);
    }

    #[test]
    fn test_rent_day_truncated_to_millis() {
        let day = OffsetDateTime::from_unix_timestamp_nanos(1_700_000_000_123_456_789).unwrap();
        let rent = Rent::new("r".to_string(), day, user(), bike());
        assert_eq!(rent.day.nanosecond(), 123_000_000);
    }
}
