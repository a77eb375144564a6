use serde::{Deserialize, Serialize};

/// Status value that counts toward occupancy and revenue aggregation.
pub const CONFIRMED: &str = "confirmed";

/// A booking record from the `/bookings` collection. Read-only from the
/// console's perspective.
///
/// `property_id` is a foreign key into the property collection but is not
/// enforced there; aggregation tolerates a booking whose property no longer
/// exists. `check_in`/`check_out` are ISO-formatted calendar dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(deserialize_with = "super::de_id")]
    pub id: String,
    #[serde(deserialize_with = "super::de_id")]
    pub property_id: String,
    pub status: String,
    pub check_in: String,
    pub check_out: String,
}

impl Booking {
    pub fn is_confirmed(&self) -> bool {
        self.status == CONFIRMED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_numeric_foreign_key() {
        let json = r#"{
            "id": 9,
            "propertyId": 4,
            "status": "confirmed",
            "checkIn": "2025-06-01",
            "checkOut": "2025-06-05"
        }"#;
        let booking: Booking = serde_json::from_str(json).expect("record should parse");
        assert_eq!(booking.property_id, "4");
        assert!(booking.is_confirmed());
    }

    #[test]
    fn only_the_confirmed_literal_counts() {
        let json = r#"{
            "id": "9",
            "propertyId": "4",
            "status": "pending",
            "checkIn": "2025-06-01",
            "checkOut": "2025-06-05"
        }"#;
        let booking: Booking = serde_json::from_str(json).expect("record should parse");
        assert!(!booking.is_confirmed());
    }
}
