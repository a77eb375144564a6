use serde::{Deserialize, Serialize};

/// A rental property record as exposed by the `/properties` collection.
///
/// Field names follow the collection service's camelCase convention on the
/// wire. `id` is assigned by the caller on create; the service does not
/// enforce uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(deserialize_with = "super::de_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub price_per_night: f64,
    pub location: String,
    pub image_url: String,
    pub available: bool,
}

/// The closed set of property categories accepted by the add/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Villa,
    Apartment,
    Studio,
    House,
    Cottage,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Villa,
        PropertyType::Apartment,
        PropertyType::Studio,
        PropertyType::House,
        PropertyType::Cottage,
    ];

    /// Wire value, as stored in the collection.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Villa => "villa",
            PropertyType::Apartment => "apartment",
            PropertyType::Studio => "studio",
            PropertyType::House => "house",
            PropertyType::Cottage => "cottage",
        }
    }

    /// Capitalized form for display in selects and tables.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Villa => "Villa",
            PropertyType::Apartment => "Apartment",
            PropertyType::Studio => "Studio",
            PropertyType::House => "House",
            PropertyType::Cottage => "Cottage",
        }
    }

    pub fn parse(value: &str) -> Option<PropertyType> {
        PropertyType::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl Default for PropertyType {
    fn default() -> Self {
        PropertyType::Villa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_wire_record() {
        let json = r#"{
            "id": "4",
            "title": "Sea View Villa",
            "description": "Two floors, private pool",
            "type": "villa",
            "pricePerNight": 250.0,
            "location": "Alicante",
            "imageUrl": "https://example.com/villa.jpg",
            "available": true
        }"#;
        let property: Property = serde_json::from_str(json).expect("record should parse");
        assert_eq!(property.id, "4");
        assert_eq!(property.kind, PropertyType::Villa);
        assert_eq!(property.price_per_night, 250.0);
        assert!(property.available);
    }

    #[test]
    fn accepts_numeric_ids() {
        let json = r#"{
            "id": 17,
            "title": "Loft",
            "description": "Downtown loft",
            "type": "studio",
            "pricePerNight": 80,
            "location": "Madrid",
            "imageUrl": "https://example.com/loft.jpg",
            "available": false
        }"#;
        let property: Property = serde_json::from_str(json).expect("record should parse");
        assert_eq!(property.id, "17");
    }

    #[test]
    fn serializes_back_to_camel_case() {
        let property = Property {
            id: "1".to_string(),
            title: "Cottage".to_string(),
            description: "Small cottage".to_string(),
            kind: PropertyType::Cottage,
            price_per_night: 45.5,
            location: "Asturias".to_string(),
            image_url: "https://example.com/c.jpg".to_string(),
            available: true,
        };
        let json = serde_json::to_value(&property).expect("record should serialize");
        assert_eq!(json["pricePerNight"], 45.5);
        assert_eq!(json["imageUrl"], "https://example.com/c.jpg");
        assert_eq!(json["type"], "cottage");
    }

    #[test]
    fn parses_every_wire_value() {
        for kind in PropertyType::ALL {
            assert_eq!(PropertyType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(PropertyType::parse("castle"), None);
    }
}
