//! Pure validation and id-assignment helpers for the property form.

use regex::Regex;

use common::model::property::Property;

/// Per-field validation messages; `None` means the field passed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.location.is_none()
            && self.image_url.is_none()
    }
}

/// Validates the raw form inputs. The type field needs no rule here: the
/// select only offers the enumerated values.
pub fn validate(
    title: &str,
    description: &str,
    price: &str,
    location: &str,
    image_url: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if title.trim().is_empty() {
        errors.title = Some("Title is required".to_string());
    }
    if description.trim().is_empty() {
        errors.description = Some("Description is required".to_string());
    }
    errors.price = validate_price(price);
    if location.trim().is_empty() {
        errors.location = Some("Location is required".to_string());
    }
    errors.image_url = validate_image_url(image_url);
    errors
}

fn validate_price(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Price is required".to_string());
    }
    match value.trim().parse::<f64>() {
        Ok(price) if price >= 1.0 => None,
        Ok(_) => Some("Price must be at least 1".to_string()),
        Err(_) => Some("Price must be a number".to_string()),
    }
}

fn validate_image_url(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Image URL is required".to_string());
    }
    if is_valid_url(value.trim()) {
        None
    } else {
        Some("Must be a valid URL".to_string())
    }
}

/// Accepts absolute http(s) URLs with a host part.
pub fn is_valid_url(value: &str) -> bool {
    let re = Regex::new(r"^https?://[^\s/$.?#][^\s]*$").unwrap();
    re.is_match(value)
}

/// Best-effort id for a new record: one past the highest numeric id, `1`
/// when none exist. Non-numeric ids are ignored. A convenience for the
/// single-admin console, not a unique-id allocator; the collection service
/// does not enforce uniqueness.
pub fn next_property_id(properties: &[Property]) -> String {
    let max_id = properties
        .iter()
        .filter_map(|p| p.id.trim().parse::<i64>().ok())
        .max()
        .unwrap_or(0);
    (max_id + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::property::PropertyType;

    fn property(id: &str) -> Property {
        Property {
            id: id.to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            kind: PropertyType::House,
            price_per_night: 10.0,
            location: "l".to_string(),
            image_url: "https://example.com/i.jpg".to_string(),
            available: true,
        }
    }

    #[test]
    fn next_id_skips_non_numeric_ids() {
        let properties: Vec<Property> =
            ["1", "3", "abc", "5"].iter().map(|id| property(id)).collect();
        assert_eq!(next_property_id(&properties), "6");
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_property_id(&[]), "1");
        let only_junk = vec![property("uuid-ish")];
        assert_eq!(next_property_id(&only_junk), "1");
    }

    #[test]
    fn all_fields_valid_passes() {
        let errors = validate(
            "Sea View Villa",
            "Two floors",
            "250",
            "Alicante",
            "https://example.com/villa.jpg",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn required_fields_are_reported_individually() {
        let errors = validate("", "", "", "", "");
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert_eq!(
            errors.description.as_deref(),
            Some("Description is required")
        );
        assert_eq!(errors.price.as_deref(), Some("Price is required"));
        assert_eq!(errors.location.as_deref(), Some("Location is required"));
        assert_eq!(errors.image_url.as_deref(), Some("Image URL is required"));
    }

    #[test]
    fn price_below_minimum_is_rejected() {
        let errors = validate("t", "d", "0", "l", "https://example.com/i.jpg");
        assert_eq!(errors.price.as_deref(), Some("Price must be at least 1"));
        let errors = validate("t", "d", "0.5", "l", "https://example.com/i.jpg");
        assert_eq!(errors.price.as_deref(), Some("Price must be at least 1"));
        let errors = validate("t", "d", "1", "l", "https://example.com/i.jpg");
        assert!(errors.price.is_none());
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let errors = validate("t", "d", "cheap", "l", "https://example.com/i.jpg");
        assert_eq!(errors.price.as_deref(), Some("Price must be a number"));
    }

    #[test]
    fn malformed_urls_are_rejected() {
        assert!(!is_valid_url("not-a-url"));
        assert!(!is_valid_url("ftp://example.com/x"));
        assert!(!is_valid_url("https:// spaced.com"));
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/images/villa.jpg?w=800"));

        let errors = validate("t", "d", "10", "l", "not-a-url");
        assert_eq!(errors.image_url.as_deref(), Some("Must be a valid URL"));
    }
}
