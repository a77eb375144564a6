//! Pure derivations over the fetched collections.
//!
//! Everything here is plain data-in/data-out so the aggregation arithmetic
//! can be exercised on the host target without a browser.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use num_format::{Locale, ToFormattedString};

use common::model::booking::Booking;
use common::model::property::Property;

/// How many properties the "Recent Properties" table shows.
pub const SAMPLE_SIZE: usize = 3;

const MS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    pub total_properties: usize,
    pub booked_properties: usize,
    pub available_properties: usize,
    pub unavailable_properties: usize,
    pub total_sales: f64,
}

/// Derives all dashboard numbers from the two in-memory collections.
///
/// Revenue sums `price_per_night × nights` over confirmed bookings. A
/// confirmed booking whose `property_id` matches no property contributes
/// nothing, silently; so does one whose dates fail to parse.
pub fn compute_stats(properties: &[Property], bookings: &[Booking]) -> DashboardStats {
    let total_properties = properties.len();
    let available_properties = properties.iter().filter(|p| p.available).count();
    let booked_properties = bookings.iter().filter(|b| b.is_confirmed()).count();

    let total_sales = bookings
        .iter()
        .filter(|b| b.is_confirmed())
        .filter_map(|booking| {
            let property = properties.iter().find(|p| p.id == booking.property_id)?;
            let nights = nights_between(&booking.check_in, &booking.check_out)?;
            Some(property.price_per_night * nights as f64)
        })
        .sum();

    DashboardStats {
        total_properties,
        booked_properties,
        available_properties,
        unavailable_properties: total_properties - available_properties,
        total_sales,
    }
}

/// First properties in fetch order, capped at [`SAMPLE_SIZE`].
pub fn sample_properties(properties: &[Property]) -> &[Property] {
    &properties[..properties.len().min(SAMPLE_SIZE)]
}

/// Nights between two ISO dates, rounded up so a partial last day still
/// counts as a night. Values may carry a time component.
pub fn nights_between(check_in: &str, check_out: &str) -> Option<i64> {
    let start = parse_instant_ms(check_in)?;
    let end = parse_instant_ms(check_out)?;
    Some(((end - start) as f64 / MS_PER_DAY).ceil() as i64)
}

fn parse_instant_ms(value: &str) -> Option<i64> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.timestamp_millis());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Renders an amount as a US-locale dollar string: `$1,234.50`.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let dollars = (cents / 100).to_formatted_string(&Locale::en);
    format!("{}${}.{:02}", sign, dollars, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::property::PropertyType;

    fn property(id: &str, price: f64, available: bool) -> Property {
        Property {
            id: id.to_string(),
            title: format!("Property {}", id),
            description: "A place".to_string(),
            kind: PropertyType::Apartment,
            price_per_night: price,
            location: "Lisbon".to_string(),
            image_url: "https://example.com/p.jpg".to_string(),
            available,
        }
    }

    fn booking(property_id: &str, status: &str, check_in: &str, check_out: &str) -> Booking {
        Booking {
            id: "b".to_string(),
            property_id: property_id.to_string(),
            status: status.to_string(),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
        }
    }

    #[test]
    fn availability_counts_partition_the_total() {
        let properties = vec![
            property("1", 100.0, true),
            property("2", 100.0, false),
            property("3", 100.0, true),
        ];
        let stats = compute_stats(&properties, &[]);
        assert_eq!(stats.total_properties, 3);
        assert_eq!(stats.available_properties, 2);
        assert_eq!(stats.unavailable_properties, 1);
        assert_eq!(
            stats.available_properties + stats.unavailable_properties,
            stats.total_properties
        );
    }

    #[test]
    fn revenue_sums_confirmed_bookings_only() {
        let properties = vec![property("1", 100.0, true)];
        let bookings = vec![
            booking("1", "confirmed", "2025-06-01", "2025-06-04"),
            booking("1", "pending", "2025-06-01", "2025-06-04"),
        ];
        let stats = compute_stats(&properties, &bookings);
        assert_eq!(stats.booked_properties, 1);
        assert_eq!(stats.total_sales, 300.0);
    }

    #[test]
    fn dangling_property_id_contributes_zero() {
        let properties = vec![property("1", 100.0, true)];
        let bookings = vec![
            booking("1", "confirmed", "2025-06-01", "2025-06-03"),
            booking("999", "confirmed", "2025-06-01", "2025-06-03"),
        ];
        let stats = compute_stats(&properties, &bookings);
        assert_eq!(stats.total_sales, 200.0);
        // Still counted as booked; only revenue skips it.
        assert_eq!(stats.booked_properties, 2);
    }

    #[test]
    fn unparseable_dates_contribute_zero() {
        let properties = vec![property("1", 100.0, true)];
        let bookings = vec![booking("1", "confirmed", "someday", "2025-06-03")];
        let stats = compute_stats(&properties, &bookings);
        assert_eq!(stats.total_sales, 0.0);
    }

    #[test]
    fn whole_day_night_counts() {
        assert_eq!(nights_between("2025-06-01", "2025-06-05"), Some(4));
        assert_eq!(nights_between("2025-06-01", "2025-06-02"), Some(1));
        assert_eq!(nights_between("2025-06-01", "2025-06-01"), Some(0));
    }

    #[test]
    fn partial_days_round_up() {
        assert_eq!(
            nights_between("2025-06-01T12:00:00", "2025-06-04T00:00:00"),
            Some(3)
        );
        assert_eq!(
            nights_between("2025-06-01T00:00:00Z", "2025-06-01T06:00:00Z"),
            Some(1)
        );
    }

    #[test]
    fn sample_is_the_first_three_in_fetch_order() {
        let properties = vec![
            property("9", 10.0, true),
            property("2", 10.0, true),
            property("5", 10.0, true),
            property("1", 10.0, true),
        ];
        let sample = sample_properties(&properties);
        let ids: Vec<&str> = sample.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["9", "2", "5"]);

        assert_eq!(sample_properties(&properties[..1]).len(), 1);
        assert!(sample_properties(&[]).is_empty());
    }

    #[test]
    fn usd_formatting_has_separators_and_two_decimals() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(99.999), "$100.00");
    }
}
