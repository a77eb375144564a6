//! Component state for the dashboard.

use common::model::booking::Booking;
use common::model::property::Property;

/// State container for the `DashboardComponent`.
///
/// Holds the two fetched collections plus the loading/error flags. All
/// derived numbers are recomputed from the collections on every render;
/// nothing is cached.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct DashboardComponent {
    /// Full property collection, in fetch order.
    pub properties: Vec<Property>,

    /// Full booking collection, in fetch order.
    pub bookings: Vec<Booking>,

    /// True until both fetches have settled.
    pub loading: bool,

    /// Set when either fetch fails; the view then renders only the error.
    pub error: Option<String>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            properties: Vec::new(),
            bookings: Vec::new(),
            loading: true,
            error: None,
            loaded: false,
        }
    }
}
