//! Component state for the property form.

use common::model::property::PropertyType;

use super::validate::FieldErrors;

/// State container for the `PropertyFormComponent`.
///
/// Text inputs are held as the raw strings the user typed; the price is
/// only parsed during validation so a half-typed value never snaps back.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct PropertyFormComponent {
    /// Record id. Prefilled with the next-id hint in add mode, with the
    /// existing id in edit mode.
    pub id: String,

    pub title: String,
    pub description: String,
    pub kind: PropertyType,

    /// Raw price input.
    pub price: String,

    pub location: String,
    pub image_url: String,
    pub available: bool,

    /// Per-field validation messages from the last submit attempt.
    pub errors: FieldErrors,

    /// True while the prefetch is in flight.
    pub loading: bool,

    /// True while a submit is in flight; blocks resubmission.
    pub busy: bool,

    /// Banner message (prefetch or submit failure, unknown edit id).
    pub error: Option<String>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl PropertyFormComponent {
    pub fn new() -> Self {
        Self {
            id: "1".to_string(),
            title: String::new(),
            description: String::new(),
            kind: PropertyType::default(),
            price: "0".to_string(),
            location: String::new(),
            image_url: String::new(),
            available: true,
            errors: FieldErrors::default(),
            loading: true,
            busy: false,
            error: None,
            loaded: false,
        }
    }
}
