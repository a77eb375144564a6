use yew::prelude::*;

/// Properties for the `PropertyFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct PropertyFormProps {
    /// When set, the form edits the existing record with this id instead of
    /// creating a new one. The record is located in the prefetched
    /// collection during the first render; an unknown id is an error state.
    #[prop_or_default]
    pub property_id: Option<String>,
}
