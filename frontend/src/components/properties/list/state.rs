//! Component state for the property list.

use yew::prelude::*;

use common::model::property::Property;

/// State container for the `PropertyListComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct PropertyListComponent {
    /// Full property collection, in fetch order. Pages are slices of this.
    pub properties: Vec<Property>,

    /// True until the initial fetch settles.
    pub loading: bool,

    /// Set when the initial fetch fails; replaces the whole view.
    pub load_error: Option<String>,

    /// Set when a delete fails; shown as a dismissible banner above the
    /// table, leaving the collection intact.
    pub action_error: Option<String>,

    /// 1-based page, clamped to the valid range on every change.
    pub current_page: usize,

    /// Id selected for deletion while the confirmation sheet is open.
    /// `None` means no delete is pending; confirming without a pending id
    /// issues no remote call.
    pub pending_delete: Option<String>,

    /// Reference to the confirmation sheet's container node.
    pub delete_dialog_ref: NodeRef,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl PropertyListComponent {
    pub fn new() -> Self {
        Self {
            properties: Vec::new(),
            loading: true,
            load_error: None,
            action_error: None,
            current_page: 1,
            pending_delete: None,
            delete_dialog_ref: NodeRef::default(),
            loaded: false,
        }
    }
}
