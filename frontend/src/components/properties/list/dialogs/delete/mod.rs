use yew::html::Scope;
use yew::prelude::*;

use crate::components::properties::list::{Msg, PropertyListComponent};
use crate::overlay::modal_sheet::ModalSheet;

/// Confirmation step for deletes. The remote call only fires from the
/// Delete button here; Cancel drops the pending id without any request.
pub fn delete_dialog(component: &PropertyListComponent, link: &Scope<PropertyListComponent>) -> Html {
    html! {
        <ModalSheet node_ref={component.delete_dialog_ref.clone()}>
            <div class="modal-backdrop">
                <div class="modal-card">
                    <h3>{"Delete Property"}</h3>
                    <p>{"Are you sure you want to delete this property? This action cannot be undone."}</p>
                    <div class="modal-actions">
                        <button class="btn" onclick={link.callback(|_| Msg::CancelDelete)}>
                            {"Cancel"}
                        </button>
                        <button class="btn btn-danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                            {"Delete"}
                        </button>
                    </div>
                </div>
            </div>
        </ModalSheet>
    }
}
