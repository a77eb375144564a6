//! Update function for the property list.
//!
//! Delete goes through two steps: `RequestDelete` only records the target
//! id and opens the confirmation sheet; the remote call fires on
//! `ConfirmDelete`. The in-memory collection is mutated on `Deleted` alone,
//! so a failed delete can never make a row vanish.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::overlay::modal_sheet::{close_modal_sheet, open_modal_sheet};
use crate::toast::show_toast;

use super::messages::Msg;
use super::pagination::{clamp_page, PAGE_SIZE};
use super::state::PropertyListComponent;

pub fn update(
    component: &mut PropertyListComponent,
    ctx: &Context<PropertyListComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Loaded(properties) => {
            component.properties = properties;
            component.loading = false;
            true
        }
        Msg::LoadFailed(message) => {
            component.load_error = Some(message);
            component.loading = false;
            true
        }
        Msg::GoToPage(page) => {
            component.current_page = clamp_page(page, component.properties.len(), PAGE_SIZE);
            true
        }
        Msg::RequestDelete(id) => {
            component.pending_delete = Some(id);
            open_modal_sheet(component.delete_dialog_ref.clone());
            true
        }
        Msg::CancelDelete => {
            component.pending_delete = None;
            close_modal_sheet(component.delete_dialog_ref.clone());
            true
        }
        Msg::ConfirmDelete => {
            if let Some(id) = component.pending_delete.clone() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::delete_property(&id).await {
                        Ok(()) => link.send_message(Msg::Deleted(id)),
                        Err(_) => link.send_message(Msg::DeleteFailed(
                            "Failed to delete property".to_string(),
                        )),
                    }
                });
            }
            false
        }
        Msg::Deleted(id) => {
            component.properties.retain(|p| p.id != id);
            component.pending_delete = None;
            // Removing the last row of the last page must not leave the
            // view on a page that no longer exists.
            component.current_page = clamp_page(
                component.current_page,
                component.properties.len(),
                PAGE_SIZE,
            );
            close_modal_sheet(component.delete_dialog_ref.clone());
            show_toast("Property deleted.");
            true
        }
        Msg::DeleteFailed(message) => {
            component.pending_delete = None;
            component.action_error = Some(message);
            close_modal_sheet(component.delete_dialog_ref.clone());
            true
        }
        Msg::DismissError => {
            component.action_error = None;
            true
        }
    }
}
