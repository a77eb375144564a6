//! Update function for the property form.

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use common::model::property::{Property, PropertyType};

use crate::api;
use crate::app::Route;
use crate::toast::show_toast;

use super::messages::Msg;
use super::state::PropertyFormComponent;
use super::validate::{next_property_id, validate};

pub fn update(
    component: &mut PropertyFormComponent,
    ctx: &Context<PropertyFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Prefetched(properties) => {
            component.loading = false;
            match &ctx.props().property_id {
                Some(id) => match properties.iter().find(|p| &p.id == id) {
                    Some(existing) => {
                        component.id = existing.id.clone();
                        component.title = existing.title.clone();
                        component.description = existing.description.clone();
                        component.kind = existing.kind;
                        component.price = existing.price_per_night.to_string();
                        component.location = existing.location.clone();
                        component.image_url = existing.image_url.clone();
                        component.available = existing.available;
                    }
                    None => {
                        component.error = Some("Property not found".to_string());
                    }
                },
                None => {
                    component.id = next_property_id(&properties);
                }
            }
            true
        }
        Msg::PrefetchFailed(message) => {
            component.loading = false;
            component.error = Some(message);
            true
        }
        Msg::UpdateTitle(value) => {
            component.title = value;
            component.errors.title = None;
            true
        }
        Msg::UpdateDescription(value) => {
            component.description = value;
            component.errors.description = None;
            true
        }
        Msg::UpdateKind(value) => {
            if let Some(kind) = PropertyType::parse(&value) {
                component.kind = kind;
            }
            true
        }
        Msg::UpdatePrice(value) => {
            component.price = value;
            component.errors.price = None;
            true
        }
        Msg::UpdateLocation(value) => {
            component.location = value;
            component.errors.location = None;
            true
        }
        Msg::UpdateImageUrl(value) => {
            component.image_url = value;
            component.errors.image_url = None;
            true
        }
        Msg::SetAvailable(value) => {
            component.available = value;
            true
        }
        Msg::Submit => {
            if component.busy {
                return false;
            }
            component.errors = validate(
                &component.title,
                &component.description,
                &component.price,
                &component.location,
                &component.image_url,
            );
            if !component.errors.is_empty() {
                return true;
            }
            let Ok(price_per_night) = component.price.trim().parse::<f64>() else {
                return true;
            };

            component.busy = true;
            component.error = None;

            let record = Property {
                id: component.id.clone(),
                title: component.title.trim().to_string(),
                description: component.description.trim().to_string(),
                kind: component.kind,
                price_per_night,
                location: component.location.trim().to_string(),
                image_url: component.image_url.trim().to_string(),
                available: component.available,
            };
            let editing = ctx.props().property_id.is_some();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = if editing {
                    api::update_property(&record).await
                } else {
                    api::create_property(&record).await
                };
                match result {
                    Ok(()) => link.send_message(Msg::Saved),
                    Err(_) => {
                        let message = if editing {
                            "Failed to update property"
                        } else {
                            "Failed to create property"
                        };
                        link.send_message(Msg::SaveFailed(message.to_string()));
                    }
                }
            });
            true
        }
        Msg::Saved => {
            show_toast("Property saved.");
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::Properties);
            }
            false
        }
        Msg::SaveFailed(message) => {
            component.busy = false;
            component.error = Some(message);
            true
        }
    }
}
