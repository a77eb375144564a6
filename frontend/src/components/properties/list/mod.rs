//! Property list: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, pagination
//! arithmetic, and the delete-confirmation dialog.
//!
//! The full collection is fetched once on first render and paginated
//! client-side; deletion goes through an explicit confirm step and the
//! in-memory collection is only mutated after the remote delete succeeds.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

mod dialogs;
mod messages;
mod pagination;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::PropertyListComponent;

impl Component for PropertyListComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        PropertyListComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_properties().await {
                    Ok(properties) => link.send_message(Msg::Loaded(properties)),
                    Err(_) => link.send_message(Msg::LoadFailed(
                        "Failed to fetch properties".to_string(),
                    )),
                }
            });
        }
    }
}
