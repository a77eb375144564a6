//! Dashboard: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and the pure stat
//! derivations.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `DashboardComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, fetch the property and booking collections
//!   concurrently; the view only leaves its loading state once both settle,
//!   and either failure puts it into an error-only state.

use futures::future::try_join;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

mod messages;
mod state;
mod stats;
mod update;
mod view;

pub use messages::Msg;
pub use state::DashboardComponent;

impl Component for DashboardComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardComponent::new()
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
                match try_join(api::fetch_properties(), api::fetch_bookings()).await {
                    Ok((properties, bookings)) => {
                        link.send_message(Msg::Loaded {
                            properties,
                            bookings,
                        });
                    }
                    Err(_) => {
                        link.send_message(Msg::LoadFailed("Failed to fetch data".to_string()));
                    }
                }
            });
        }
    }
}
