//! Property form: one component serving both add and edit.
//!
//! Both modes prefetch the full collection before the form renders — add to
//! compute the next-id hint, edit to locate the record to prefill. Submit
//! validates client-side, then POSTs (add) or PUTs (edit) the full record;
//! while in flight resubmission is disabled. Success navigates to the list,
//! failure keeps the entered values with a banner.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

mod messages;
mod props;
mod state;
mod update;
mod validate;
mod view;

pub use messages::Msg;
pub use props::PropertyFormProps;
pub use state::PropertyFormComponent;

impl Component for PropertyFormComponent {
    type Message = Msg;
    type Properties = PropertyFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PropertyFormComponent::new()
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
                    Ok(properties) => link.send_message(Msg::Prefetched(properties)),
                    Err(_) => link.send_message(Msg::PrefetchFailed(
                        "Failed to fetch properties".to_string(),
                    )),
                }
            });
        }
    }
}
