use yew::{html, Component, Context, Html, Properties};

use crate::components::header::HeaderComponent;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

/// Chrome around every protected page: header on top, content below.
pub struct Layout;

impl Component for Layout {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-shell">
                <HeaderComponent />
                <main class="app-content">{ ctx.props().children.clone() }</main>
            </div>
        }
    }
}
