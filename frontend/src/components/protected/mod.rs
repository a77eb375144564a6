use yew::{html, Component, Context, Html, Properties};
use yew_router::prelude::*;

use crate::app::Route;
use crate::session;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

/// Gate for protected routes: two states, decided solely by the presence of
/// a stored session at the moment the route is evaluated. Locked renders a
/// redirect to the login entry point; Unlocked renders the nested content.
pub struct RequireAuth;

impl Component for RequireAuth {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if session::current_session().is_some() {
            ctx.props().children.clone()
        } else {
            html! { <Redirect<Route> to={Route::Login} /> }
        }
    }
}
