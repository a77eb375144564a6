use yew::{html, Component, Context, Html};
use yew_router::prelude::*;

use crate::components::dashboard::DashboardComponent;
use crate::components::layout::Layout;
use crate::components::login::LoginComponent;
use crate::components::properties::form::PropertyFormComponent;
use crate::components::properties::list::PropertyListComponent;
use crate::components::protected::RequireAuth;
use crate::theme;

/// Client-side routes. Unknown paths fall through to the login entry point.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/properties")]
    Properties,
    #[at("/properties/add")]
    AddProperty,
    #[at("/properties/edit/:id")]
    EditProperty { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        // The stored preference is applied once at the root; pages inherit it.
        theme::apply(theme::load());
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <HashRouter>
                <Switch<Route> render={switch} />
            </HashRouter>
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginComponent /> },
        Route::Dashboard => protected(html! { <DashboardComponent /> }),
        Route::Properties => protected(html! { <PropertyListComponent /> }),
        Route::AddProperty => protected(html! { <PropertyFormComponent /> }),
        Route::EditProperty { id } => {
            protected(html! { <PropertyFormComponent property_id={id} /> })
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Login} /> },
    }
}

fn protected(content: Html) -> Html {
    html! {
        <RequireAuth>
            <Layout>{ content }</Layout>
        </RequireAuth>
    }
}
