use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use common::model::user::SessionUser;

use crate::app::Route;
use crate::session;
use crate::theme::{self, Theme};

pub enum Msg {
    ToggleTheme,
    Logout,
}

/// Top bar on every protected page: brand, greeting, a dashboard shortcut
/// (hidden while already on the dashboard), the theme toggle, and logout.
pub struct HeaderComponent {
    user: Option<SessionUser>,
    theme: Theme,
}

impl Component for HeaderComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            user: session::current_session(),
            theme: theme::load(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleTheme => {
                self.theme = self.theme.toggled();
                theme::store(self.theme);
                theme::apply(self.theme);
                true
            }
            Msg::Logout => {
                session::logout();
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_dashboard = link.route::<Route>() == Some(Route::Dashboard);

        html! {
            <header class="app-header">
                <div class="app-header-brand">{"Rental Admin"}</div>
                <div class="app-header-actions">
                    {
                        if let Some(user) = &self.user {
                            html! {
                                <span class="app-header-greeting">
                                    { format!("Hello, {}", user.name) }
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if !on_dashboard {
                            html! {
                                <Link<Route> to={Route::Dashboard} classes="icon-btn">
                                    <i class="material-icons">{"dashboard"}</i>
                                </Link<Route>>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <button
                        class="icon-btn"
                        title="Toggle dark mode"
                        onclick={link.callback(|_| Msg::ToggleTheme)}
                    >
                        <i class="material-icons">
                            { if self.theme == Theme::Dark { "light_mode" } else { "dark_mode" } }
                        </i>
                    </button>
                    <button
                        class="icon-btn"
                        title="Logout"
                        onclick={link.callback(|_| Msg::Logout)}
                    >
                        <i class="material-icons">{"logout"}</i>
                    </button>
                </div>
            </header>
        }
    }
}
