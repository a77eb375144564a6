//! Login flow: client-side field validation, a filtered user lookup, and a
//! plaintext credential compare. Only admin users may enter the console.
//!
//! Failures are a banner above the form and always locally retryable. On
//! success the session projection is persisted and navigation moves to the
//! dashboard.

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use common::model::user::User;

use crate::api;
use crate::app::Route;
use crate::session;

mod helpers;

use helpers::{authenticate, validate_email, validate_password};

pub enum Msg {
    UpdateEmail(String),
    UpdatePassword(String),
    Submit,
    Authenticated(User),
    Failed(String),
}

pub struct LoginComponent {
    email: String,
    password: String,
    email_error: Option<String>,
    password_error: Option<String>,
    banner: Option<String>,
    busy: bool,
}

impl Component for LoginComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            email_error: None,
            password_error: None,
            banner: None,
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateEmail(value) => {
                self.email = value;
                self.email_error = None;
                true
            }
            Msg::UpdatePassword(value) => {
                self.password = value;
                self.password_error = None;
                true
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                self.email_error = validate_email(&self.email);
                self.password_error = validate_password(&self.password);
                if self.email_error.is_some() || self.password_error.is_some() {
                    return true;
                }

                self.busy = true;
                self.banner = None;

                let email = self.email.clone();
                let password = self.password.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::fetch_users_by_email(&email).await {
                        Ok(users) => match authenticate(&users, &email, &password) {
                            Ok(user) => link.send_message(Msg::Authenticated(user.clone())),
                            Err(failure) => {
                                link.send_message(Msg::Failed(failure.message().to_string()))
                            }
                        },
                        Err(_) => link.send_message(Msg::Failed(
                            "An error occurred during login".to_string(),
                        )),
                    }
                });
                true
            }
            Msg::Authenticated(user) => {
                session::login(&user);
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Dashboard);
                }
                false
            }
            Msg::Failed(message) => {
                self.busy = false;
                self.banner = Some(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="login-page">
                <div class="login-card">
                    <h2>{"Sign in to your account"}</h2>
                    {
                        if let Some(banner) = &self.banner {
                            html! { <div class="error-banner"><p>{ banner }</p></div> }
                        } else {
                            html! {}
                        }
                    }
                    <form onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}>
                        <label for="email">{"Email address"}</label>
                        <input
                            id="email"
                            type="email"
                            value={self.email.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::UpdateEmail(input.value())
                            })}
                        />
                        { field_error(&self.email_error) }

                        <label for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::UpdatePassword(input.value())
                            })}
                        />
                        { field_error(&self.password_error) }

                        <button type="submit" class="btn btn-primary" disabled={self.busy}>
                            { if self.busy { "Signing in..." } else { "Sign in" } }
                        </button>
                    </form>
                </div>
            </div>
        }
    }
}

fn field_error(error: &Option<String>) -> Html {
    match error {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}
