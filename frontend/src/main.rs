use crate::app::App;

mod api;
mod app;
mod components;
mod overlay;
mod session;
mod theme;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
