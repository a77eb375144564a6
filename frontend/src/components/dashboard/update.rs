use yew::prelude::*;

use super::messages::Msg;
use super::state::DashboardComponent;

/// Mutates the dashboard state for a message and returns whether the view
/// should re-render. Both fetches arrive in one message so the view never
/// shows partial stats.
pub fn update(
    component: &mut DashboardComponent,
    _ctx: &Context<DashboardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Loaded {
            properties,
            bookings,
        } => {
            component.properties = properties;
            component.bookings = bookings;
            component.loading = false;
            true
        }
        Msg::LoadFailed(message) => {
            component.error = Some(message);
            component.loading = false;
            true
        }
    }
}
