//! View rendering for the dashboard: four stat cards, the recent-properties
//! table, and two quick-action links.

use yew::prelude::*;
use yew_router::prelude::*;

use common::model::property::Property;

use crate::app::Route;

use super::state::DashboardComponent;
use super::stats::{compute_stats, format_usd, sample_properties};

pub fn view(component: &DashboardComponent, _ctx: &Context<DashboardComponent>) -> Html {
    if component.loading {
        return html! {
            <div class="spinner-wrap"><div class="spinner" /></div>
        };
    }

    if let Some(error) = &component.error {
        return html! {
            <div class="error-banner"><p>{ error }</p></div>
        };
    }

    let stats = compute_stats(&component.properties, &component.bookings);

    html! {
        <div class="dashboard">
            <div class="stat-grid">
                { stat_card("home_work", "Total Properties", stats.total_properties.to_string()) }
                { stat_card("menu_book", "Booked Properties", stats.booked_properties.to_string()) }
                { stat_card("verified", "Available", stats.available_properties.to_string()) }
                { stat_card("attach_money", "Total Sales", format_usd(stats.total_sales)) }
            </div>

            <div class="panel">
                <div class="panel-head">
                    <h2>{"Recent Properties"}</h2>
                    <Link<Route> to={Route::Properties} classes="panel-link">
                        {"View All"}
                    </Link<Route>>
                </div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Title"}</th>
                            <th>{"Type"}</th>
                            <th>{"Price/Night"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { recent_rows(sample_properties(&component.properties)) }
                    </tbody>
                </table>
            </div>

            <div class="quick-actions">
                <Link<Route> to={Route::AddProperty} classes="quick-action">
                    <i class="material-icons">{"add_home"}</i>
                    <div>
                        <h3>{"Add New Property"}</h3>
                        <p>{"List a new rental property"}</p>
                    </div>
                </Link<Route>>
                <Link<Route> to={Route::Properties} classes="quick-action">
                    <i class="material-icons">{"checklist"}</i>
                    <div>
                        <h3>{"View All Properties"}</h3>
                        <p>{"See complete property list"}</p>
                    </div>
                </Link<Route>>
            </div>
        </div>
    }
}

fn stat_card(icon: &str, label: &str, value: String) -> Html {
    html! {
        <div class="stat-card">
            <i class="material-icons">{icon}</i>
            <div>
                <h3>{label}</h3>
                <p>{value}</p>
            </div>
        </div>
    }
}

fn recent_rows(properties: &[Property]) -> Html {
    if properties.is_empty() {
        return html! {
            <tr><td colspan="4" class="empty-row">{"No properties found"}</td></tr>
        };
    }

    properties
        .iter()
        .map(|property| {
            html! {
                <tr key={property.id.clone()}>
                    <td>
                        <div class="cell-title">{ &property.title }</div>
                        <div class="cell-subtle">{ &property.location }</div>
                    </td>
                    <td>{ property.kind.label() }</td>
                    <td>{ format!("${}", property.price_per_night) }</td>
                    <td>{ status_badge(property.available) }</td>
                </tr>
            }
        })
        .collect::<Html>()
}

fn status_badge(available: bool) -> Html {
    let (class, label) = if available {
        ("badge badge-available", "Available")
    } else {
        ("badge badge-unavailable", "Unavailable")
    };
    html! { <span class={class}>{label}</span> }
}
