//! View rendering for the property list: the table, the pagination bar, and
//! the delete confirmation sheet.

use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::property::Property;

use crate::app::Route;

use super::dialogs::delete::delete_dialog;
use super::messages::Msg;
use super::pagination::{page_bounds, page_slice, total_pages, PAGE_SIZE};
use super::state::PropertyListComponent;

pub fn view(component: &PropertyListComponent, ctx: &Context<PropertyListComponent>) -> Html {
    let link = ctx.link();

    if component.loading {
        return html! {
            <div class="spinner-wrap"><div class="spinner" /></div>
        };
    }

    if let Some(error) = &component.load_error {
        return html! {
            <div class="error-banner"><p>{ error }</p></div>
        };
    }

    html! {
        <div class="property-list">
            {
                if let Some(error) = &component.action_error {
                    html! {
                        <div class="error-banner dismissible">
                            <p>{ error }</p>
                            <button class="icon-btn" onclick={link.callback(|_| Msg::DismissError)}>
                                <i class="material-icons">{"close"}</i>
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="panel">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Image"}</th>
                            <th>{"Title"}</th>
                            <th>{"Type"}</th>
                            <th>{"Price/Night"}</th>
                            <th>{"Location"}</th>
                            <th>{"Status"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { table_rows(component, link) }
                    </tbody>
                </table>
                { pagination_bar(component, link) }
            </div>

            <div class="list-actions">
                <Link<Route> to={Route::AddProperty} classes="btn btn-primary">
                    <i class="material-icons">{"add"}</i>
                    {"Add Property"}
                </Link<Route>>
            </div>

            { delete_dialog(component, link) }
        </div>
    }
}

fn table_rows(component: &PropertyListComponent, link: &Scope<PropertyListComponent>) -> Html {
    let visible = page_slice(&component.properties, component.current_page, PAGE_SIZE);

    if visible.is_empty() {
        return html! {
            <tr><td colspan="7" class="empty-row">{"No properties found"}</td></tr>
        };
    }

    visible
        .iter()
        .map(|property| property_row(property, link))
        .collect::<Html>()
}

fn property_row(property: &Property, link: &Scope<PropertyListComponent>) -> Html {
    let id = property.id.clone();

    html! {
        <tr key={property.id.clone()}>
            <td>
                <img class="row-image" src={property.image_url.clone()} alt={property.title.clone()} />
            </td>
            <td>
                <div class="cell-title">{ &property.title }</div>
                <div class="cell-subtle">{ &property.description }</div>
            </td>
            <td>{ property.kind.label() }</td>
            <td>{ format!("${}", property.price_per_night) }</td>
            <td>{ &property.location }</td>
            <td>
                {
                    if property.available {
                        html! { <span class="badge badge-available">{"Available"}</span> }
                    } else {
                        html! { <span class="badge badge-unavailable">{"Unavailable"}</span> }
                    }
                }
            </td>
            <td>
                <div class="row-actions">
                    <Link<Route> to={Route::EditProperty { id: property.id.clone() }} classes="icon-btn">
                        <i class="material-icons">{"edit"}</i>
                    </Link<Route>>
                    <button
                        class="icon-btn danger"
                        onclick={link.callback(move |_| Msg::RequestDelete(id.clone()))}
                    >
                        <i class="material-icons">{"delete"}</i>
                    </button>
                </div>
            </td>
        </tr>
    }
}

fn pagination_bar(component: &PropertyListComponent, link: &Scope<PropertyListComponent>) -> Html {
    let count = component.properties.len();
    if count <= PAGE_SIZE {
        return html! {};
    }

    let pages = total_pages(count, PAGE_SIZE);
    let current = component.current_page;
    let (first, last) = page_bounds(current, count, PAGE_SIZE);

    html! {
        <div class="pagination-bar">
            <p class="pagination-summary">
                {"Showing "}<b>{first}</b>{" to "}<b>{last}</b>{" of "}<b>{count}</b>{" results"}
            </p>
            <nav class="pagination">
                <button
                    class="page-btn"
                    disabled={current == 1}
                    onclick={link.callback(move |_| Msg::GoToPage(current.saturating_sub(1)))}
                >
                    {"Previous"}
                </button>
                {
                    (1..=pages)
                        .map(|page| {
                            let class = if page == current { "page-btn active" } else { "page-btn" };
                            html! {
                                <button
                                    class={class}
                                    onclick={link.callback(move |_| Msg::GoToPage(page))}
                                >
                                    { page }
                                </button>
                            }
                        })
                        .collect::<Html>()
                }
                <button
                    class="page-btn"
                    disabled={current == pages}
                    onclick={link.callback(move |_| Msg::GoToPage(current + 1))}
                >
                    {"Next"}
                </button>
            </nav>
        </div>
    }
}
