//! View rendering for the property form: a two-column grid of labelled
//! fields with per-field errors, plus the cancel/submit row.

use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::property::PropertyType;

use crate::app::Route;

use super::messages::Msg;
use super::state::PropertyFormComponent;

pub fn view(component: &PropertyFormComponent, ctx: &Context<PropertyFormComponent>) -> Html {
    let link = ctx.link();
    let editing = ctx.props().property_id.is_some();

    if component.loading {
        return html! {
            <div class="spinner-wrap"><div class="spinner" /></div>
        };
    }

    let heading = if editing { "Edit Property" } else { "Add New Property" };
    let submit_label = if component.busy {
        "Saving..."
    } else if editing {
        "Save Changes"
    } else {
        "Add Property"
    };

    html! {
        <div class="property-form">
            <h1>{ heading }</h1>
            {
                if let Some(error) = &component.error {
                    html! { <div class="error-banner"><p>{ error }</p></div> }
                } else {
                    html! {}
                }
            }

            <form
                class="panel form-grid"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                <div class="form-field">
                    <label for="title">{"Title"}</label>
                    <input
                        id="title"
                        type="text"
                        value={component.title.clone()}
                        oninput={text_input(link, Msg::UpdateTitle)}
                    />
                    { field_error(&component.errors.title) }
                </div>

                <div class="form-field">
                    <label for="type">{"Type"}</label>
                    <select id="type" onchange={link.callback(|e: Event| {
                        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                        Msg::UpdateKind(select.value())
                    })}>
                        {
                            PropertyType::ALL
                                .iter()
                                .map(|kind| html! {
                                    <option
                                        value={kind.as_str()}
                                        selected={component.kind == *kind}
                                    >
                                        { kind.label() }
                                    </option>
                                })
                                .collect::<Html>()
                        }
                    </select>
                </div>

                <div class="form-field">
                    <label for="pricePerNight">{"Price Per Night ($)"}</label>
                    <input
                        id="pricePerNight"
                        type="number"
                        value={component.price.clone()}
                        oninput={text_input(link, Msg::UpdatePrice)}
                    />
                    { field_error(&component.errors.price) }
                </div>

                <div class="form-field">
                    <label for="location">{"Location"}</label>
                    <input
                        id="location"
                        type="text"
                        value={component.location.clone()}
                        oninput={text_input(link, Msg::UpdateLocation)}
                    />
                    { field_error(&component.errors.location) }
                </div>

                <div class="form-field form-field-wide">
                    <label for="description">{"Description"}</label>
                    <textarea
                        id="description"
                        rows="3"
                        value={component.description.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::UpdateDescription(area.value())
                        })}
                    />
                    { field_error(&component.errors.description) }
                </div>

                <div class="form-field form-field-wide">
                    <label for="imageUrl">{"Image URL"}</label>
                    <input
                        id="imageUrl"
                        type="url"
                        value={component.image_url.clone()}
                        oninput={text_input(link, Msg::UpdateImageUrl)}
                    />
                    { field_error(&component.errors.image_url) }
                </div>

                <div class="form-field checkbox-field">
                    <input
                        id="available"
                        type="checkbox"
                        checked={component.available}
                        onchange={link.callback(|e: Event| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            Msg::SetAvailable(input.checked())
                        })}
                    />
                    <label for="available">{"Available"}</label>
                </div>

                <div class="form-actions form-field-wide">
                    <Link<Route> to={Route::Properties} classes="btn">
                        {"Cancel"}
                    </Link<Route>>
                    <button type="submit" class="btn btn-primary" disabled={component.busy}>
                        { submit_label }
                    </button>
                </div>
            </form>
        </div>
    }
}

fn text_input(
    link: &Scope<PropertyFormComponent>,
    to_msg: fn(String) -> Msg,
) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        to_msg(input.value())
    })
}

fn field_error(error: &Option<String>) -> Html {
    match error {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}
