use common::model::blood::BloodGroup;
use common::model::donor::Donor;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::DonorDirectory;

pub fn view(component: &DonorDirectory, ctx: &Context<DonorDirectory>) -> Html {
    let link = ctx.link();

    html! {
        <div class="donor-directory">
            { build_filter_bar(component, link) }
            { build_body(component) }
        </div>
    }
}

fn build_filter_bar(component: &DonorDirectory, link: &Scope<DonorDirectory>) -> Html {
    let on_group_change = link.callback(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        Msg::SetBloodGroupFilter(BloodGroup::parse(&value))
    });
    let on_location_input = link.callback(|e: InputEvent| {
        Msg::SetLocationFilter(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let selected = component
        .filters
        .blood_group
        .map(|g| g.as_str())
        .unwrap_or("");

    html! {
        <div class="filter-bar">
            <select onchange={on_group_change}>
                <option value="" selected={selected.is_empty()}>{ "All blood groups" }</option>
                {
                    BloodGroup::ALL.iter().map(|group| html! {
                        <option value={group.as_str()} selected={selected == group.as_str()}>
                            { group.as_str() }
                        </option>
                    }).collect::<Html>()
                }
            </select>
            <input
                type="text"
                placeholder="Filter by location"
                value={component.filters.location.clone()}
                oninput={on_location_input}
            />
            <button
                onclick={link.callback(|_| Msg::ResetFilters)}
                disabled={component.filters.is_unfiltered()}
            >
                { "Reset" }
            </button>
        </div>
    }
}

fn build_body(component: &DonorDirectory) -> Html {
    if component.loading {
        return html! {
            <div class="skeleton-list">
                { for (0..3).map(|_| html! { <div class="card skeleton" /> }) }
            </div>
        };
    }
    if let Some(error) = &component.error {
        return html! { <div class="flash error">{ error }</div> };
    }

    let visible = component.visible_donors();
    if visible.is_empty() {
        let message = if component.donors.is_empty() {
            "No donors registered yet."
        } else {
            "No donors match the current filters."
        };
        return html! { <div class="empty-state">{ message }</div> };
    }

    html! {
        <div class="card-list">
            { for visible.iter().map(build_card) }
        </div>
    }
}

fn build_card(donor: &Donor) -> Html {
    let availability = if donor.is_available() {
        html! { <span class="chip available">{ "Available" }</span> }
    } else {
        html! { <span class="chip resting">{ "Not available" }</span> }
    };

    html! {
        <div class="card donor-card">
            <div class="card-head">
                <span class="blood-badge">{ donor.blood_group.as_str() }</span>
                { availability }
            </div>
            <p class="donor-name">{ &donor.name }</p>
            <p class="location">{ &donor.location }</p>
            <p class="contact">{ &donor.contact }</p>
        </div>
    }
}
