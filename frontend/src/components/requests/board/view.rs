//! View rendering for the request board.
//!
//! Three mutually exclusive body states: a loading skeleton until the
//! first snapshot arrives, an explicit empty state when the snapshot or
//! the filters leave nothing to show, and the card list otherwise. A
//! transport failure keeps the last snapshot on screen behind a
//! "live updates stopped" notice instead of clearing the board.

use common::model::blood::{BloodGroup, RequestStatus, Urgency};
use common::model::request::BloodRequest;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::format_timestamp;
use super::messages::Msg;
use super::state::RequestBoard;

pub fn view(component: &RequestBoard, ctx: &Context<RequestBoard>) -> Html {
    let link = ctx.link();

    html! {
        <div class="request-board">
            { build_flash(component) }
            { build_stream_notice(component) }
            { build_filter_bar(component, link) }
            {
                if component.show_post_form {
                    build_post_form(component, link)
                } else {
                    html! {}
                }
            }
            { build_body(component, link) }
            { build_match_panel(component, link) }
        </div>
    }
}

fn build_flash(component: &RequestBoard) -> Html {
    match &component.flash {
        Some(message) => html! { <div class="flash error">{ message }</div> },
        None => html! {},
    }
}

fn build_stream_notice(component: &RequestBoard) -> Html {
    match component.live.error() {
        Some(_) => html! {
            <div class="stream-notice">
                { "Live updates stopped. Showing the last received requests; reload to reconnect." }
            </div>
        },
        None => html! {},
    }
}

/// Filter bar: blood-group select, location text filter with hospital
/// suggestions, reset, and the post-request toggle for signed-in users.
fn build_filter_bar(component: &RequestBoard, link: &Scope<RequestBoard>) -> Html {
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
                list="hospital-locations"
                value={component.filters.location.clone()}
                oninput={on_location_input}
            />
            <datalist id="hospital-locations">
                {
                    component.hospitals.iter().map(|hospital| html! {
                        <option value={hospital.name.clone()} />
                    }).collect::<Html>()
                }
            </datalist>
            <button
                onclick={link.callback(|_| Msg::ResetFilters)}
                disabled={component.filters.is_unfiltered()}
            >
                { "Reset" }
            </button>
            {
                if component.session.is_some() {
                    html! {
                        <button class="primary" onclick={link.callback(|_| Msg::TogglePostForm)}>
                            { if component.show_post_form { "Close form" } else { "Post a request" } }
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_post_form(component: &RequestBoard, link: &Scope<RequestBoard>) -> Html {
    let text_input = |placeholder: &str, value: String, msg: fn(String) -> Msg| {
        html! {
            <input
                type="text"
                placeholder={placeholder.to_string()}
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    msg(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
        }
    };

    let on_group = link.callback(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        Msg::FormBloodGroup(BloodGroup::parse(&value).unwrap_or(BloodGroup::OPositive))
    });
    let on_urgency = link.callback(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        Msg::FormUrgency(Urgency::parse(&value).unwrap_or(Urgency::Moderate))
    });
    let on_notes = link.callback(|e: InputEvent| {
        Msg::FormNotes(e.target_unchecked_into::<HtmlTextAreaElement>().value())
    });

    html! {
        <form class="post-form" onsubmit={link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::SubmitRequest
        })}>
            { text_input("Patient name (optional)", component.form.requester_name.clone(), Msg::FormRequesterName) }
            <select onchange={on_group}>
                {
                    BloodGroup::ALL.iter().map(|group| html! {
                        <option
                            value={group.as_str()}
                            selected={*group == component.form.blood_group}
                        >
                            { group.as_str() }
                        </option>
                    }).collect::<Html>()
                }
            </select>
            <select onchange={on_urgency}>
                {
                    [Urgency::Urgent, Urgency::Moderate, Urgency::Low].iter().map(|urgency| html! {
                        <option
                            value={urgency.as_str()}
                            selected={*urgency == component.form.urgency}
                        >
                            { urgency.as_str() }
                        </option>
                    }).collect::<Html>()
                }
            </select>
            { text_input("Location", component.form.location.clone(), Msg::FormLocation) }
            { text_input("Contact number", component.form.contact.clone(), Msg::FormContact) }
            <textarea
                placeholder="Notes (optional)"
                value={component.form.notes.clone()}
                oninput={on_notes}
            />
            <button type="submit" class="primary" disabled={component.posting}>
                { if component.posting { "Posting..." } else { "Post request" } }
            </button>
        </form>
    }
}

fn build_body(component: &RequestBoard, link: &Scope<RequestBoard>) -> Html {
    if component.live.loading() {
        return html! {
            <div class="skeleton-list">
                { for (0..3).map(|_| html! { <div class="card skeleton" /> }) }
            </div>
        };
    }

    let visible = component.visible_requests();
    if visible.is_empty() {
        let message = if component.live.records().is_empty() {
            "No active blood requests right now."
        } else {
            "No requests match the current filters."
        };
        return html! { <div class="empty-state">{ message }</div> };
    }

    html! {
        <div class="card-list">
            { for visible.iter().map(|request| build_card(component, link, request)) }
        </div>
    }
}

fn build_card(
    component: &RequestBoard,
    link: &Scope<RequestBoard>,
    request: &BloodRequest,
) -> Html {
    let urgency_class = match request.urgency {
        Urgency::Urgent => "urgency-urgent",
        Urgency::Moderate => "urgency-moderate",
        Urgency::Low => "urgency-low",
    };
    let id = request.id.clone();
    let fulfilled = {
        let id = id.clone();
        link.callback(move |_| Msg::MarkStatus(id.clone(), RequestStatus::Fulfilled))
    };
    let find_donors = link.callback(move |_| Msg::FindDonors(id.clone()));

    html! {
        <div class={classes!("card", urgency_class)}>
            <div class="card-head">
                <span class="blood-badge">{ request.blood_group.as_str() }</span>
                <span class="urgency-label">{ request.urgency.as_str() }</span>
            </div>
            {
                match &request.requester_name {
                    Some(name) => html! { <p class="requester">{ name }</p> },
                    None => html! {},
                }
            }
            <p class="location">{ &request.location }</p>
            <p class="contact">{ &request.contact }</p>
            {
                match &request.notes {
                    Some(notes) => html! { <p class="notes">{ notes }</p> },
                    None => html! {},
                }
            }
            <p class="posted-at">{ format_timestamp(request.created_at) }</p>
            <div class="card-actions">
                <button onclick={find_donors}>{ "Find donors" }</button>
                {
                    if component.can_moderate(request) {
                        html! {
                            <button onclick={fulfilled}>{ "Mark fulfilled" }</button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

fn build_match_panel(component: &RequestBoard, link: &Scope<RequestBoard>) -> Html {
    let Some(panel) = &component.matches else {
        return html! {};
    };

    let body = if panel.loading {
        html! { <p>{ "Asking the matcher..." }</p> }
    } else if let Some(error) = &panel.error {
        html! { <p class="flash error">{ error }</p> }
    } else if panel.pairs.is_empty() {
        html! { <p>{ "The matcher found no suitable donors." }</p> }
    } else {
        html! {
            <ul class="match-list">
                {
                    panel.pairs.iter().map(|pair| {
                        let label = pair
                            .donor
                            .as_ref()
                            .map(|d| format!("{} ({}, {})", d.name, d.blood_group, d.location))
                            .unwrap_or_else(|| pair.donor_id.clone());
                        html! {
                            <li>
                                <strong>{ label }</strong>
                                <span class="match-reason">{ &pair.reason }</span>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        }
    };

    html! {
        <div class="match-panel">
            <div class="match-panel-head">
                <h2>{ "Suggested donors" }</h2>
                <button onclick={link.callback(|_| Msg::CloseMatches)}>{ "Close" }</button>
            </div>
            { body }
        </div>
    }
}
