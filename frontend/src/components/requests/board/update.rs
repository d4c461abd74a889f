//! Update function for the request board, Elm-style: fold one message
//! into the component state and report whether the view must re-render.

use common::live::LiveEvent;
use common::model::matched::MatchedPair;
use common::requests::{MatchQuery, PostRequest, UpdateStatus};
use gloo_console::error;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{MatchPanel, RequestBoard, RequestForm};

pub fn update(component: &mut RequestBoard, ctx: &Context<RequestBoard>, msg: Msg) -> bool {
    match msg {
        Msg::Snapshot(records) => {
            component.live.apply(LiveEvent::Snapshot(records));
            true
        }
        Msg::StreamError(message) => {
            error!("live request stream failed:", &message);
            // No automatic retry: drop the transport (an EventSource left
            // open would reconnect on its own) and keep the last snapshot.
            if let Some(mut subscription) = component.subscription.take() {
                subscription.cancel();
            }
            component.live.apply(LiveEvent::Error(message));
            true
        }

        Msg::SetBloodGroupFilter(group) => {
            component.filters.blood_group = group;
            true
        }
        Msg::SetLocationFilter(location) => {
            component.filters.location = location;
            true
        }
        Msg::ResetFilters => {
            component.filters.reset();
            true
        }

        Msg::SessionLoaded(profile) => {
            component.session = Some(profile);
            true
        }
        Msg::HospitalsLoaded(hospitals) => {
            component.hospitals = hospitals;
            true
        }

        Msg::TogglePostForm => {
            component.show_post_form = !component.show_post_form;
            component.flash = None;
            true
        }
        Msg::FormRequesterName(v) => {
            component.form.requester_name = v;
            false
        }
        Msg::FormBloodGroup(v) => {
            component.form.blood_group = v;
            true
        }
        Msg::FormLocation(v) => {
            component.form.location = v;
            false
        }
        Msg::FormContact(v) => {
            component.form.contact = v;
            false
        }
        Msg::FormNotes(v) => {
            component.form.notes = v;
            false
        }
        Msg::FormUrgency(v) => {
            component.form.urgency = v;
            true
        }
        Msg::SubmitRequest => {
            let Some(session) = component.session.clone() else {
                component.flash = Some("sign-in required to post a request".to_string());
                return true;
            };
            if component.form.location.trim().is_empty()
                || component.form.contact.trim().is_empty()
            {
                component.flash = Some("location and contact are required".to_string());
                return true;
            }
            component.posting = true;
            component.flash = None;
            let payload = PostRequest {
                user_id: session.uid,
                requester_name: non_empty(&component.form.requester_name),
                blood_group: component.form.blood_group,
                location: component.form.location.trim().to_string(),
                contact: component.form.contact.trim().to_string(),
                notes: non_empty(&component.form.notes),
                urgency: component.form.urgency,
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = post_json::<_, serde_json::Value>("/api/requests", &payload)
                    .await
                    .map(|_| ());
                link.send_message(Msg::RequestPosted(result));
            });
            true
        }
        Msg::RequestPosted(result) => {
            component.posting = false;
            match result {
                Ok(()) => {
                    // The new request arrives through the live stream;
                    // nothing to patch locally.
                    component.show_post_form = false;
                    component.form = RequestForm::default();
                }
                Err(e) => component.flash = Some(format!("posting failed: {}", e)),
            }
            true
        }

        Msg::MarkStatus(request_id, status) => {
            component.flash = None;
            let link = ctx.link().clone();
            spawn_local(async move {
                let url = format!("/api/requests/{}/status", request_id);
                let result = post_json::<_, serde_json::Value>(&url, &UpdateStatus { status })
                    .await
                    .map(|_| ());
                link.send_message(Msg::StatusChanged(result));
            });
            false
        }
        Msg::StatusChanged(result) => {
            if let Err(e) = result {
                component.flash = Some(format!("status change failed: {}", e));
                return true;
            }
            // The snapshot without the request follows on the stream.
            false
        }

        Msg::FindDonors(request_id) => {
            component.matches = Some(MatchPanel {
                request_id: request_id.clone(),
                loading: true,
                pairs: Vec::new(),
                error: None,
            });
            let link = ctx.link().clone();
            spawn_local(async move {
                let result =
                    post_json::<_, Vec<MatchedPair>>("/api/match", &MatchQuery {
                        request_id: request_id.clone(),
                    })
                    .await;
                link.send_message(Msg::MatchesLoaded(request_id, result));
            });
            true
        }
        Msg::MatchesLoaded(request_id, result) => {
            if let Some(panel) = component.matches.as_mut() {
                if panel.request_id == request_id {
                    panel.loading = false;
                    match result {
                        Ok(pairs) => panel.pairs = pairs,
                        Err(e) => panel.error = Some(e),
                    }
                }
            }
            true
        }
        Msg::CloseMatches => {
            component.matches = None;
            true
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        let detail = response.text().await.unwrap_or_default();
        return Err(format!("{} {}", response.status(), detail));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}
