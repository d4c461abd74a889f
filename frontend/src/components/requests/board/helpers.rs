//! Transport helpers for the request board: the EventSource live
//! subscription and the one-shot REST calls.

use common::decode::decode_request_snapshot;
use common::live::SubscriptionGuard;
use common::model::hospital::Hospital;
use common::model::user::UserProfile;
use gloo_console::warn;
use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventSource, MessageEvent};
use yew::html::Scope;

use super::messages::Msg;
use super::state::RequestBoard;

/// Opens the live query over the active requests.
///
/// Every server push carries a complete snapshot; it is decoded at this
/// boundary and either forwarded as typed records or surfaced as a
/// stream error. The returned guard closes the `EventSource` exactly
/// once, whether through an explicit cancel or by being dropped.
pub fn subscribe_active_requests(link: &Scope<RequestBoard>) -> Result<SubscriptionGuard, String> {
    let source = EventSource::new("/api/requests/live")
        .map_err(|_| "could not open the live request stream".to_string())?;

    let on_message = {
        let link = link.clone();
        Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            match event.data().as_string() {
                Some(payload) => match decode_request_snapshot(&payload) {
                    Ok(records) => link.send_message(Msg::Snapshot(records)),
                    Err(e) => link.send_message(Msg::StreamError(e.to_string())),
                },
                None => link.send_message(Msg::StreamError(
                    "non-text frame on the live request stream".to_string(),
                )),
            }
        })
    };
    source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

    let on_error = {
        let link = link.clone();
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            link.send_message(Msg::StreamError(
                "live request stream disconnected".to_string(),
            ));
        })
    };
    source.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    Ok(SubscriptionGuard::new(move || {
        source.set_onmessage(None);
        source.set_onerror(None);
        source.close();
        // The closures must outlive the handlers they back.
        drop(on_message);
        drop(on_error);
    }))
}

pub fn fetch_session(link: &Scope<RequestBoard>) {
    let link = link.clone();
    spawn_local(async move {
        match Request::get("/api/session").send().await {
            Ok(resp) if resp.ok() => match resp.json::<UserProfile>().await {
                Ok(profile) => link.send_message(Msg::SessionLoaded(profile)),
                Err(e) => warn!("session payload unreadable:", e.to_string()),
            },
            _ => warn!("session endpoint unavailable; write controls stay hidden"),
        }
    });
}

pub fn fetch_hospitals(link: &Scope<RequestBoard>) {
    let link = link.clone();
    spawn_local(async move {
        match Request::get("/api/hospitals").send().await {
            Ok(resp) if resp.ok() => {
                if let Ok(hospitals) = resp.json::<Vec<Hospital>>().await {
                    link.send_message(Msg::HospitalsLoaded(hospitals));
                }
            }
            _ => warn!("hospital directory unavailable"),
        }
    });
}

/// Renders an epoch-milliseconds timestamp in the browser locale.
pub fn format_timestamp(millis: i64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(millis as f64));
    String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
}
