//! Live query over the active blood requests, served as an SSE stream.
//!
//! Contract (mirrors the managed store's real-time listener): the client
//! receives a complete snapshot immediately on connect, then a fresh
//! complete snapshot — never a diff — after every change to the request
//! collection. Snapshots are delivered in the order the store emits them;
//! a subscriber that lags past the broadcast buffer skips straight to the
//! newest snapshot, so the last-delivered one always wins.

use crate::store::StoreState;
use actix_web::{web, HttpResponse, Responder};
use futures_util::StreamExt;
use log::debug;
use tokio::sync::broadcast::error::RecvError;

/// Wraps one snapshot payload in an SSE `data:` frame.
fn sse_frame(payload: &str) -> web::Bytes {
    web::Bytes::from(format!("data: {}\n\n", payload))
}

pub(crate) async fn process(store: web::Data<StoreState>) -> impl Responder {
    // Subscribe before reading the initial snapshot so no change can fall
    // between the two.
    let rx = store.subscribe();
    let initial = store.active_requests_json().await;
    debug!("live query subscriber connected");

    let updates = futures_util::stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(payload) => return Some((payload, rx)),
                Err(RecvError::Lagged(skipped)) => {
                    debug!("live query subscriber lagged, skipped {} snapshots", skipped);
                    continue;
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    let stream = futures_util::stream::once(async move { initial })
        .chain(updates)
        .map(|payload| Ok::<_, actix_web::Error>(sse_frame(&payload)));

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(stream)
}
