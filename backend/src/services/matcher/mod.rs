//! AI matcher proxy. Matching is an opaque external call: this module
//! ships the request plus the currently-available donors to the
//! configured endpoint and enriches whatever pairings come back with the
//! full records for display. No local pairing logic beyond id lookup.

use crate::config::Config;
use crate::store::StoreState;
use actix_web::web::{post, scope};
use actix_web::{web, HttpResponse, Responder, Scope};
use common::model::donor::Donor;
use common::model::matched::MatchedPair;
use common::model::request::BloodRequest;
use common::requests::MatchQuery;
use log::warn;
use serde::{Deserialize, Serialize};

const API_PATH: &str = "/api/match";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(process))
}

/// Body shipped to the external matcher.
#[derive(Serialize)]
struct MatcherCall<'a> {
    request: &'a BloodRequest,
    donors: &'a [Donor],
}

/// One pairing as the external matcher returns it: identifiers plus a
/// textual reason, nothing else.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatcherReply {
    donor_id: String,
    reason: String,
}

pub(crate) async fn process(
    store: web::Data<StoreState>,
    config: web::Data<Config>,
    query: web::Json<MatchQuery>,
) -> impl Responder {
    let Some(matcher_url) = config.matcher_url.as_deref() else {
        return HttpResponse::ServiceUnavailable().body("matcher not configured");
    };
    let Some(request) = store.request_by_id(&query.request_id).await else {
        return HttpResponse::NotFound().body(format!("request {} not found", query.request_id));
    };
    let donors = store.available_donors().await;

    match call_matcher(matcher_url, &request, &donors).await {
        Ok(replies) => {
            let pairs: Vec<MatchedPair> = replies
                .into_iter()
                .map(|reply| MatchedPair {
                    donor: donors.iter().find(|d| d.id == reply.donor_id).cloned(),
                    request: Some(request.clone()),
                    donor_id: reply.donor_id,
                    request_id: request.id.clone(),
                    reason: reply.reason,
                })
                .collect();
            HttpResponse::Ok().json(pairs)
        }
        Err(e) => {
            warn!("matcher call failed: {}", e);
            HttpResponse::BadGateway().body(e)
        }
    }
}

async fn call_matcher(
    url: &str,
    request: &BloodRequest,
    donors: &[Donor],
) -> Result<Vec<MatcherReply>, String> {
    let response = reqwest::Client::new()
        .post(url)
        .json(&MatcherCall { request, donors })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("matcher returned {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}
