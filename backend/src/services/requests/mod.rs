//! # Blood Request Service Module
//!
//! Endpoints under `/api/requests` for the blood-request collection:
//! the live query stream, posting a new request, and status transitions.
//!
//! ## Sub-modules:
//! - `live`: SSE stream pushing a complete active-request snapshot on
//!   connect and after every change.
//! - `post`: Creates a new request; the store assigns id, timestamp and
//!   the initial `active` status.
//! - `status`: Soft status transition (`active | fulfilled | pending`);
//!   leaving `active` removes the request from the live view only.

mod live;
mod post;
mod status;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/requests";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/live", get().to(live::process))
        .route("", post().to(post::process))
        .route("/{request_id}/status", post().to(status::process))
}
