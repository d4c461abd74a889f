//! Session endpoint standing in for the external identity provider.
//!
//! The profile is read-only and only drives which controls the frontend
//! shows; authorization enforcement is the store's own responsibility,
//! outside this application.

use crate::config::Config;
use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Responder, Scope};

const API_PATH: &str = "/api/session";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

pub(crate) async fn process(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(&config.session)
}
