//! Hospital directory endpoint. The list is static seed data; the
//! application never writes to it.

use crate::store::StoreState;
use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Responder, Scope};

const API_PATH: &str = "/api/hospitals";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

pub(crate) async fn process(store: web::Data<StoreState>) -> impl Responder {
    HttpResponse::Ok().json(store.hospitals())
}
