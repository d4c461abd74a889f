use crate::store::StoreState;
use actix_web::{web, HttpResponse, Responder};

/// Handler for `GET /api/donors`: the full directory, unfiltered.
/// Blood-group and location filtering happen client-side.
pub(crate) async fn process(store: web::Data<StoreState>) -> impl Responder {
    HttpResponse::Ok().json(store.donors().await)
}
