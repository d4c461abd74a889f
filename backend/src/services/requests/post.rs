use crate::store::StoreState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::PostRequest;
use log::info;

/// Handler for `POST /api/requests`. Accepts a typed payload (so a
/// request without an urgency is rejected at deserialization, before it
/// can ever reach the board) and returns the stored record with its
/// assigned id and timestamp.
pub(crate) async fn process(
    store: web::Data<StoreState>,
    payload: web::Json<PostRequest>,
) -> impl Responder {
    let request = store.insert_request(payload.into_inner()).await;
    info!(
        "request {} posted ({} at {})",
        request.id, request.blood_group, request.location
    );
    HttpResponse::Ok().json(request)
}
