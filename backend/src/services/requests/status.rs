use crate::store::StoreState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::UpdateStatus;
use log::info;

/// Handler for `POST /api/requests/{request_id}/status`. Soft transition
/// only: the record is kept and the live view recomputed.
pub(crate) async fn process(
    store: web::Data<StoreState>,
    request_id: web::Path<String>,
    payload: web::Json<UpdateStatus>,
) -> impl Responder {
    match store
        .set_request_status(request_id.as_str(), payload.status)
        .await
    {
        Ok(updated) => {
            info!("request {} moved to {}", updated.id, updated.status);
            HttpResponse::Ok().json(updated)
        }
        Err(e) => HttpResponse::NotFound().body(e),
    }
}
