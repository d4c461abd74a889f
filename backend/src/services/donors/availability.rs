use crate::store::StoreState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::SetAvailability;

/// Handler for `POST /api/donors/{donor_id}/availability`.
pub(crate) async fn process(
    store: web::Data<StoreState>,
    donor_id: web::Path<String>,
    payload: web::Json<SetAvailability>,
) -> impl Responder {
    match store
        .set_donor_availability(donor_id.as_str(), payload.available)
        .await
    {
        Ok(donor) => HttpResponse::Ok().json(donor),
        Err(e) => HttpResponse::NotFound().body(e),
    }
}
