use crate::store::StoreState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::RegisterDonor;
use log::info;

/// Handler for `POST /api/donors`. Registration happens once; only the
/// availability flag changes afterwards.
pub(crate) async fn process(
    store: web::Data<StoreState>,
    payload: web::Json<RegisterDonor>,
) -> impl Responder {
    let donor = store.insert_donor(payload.into_inner()).await;
    info!("donor {} registered ({})", donor.id, donor.blood_group);
    HttpResponse::Ok().json(donor)
}
