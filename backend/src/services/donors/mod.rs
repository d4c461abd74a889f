//! # Donor Service Module
//!
//! Endpoints under `/api/donors`: listing the directory, registering a
//! new donor, and flipping the availability flag.

mod availability;
mod list;
mod register;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/donors";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(register::process))
        .route("/{donor_id}/availability", post().to(availability::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreState;
    use actix_web::{test, web, App};
    use common::model::blood::BloodGroup;
    use common::model::donor::Donor;
    use common::requests::{RegisterDonor, SetAvailability};

    #[actix_web::test]
    async fn register_then_list_round_trips_through_the_api() {
        let store = StoreState::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/donors")
            .set_json(RegisterDonor {
                user_id: "user-2".to_string(),
                name: "Rahim".to_string(),
                blood_group: BloodGroup::AbPositive,
                location: "Chittagong".to_string(),
                contact: "+8801800000000".to_string(),
                notify_token: None,
            })
            .to_request();
        let registered: Donor = test::call_and_read_body_json(&app, req).await;
        assert!(registered.is_available());

        let req = test::TestRequest::get().uri("/api/donors").to_request();
        let listed: Vec<Donor> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![registered]);
    }

    #[actix_web::test]
    async fn availability_toggle_is_persisted() {
        let store = StoreState::new().unwrap();
        let donor = store
            .insert_donor(RegisterDonor {
                user_id: "user-2".to_string(),
                name: "Rahim".to_string(),
                blood_group: BloodGroup::OPositive,
                location: "Dhaka".to_string(),
                contact: "+880".to_string(),
                notify_token: None,
            })
            .await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/donors/{}/availability", donor.id))
            .set_json(SetAvailability { available: false })
            .to_request();
        let updated: Donor = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.available, Some(false));
        assert!(store.available_donors().await.is_empty());
    }
}
