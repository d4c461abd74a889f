use common::model::donor::Donor;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::DonorDirectory;

pub fn update(component: &mut DonorDirectory, _ctx: &Context<DonorDirectory>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(result) => {
            component.loading = false;
            match result {
                Ok(donors) => component.donors = donors,
                Err(e) => component.error = Some(e),
            }
            true
        }
        Msg::SetBloodGroupFilter(group) => {
            component.filters.blood_group = group;
            true
        }
        Msg::SetLocationFilter(location) => {
            component.filters.location = location;
            true
        }
        Msg::ResetFilters => {
            component.filters.reset();
            true
        }
    }
}

pub fn fetch_donors(link: &Scope<DonorDirectory>) {
    let link = link.clone();
    spawn_local(async move {
        let result = match Request::get("/api/donors").send().await {
            Ok(resp) if resp.ok() => resp
                .json::<Vec<Donor>>()
                .await
                .map_err(|e| e.to_string()),
            Ok(resp) => Err(format!("donor list failed with {}", resp.status())),
            Err(e) => Err(e.to_string()),
        };
        link.send_message(Msg::Loaded(result));
    });
}
