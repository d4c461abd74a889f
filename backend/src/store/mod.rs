//! In-memory gateway over the request, donor and hospital collections.
//!
//! The store stands in for the managed document database: it owns the
//! collections behind an `Arc<RwLock>`, and every mutation of the request
//! collection broadcasts a fresh, complete snapshot of the active
//! requests (ordered `createdAt` descending, the live-query contract) to
//! all SSE subscribers. Requests are never removed; a status transition
//! away from `active` simply drops them from the published snapshot.

use common::model::blood::RequestStatus;
use common::model::donor::Donor;
use common::model::hospital::Hospital;
use common::model::request::BloodRequest;
use common::requests::{PostRequest, RegisterDonor};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::{broadcast, RwLock};

/// Hospital directory seed; managed externally, read-only here.
static HOSPITALS_SEED: &str = include_str!("../../seeds/hospitals.json");

/// Buffered snapshots per subscriber before a slow client starts lagging.
const SNAPSHOT_BUFFER: usize = 16;

#[derive(Clone)]
pub struct StoreState {
    requests: Arc<RwLock<Vec<BloodRequest>>>,
    donors: Arc<RwLock<Vec<Donor>>>,
    hospitals: Arc<Vec<Hospital>>,
    snapshot_tx: broadcast::Sender<String>,
}

impl StoreState {
    pub fn new() -> Result<Self, String> {
        let hospitals: Vec<Hospital> = serde_json::from_str(HOSPITALS_SEED)
            .map_err(|e| format!("invalid hospital seed data: {}", e))?;
        let (snapshot_tx, _) = broadcast::channel(SNAPSHOT_BUFFER);
        Ok(Self {
            requests: Arc::new(RwLock::new(Vec::new())),
            donors: Arc::new(RwLock::new(Vec::new())),
            hospitals: Arc::new(hospitals),
            snapshot_tx,
        })
    }

    /// Registers a live-query subscriber. The caller is expected to send
    /// the current snapshot first and then relay what arrives here.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.snapshot_tx.subscribe()
    }

    /// Serializes the complete set of `active` requests, newest first,
    /// as the JSON array pushed over the live query.
    pub async fn active_requests_json(&self) -> String {
        let requests = self.requests.read().await;
        let mut active: Vec<&BloodRequest> = requests.iter().filter(|r| r.is_active()).collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        serde_json::to_string(&active).unwrap_or_else(|_| "[]".to_string())
    }

    async fn publish(&self) {
        let payload = self.active_requests_json().await;
        // Send only fails when no subscriber is connected, which is fine.
        let _ = self.snapshot_tx.send(payload);
    }

    pub async fn insert_request(&self, payload: PostRequest) -> BloodRequest {
        let request = BloodRequest {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: payload.user_id,
            requester_name: payload.requester_name,
            blood_group: payload.blood_group,
            location: payload.location,
            contact: payload.contact,
            notes: payload.notes,
            created_at: now_millis(),
            status: RequestStatus::Active,
            urgency: payload.urgency,
        };
        self.requests.write().await.push(request.clone());
        self.publish().await;
        request
    }

    pub async fn set_request_status(
        &self,
        request_id: &str,
        status: RequestStatus,
    ) -> Result<BloodRequest, String> {
        let updated = {
            let mut requests = self.requests.write().await;
            match requests.iter_mut().find(|r| r.id == request_id) {
                Some(request) => {
                    request.status = status;
                    request.clone()
                }
                None => return Err(format!("request {} not found", request_id)),
            }
        };
        self.publish().await;
        Ok(updated)
    }

    pub async fn request_by_id(&self, request_id: &str) -> Option<BloodRequest> {
        self.requests
            .read()
            .await
            .iter()
            .find(|r| r.id == request_id)
            .cloned()
    }

    pub async fn insert_donor(&self, payload: RegisterDonor) -> Donor {
        let donor = Donor {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: payload.user_id,
            name: payload.name,
            blood_group: payload.blood_group,
            location: payload.location,
            contact: payload.contact,
            notify_token: payload.notify_token,
            available: None,
            last_donation: None,
            created_at: now_millis(),
        };
        self.donors.write().await.push(donor.clone());
        donor
    }

    pub async fn set_donor_availability(
        &self,
        donor_id: &str,
        available: bool,
    ) -> Result<Donor, String> {
        let mut donors = self.donors.write().await;
        match donors.iter_mut().find(|d| d.id == donor_id) {
            Some(donor) => {
                donor.available = Some(available);
                Ok(donor.clone())
            }
            None => Err(format!("donor {} not found", donor_id)),
        }
    }

    pub async fn donors(&self) -> Vec<Donor> {
        self.donors.read().await.clone()
    }

    pub async fn available_donors(&self) -> Vec<Donor> {
        self.donors
            .read()
            .await
            .iter()
            .filter(|d| d.is_available())
            .cloned()
            .collect()
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::blood::{BloodGroup, Urgency};

    fn raw_request(id: &str, status: RequestStatus, created_at: i64) -> BloodRequest {
        BloodRequest {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            requester_name: None,
            blood_group: BloodGroup::OPositive,
            location: "Dhaka".to_string(),
            contact: "+880".to_string(),
            notes: None,
            created_at,
            status,
            urgency: Urgency::Moderate,
        }
    }

    #[tokio::test]
    async fn seed_hospitals_parse() {
        let store = StoreState::new().unwrap();
        assert!(!store.hospitals().is_empty());
    }

    #[tokio::test]
    async fn snapshot_contains_only_active_requests_newest_first() {
        let store = StoreState::new().unwrap();
        {
            let mut requests = store.requests.write().await;
            requests.push(raw_request("old", RequestStatus::Active, 100));
            requests.push(raw_request("done", RequestStatus::Fulfilled, 300));
            requests.push(raw_request("new", RequestStatus::Active, 200));
        }
        let decoded = common::decode::decode_request_snapshot(&store.active_requests_json().await)
            .expect("snapshot decodes through the shared boundary");
        let ids: Vec<&str> = decoded.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["new", "old"]);
    }

    #[tokio::test]
    async fn status_transition_drops_request_from_snapshot_and_broadcasts() {
        let store = StoreState::new().unwrap();
        let posted = store
            .insert_request(PostRequest {
                user_id: "user-1".to_string(),
                requester_name: None,
                blood_group: BloodGroup::ANegative,
                location: "Khulna".to_string(),
                contact: "+880".to_string(),
                notes: None,
                urgency: Urgency::Urgent,
            })
            .await;

        let mut rx = store.subscribe();
        store
            .set_request_status(&posted.id, RequestStatus::Fulfilled)
            .await
            .unwrap();

        let payload = rx.recv().await.unwrap();
        let decoded = common::decode::decode_request_snapshot(&payload).unwrap();
        assert!(decoded.iter().all(|r| r.id != posted.id));
        // Soft transition only: the record itself still exists.
        let kept = store.request_by_id(&posted.id).await.unwrap();
        assert_eq!(kept.status, RequestStatus::Fulfilled);
    }

    #[tokio::test]
    async fn unknown_request_id_is_an_error() {
        let store = StoreState::new().unwrap();
        let result = store
            .set_request_status("missing", RequestStatus::Pending)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn availability_flag_filters_matching_pool() {
        let store = StoreState::new().unwrap();
        let donor = store
            .insert_donor(RegisterDonor {
                user_id: "user-2".to_string(),
                name: "Rahim".to_string(),
                blood_group: BloodGroup::BPositive,
                location: "Dhaka".to_string(),
                contact: "+880".to_string(),
                notify_token: None,
            })
            .await;
        assert_eq!(store.available_donors().await.len(), 1);

        store.set_donor_availability(&donor.id, false).await.unwrap();
        assert!(store.available_donors().await.is_empty());
        assert_eq!(store.donors().await.len(), 1);
    }
}
