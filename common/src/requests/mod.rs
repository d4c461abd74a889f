//! Request payloads shared between the frontend and the backend API.

use crate::model::blood::{BloodGroup, RequestStatus, Urgency};
use serde::{Deserialize, Serialize};

/// Payload for `POST /api/requests`. The store assigns the id, the
/// creation timestamp, and the initial `active` status.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_name: Option<String>,
    pub blood_group: BloodGroup,
    pub location: String,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub urgency: Urgency,
}

/// Payload for `POST /api/requests/{request_id}/status`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateStatus {
    pub status: RequestStatus,
}

/// Payload for `POST /api/donors`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDonor {
    pub user_id: String,
    pub name: String,
    pub blood_group: BloodGroup,
    pub location: String,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_token: Option<String>,
}

/// Payload for `POST /api/donors/{donor_id}/availability`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetAvailability {
    pub available: bool,
}

/// Payload for `POST /api/match`: asks the external matcher for donors
/// suited to one request.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchQuery {
    pub request_id: String,
}
