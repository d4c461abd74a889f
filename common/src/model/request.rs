use crate::model::blood::{BloodGroup, RequestStatus, Urgency};
use serde::{Deserialize, Serialize};

/// A blood request posted by a user.
///
/// The `id` is assigned by the backing store and attached to the wire
/// payload by the gateway; it is not part of the stored document itself.
/// `created_at` is epoch milliseconds (UTC). `urgency` is required at
/// creation time: the decode layer rejects documents without it rather
/// than defaulting, since it is the primary sort key of the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_name: Option<String>,
    pub blood_group: BloodGroup,
    pub location: String,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: i64,
    pub status: RequestStatus,
    pub urgency: Urgency,
}

impl BloodRequest {
    pub fn is_active(&self) -> bool {
        self.status == RequestStatus::Active
    }
}
