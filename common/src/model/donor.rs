use crate::model::blood::BloodGroup;
use serde::{Deserialize, Serialize};

/// A registered donor. Created once at registration; the donor can flip
/// `available` afterwards, nothing is deleted in the normal flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub blood_group: BloodGroup,
    pub location: String,
    pub contact: String,
    /// Push-notification channel token, when the donor opted in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    /// Epoch milliseconds of the last recorded donation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_donation: Option<i64>,
    pub created_at: i64,
}

impl Donor {
    /// Donors with no explicit flag are treated as available; only an
    /// explicit opt-out hides them from matching.
    pub fn is_available(&self) -> bool {
        self.available.unwrap_or(true)
    }
}
