use crate::model::donor::Donor;
use crate::model::request::BloodRequest;
use serde::{Deserialize, Serialize};

/// One donor/request pairing produced by the external matcher call.
/// Ephemeral: never persisted, only rendered. The full records are
/// attached by the gateway when it can resolve the identifiers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedPair {
    pub donor_id: String,
    pub request_id: String,
    /// Free-text explanation returned by the matcher.
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor: Option<Donor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<BloodRequest>,
}
