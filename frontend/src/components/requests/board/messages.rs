use common::model::blood::{BloodGroup, RequestStatus, Urgency};
use common::model::hospital::Hospital;
use common::model::matched::MatchedPair;
use common::model::request::BloodRequest;
use common::model::user::UserProfile;

pub enum Msg {
    // Live query
    Snapshot(Vec<BloodRequest>),
    StreamError(String),

    // Filter controls
    SetBloodGroupFilter(Option<BloodGroup>),
    SetLocationFilter(String),
    ResetFilters,

    // One-shot loads
    SessionLoaded(UserProfile),
    HospitalsLoaded(Vec<Hospital>),

    // Post-request form
    TogglePostForm,
    FormRequesterName(String),
    FormBloodGroup(BloodGroup),
    FormLocation(String),
    FormContact(String),
    FormNotes(String),
    FormUrgency(Urgency),
    SubmitRequest,
    RequestPosted(Result<(), String>),

    // Status transitions (poster or admin)
    MarkStatus(String, RequestStatus),
    StatusChanged(Result<(), String>),

    // External matcher
    FindDonors(String),
    MatchesLoaded(String, Result<Vec<MatchedPair>, String>),
    CloseMatches,
}
