//! Component state for the live request board.

use common::engine::{filter_and_sort, RequestFilters};
use common::live::{LiveQueryState, SubscriptionGuard};
use common::model::blood::{BloodGroup, Urgency};
use common::model::hospital::Hospital;
use common::model::matched::MatchedPair;
use common::model::request::BloodRequest;
use common::model::user::UserProfile;

/// Draft values of the "post a request" form.
pub struct RequestForm {
    pub requester_name: String,
    pub blood_group: BloodGroup,
    pub location: String,
    pub contact: String,
    pub notes: String,
    pub urgency: Urgency,
}

impl Default for RequestForm {
    fn default() -> Self {
        Self {
            requester_name: String::new(),
            blood_group: BloodGroup::OPositive,
            location: String::new(),
            contact: String::new(),
            notes: String::new(),
            urgency: Urgency::Moderate,
        }
    }
}

/// Result panel of one matcher call.
pub struct MatchPanel {
    pub request_id: String,
    pub loading: bool,
    pub pairs: Vec<MatchedPair>,
    pub error: Option<String>,
}

/// State container for the request board.
///
/// The live query snapshot is cached here untouched; the filtered and
/// sorted view the cards render from is recomputed on every state change
/// through `visible_requests`, never stored.
pub struct RequestBoard {
    /// Current snapshot, loading flag and transport error.
    pub live: LiveQueryState<BloodRequest>,

    /// User-chosen blood-group/location filters.
    pub filters: RequestFilters,

    /// Cancel handle of the active subscription. Taken (and thereby
    /// cancelled) in `destroy`, or dropped on transport error.
    pub subscription: Option<SubscriptionGuard>,

    /// Guard so the first render only ever subscribes once.
    pub subscribed: bool,

    /// Session profile from the identity provider; gates which controls
    /// are shown, nothing more.
    pub session: Option<UserProfile>,

    /// Hospital directory, used for location suggestions.
    pub hospitals: Vec<Hospital>,

    pub show_post_form: bool,
    pub form: RequestForm,
    pub posting: bool,

    /// Matcher results for the request the user asked about, if any.
    pub matches: Option<MatchPanel>,

    /// Last operation failure, shown inline until the next action.
    pub flash: Option<String>,
}

impl RequestBoard {
    pub fn new() -> Self {
        Self {
            live: LiveQueryState::new(),
            filters: RequestFilters::default(),
            subscription: None,
            subscribed: false,
            session: None,
            hospitals: Vec::new(),
            show_post_form: false,
            form: RequestForm::default(),
            posting: false,
            matches: None,
            flash: None,
        }
    }

    /// The records the cards render: current snapshot run through the
    /// shared filter/sort engine.
    pub fn visible_requests(&self) -> Vec<BloodRequest> {
        filter_and_sort(self.live.records(), &self.filters)
    }

    /// Whether the signed-in user may change this request's status:
    /// the poster or an admin.
    pub fn can_moderate(&self, request: &BloodRequest) -> bool {
        match &self.session {
            Some(profile) => profile.is_admin() || profile.uid == request.user_id,
            None => false,
        }
    }
}
