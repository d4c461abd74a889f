use common::engine::{filter_donors, RequestFilters};
use common::model::donor::Donor;

/// State container for the donor directory.
pub struct DonorDirectory {
    pub donors: Vec<Donor>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: RequestFilters,
    /// Guard so the first render only fetches once.
    pub loaded: bool,
}

impl DonorDirectory {
    pub fn new() -> Self {
        Self {
            donors: Vec::new(),
            loading: true,
            error: None,
            filters: RequestFilters::default(),
            loaded: false,
        }
    }

    /// Filtered view of the directory: available donors first, newest
    /// registrations first within each group.
    pub fn visible_donors(&self) -> Vec<Donor> {
        filter_donors(&self.donors, &self.filters)
    }
}
