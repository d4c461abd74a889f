//! Pure filtering and ordering over an already-fetched snapshot.
//!
//! The live query pushes every change as a complete record set; this
//! module never mutates that set. Filtering is client-side only (the
//! store predicate covers `status == active`), and the ordering is a
//! composite key: urgency rank ascending, then creation time descending.
//! The sort is stable, so full ties keep the server-assigned order.

use crate::model::blood::BloodGroup;
use crate::model::donor::Donor;
use crate::model::request::BloodRequest;

/// User-chosen filter values for the request board and donor directory.
/// `Default` is the unfiltered state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestFilters {
    /// Equality filter; `None` retains every group.
    pub blood_group: Option<BloodGroup>,
    /// Case-insensitive substring match on the location; empty retains all.
    pub location: String,
}

impl RequestFilters {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_unfiltered(&self) -> bool {
        self.blood_group.is_none() && self.location.is_empty()
    }

    fn matches(&self, blood_group: BloodGroup, location: &str) -> bool {
        if self.blood_group.is_some_and(|g| g != blood_group) {
            return false;
        }
        if self.location.is_empty() {
            return true;
        }
        location
            .to_lowercase()
            .contains(&self.location.to_lowercase())
    }
}

/// Applies the filters and returns a newly ordered copy of the retained
/// requests: most urgent first, newest first within equal urgency.
pub fn filter_and_sort(requests: &[BloodRequest], filters: &RequestFilters) -> Vec<BloodRequest> {
    let mut retained: Vec<BloodRequest> = requests
        .iter()
        .filter(|r| filters.matches(r.blood_group, &r.location))
        .cloned()
        .collect();
    retained.sort_by(|a, b| {
        a.urgency
            .rank()
            .cmp(&b.urgency.rank())
            .then(b.created_at.cmp(&a.created_at))
    });
    retained
}

/// Donor counterpart: same two filters, ordered available-first and then
/// newest registration first.
pub fn filter_donors(donors: &[Donor], filters: &RequestFilters) -> Vec<Donor> {
    let mut retained: Vec<Donor> = donors
        .iter()
        .filter(|d| filters.matches(d.blood_group, &d.location))
        .cloned()
        .collect();
    retained.sort_by(|a, b| {
        b.is_available()
            .cmp(&a.is_available())
            .then(b.created_at.cmp(&a.created_at))
    });
    retained
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::blood::{RequestStatus, Urgency};

    fn request(id: &str, group: BloodGroup, location: &str, urgency: Urgency, created_at: i64) -> BloodRequest {
        BloodRequest {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            requester_name: None,
            blood_group: group,
            location: location.to_string(),
            contact: "+880".to_string(),
            notes: None,
            created_at,
            status: RequestStatus::Active,
            urgency,
        }
    }

    fn ids(requests: &[BloodRequest]) -> Vec<&str> {
        requests.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn urgency_dominates_recency() {
        let input = vec![
            request("1", BloodGroup::APositive, "Dhaka", Urgency::Moderate, 200),
            request("2", BloodGroup::ONegative, "Chittagong", Urgency::Urgent, 100),
        ];
        let out = filter_and_sort(&input, &RequestFilters::default());
        assert_eq!(ids(&out), ["2", "1"]);
    }

    #[test]
    fn newer_first_within_equal_urgency() {
        let input = vec![
            request("old", BloodGroup::APositive, "Dhaka", Urgency::Low, 100),
            request("new", BloodGroup::APositive, "Dhaka", Urgency::Low, 300),
            request("mid", BloodGroup::APositive, "Dhaka", Urgency::Low, 200),
        ];
        let out = filter_and_sort(&input, &RequestFilters::default());
        assert_eq!(ids(&out), ["new", "mid", "old"]);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let input = vec![
            request("a", BloodGroup::BPositive, "Sylhet", Urgency::Moderate, 500),
            request("b", BloodGroup::APositive, "Dhaka", Urgency::Moderate, 500),
            request("c", BloodGroup::ONegative, "Khulna", Urgency::Moderate, 500),
        ];
        let out = filter_and_sort(&input, &RequestFilters::default());
        assert_eq!(ids(&out), ["a", "b", "c"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let input = vec![
            request("1", BloodGroup::APositive, "Dhaka", Urgency::Low, 50),
            request("2", BloodGroup::BNegative, "Dhaka", Urgency::Urgent, 10),
            request("3", BloodGroup::OPositive, "Bogra", Urgency::Urgent, 90),
            request("4", BloodGroup::AbNegative, "Comilla", Urgency::Moderate, 70),
        ];
        let once = filter_and_sort(&input, &RequestFilters::default());
        let twice = filter_and_sort(&once, &RequestFilters::default());
        assert_eq!(once, twice);
    }

    #[test]
    fn blood_group_filter_is_exact() {
        let input = vec![
            request("1", BloodGroup::APositive, "Dhaka", Urgency::Moderate, 200),
            request("2", BloodGroup::ONegative, "Chittagong", Urgency::Urgent, 100),
        ];
        let filters = RequestFilters {
            blood_group: Some(BloodGroup::APositive),
            location: String::new(),
        };
        let out = filter_and_sort(&input, &filters);
        assert_eq!(ids(&out), ["1"]);
    }

    #[test]
    fn location_filter_is_case_insensitive_substring() {
        let input = vec![
            request("1", BloodGroup::APositive, "Dhaka", Urgency::Moderate, 200),
            request("2", BloodGroup::ONegative, "Chittagong", Urgency::Urgent, 100),
        ];
        let filters = RequestFilters {
            blood_group: None,
            location: "dha".to_string(),
        };
        let out = filter_and_sort(&input, &filters);
        assert_eq!(ids(&out), ["1"]);
    }

    #[test]
    fn output_is_a_subset_matching_both_filters() {
        let input = vec![
            request("1", BloodGroup::APositive, "Dhaka Medical", Urgency::Urgent, 400),
            request("2", BloodGroup::APositive, "Rajshahi", Urgency::Urgent, 300),
            request("3", BloodGroup::OPositive, "Dhaka", Urgency::Low, 200),
        ];
        let filters = RequestFilters {
            blood_group: Some(BloodGroup::APositive),
            location: "DHAKA".to_string(),
        };
        let out = filter_and_sort(&input, &filters);
        assert_eq!(ids(&out), ["1"]);
        for r in &out {
            assert!(input.contains(r));
            assert_eq!(r.blood_group, BloodGroup::APositive);
            assert!(r.location.to_lowercase().contains("dhaka"));
        }
    }

    #[test]
    fn reset_restores_the_identity_filter() {
        let input = vec![
            request("1", BloodGroup::APositive, "Dhaka", Urgency::Urgent, 400),
            request("2", BloodGroup::ONegative, "Sylhet", Urgency::Low, 300),
        ];
        let mut filters = RequestFilters {
            blood_group: Some(BloodGroup::ONegative),
            location: "syl".to_string(),
        };
        filters.reset();
        assert!(filters.is_unfiltered());
        let out = filter_and_sort(&input, &filters);
        assert_eq!(out.len(), input.len());
        for r in &input {
            assert!(out.contains(r));
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_and_sort(&[], &RequestFilters::default()).is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec![
            request("1", BloodGroup::APositive, "Dhaka", Urgency::Low, 50),
            request("2", BloodGroup::BNegative, "Dhaka", Urgency::Urgent, 10),
        ];
        let copy = input.clone();
        let _ = filter_and_sort(&input, &RequestFilters::default());
        assert_eq!(input, copy);
    }

    #[test]
    fn donors_sort_available_first_then_newest() {
        let donor = |id: &str, available: Option<bool>, created_at: i64| Donor {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            name: "Donor".to_string(),
            blood_group: BloodGroup::OPositive,
            location: "Dhaka".to_string(),
            contact: "+880".to_string(),
            notify_token: None,
            available,
            last_donation: None,
            created_at,
        };
        let input = vec![
            donor("resting", Some(false), 900),
            donor("old", Some(true), 100),
            donor("new", None, 500),
        ];
        let out = filter_donors(&input, &RequestFilters::default());
        let out_ids: Vec<&str> = out.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(out_ids, ["new", "old", "resting"]);
    }
}
