use common::model::blood::BloodGroup;
use common::model::donor::Donor;

pub enum Msg {
    Loaded(Result<Vec<Donor>, String>),
    SetBloodGroupFilter(Option<BloodGroup>),
    SetLocationFilter(String),
    ResetFilters,
}
