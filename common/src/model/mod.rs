pub mod blood;
pub mod donor;
pub mod hospital;
pub mod matched;
pub mod request;
pub mod user;
