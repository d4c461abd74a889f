pub mod donors;
pub mod hospitals;
pub mod matcher;
pub mod requests;
pub mod session;
