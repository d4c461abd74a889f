pub mod decode;
pub mod engine;
pub mod live;
pub mod model;
pub mod requests;
