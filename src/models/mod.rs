// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod classification;
pub mod request;

pub use classification::SearchClassification;
pub use request::{Credentials, RequestOptions};
