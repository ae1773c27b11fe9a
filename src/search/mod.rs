// file: src/search/mod.rs
// description: search dispatch module exports
// reference: internal module structure

pub mod dispatch;

pub use dispatch::{SearchDispatcher, SearchPayload, SearchRequest};
