// file: src/router/mod.rs
// description: Query routing module exports
// reference: Internal module structure

pub mod classifier;
pub mod patterns;

pub use classifier::{MatchReason, QueryClassifier, classify};
