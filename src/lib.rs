// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod models;
pub mod network;
pub mod router;
pub mod search;
pub mod utils;

pub use config::{Config, NetworkConfig, SearchConfig};
pub use error::{GatewayError, Result};
pub use models::{Credentials, RequestOptions, SearchClassification};
pub use network::{
    FetchObserver, NoopObserver, Origins, ReqwestTransport, SmartFetch, TracingObserver,
    Transport, TransportError,
};
pub use router::{QueryClassifier, classify};
pub use search::{SearchDispatcher, SearchPayload, SearchRequest};
pub use utils::{HealthCheck, HealthReport, HealthStatus, Validator};
