// file: src/network/mod.rs
// description: api access layer module exports
// reference: internal module structure

pub mod observer;
pub mod probe;
pub mod smart_fetch;
pub mod transport;

pub use observer::{FetchObserver, NoopObserver, OriginKind, TracingObserver};
pub use probe::ResponseStatus;
pub use smart_fetch::{Origins, SmartFetch, default_headers};
pub use transport::{
    HttpRequest, ReqwestTransport, Transport, TransportError, TransportErrorKind,
};
