//! HTTP adapter for the [`ApiTransport`](crate::domain::ports::ApiTransport)
//! port.

mod transport;

pub use transport::{DEFAULT_API_BASE_URL, ReqwestTransport};
