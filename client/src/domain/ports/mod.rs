//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod api_transport;
mod key_value_store;
mod latency_sleeper;

#[cfg(test)]
pub use api_transport::MockApiTransport;
pub use api_transport::{ApiRequest, ApiTransport, HttpMethod, TransportError};
#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
pub use key_value_store::{AUTH_TOKEN_KEY, KeyValueStore, MemoryKeyValueStore};
pub use latency_sleeper::{LatencySleeper, TokioSleeper};
