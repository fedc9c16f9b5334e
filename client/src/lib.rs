//! Client-side data layer for ReaVise.
//!
//! - [`domain`]: data shapes and the ports facades depend on.
//! - [`api`]: live REST facades over the [`ApiTransport`](domain::ports::ApiTransport) port.
//! - [`demo`]: the same surface served from fixtures with artificial latency.
//! - [`outbound`]: the reqwest transport adapter.
//! - [`state`]: reactive cells the UI observes.
//! - [`config`]: OrthoConfig-backed settings choosing demo or live mode.

pub mod api;
pub mod config;
pub mod demo;
pub mod domain;
pub mod outbound;
pub mod state;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{ApiMode, ClientSettings};
