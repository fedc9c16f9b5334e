//! Test doubles shared by unit tests (in `src/`) and integration tests (in
//! `tests/`). Compiled for `cfg(test)` and the `test-support` feature.

mod clock;
mod sleepers;
mod transport;

pub use clock::FixedClock;
pub use sleepers::{ImmediateSleeper, RecordingSleeper};
pub use transport::ScriptedTransport;
