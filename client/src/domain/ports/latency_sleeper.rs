//! Driven port for the artificial latency of the demo facade.

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the caller for a fixed duration.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use reavise_client::domain::ports::{LatencySleeper, TokioSleeper};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// TokioSleeper.sleep(Duration::from_millis(1)).await;
/// # }
/// ```
#[async_trait]
pub trait LatencySleeper: Send + Sync {
    /// Sleep for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Tokio timer sleeper; honours paused test time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl LatencySleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
