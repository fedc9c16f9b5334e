//! Latency sleepers that never wait on a timer.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::LatencySleeper;

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateSleeper;

#[async_trait]
impl LatencySleeper for ImmediateSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

/// Returns immediately and records each requested duration.
#[derive(Debug, Default)]
pub struct RecordingSleeper(pub Mutex<Vec<Duration>>);

impl RecordingSleeper {
    /// Durations requested so far, in call order.
    pub fn recorded(&self) -> Vec<Duration> {
        match self.0.lock() {
            Ok(entries) => entries.clone(),
            Err(_) => panic!("sleeper mutex"),
        }
    }
}

#[async_trait]
impl LatencySleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        let mut entries = match self.0.lock() {
            Ok(entries) => entries,
            Err(_) => panic!("sleeper mutex"),
        };
        entries.push(duration);
    }
}
