//! Build Observers
//!
//! Implementations of the [`BuildObserver`] port:
//!
//! | Observer | Behaviour |
//! |----------|-----------|
//! | [`NullBuildObserver`] | Discards every message |
//! | [`TracingBuildObserver`] | Emits each message as a `tracing` event |
//! | [`RecordingBuildObserver`] | Keeps messages in memory, in order |

use std::sync::{Mutex, PoisonError};
use tale_domain::ports::BuildObserver;
use tracing::info;

/// Null implementation for callers that do not watch builds
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBuildObserver;

impl BuildObserver for NullBuildObserver {
    fn record_status(&self, _message: &str) {}
}

/// Forwards build status to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBuildObserver;

impl BuildObserver for TracingBuildObserver {
    fn record_status(&self, message: &str) {
        info!(status = message, "Engine build status");
    }
}

/// Records every status message
#[derive(Debug, Default)]
pub struct RecordingBuildObserver {
    messages: Mutex<Vec<String>>,
}

impl RecordingBuildObserver {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of times `message` was recorded
    pub fn count(&self, message: &str) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|recorded| recorded.as_str() == message)
            .count()
    }
}

impl BuildObserver for RecordingBuildObserver {
    fn record_status(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
