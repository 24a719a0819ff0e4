//! Build observer port

/// Receives human-readable progress of an engine build
///
/// Notifications are best-effort: implementations must not fail and
/// never influence the outcome of the build.
pub trait BuildObserver: Send + Sync {
    /// Record a status message
    fn record_status(&self, message: &str);
}
