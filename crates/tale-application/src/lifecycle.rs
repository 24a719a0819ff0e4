//! System Lifecycle
//!
//! Drives a system under test through its one-time startup contract:
//!
//! ```text
//! Pending ──start_application──▶ ApplicationStarted
//!         ──setup_environment──▶ EnvironmentReady
//!         ──register_services──▶ ServicesRegistered
//!
//! any failing step ──▶ Failed
//! ```
//!
//! Each step runs at most once. Calling a step out of order, twice, or after
//! a failure returns a lifecycle error without touching the system. Errors
//! raised by the system itself are returned unchanged.

use crate::ports::system::SystemUnderTest;
use crate::scope::ServiceScope;
use std::fmt;
use std::sync::Arc;
use tale_domain::error::{Error, Result};
use tracing::{debug, warn};

/// Progress of a [`SystemLifecycle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecyclePhase {
    /// No step has run yet
    #[default]
    Pending,
    /// `start_application` succeeded
    ApplicationStarted,
    /// `setup_environment` succeeded
    EnvironmentReady,
    /// `register_services` succeeded; the lifecycle is complete
    ServicesRegistered,
    /// A step failed; no further step may run
    Failed,
}

/// One-shot executor of a system's startup hooks
pub struct SystemLifecycle {
    system: Arc<dyn SystemUnderTest>,
    phase: LifecyclePhase,
}

impl SystemLifecycle {
    /// Create a lifecycle for the given system
    pub fn new(system: Arc<dyn SystemUnderTest>) -> Self {
        Self {
            system,
            phase: LifecyclePhase::Pending,
        }
    }

    /// Current phase
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Bootstrap the application
    pub async fn start_application(&mut self) -> Result<()> {
        self.require(LifecyclePhase::Pending, "start_application")?;
        let result = self.system.start_application().await;
        self.advance(result, LifecyclePhase::ApplicationStarted, "start_application")
    }

    /// Prepare the test environment
    pub async fn setup_environment(&mut self) -> Result<()> {
        self.require(LifecyclePhase::ApplicationStarted, "setup_environment")?;
        let result = self.system.setup_environment().await;
        self.advance(result, LifecyclePhase::EnvironmentReady, "setup_environment")
    }

    /// Let the system register its services into `scope`
    pub fn register_services(&mut self, scope: &mut ServiceScope) -> Result<()> {
        self.require(LifecyclePhase::EnvironmentReady, "register_services")?;
        let result = self.system.register_services(scope);
        self.advance(result, LifecyclePhase::ServicesRegistered, "register_services")
    }

    fn require(&self, required: LifecyclePhase, step: &str) -> Result<()> {
        if self.phase == required {
            return Ok(());
        }
        Err(Error::lifecycle(format!(
            "cannot run {step} for '{}' while lifecycle is {:?}",
            self.system.name(),
            self.phase
        )))
    }

    fn advance(&mut self, result: Result<()>, next: LifecyclePhase, step: &str) -> Result<()> {
        match result {
            Ok(()) => {
                debug!(system = self.system.name(), step, "Lifecycle step completed");
                self.phase = next;
                Ok(())
            }
            Err(e) => {
                warn!(system = self.system.name(), step, error = %e, "Lifecycle step failed");
                self.phase = LifecyclePhase::Failed;
                Err(e)
            }
        }
    }
}

impl fmt::Debug for SystemLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemLifecycle")
            .field("system", &self.system.name())
            .field("phase", &self.phase)
            .finish()
    }
}
