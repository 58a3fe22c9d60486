//! 联系表单提交后端抽象 Trait

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::types::ContactSubmission;

/// Contact backend Trait
///
/// Accepts a [`ContactSubmission`] and resolves success or failure
/// asynchronously. The site has no real backend; [`SimulatedContactBackend`]
/// stands in for one.
#[async_trait]
pub trait ContactBackend: Send + Sync {
    /// Deliver one submission
    async fn submit(&self, submission: &ContactSubmission) -> CoreResult<()>;
}

/// Simulated backend: waits a fixed latency, then resolves
#[derive(Debug, Clone)]
pub struct SimulatedContactBackend {
    latency: Duration,
    failure: Option<String>,
}

impl SimulatedContactBackend {
    /// Create a backend that always succeeds after `latency`
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failure: None,
        }
    }

    /// Make every submission fail with `message` after the latency
    #[must_use]
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }
}

impl Default for SimulatedContactBackend {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[async_trait]
impl ContactBackend for SimulatedContactBackend {
    async fn submit(&self, submission: &ContactSubmission) -> CoreResult<()> {
        log::debug!("Simulating contact submission {}", submission.id);
        tokio::time::sleep(self.latency).await;

        match &self.failure {
            Some(message) => Err(CoreError::SubmissionFailed(message.clone())),
            None => Ok(()),
        }
    }
}
