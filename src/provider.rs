//! Object provisioning for suite instances.
//!
//! The scheduler never constructs suite objects itself; it asks an
//! [`ObjectProvider`]. The default provider performs plain no-argument
//! construction via [`TestSuite::instantiate`]; embedders inject a custom
//! provider to wire suites up with external dependencies.

use async_trait::async_trait;
use thiserror::Error;

use crate::suite::{SuiteInstance, TestSuite};

/// Error produced while constructing a suite instance.
///
/// Unlike a test failure, a provider error is fatal to the run: the
/// remaining tests of the suite (and any later suites) are not executed.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ProviderError(String);

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Produces one instance of a suite on demand.
///
/// `provide` is called at most once per suite per run; the scheduler
/// memoizes the result so every test function of a suite shares the same
/// instance.
#[async_trait]
pub trait ObjectProvider: Send + Sync {
    async fn provide(&self, suite: &dyn TestSuite) -> Result<SuiteInstance, ProviderError>;
}

/// No-argument construction via [`TestSuite::instantiate`].
#[derive(Debug, Default)]
pub struct DefaultProvider;

#[async_trait]
impl ObjectProvider for DefaultProvider {
    async fn provide(&self, suite: &dyn TestSuite) -> Result<SuiteInstance, ProviderError> {
        suite.instantiate()
    }
}
