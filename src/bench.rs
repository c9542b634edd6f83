//! Bench façade: the suite registry and the run entry points.
//!
//! `TestBench` owns the persistent registry of suites plus the injected
//! collaborators (object provider, log listener, result listener). Each
//! run entry point builds a fresh `RunState` and `RunLog`, drives the
//! scheduler to completion, and finishes by printing the report.
//!
//! ## Design
//!
//! Registration validates the suite contract up front, so a malformed
//! suite fails with a descriptive error at `add_suite` time instead of a
//! dynamic-dispatch surprise mid-run. Collaborators are configured at
//! construction time with `with_*` builders; the registry itself is only
//! mutated through `add_suite`.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::BenchError;
use crate::log::{LogLevel, LogListener, RunLog};
use crate::provider::{DefaultProvider, ObjectProvider};
use crate::report;
use crate::runner;
use crate::state::{ResultListener, RunState, TestEvent};
use crate::suite::TestSuite;

/// Registry and entry point for running test suites.
pub struct TestBench {
    suites: IndexMap<String, Arc<dyn TestSuite>>,
    provider: Box<dyn ObjectProvider>,
    log_listener: Option<LogListener>,
    result_listener: Option<ResultListener>,
}

impl TestBench {
    /// An empty bench with the default no-argument object provider.
    pub fn new() -> Self {
        Self {
            suites: IndexMap::new(),
            provider: Box::new(DefaultProvider),
            log_listener: None,
            result_listener: None,
        }
    }

    /// Replace the default object provider, e.g. to construct suite
    /// instances through a dependency-injection container.
    pub fn with_provider(mut self, provider: impl ObjectProvider + 'static) -> Self {
        self.provider = Box::new(provider);
        self
    }

    /// Tap every log line emitted during a run.
    pub fn with_log_listener(
        mut self,
        listener: impl Fn(&str, LogLevel) + Send + Sync + 'static,
    ) -> Self {
        self.log_listener = Some(Box::new(listener));
        self
    }

    /// Observe every per-test state transition during a run.
    pub fn with_result_listener(
        mut self,
        listener: impl Fn(&TestEvent) + Send + Sync + 'static,
    ) -> Self {
        self.result_listener = Some(Box::new(listener));
        self
    }

    /// Register a suite, validating its contract first.
    ///
    /// The suite is stored under its name; registering a second suite with
    /// the same name replaces the first. Returns `&mut Self` so
    /// registrations chain: `bench.add_suite(a)?.add_suite(b)?`. On a
    /// contract violation the registry is left untouched.
    pub fn add_suite(&mut self, suite: impl TestSuite + 'static) -> Result<&mut Self, BenchError> {
        validate_suite(&suite)?;
        self.suites.insert(suite.name().to_string(), Arc::new(suite));
        Ok(self)
    }

    /// Whether a suite is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.suites.contains_key(name)
    }

    /// Run every registered suite, in registration order.
    ///
    /// Resolves `Ok(())` only when every executed test passed. A failing
    /// test surfaces as [`BenchError::RunFailed`] after the report is
    /// printed; a provider error aborts the run before the report.
    pub async fn run_all(&self) -> Result<(), BenchError> {
        let log = RunLog::new(self.log_listener.as_ref());
        let mut state = RunState::new(self.suites.clone(), self.result_listener.as_ref());
        runner::run_suites(&mut state, &log, self.provider.as_ref()).await?;
        report::print_report(&log, &state)
    }

    /// Run a single registered suite.
    ///
    /// Fails with [`BenchError::UnknownSuite`] before any execution or
    /// output if `suite_name` was never registered.
    pub async fn run_suite(&self, suite_name: &str) -> Result<(), BenchError> {
        self.run_one(suite_name, None).await
    }

    /// Run a single test function of a registered suite.
    ///
    /// Every other function of the suite is skipped silently: it executes
    /// nothing, notifies nothing, and appears in neither result log.
    pub async fn run_test(&self, suite_name: &str, test_name: &str) -> Result<(), BenchError> {
        self.run_one(suite_name, Some(test_name)).await
    }

    async fn run_one(&self, suite_name: &str, filter: Option<&str>) -> Result<(), BenchError> {
        let Some(suite) = self.suites.get(suite_name) else {
            return Err(BenchError::UnknownSuite(suite_name.to_string()));
        };
        let suite = Arc::clone(suite);

        let log = RunLog::new(self.log_listener.as_ref());
        let mut state = RunState::new(self.suites.clone(), self.result_listener.as_ref());
        runner::run_suite_tests(suite.as_ref(), filter, &mut state, &log, self.provider.as_ref())
            .await?;

        if let Some(wanted) = filter {
            if state.passed().is_empty() && state.failed().is_empty() {
                tracing::warn!("No test named '{}' in suite '{}'", wanted, suite_name);
            }
        }
        report::print_report(&log, &state)
    }
}

impl Default for TestBench {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration-time contract check: the suite must carry a name, and
/// every declared test function must carry one too.
fn validate_suite(suite: &dyn TestSuite) -> Result<(), BenchError> {
    if suite.name().is_empty() {
        return Err(BenchError::InvalidSuite {
            suite: "<unnamed>".to_string(),
            reason: "suite name is empty".to_string(),
        });
    }
    for (index, function) in suite.test_functions().iter().enumerate() {
        if function.name().is_empty() {
            return Err(BenchError::InvalidSuite {
                suite: suite.name().to_string(),
                reason: format!("test function at position {index} has no name"),
            });
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
