//! Mutable state of one run.
//!
//! A `RunState` is created fresh by each run entry point, owned by the
//! scheduler for the run's duration, and dropped afterwards; nothing in it
//! survives into the next run. It carries a read-only snapshot of the
//! suite registry, the lazily built suite instances, and the two ordered
//! signature logs the report is rendered from.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexMap;

use crate::error::BenchError;
use crate::provider::ObjectProvider;
use crate::suite::{SuiteInstance, TestSuite};

/// Lifecycle of one test function within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    /// The test is about to execute.
    Running,
    Passed { elapsed: Duration },
    Failed { elapsed: Duration },
}

/// A per-test state transition, delivered synchronously to the result
/// listener as it happens.
#[derive(Debug, Clone)]
pub struct TestEvent {
    pub suite: String,
    pub test: String,
    pub status: TestStatus,
}

/// Callback receiving every test state transition during a run.
pub type ResultListener = Box<dyn Fn(&TestEvent) + Send + Sync>;

pub(crate) struct RunState<'a> {
    /// Snapshot of the registry; read-only for the run's duration.
    suites: IndexMap<String, Arc<dyn TestSuite>>,
    /// Lazily constructed suite instances, at most one per suite per run.
    instances: HashMap<String, SuiteInstance>,
    /// Signatures of passed tests, in completion order.
    passed: Vec<String>,
    /// Signatures of failed tests, in completion order.
    failed: Vec<String>,
    listener: Option<&'a ResultListener>,
}

impl<'a> RunState<'a> {
    pub(crate) fn new(
        suites: IndexMap<String, Arc<dyn TestSuite>>,
        listener: Option<&'a ResultListener>,
    ) -> Self {
        Self {
            suites,
            instances: HashMap::new(),
            passed: Vec::new(),
            failed: Vec::new(),
            listener,
        }
    }

    pub(crate) fn suites(&self) -> &IndexMap<String, Arc<dyn TestSuite>> {
        &self.suites
    }

    pub(crate) fn passed(&self) -> &[String] {
        &self.passed
    }

    pub(crate) fn failed(&self) -> &[String] {
        &self.failed
    }

    pub(crate) fn record_pass(&mut self, signature: String) {
        self.passed.push(signature);
    }

    pub(crate) fn record_fail(&mut self, signature: String) {
        self.failed.push(signature);
    }

    /// Notify the result listener, if one is configured.
    pub(crate) fn notify(&self, suite: &str, test: &str, status: TestStatus) {
        if let Some(listener) = self.listener {
            listener(&TestEvent {
                suite: suite.to_string(),
                test: test.to_string(),
                status,
            });
        }
    }

    /// Return the suite's instance, constructing it through the provider
    /// on first use.
    ///
    /// The provider is consulted at most once per suite per run; every
    /// later call for the same suite reuses the stored instance, so tests
    /// within a suite share object state. The folds are strictly
    /// sequential, so two calls for the same suite can never race.
    pub(crate) async fn ensure_instance(
        &mut self,
        suite: &dyn TestSuite,
        provider: &dyn ObjectProvider,
    ) -> Result<&mut SuiteInstance, BenchError> {
        match self.instances.entry(suite.name().to_string()) {
            Entry::Occupied(slot) => Ok(slot.into_mut()),
            Entry::Vacant(slot) => {
                let instance =
                    provider.provide(suite).await.map_err(|source| BenchError::Provider {
                        suite: suite.name().to_string(),
                        source,
                    })?;
                Ok(slot.insert(instance))
            }
        }
    }
}
