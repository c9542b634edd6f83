//! Sequential test scheduler.
//!
//! Two nested folds drive a run: an outer pass over suites in
//! registration order and an inner pass over each suite's declared test
//! functions. Both are plain `async` loops, so every suspension point is
//! an explicit `.await`: a test that hands back a deferred outcome parks
//! its step until the future settles, and nothing else runs in between.
//! There is no time limit on a suspended step; a future that never
//! settles stalls the run.
//!
//! ## Failure policy
//!
//! A failing test is recorded, logged, and left behind; the fold always
//! advances. The one fold-terminating error is a provider failure: if an
//! instance cannot be constructed, the rest of the suite and any later
//! suites are abandoned and the error propagates to the caller.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::sync::Arc;
use std::time::Instant;

use crate::error::BenchError;
use crate::log::RunLog;
use crate::provider::ObjectProvider;
use crate::report;
use crate::state::{RunState, TestStatus};
use crate::suite::{Invocation, TestFunction, TestSuite};

/// Outer fold: run every suite in the state's registry snapshot, in
/// registration order, each to full completion before the next starts.
#[tracing::instrument(skip_all, fields(suite_count = state.suites().len()))]
pub(crate) async fn run_suites(
    state: &mut RunState<'_>,
    log: &RunLog<'_>,
    provider: &dyn ObjectProvider,
) -> Result<(), BenchError> {
    let suites: Vec<Arc<dyn TestSuite>> = state.suites().values().cloned().collect();
    for suite in suites {
        run_suite_tests(suite.as_ref(), None, state, log, provider).await?;
    }
    Ok(())
}

/// Inner fold: run the suite's declared test functions, in order.
///
/// With a `filter`, only the matching function executes; every other
/// function is skipped silently, without touching state or listeners.
#[tracing::instrument(skip_all, fields(suite = suite.name()))]
pub(crate) async fn run_suite_tests(
    suite: &dyn TestSuite,
    filter: Option<&str>,
    state: &mut RunState<'_>,
    log: &RunLog<'_>,
    provider: &dyn ObjectProvider,
) -> Result<(), BenchError> {
    report::print_header(log, suite.name());
    for function in suite.test_functions() {
        if let Some(wanted) = filter {
            if function.name() != wanted {
                continue;
            }
        }
        run_test(suite, &function, state, log, provider).await?;
    }
    Ok(())
}

/// One fold step: provision the instance, invoke the test, classify the
/// outcome.
async fn run_test(
    suite: &dyn TestSuite,
    function: &TestFunction,
    state: &mut RunState<'_>,
    log: &RunLog<'_>,
    provider: &dyn ObjectProvider,
) -> Result<(), BenchError> {
    let signature = format!("{}.{}()", suite.name(), function.name());
    state.notify(suite.name(), function.name(), TestStatus::Running);

    let started = Instant::now();
    let instance = state.ensure_instance(suite, provider).await?;
    let outcome = match function.invoke(instance.as_mut()) {
        Invocation::Immediate(outcome) => outcome,
        Invocation::Deferred(settled) => settled.await,
    };
    let elapsed = started.elapsed();

    match outcome {
        Ok(()) => {
            tracing::debug!("{} passed in {:?}", signature, elapsed);
            state.record_pass(signature);
            state.notify(suite.name(), function.name(), TestStatus::Passed { elapsed });
        }
        Err(failure) => {
            tracing::debug!("{} failed in {:?}", signature, elapsed);
            state.record_fail(signature.clone());
            state.notify(suite.name(), function.name(), TestStatus::Failed { elapsed });
            log.error(&format!("Test failed: {signature}"));
            log.error(failure.message());
            log.blank();
        }
    }
    Ok(())
}
