#![forbid(unsafe_code)]
//! quipu — a minimal unit-test orchestration library
//!
//! Registers test suites, runs their test functions strictly one at a
//! time (synchronous or asynchronously-completing), isolates per-test
//! failures so one red test never aborts the run, and prints an ordered
//! pass/fail report. Aimed at small embedding projects that want a test
//! harness without pulling in a full framework.
//!
//! ## Model
//!
//! - A [`TestSuite`] names itself, lists its [`TestFunction`]s in
//!   execution order, and constructs its own state object.
//! - A [`TestBench`] registers suites, validates them up front, and
//!   exposes the run entry points (`run_all`, `run_suite`, `run_test`).
//! - Execution is strictly sequential; a test that returns a future
//!   suspends the run at that step until the future settles.
//! - Suite instances are provisioned lazily through an [`ObjectProvider`]
//!   (at most once per suite per run), so tests within a suite share
//!   object state by default.
//! - A run resolves `Ok(())` only when everything passed; failures are
//!   reported and then surfaced as a single [`BenchError::RunFailed`].
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `bench` and `runner` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Test bodies under the bench**: failures are `Err(TestFailure)` values, not panics (see [`checks`]).

pub mod bench;
pub mod checks;
pub mod error;
pub mod log;
pub mod provider;
mod report;
mod runner;
pub mod state;
pub mod suite;

pub use bench::TestBench;
pub use checks::{check_eq, check_true, fail};
pub use error::{BenchError, BenchResult};
pub use log::{LogLevel, LogListener};
pub use provider::{DefaultProvider, ObjectProvider, ProviderError};
pub use state::{ResultListener, TestEvent, TestStatus};
pub use suite::{Invocation, SuiteInstance, TestFailure, TestFunction, TestSuite};
