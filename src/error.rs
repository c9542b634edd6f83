//! Error types for the bench façade and the run entry points.

use thiserror::Error;

use crate::provider::ProviderError;

/// Errors that escape a registration or run call.
///
/// Individual test failures never show up here: the scheduler records and
/// logs them, and they only surface as a single [`BenchError::RunFailed`]
/// once the report has been printed.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A suite descriptor violated its contract at registration time.
    #[error("invalid test suite '{suite}': {reason}")]
    InvalidSuite { suite: String, reason: String },

    /// A run entry point named a suite that was never registered.
    #[error("unknown test suite '{0}'")]
    UnknownSuite(String),

    /// The object provider failed to produce a suite instance; the run is
    /// aborted and no report is printed.
    #[error("failed to provide an instance for suite '{suite}': {source}")]
    Provider {
        suite: String,
        #[source]
        source: ProviderError,
    },

    /// One or more tests failed. The normal "red build" outcome, raised
    /// after the report is printed.
    #[error("{failed} test(s) failed")]
    RunFailed { failed: usize },
}

/// Result type for bench operations.
pub type BenchResult<T> = Result<T, BenchError>;
