//! Report formatting.
//!
//! Renders the per-suite header banners and the final pass/fail summary
//! through the run's log channel. The report step is also where per-test
//! failures escalate: a non-empty failure log becomes a single
//! [`BenchError::RunFailed`] for the whole run.

use crate::error::BenchError;
use crate::log::RunLog;
use crate::state::RunState;

const REPORT_TITLE: &str = "Test report";

/// Emit a `#`-framed banner sized to fit the title line `# <name> #`.
pub(crate) fn print_header(log: &RunLog<'_>, name: &str) {
    let title = format!("# {name} #");
    let frame = "#".repeat(title.chars().count());
    log.info(&frame);
    log.info(&title);
    log.info(&frame);
}

/// Emit the final summary: a title banner, the numbered pass and failure
/// signature lists (each only when non-empty), and a totals line.
///
/// Returns `RunFailed` when any test failed: the single point where
/// recorded failures become a run-level error.
pub(crate) fn print_report(log: &RunLog<'_>, state: &RunState<'_>) -> Result<(), BenchError> {
    print_header(log, REPORT_TITLE);

    if !state.passed().is_empty() {
        log.info("Passed:");
        for (index, signature) in state.passed().iter().enumerate() {
            log.info(&format!("  {}. {}", index + 1, signature));
        }
    }
    if !state.failed().is_empty() {
        log.info("Failed:");
        for (index, signature) in state.failed().iter().enumerate() {
            log.info(&format!("  {}. {}", index + 1, signature));
        }
    }
    log.info(&format!(
        "{} passed, {} failed",
        state.passed().len(),
        state.failed().len()
    ));

    let failed = state.failed().len();
    if failed > 0 {
        return Err(BenchError::RunFailed { failed });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
