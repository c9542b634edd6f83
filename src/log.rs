//! Per-run log channel.
//!
//! All user-facing output of a run (suite banners, failure details, the
//! final report) flows through a `RunLog`. The channel prints to
//! stdout/stderr and, when the bench was configured with a log listener,
//! taps every line to it as well. Absence of a listener disables only the
//! tap, never the printing.
//!
//! The channel is an explicit per-run value rather than a process-global
//! listener slot: it lives exactly as long as one run, so there is no
//! redirection to tear down on any exit path and overlapping runs cannot
//! observe each other's lines.

/// Severity of an emitted log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

/// Callback receiving every log line emitted during a run.
pub type LogListener = Box<dyn Fn(&str, LogLevel) + Send + Sync>;

/// The log channel of one run.
pub(crate) struct RunLog<'a> {
    listener: Option<&'a LogListener>,
}

impl<'a> RunLog<'a> {
    pub(crate) fn new(listener: Option<&'a LogListener>) -> Self {
        Self { listener }
    }

    /// Emit a normal line.
    pub(crate) fn info(&self, line: &str) {
        println!("{line}");
        self.tap(line, LogLevel::Info);
    }

    /// Emit an error line.
    pub(crate) fn error(&self, line: &str) {
        eprintln!("{line}");
        self.tap(line, LogLevel::Error);
    }

    /// Emit a blank separator line.
    pub(crate) fn blank(&self) {
        self.info("");
    }

    fn tap(&self, line: &str, level: LogLevel) {
        if let Some(listener) = self.listener {
            listener(line, level);
        }
    }
}
