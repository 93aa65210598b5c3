//! Verdicts and run results

use std::fmt;

/// Outcome status of one plugin check against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictStatus {
    Pass,
    Fail,
    Skip,
    /// The check itself raised or panicked; treated as a failure for the
    /// overall decision but reported distinctly
    Error,
}

impl VerdictStatus {
    /// Whether this status forces the run to reject
    pub fn is_rejecting(&self) -> bool {
        matches!(self, VerdictStatus::Fail | VerdictStatus::Error)
    }
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            VerdictStatus::Pass => "pass",
            VerdictStatus::Fail => "fail",
            VerdictStatus::Skip => "skip",
            VerdictStatus::Error => "error",
        };
        f.write_str(status)
    }
}

/// The outcome of one plugin check against one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Name of the plugin that produced this verdict
    pub plugin: String,

    /// Affected file or ref, when the context has per-target granularity
    pub target: Option<String>,

    pub status: VerdictStatus,

    pub message: Option<String>,
}

impl Verdict {
    pub fn new(
        plugin: impl Into<String>,
        target: Option<String>,
        status: VerdictStatus,
        message: Option<String>,
    ) -> Self {
        Self {
            plugin: plugin.into(),
            target,
            status,
            message,
        }
    }
}

/// Overall decision gating the git operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overall {
    Accept,
    Reject,
}

/// Terminal artifact of one hook invocation; not persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Verdicts in executor order, grouped by plugin
    pub verdicts: Vec<Verdict>,

    pub overall: Overall,
}
