//! Result aggregation and report rendering
//!
//! Folds the ordered verdict list into one accept/reject decision and a
//! consolidated stderr report. Skip verdicts never affect the outcome; fail
//! and error verdicts both reject.

use console::style;

use super::verdict::{Overall, RunResult, Verdict, VerdictStatus};
use super::Hook;

/// Fold verdicts into a run result.
///
/// Order is preserved exactly as produced by the executor, so the report
/// matches configured priority.
pub fn aggregate(verdicts: Vec<Verdict>) -> RunResult {
    let overall = if verdicts.iter().any(|v| v.status.is_rejecting()) {
        Overall::Reject
    } else {
        Overall::Accept
    };
    RunResult { verdicts, overall }
}

impl RunResult {
    /// Distinct plugins with failing verdicts, in first-appearance order
    pub fn failed_plugins(&self) -> Vec<&str> {
        self.distinct_plugins(VerdictStatus::Fail)
    }

    /// Distinct plugins with erroring verdicts, in first-appearance order
    pub fn errored_plugins(&self) -> Vec<&str> {
        self.distinct_plugins(VerdictStatus::Error)
    }

    fn distinct_plugins(&self, status: VerdictStatus) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for verdict in self.verdicts.iter().filter(|v| v.status == status) {
            if !names.contains(&verdict.plugin.as_str()) {
                names.push(&verdict.plugin);
            }
        }
        names
    }

    /// Render the consolidated report to stderr.
    ///
    /// One line per failing or erroring verdict, then a summary with the
    /// distinct plugin counts. An accepted run prints nothing unless verbose.
    pub fn render_report(&self, hook: Hook, verbose: bool) {
        for verdict in &self.verdicts {
            match verdict.status {
                VerdictStatus::Fail | VerdictStatus::Error => {
                    eprintln!("{}", format_verdict_line(verdict));
                }
                VerdictStatus::Pass | VerdictStatus::Skip => {
                    if verbose {
                        eprintln!("{}", format_verdict_line(verdict));
                    }
                }
            }
        }

        match self.overall {
            Overall::Reject => {
                eprintln!(
                    "{} {} rejected: {} plugin(s) failed, {} errored",
                    style("✖").red().bold(),
                    hook,
                    self.failed_plugins().len(),
                    self.errored_plugins().len()
                );
            }
            Overall::Accept => {
                if verbose {
                    eprintln!("{} {} accepted", style("✔").green(), hook);
                }
            }
        }
    }
}

fn format_verdict_line(verdict: &Verdict) -> String {
    let symbol = match verdict.status {
        VerdictStatus::Pass => style("✔").green().to_string(),
        VerdictStatus::Fail => style("✖").red().to_string(),
        VerdictStatus::Skip => style("-").dim().to_string(),
        VerdictStatus::Error => style("⚠").yellow().to_string(),
    };
    let mut line = format!("{symbol} {}", verdict.plugin);
    if let Some(target) = &verdict.target {
        line.push_str(&format!(" {target}"));
    }
    if let Some(message) = &verdict.message {
        line.push_str(&format!(": {message}"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(plugin: &str, status: VerdictStatus) -> Verdict {
        Verdict::new(plugin, None, status, None)
    }

    #[test]
    fn test_all_pass_accepts() {
        let result = aggregate(vec![
            verdict("alpha", VerdictStatus::Pass),
            verdict("beta", VerdictStatus::Pass),
        ]);
        assert_eq!(result.overall, Overall::Accept);
    }

    #[test]
    fn test_skip_never_affects_outcome() {
        let result = aggregate(vec![
            verdict("alpha", VerdictStatus::Skip),
            verdict("beta", VerdictStatus::Pass),
        ]);
        assert_eq!(result.overall, Overall::Accept);
    }

    #[test]
    fn test_any_fail_rejects_and_keeps_all_verdicts() {
        let result = aggregate(vec![
            verdict("alpha", VerdictStatus::Pass),
            verdict("beta", VerdictStatus::Fail),
            verdict("gamma", VerdictStatus::Pass),
        ]);
        assert_eq!(result.overall, Overall::Reject);
        assert_eq!(result.verdicts.len(), 3);
    }

    #[test]
    fn test_error_rejects_like_fail() {
        let result = aggregate(vec![verdict("alpha", VerdictStatus::Error)]);
        assert_eq!(result.overall, Overall::Reject);
    }

    #[test]
    fn test_empty_verdicts_accept() {
        let result = aggregate(Vec::new());
        assert_eq!(result.overall, Overall::Accept);
    }

    #[test]
    fn test_distinct_plugin_counts() {
        // Per-file verdicts from the same plugin count once in the summary.
        let result = aggregate(vec![
            Verdict::new("lint", Some("a.rs".into()), VerdictStatus::Fail, None),
            Verdict::new("lint", Some("b.rs".into()), VerdictStatus::Fail, None),
            verdict("broken", VerdictStatus::Error),
        ]);
        assert_eq!(result.failed_plugins(), ["lint"]);
        assert_eq!(result.errored_plugins(), ["broken"]);
    }

    #[test]
    fn test_verdict_order_preserved() {
        let result = aggregate(vec![
            verdict("zeta", VerdictStatus::Pass),
            verdict("alpha", VerdictStatus::Fail),
        ]);
        assert_eq!(result.verdicts[0].plugin, "zeta");
        assert_eq!(result.verdicts[1].plugin, "alpha");
    }
}
