//! Plugin executor
//!
//! Runs every applicable plugin against every target the context yields,
//! sequentially and in registry order. A check that returns an error or
//! panics yields an `Error` verdict for that target; the remaining plugins
//! still run, so one invocation reports every violation at once.

use std::panic::{catch_unwind, AssertUnwindSafe};

use anyhow::Result;
use tracing::{debug, warn};

use super::aggregator::aggregate;
use super::context::HookContext;
use super::plugin::{CheckFn, CheckOutcome, CheckStatus, PluginDescriptor};
use super::registry::PluginRegistry;
use super::verdict::{RunResult, Verdict, VerdictStatus};
use super::Hook;
use crate::config::GateConfig;

/// Ties the registry, configuration, and aggregation into one hook run
pub struct HookExecutor {
    registry: PluginRegistry,
    config: GateConfig,
}

impl HookExecutor {
    pub fn new(registry: PluginRegistry, config: GateConfig) -> Self {
        Self { registry, config }
    }

    /// Run all applicable plugins for this hook and fold their verdicts
    pub fn execute(&self, hook: Hook, context: &HookContext) -> RunResult {
        let plugins = self.registry.applicable(hook, context, &self.config);
        aggregate(run_plugins(&plugins, context))
    }
}

/// Run the given plugins, in order, against every target in the context.
///
/// Each plugin receives the same immutable targets; there is no shared
/// mutable state between plugins and no short-circuiting on failure.
pub fn run_plugins(plugins: &[&PluginDescriptor], context: &HookContext) -> Vec<Verdict> {
    let mut verdicts = Vec::new();

    for plugin in plugins {
        match (&plugin.check, context) {
            (CheckFn::File(check), HookContext::FileList(files)) => {
                for entry in files {
                    let target = entry.path.display().to_string();
                    verdicts.push(invoke(plugin, Some(target), || check(entry)));
                }
            }
            (CheckFn::Message(check), HookContext::Message(message)) => {
                verdicts.push(invoke(plugin, None, || check(message)));
            }
            (CheckFn::Ref(check), HookContext::RefUpdates(updates)) => {
                for update in updates {
                    let target = update.ref_name.clone();
                    verdicts.push(invoke(plugin, Some(target), || check(update)));
                }
            }
            // The registry filters on capability; reaching this arm means the
            // executor was handed an unfiltered plugin list.
            _ => {
                warn!(plugin = %plugin.name, "capability does not match context, no verdict");
            }
        }
        debug!(plugin = %plugin.name, "plugin executed");
    }

    verdicts
}

/// Invoke one check against one target, capturing errors and panics as
/// `Error` verdicts so a plugin defect can neither crash the run nor
/// silently pass it.
fn invoke<F>(plugin: &PluginDescriptor, target: Option<String>, check: F) -> Verdict
where
    F: FnOnce() -> Result<CheckOutcome>,
{
    match catch_unwind(AssertUnwindSafe(check)) {
        Ok(Ok(outcome)) => {
            let status = match outcome.status {
                CheckStatus::Pass => VerdictStatus::Pass,
                CheckStatus::Fail => VerdictStatus::Fail,
                CheckStatus::Skip => VerdictStatus::Skip,
            };
            Verdict::new(&plugin.name, target, status, outcome.message)
        }
        Ok(Err(err)) => Verdict::new(
            &plugin.name,
            target,
            VerdictStatus::Error,
            Some(format!("{err:#}")),
        ),
        Err(panic) => Verdict::new(
            &plugin.name,
            target,
            VerdictStatus::Error,
            Some(panic_message(panic)),
        ),
    }
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(text) = panic.downcast_ref::<&str>() {
        format!("check panicked: {text}")
    } else if let Some(text) = panic.downcast_ref::<String>() {
        format!("check panicked: {text}")
    } else {
        "check panicked".to_string()
    }
}
