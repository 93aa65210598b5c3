//! Built-in plugins
//!
//! Each plugin is a small, independent predicate compiled from configuration
//! at startup and registered explicitly with the registry. Plugins that need
//! file contents read them themselves; the engine never prefetches bodies.

use anyhow::Result;

use crate::config::GateConfig;
use crate::hooks::PluginDescriptor;

mod file_checks;
mod message_checks;
mod ref_checks;

/// Enumerate every built-in plugin for the given configuration.
///
/// The returned list is what the host passes to `PluginRegistry::new`. A
/// plugin disabled by configuration is still registered; the registry skips
/// it per hook, and `plugins list` can still show it.
pub fn builtin_plugins(config: &GateConfig) -> Result<Vec<PluginDescriptor>> {
    Ok(vec![
        file_checks::secret_pattern(config)?,
        file_checks::large_file(config),
        file_checks::forbidden_path(config)?,
        file_checks::conflict_marker(),
        message_checks::conventional_commit(config)?,
        message_checks::subject_length(config),
        ref_checks::protected_branch(config),
        ref_checks::branch_deletion(config),
    ])
}
