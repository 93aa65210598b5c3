//! Plugin registry
//!
//! Holds the process-wide set of plugins, rejects duplicate names at build
//! time, and answers which plugins apply to a given (hook, context, config)
//! tuple in deterministic run order.

use std::collections::HashSet;

use tracing::debug;

use super::context::HookContext;
use super::error::EngineError;
use super::plugin::PluginDescriptor;
use super::Hook;
use crate::config::GateConfig;

/// Read-only plugin registry, built once at startup
#[derive(Debug)]
pub struct PluginRegistry {
    plugins: Vec<PluginDescriptor>,
}

impl PluginRegistry {
    /// Build a registry from an explicit plugin list.
    ///
    /// Two plugins sharing a name is a fatal configuration error, raised
    /// here rather than at run time.
    pub fn new(plugins: Vec<PluginDescriptor>) -> Result<Self, EngineError> {
        let mut seen = HashSet::new();
        for plugin in &plugins {
            if !seen.insert(plugin.name.clone()) {
                return Err(EngineError::DuplicatePlugin(plugin.name.clone()));
            }
        }
        Ok(Self { plugins })
    }

    /// Plugins applicable to this hook and context, in run order.
    ///
    /// A plugin applies iff the hook is in its applicable set, its
    /// capability matches the context variant, and configuration does not
    /// exclude it for this hook. Order: ascending effective priority (the
    /// config override when present, the descriptor's own otherwise), ties
    /// broken by ascending name.
    pub fn applicable<'a>(
        &'a self,
        hook: Hook,
        context: &HookContext,
        config: &GateConfig,
    ) -> Vec<&'a PluginDescriptor> {
        let mut applicable: Vec<&PluginDescriptor> = self
            .plugins
            .iter()
            .filter(|plugin| plugin.applies_to(hook))
            .filter(|plugin| plugin.capability() == context.capability())
            .filter(|plugin| config.is_plugin_enabled(&plugin.name, hook.name()))
            .collect();

        applicable.sort_by(|a, b| {
            let pa = config.plugin_priority_override(&a.name).unwrap_or(a.priority);
            let pb = config.plugin_priority_override(&b.name).unwrap_or(b.priority);
            pa.cmp(&pb).then_with(|| a.name.cmp(&b.name))
        });

        debug!(hook = %hook, count = applicable.len(), "resolved applicable plugins");
        applicable
    }

    /// All registered plugins, in registration order
    pub fn iter(&self) -> impl Iterator<Item = &PluginDescriptor> {
        self.plugins.iter()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::CommitMessage;
    use crate::hooks::{CheckFn, CheckOutcome};

    fn message_plugin(name: &str, priority: i32) -> PluginDescriptor {
        PluginDescriptor::new(
            name,
            "test plugin",
            vec![Hook::CommitMsg],
            priority,
            CheckFn::Message(Box::new(|_| Ok(CheckOutcome::pass()))),
        )
    }

    fn message_context() -> HookContext {
        HookContext::Message(CommitMessage::new("fix: test"))
    }

    #[test]
    fn test_duplicate_plugin_rejected_at_build() {
        let err = PluginRegistry::new(vec![
            message_plugin("lint", 10),
            message_plugin("lint", 20),
        ])
        .unwrap_err();
        assert_eq!(err, EngineError::DuplicatePlugin("lint".to_string()));
    }

    #[test]
    fn test_priority_order_ignores_registration_order() {
        let registry = PluginRegistry::new(vec![
            message_plugin("alpha", 10),
            message_plugin("zeta", 5),
        ])
        .unwrap();
        let config = GateConfig::default();

        let order: Vec<&str> = registry
            .applicable(Hook::CommitMsg, &message_context(), &config)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(order, ["zeta", "alpha"]);
    }

    #[test]
    fn test_priority_ties_break_on_name() {
        let registry = PluginRegistry::new(vec![
            message_plugin("bravo", 10),
            message_plugin("alpha", 10),
        ])
        .unwrap();
        let config = GateConfig::default();

        let order: Vec<&str> = registry
            .applicable(Hook::CommitMsg, &message_context(), &config)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(order, ["alpha", "bravo"]);
    }

    #[test]
    fn test_config_priority_override_reorders() {
        let registry = PluginRegistry::new(vec![
            message_plugin("alpha", 10),
            message_plugin("zeta", 5),
        ])
        .unwrap();
        let mut config = GateConfig::default();
        config.plugins.priorities.insert("alpha".to_string(), 1);

        let order: Vec<&str> = registry
            .applicable(Hook::CommitMsg, &message_context(), &config)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(order, ["alpha", "zeta"]);
    }

    #[test]
    fn test_hook_filter() {
        let registry = PluginRegistry::new(vec![message_plugin("lint", 10)]).unwrap();
        let config = GateConfig::default();

        let applicable = registry.applicable(Hook::PreCommit, &message_context(), &config);
        assert!(applicable.is_empty());
    }

    #[test]
    fn test_capability_must_match_context() {
        // A message plugin never applies to a file-list context, even when
        // the hook matches.
        let plugin = PluginDescriptor::new(
            "lint",
            "test plugin",
            vec![Hook::PreCommit],
            10,
            CheckFn::Message(Box::new(|_| Ok(CheckOutcome::pass()))),
        );
        let registry = PluginRegistry::new(vec![plugin]).unwrap();
        let config = GateConfig::default();

        let context = HookContext::FileList(Vec::new());
        assert!(registry.applicable(Hook::PreCommit, &context, &config).is_empty());
    }

    #[test]
    fn test_config_exclusion_by_name() {
        let registry = PluginRegistry::new(vec![
            message_plugin("alpha", 10),
            message_plugin("bravo", 20),
        ])
        .unwrap();
        let mut config = GateConfig::default();
        config.plugins.disabled.push("alpha".to_string());

        let order: Vec<&str> = registry
            .applicable(Hook::CommitMsg, &message_context(), &config)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(order, ["bravo"]);
    }
}
