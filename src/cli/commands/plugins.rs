//! Plugin inspection commands

use anyhow::Result;
use serde::Serialize;

use crate::cli::{Output, PluginsCommands};
use crate::config::GateConfig;
use crate::hooks::PluginRegistry;
use crate::plugins::builtin_plugins;

#[derive(Serialize)]
struct PluginRow {
    name: String,
    capability: String,
    hooks: Vec<String>,
    priority: i32,
    enabled: bool,
}

/// Execute plugin commands
pub fn execute(cmd: PluginsCommands, config_path: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        PluginsCommands::List { format } => list(&format, config_path, output),
    }
}

fn list(format: &str, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = GateConfig::load(config_path)?;
    let registry = PluginRegistry::new(builtin_plugins(&config)?)?;

    let rows: Vec<PluginRow> = registry
        .iter()
        .map(|plugin| PluginRow {
            name: plugin.name.clone(),
            capability: plugin.capability().to_string(),
            hooks: plugin
                .applicable_hooks
                .iter()
                .map(|hook| hook.name().to_string())
                .collect(),
            priority: config
                .plugin_priority_override(&plugin.name)
                .unwrap_or(plugin.priority),
            enabled: plugin
                .applicable_hooks
                .iter()
                .any(|hook| config.is_plugin_enabled(&plugin.name, hook.name())),
        })
        .collect();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    output.header("Registered plugins");
    for row in &rows {
        output.table_row(
            &row.name,
            &format!(
                "{} [{}] priority {}{}",
                row.capability,
                row.hooks.join(", "),
                row.priority,
                if row.enabled { "" } else { " (disabled)" }
            ),
        );
    }
    Ok(())
}
