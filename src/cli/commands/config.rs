//! Configuration management commands

use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::{ConfigCommands, Output};
use crate::config::{GateConfig, DEFAULT_CONFIG};
use crate::hooks::PluginRegistry;
use crate::plugins::builtin_plugins;

/// Execute config commands
pub fn execute(cmd: ConfigCommands, config_path: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Init { force } => init(force, output),
        ConfigCommands::Validate => validate(config_path, output),
        ConfigCommands::Show => show(config_path),
    }
}

fn init(force: bool, output: &Output) -> Result<()> {
    let target = Path::new("gitgate.toml");
    if target.exists() && !force {
        bail!("gitgate.toml already exists (use --force to overwrite)");
    }
    std::fs::write(target, DEFAULT_CONFIG)?;
    output.success("Wrote gitgate.toml");
    Ok(())
}

fn validate(config_path: Option<&str>, output: &Output) -> Result<()> {
    // Loading extracts into the typed config; building the registry compiles
    // every configured pattern. Either step surfaces bad values.
    let config = GateConfig::load(config_path)?;
    let registry = PluginRegistry::new(builtin_plugins(&config)?)?;
    output.success(&format!(
        "Configuration OK ({} plugins registered)",
        registry.len()
    ));
    Ok(())
}

fn show(config_path: Option<&str>) -> Result<()> {
    let config = GateConfig::load(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
