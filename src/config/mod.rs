//! Configuration management for GitGate
//!
//! Configuration is resolved by merging, in ascending priority: the embedded
//! defaults, the user config (~/.config/gitgate/config.toml), the repository
//! config (gitgate.{toml,json,yaml,yml}), and GITGATE_-prefixed environment
//! variables. The hook engine consumes only the resolved value exposed here;
//! it never parses raw config files itself.

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Json, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Embedded default configuration, the lowest-priority layer
pub const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Resolved GitGate configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GateConfig {
    /// Plugin enablement and ordering policy
    #[serde(default)]
    pub plugins: PluginsConfig,

    /// Settings for the built-in checks
    #[serde(default)]
    pub checks: ChecksConfig,
}

/// Plugin enablement and ordering policy
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PluginsConfig {
    /// Plugin names that never run, on any hook
    #[serde(default)]
    pub disabled: Vec<String>,

    /// Per-hook skip lists: hook name to plugin names excluded for that hook
    #[serde(default)]
    pub skip: HashMap<String, Vec<String>>,

    /// Priority overrides by plugin name (lower runs first)
    #[serde(default)]
    pub priorities: HashMap<String, i32>,
}

/// Settings for the built-in checks
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChecksConfig {
    #[serde(default)]
    pub message: MessageChecksConfig,

    #[serde(default)]
    pub files: FileChecksConfig,

    #[serde(default)]
    pub refs: RefChecksConfig,

    #[serde(default)]
    pub secrets: SecretChecksConfig,
}

/// Commit message check settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageChecksConfig {
    /// Maximum subject line length in characters
    #[serde(default = "default_max_subject_length")]
    pub max_subject_length: usize,

    /// Require a (scope) segment in conventional commit summaries
    #[serde(default)]
    pub require_scope: bool,

    /// Accepted conventional commit types
    #[serde(default = "default_commit_types")]
    pub types: Vec<String>,
}

fn default_max_subject_length() -> usize {
    72
}

fn default_commit_types() -> Vec<String> {
    [
        "feat", "fix", "docs", "style", "refactor", "test", "chore", "perf", "ci", "build",
        "revert",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

impl Default for MessageChecksConfig {
    fn default() -> Self {
        Self {
            max_subject_length: default_max_subject_length(),
            require_scope: false,
            types: default_commit_types(),
        }
    }
}

/// File check settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileChecksConfig {
    /// Maximum staged file size in KiB
    #[serde(default = "default_max_file_size_kb")]
    pub max_file_size_kb: u64,

    /// Glob patterns for paths that must never be committed
    #[serde(default)]
    pub forbidden_patterns: Vec<String>,
}

fn default_max_file_size_kb() -> u64 {
    1024
}

impl Default for FileChecksConfig {
    fn default() -> Self {
        Self {
            max_file_size_kb: default_max_file_size_kb(),
            forbidden_patterns: Vec::new(),
        }
    }
}

/// Ref update check settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefChecksConfig {
    /// Branches whose deletion is always rejected
    #[serde(default)]
    pub protected_branches: Vec<String>,

    /// Whether ordinary branch deletions are allowed
    #[serde(default = "default_allow_deletions")]
    pub allow_deletions: bool,
}

fn default_allow_deletions() -> bool {
    true
}

impl Default for RefChecksConfig {
    fn default() -> Self {
        Self {
            protected_branches: Vec::new(),
            allow_deletions: default_allow_deletions(),
        }
    }
}

/// Secret detection settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SecretChecksConfig {
    /// Named regex patterns scanned against staged file contents
    #[serde(default)]
    pub patterns: Vec<SecretPatternConfig>,
}

/// A named secret detection pattern
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretPatternConfig {
    /// Pattern name, shown in reports
    pub name: String,

    /// Regex pattern
    pub regex: String,

    /// Whether this pattern is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl GateConfig {
    /// Load configuration, merging defaults, user and repo files, and env vars
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        // If a custom config is specified, use only that on top of defaults
        if let Some(custom_path) = custom_config {
            figment = figment
                .merge(Toml::file(custom_path))
                .merge(Json::file(custom_path))
                .merge(Yaml::file(custom_path));
        } else {
            figment = figment
                .merge(Toml::file(Self::user_config_path()))
                .merge(Toml::file("gitgate.toml"))
                .merge(Json::file("gitgate.json"))
                .merge(Yaml::file("gitgate.yaml"))
                .merge(Yaml::file("gitgate.yml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("GITGATE_"));

        figment.extract().context("Invalid GitGate configuration")
    }

    /// Load only the embedded defaults
    pub fn defaults() -> Result<Self> {
        Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .extract()
            .context("Invalid embedded default configuration")
    }

    /// Whether a plugin may run for the given hook
    pub fn is_plugin_enabled(&self, plugin: &str, hook_name: &str) -> bool {
        if self.plugins.disabled.iter().any(|name| name == plugin) {
            return false;
        }
        match self.plugins.skip.get(hook_name) {
            Some(skipped) => !skipped.iter().any(|name| name == plugin),
            None => true,
        }
    }

    /// Configured priority override for a plugin, if any
    pub fn plugin_priority_override(&self, plugin: &str) -> Option<i32> {
        self.plugins.priorities.get(plugin).copied()
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{home}/.config/gitgate/config.toml"),
            Err(_) => "~/.config/gitgate/config.toml".to_string(),
        }
    }
}
