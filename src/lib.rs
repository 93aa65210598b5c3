//! # GitGate - Pluggable Git Hook Engine
//!
//! GitGate intercepts git lifecycle events (pre-commit, commit-msg, pre-push,
//! pre-receive, update) and runs a configurable set of pluggable checks
//! against the affected files, commit message, or ref updates. The verdicts
//! fold into a single accept/reject decision that gates the underlying git
//! operation.
//!
//! ## Features
//!
//! - **One plugin contract**: file-list hooks, message hooks, and ref-update
//!   hooks all run behind the same capability-tagged check interface
//! - **Fail safe**: a plugin that errors or panics rejects the run instead of
//!   silently passing it
//! - **Complete reports**: every applicable plugin runs, so one invocation
//!   lists every violation
//! - **Deterministic order**: plugins run by configured priority, ties broken
//!   by name
//!
//! ## Quick Start
//!
//! ```bash
//! # Install gitgate
//! cargo install gitgate
//!
//! # Install hook shims into .git/hooks
//! gitgate install
//!
//! # Run a hook manually
//! gitgate run pre-commit
//! ```

pub mod cli;
pub mod config;
pub mod git;
pub mod hooks;
pub mod plugins;
pub mod shared;

pub use cli::{Cli, Output};
pub use config::GateConfig;

/// Result type alias for GitGate operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
