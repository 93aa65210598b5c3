//! Hook execution engine
//!
//! Given a hook name and its git-supplied arguments, the engine resolves
//! which plugins apply, builds the typed context each plugin needs, runs
//! each applicable plugin's check, and folds the verdicts into one
//! accept/reject decision. File-list hooks, message hooks, and ref-update
//! hooks all run behind the same plugin contract.

use std::fmt;

mod aggregator;
mod context;
mod error;
mod executor;
mod plugin;
mod registry;
mod verdict;

pub use aggregator::aggregate;
pub use context::{ContextBuilder, HookContext, RefUpdate};
pub use error::EngineError;
pub use executor::{run_plugins, HookExecutor};
pub use plugin::{Capability, CheckFn, CheckOutcome, CheckStatus, PluginDescriptor};
pub use registry::PluginRegistry;
pub use verdict::{Overall, RunResult, Verdict, VerdictStatus};

pub use crate::git::{ChangeKind, FileEntry};

/// A supported git lifecycle hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    PreCommit,
    CommitMsg,
    PrePush,
    PreReceive,
    Update,
}

impl Hook {
    /// All supported hooks, in installation order
    pub const ALL: [Hook; 5] = [
        Hook::PreCommit,
        Hook::CommitMsg,
        Hook::PrePush,
        Hook::PreReceive,
        Hook::Update,
    ];

    /// Parse a git hook name
    pub fn parse(name: &str) -> Result<Self, EngineError> {
        match name {
            "pre-commit" => Ok(Hook::PreCommit),
            "commit-msg" => Ok(Hook::CommitMsg),
            "pre-push" => Ok(Hook::PrePush),
            "pre-receive" => Ok(Hook::PreReceive),
            "update" => Ok(Hook::Update),
            other => Err(EngineError::UnsupportedHook(other.to_string())),
        }
    }

    /// The git-facing hook name
    pub fn name(&self) -> &'static str {
        match self {
            Hook::PreCommit => "pre-commit",
            Hook::CommitMsg => "commit-msg",
            Hook::PrePush => "pre-push",
            Hook::PreReceive => "pre-receive",
            Hook::Update => "update",
        }
    }

    /// Whether git feeds this hook ref updates on stdin
    pub fn reads_stdin(&self) -> bool {
        matches!(self, Hook::PrePush | Hook::PreReceive)
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One hook invocation: the parsed hook plus its raw git-supplied arguments.
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct HookInvocation {
    hook: Hook,
    args: Vec<String>,
}

impl HookInvocation {
    pub fn new(hook: Hook, args: Vec<String>) -> Self {
        Self { hook, args }
    }

    /// Parse a raw hook name and arguments into an invocation
    pub fn parse(hook_name: &str, args: Vec<String>) -> Result<Self, EngineError> {
        Ok(Self::new(Hook::parse(hook_name)?, args))
    }

    pub fn hook(&self) -> Hook {
        self.hook
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}
