//! Plugin contract
//!
//! A plugin is a named check with an explicit capability, a set of
//! applicable hooks, and a priority. Capability dispatch is a closed set:
//! the check function variant a plugin carries determines which context
//! variant the executor feeds it.

use std::fmt;

use anyhow::Result;

use super::context::RefUpdate;
use super::Hook;
use crate::git::{CommitMessage, FileEntry};

/// What kind of context a plugin checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    FileCheck,
    MessageCheck,
    RefCheck,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::FileCheck => "file-check",
            Capability::MessageCheck => "message-check",
            Capability::RefCheck => "ref-check",
        };
        f.write_str(name)
    }
}

/// Status a check function reports for one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    /// The check does not apply to this target (e.g. its file pattern does
    /// not match); never affects the overall decision
    Skip,
}

/// What a check function returns for one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    pub message: Option<String>,
}

impl CheckOutcome {
    pub fn pass() -> Self {
        Self {
            status: CheckStatus::Pass,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Fail,
            message: Some(message.into()),
        }
    }

    pub fn skip(reason: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Skip,
            message: Some(reason.into()),
        }
    }
}

/// Capability-specific check function
///
/// File and ref checks are invoked once per target; message checks once per
/// message. Checks receive immutable targets and must not mutate the
/// repository. A check that needs file contents reads them itself; the
/// engine never prefetches bodies.
pub enum CheckFn {
    File(Box<dyn Fn(&FileEntry) -> Result<CheckOutcome> + Send + Sync>),
    Message(Box<dyn Fn(&CommitMessage) -> Result<CheckOutcome> + Send + Sync>),
    Ref(Box<dyn Fn(&RefUpdate) -> Result<CheckOutcome> + Send + Sync>),
}

impl CheckFn {
    pub fn capability(&self) -> Capability {
        match self {
            CheckFn::File(_) => Capability::FileCheck,
            CheckFn::Message(_) => Capability::MessageCheck,
            CheckFn::Ref(_) => Capability::RefCheck,
        }
    }
}

impl fmt::Debug for CheckFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CheckFn({})", self.capability())
    }
}

/// A registered plugin: one capability, one check, applicable to a set of hooks
#[derive(Debug)]
pub struct PluginDescriptor {
    /// Unique plugin name
    pub name: String,

    /// Short human-readable description
    pub description: String,

    /// Hooks this plugin may run for
    pub applicable_hooks: Vec<Hook>,

    /// Lower priorities run first; ties break on plugin name
    pub priority: i32,

    /// The capability-specific check
    pub check: CheckFn,
}

impl PluginDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        applicable_hooks: Vec<Hook>,
        priority: i32,
        check: CheckFn,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            applicable_hooks,
            priority,
            check,
        }
    }

    pub fn capability(&self) -> Capability {
        self.check.capability()
    }

    pub fn applies_to(&self, hook: Hook) -> bool {
        self.applicable_hooks.contains(&hook)
    }
}
