//! Ref-check plugins for pre-push, pre-receive, and update
//!
//! Only the (ref, old, new) triple is available here. Checks that would need
//! ancestry queries, like force-push detection, belong to the server side,
//! not to these predicates.

use anyhow::Result;

use crate::config::GateConfig;
use crate::hooks::{CheckFn, CheckOutcome, Hook, PluginDescriptor, RefUpdate};

const REF_HOOKS: [Hook; 3] = [Hook::PrePush, Hook::PreReceive, Hook::Update];

/// Reject deletion of configured protected branches
pub fn protected_branch(config: &GateConfig) -> PluginDescriptor {
    let protected = config.checks.refs.protected_branches.clone();

    let check = move |update: &RefUpdate| -> Result<CheckOutcome> {
        let Some(branch) = update.branch_name() else {
            return Ok(CheckOutcome::skip("not a branch ref"));
        };
        if update.is_delete() && protected.iter().any(|name| name == branch) {
            return Ok(CheckOutcome::fail(format!(
                "deleting protected branch '{branch}' is not allowed"
            )));
        }
        Ok(CheckOutcome::pass())
    };

    PluginDescriptor::new(
        "protected-branch",
        "Refuse deletion of protected branches",
        REF_HOOKS.to_vec(),
        10,
        CheckFn::Ref(Box::new(check)),
    )
}

/// Gate all branch deletions behind configuration
pub fn branch_deletion(config: &GateConfig) -> PluginDescriptor {
    let allow = config.checks.refs.allow_deletions;

    let check = move |update: &RefUpdate| -> Result<CheckOutcome> {
        if update.branch_name().is_none() {
            return Ok(CheckOutcome::skip("not a branch ref"));
        }
        if update.is_delete() && !allow {
            return Ok(CheckOutcome::fail(
                "branch deletions are disabled (checks.refs.allow_deletions)",
            ));
        }
        Ok(CheckOutcome::pass())
    };

    PluginDescriptor::new(
        "branch-deletion",
        "Gate branch deletions behind configuration",
        REF_HOOKS.to_vec(),
        20,
        CheckFn::Ref(Box::new(check)),
    )
}
