//! Message-check plugins for commit-msg

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::GateConfig;
use crate::git::CommitMessage;
use crate::hooks::{CheckFn, CheckOutcome, Hook, PluginDescriptor};

/// Require the summary line to follow the conventional commit format:
/// `type(scope)!?: description` over the configured type list.
pub fn conventional_commit(config: &GateConfig) -> Result<PluginDescriptor> {
    let types = config.checks.message.types.join("|");
    let scope = if config.checks.message.require_scope {
        r"\([^)]+\)"
    } else {
        r"(\([^)]+\))?"
    };
    let pattern = format!(r"^({types}){scope}!?: .+");
    let regex = Regex::new(&pattern).context("Invalid conventional commit pattern")?;

    let check = move |message: &CommitMessage| -> Result<CheckOutcome> {
        let summary = message.summary();
        if summary.is_empty() {
            return Ok(CheckOutcome::fail("commit message is empty"));
        }
        if !regex.is_match(summary) {
            return Ok(CheckOutcome::fail(
                "summary must follow the conventional format: type(scope): description",
            ));
        }
        Ok(CheckOutcome::pass())
    };

    Ok(PluginDescriptor::new(
        "conventional-commit",
        "Require conventional commit summaries",
        vec![Hook::CommitMsg],
        10,
        CheckFn::Message(Box::new(check)),
    ))
}

/// Cap the summary line length. Emptiness is the conventional-commit
/// plugin's call, so an empty summary passes here.
pub fn subject_length(config: &GateConfig) -> PluginDescriptor {
    let max = config.checks.message.max_subject_length;

    let check = move |message: &CommitMessage| -> Result<CheckOutcome> {
        let length = message.summary().chars().count();
        if length > max {
            return Ok(CheckOutcome::fail(format!(
                "summary is {length} characters, maximum is {max}"
            )));
        }
        Ok(CheckOutcome::pass())
    };

    PluginDescriptor::new(
        "subject-length",
        "Cap the commit summary line length",
        vec![Hook::CommitMsg],
        20,
        CheckFn::Message(Box::new(check)),
    )
}
