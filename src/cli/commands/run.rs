//! Hook entrypoint command
//!
//! `gitgate run <hook> [args...]` is what the installed .git/hooks shims
//! invoke. Exit code 0 accepts the git operation, nonzero rejects it. All
//! diagnostic output goes to stderr; an accepted run is silent unless
//! verbose mode is on.

use anyhow::{Context, Result};
use clap::Args;
use std::io::BufRead;

use crate::cli::Output;
use crate::config::GateConfig;
use crate::git::GitRepo;
use crate::hooks::{ContextBuilder, Hook, HookExecutor, HookInvocation, Overall, PluginRegistry};
use crate::plugins::builtin_plugins;

#[derive(Args)]
pub struct RunArgs {
    /// Hook name to run (pre-commit, commit-msg, pre-push, pre-receive, update)
    pub hook: String,

    /// Git-supplied arguments for the hook
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

pub fn execute(args: RunArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let hook = Hook::parse(&args.hook)?;

    // pre-push and pre-receive receive their ref updates on stdin, one per
    // line; arguments given on the command line take precedence so the hook
    // can also be driven manually.
    let raw_args = if hook.reads_stdin() && args.args.is_empty() {
        read_stdin_lines()?
    } else {
        args.args
    };
    let invocation = HookInvocation::new(hook, raw_args);

    let config = GateConfig::load(config_path)?;
    let registry = PluginRegistry::new(builtin_plugins(&config)?)?;

    let repo = GitRepo::discover()?;
    let context = ContextBuilder::new(&repo).build(&invocation)?;

    let executor = HookExecutor::new(registry, config);
    let result = executor.execute(hook, &context);
    result.render_report(hook, output.is_verbose());

    if result.overall == Overall::Reject {
        std::process::exit(1);
    }
    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read ref update from stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}
