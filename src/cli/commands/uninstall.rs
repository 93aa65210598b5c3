//! Remove gitgate-managed hooks from .git/hooks

use anyhow::Result;
use clap::Args;

use super::install::HOOK_MARKER;
use crate::cli::Output;
use crate::git::GitRepo;
use crate::hooks::Hook;

#[derive(Args)]
pub struct UninstallArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub fn execute(args: UninstallArgs, output: &Output) -> Result<()> {
    let repo = GitRepo::discover()?;

    if !args.yes && !output.confirm("Remove all gitgate hooks from this repository?") {
        output.info("Aborted");
        return Ok(());
    }

    let mut removed = 0;
    for hook in Hook::ALL {
        if !repo.hook_exists(hook.name()) {
            continue;
        }
        if repo.read_hook(hook.name())?.contains(HOOK_MARKER) {
            repo.remove_hook(hook.name())?;
            output.list_item(&format!("Removed {}", hook.name()));
            removed += 1;
        } else {
            output.warning(&format!("Skipping {}: not managed by gitgate", hook.name()));
        }
    }

    if removed == 0 {
        output.info("No gitgate hooks installed");
    } else {
        output.success(&format!("Removed {removed} hooks"));
    }
    Ok(())
}
