//! Install hook shims into .git/hooks
//!
//! Each installed hook is a small shell shim that re-enters the gitgate
//! binary with the hook name and git-supplied arguments. The shim carries a
//! marker comment so uninstall never touches hooks owned by other tools.

use anyhow::{bail, Result};
use clap::Args;

use crate::cli::Output;
use crate::git::GitRepo;
use crate::hooks::Hook;

/// Marker embedded in every shim; uninstall refuses to touch hooks without it.
pub const HOOK_MARKER: &str = "# Installed by gitgate";

#[derive(Args)]
pub struct InstallArgs {
    /// Specific hooks to install, comma-separated (default: all supported)
    #[arg(long, value_delimiter = ',')]
    pub hooks: Option<Vec<String>>,

    /// Overwrite existing hooks not managed by gitgate
    #[arg(long)]
    pub force: bool,

    /// Show what would be installed without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

pub fn execute(args: InstallArgs, output: &Output) -> Result<()> {
    let repo = GitRepo::discover()?;

    let hooks: Vec<Hook> = match &args.hooks {
        Some(names) => names
            .iter()
            .map(|name| Hook::parse(name).map_err(anyhow::Error::from))
            .collect::<Result<Vec<Hook>>>()?,
        None => Hook::ALL.to_vec(),
    };

    output.header("Installing git hooks");

    for hook in &hooks {
        if args.dry_run {
            output.list_item(&format!("Would install {}", hook.name()));
            continue;
        }
        if repo.hook_exists(hook.name()) && !args.force {
            let existing = repo.read_hook(hook.name())?;
            if !existing.contains(HOOK_MARKER) {
                bail!(
                    "Hook '{}' already exists and is not managed by gitgate (use --force to overwrite)",
                    hook.name()
                );
            }
        }
        repo.install_hook(hook.name(), &shim_script(*hook))?;
        output.list_item(&format!("Installed {}", hook.name()));
    }

    if !args.dry_run {
        output.success("Hook installation completed");
    }
    Ok(())
}

fn shim_script(hook: Hook) -> String {
    format!(
        "#!/bin/sh\n{HOOK_MARKER}. Do not edit; run 'gitgate uninstall' to remove.\nexec gitgate run {} \"$@\"\n",
        hook.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shim_script_shape() {
        let script = shim_script(Hook::PreCommit);
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains(HOOK_MARKER));
        assert!(script.contains("exec gitgate run pre-commit \"$@\""));
    }
}
