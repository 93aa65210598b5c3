//! Git integration layer for GitGate
//!
//! This module provides a high-level interface over git2 for repository
//! discovery, staged-change enumeration, commit message access, and hook
//! file management. The hook engine consumes only the structured values
//! returned here.

use anyhow::{Context, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

mod commit;
mod operations;

pub use commit::CommitMessage;
pub use operations::{ChangeKind, FileEntry};

/// Git repository handle
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at a known path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path).context("Failed to open git repository")?;

        Ok(Self { repo })
    }

    /// Discover and open a git repository from the current directory
    pub fn discover() -> Result<Self> {
        let repo = Repository::discover(".").context("No git repository found")?;

        Ok(Self { repo })
    }

    /// Get working directory path (bare repositories have none)
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Directory holding the repository's hook scripts
    pub fn hooks_dir(&self) -> PathBuf {
        self.repo.path().join("hooks")
    }

    /// Install a git hook
    pub fn install_hook(&self, hook_name: &str, hook_content: &str) -> Result<()> {
        let hooks_dir = self.hooks_dir();
        let hook_path = hooks_dir.join(hook_name);

        // Create hooks directory if it doesn't exist
        std::fs::create_dir_all(&hooks_dir).context("Failed to create hooks directory")?;

        // Write hook content
        std::fs::write(&hook_path, hook_content).context("Failed to write hook file")?;

        // Make hook executable on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&hook_path)
                .context("Failed to get hook file metadata")?
                .permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&hook_path, perms)
                .context("Failed to set hook file permissions")?;
        }

        Ok(())
    }

    /// Remove a git hook
    pub fn remove_hook(&self, hook_name: &str) -> Result<()> {
        let hook_path = self.hooks_dir().join(hook_name);

        if hook_path.exists() {
            std::fs::remove_file(&hook_path).context("Failed to remove hook file")?;
        }

        Ok(())
    }

    /// Check if a hook exists
    pub fn hook_exists(&self, hook_name: &str) -> bool {
        self.hooks_dir().join(hook_name).exists()
    }

    /// Read an installed hook's content
    pub fn read_hook(&self, hook_name: &str) -> Result<String> {
        let hook_path = self.hooks_dir().join(hook_name);
        std::fs::read_to_string(&hook_path)
            .with_context(|| format!("Failed to read hook {}", hook_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_repo() -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        git2::Repository::init(temp.path()).unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();
        (temp, repo)
    }

    #[test]
    fn test_install_and_remove_hook() {
        let (_temp, repo) = init_repo();

        assert!(!repo.hook_exists("pre-commit"));
        repo.install_hook("pre-commit", "#!/bin/sh\nexit 0\n").unwrap();
        assert!(repo.hook_exists("pre-commit"));
        assert!(repo.read_hook("pre-commit").unwrap().contains("exit 0"));

        repo.remove_hook("pre-commit").unwrap();
        assert!(!repo.hook_exists("pre-commit"));
    }

    #[test]
    fn test_remove_missing_hook_is_ok() {
        let (_temp, repo) = init_repo();
        repo.remove_hook("pre-push").unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_installed_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp, repo) = init_repo();
        repo.install_hook("update", "#!/bin/sh\nexit 0\n").unwrap();

        let mode = std::fs::metadata(repo.hooks_dir().join("update"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
