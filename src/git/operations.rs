//! Staged-change enumeration and commit message access

use anyhow::{Context, Result};
use git2::{Delta, DiffOptions};
use std::fmt;
use std::path::{Path, PathBuf};

use super::{CommitMessage, GitRepo};

/// How a staged file changed relative to HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Renamed,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ChangeKind::Added => "added",
            ChangeKind::Modified => "modified",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Renamed => "renamed",
        };
        f.write_str(kind)
    }
}

/// One staged file and how it changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the repository root
    pub path: PathBuf,

    /// Change kind relative to HEAD
    pub kind: ChangeKind,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl GitRepo {
    /// Enumerate files staged for commit, diffing HEAD against the index.
    ///
    /// A repository without commits yet (unborn branch) diffs against the
    /// empty tree, so every staged file shows up as added.
    pub fn staged_changes(&self) -> Result<Vec<FileEntry>> {
        let head_tree = match self.repo.head() {
            Ok(head) => Some(head.peel_to_tree().context("Failed to resolve HEAD tree")?),
            Err(_) => None,
        };

        let mut diff_opts = DiffOptions::new();
        diff_opts.include_typechange(true);
        let mut diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), None, Some(&mut diff_opts))
            .context("Failed to diff HEAD against index")?;
        diff.find_similar(None)
            .context("Failed to run rename detection")?;

        let mut entries = Vec::new();
        for delta in diff.deltas() {
            let kind = match delta.status() {
                Delta::Added | Delta::Copied => ChangeKind::Added,
                Delta::Deleted => ChangeKind::Deleted,
                Delta::Renamed => ChangeKind::Renamed,
                _ => ChangeKind::Modified,
            };
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(PathBuf::from);
            if let Some(path) = path {
                entries.push(FileEntry { path, kind });
            }
        }

        Ok(entries)
    }

    /// Read a commit message file, dropping git comment lines.
    pub fn read_commit_message(path: &Path) -> Result<CommitMessage> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read commit message file {}", path.display()))?;
        let cleaned: String = raw
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(CommitMessage::new(cleaned))
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

    fn stage(dir: &TempDir, name: &str, content: &str) {
        std::fs::write(dir.path().join(name), content).unwrap();
        let repo = git2::Repository::open(dir.path()).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    #[test]
    fn test_staged_changes_empty_index() {
        let (_temp, repo) = init_repo();
        assert!(repo.staged_changes().unwrap().is_empty());
    }

    #[test]
    fn test_staged_changes_on_unborn_branch_are_added() {
        let (temp, repo) = init_repo();
        stage(&temp, "a.txt", "hello");

        let entries = repo.staged_changes().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, Path::new("a.txt"));
        assert_eq!(entries[0].kind, ChangeKind::Added);
    }

    #[test]
    fn test_read_commit_message_strips_comments() {
        let temp = TempDir::new().unwrap();
        let msg_path = temp.path().join("COMMIT_EDITMSG");
        std::fs::write(
            &msg_path,
            "feat: add gate\n\nSome body text.\n# Please enter the commit message\n# for your changes.\n",
        )
        .unwrap();

        let message = GitRepo::read_commit_message(&msg_path).unwrap();
        assert_eq!(message.summary(), "feat: add gate");
        assert_eq!(message.body(), "Some body text.");
        assert!(!message.raw().contains("Please enter"));
    }

    #[test]
    fn test_read_commit_message_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(GitRepo::read_commit_message(&temp.path().join("nope")).is_err());
    }
}
