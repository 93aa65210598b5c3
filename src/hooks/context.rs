//! Typed hook contexts
//!
//! Each hook run builds exactly one context matching the hook's input shape:
//! the staged file list for pre-commit, the commit message for commit-msg,
//! and ref-update triples for pre-push, pre-receive, and update. Contexts
//! are built once per invocation and read-only afterwards.

use anyhow::{bail, Context as _, Result};
use std::path::Path;
use tracing::debug;

use super::plugin::Capability;
use super::{Hook, HookInvocation};
use crate::git::{CommitMessage, FileEntry, GitRepo};

/// One ref moved by a push. All-zero SHAs denote ref creation/deletion,
/// which is a valid state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefUpdate {
    pub ref_name: String,
    pub old_sha: String,
    pub new_sha: String,
}

impl RefUpdate {
    pub fn new(
        ref_name: impl Into<String>,
        old_sha: impl Into<String>,
        new_sha: impl Into<String>,
    ) -> Self {
        Self {
            ref_name: ref_name.into(),
            old_sha: old_sha.into(),
            new_sha: new_sha.into(),
        }
    }

    /// The ref did not exist before this update
    pub fn is_create(&self) -> bool {
        is_zero_sha(&self.old_sha)
    }

    /// The ref is being deleted
    pub fn is_delete(&self) -> bool {
        is_zero_sha(&self.new_sha)
    }

    /// Branch name when this ref is a local branch
    pub fn branch_name(&self) -> Option<&str> {
        self.ref_name.strip_prefix("refs/heads/")
    }
}

fn is_zero_sha(sha: &str) -> bool {
    !sha.is_empty() && sha.bytes().all(|b| b == b'0')
}

/// The typed input a hook run provides to plugins
#[derive(Debug)]
pub enum HookContext {
    FileList(Vec<FileEntry>),
    Message(CommitMessage),
    RefUpdates(Vec<RefUpdate>),
}

impl HookContext {
    /// The capability a plugin needs to consume this context
    pub fn capability(&self) -> Capability {
        match self {
            HookContext::FileList(_) => Capability::FileCheck,
            HookContext::Message(_) => Capability::MessageCheck,
            HookContext::RefUpdates(_) => Capability::RefCheck,
        }
    }

    /// Number of targets plugins will be invoked against
    pub fn target_count(&self) -> usize {
        match self {
            HookContext::FileList(files) => files.len(),
            HookContext::Message(_) => 1,
            HookContext::RefUpdates(updates) => updates.len(),
        }
    }
}

/// Builds the typed context for one hook invocation
pub struct ContextBuilder<'a> {
    repo: &'a GitRepo,
}

impl<'a> ContextBuilder<'a> {
    pub fn new(repo: &'a GitRepo) -> Self {
        Self { repo }
    }

    /// Build the context matching the invocation's hook contract.
    ///
    /// An empty file list or empty message is a valid context; deciding
    /// pass/fail on emptiness is the plugins' job.
    pub fn build(&self, invocation: &HookInvocation) -> Result<HookContext> {
        let context = match invocation.hook() {
            Hook::PreCommit => HookContext::FileList(self.repo.staged_changes()?),
            Hook::CommitMsg => {
                let path = invocation.args().first().context(
                    "commit-msg hook requires the message file path as its first argument",
                )?;
                HookContext::Message(GitRepo::read_commit_message(Path::new(path))?)
            }
            Hook::Update => {
                let [ref_name, old_sha, new_sha] = invocation.args() else {
                    bail!(
                        "update hook expects <ref-name> <old-sha> <new-sha>, got {} arguments",
                        invocation.args().len()
                    );
                };
                HookContext::RefUpdates(vec![RefUpdate::new(
                    ref_name.as_str(),
                    old_sha.as_str(),
                    new_sha.as_str(),
                )])
            }
            Hook::PreReceive => HookContext::RefUpdates(parse_receive_lines(invocation.args())?),
            Hook::PrePush => HookContext::RefUpdates(parse_push_lines(invocation.args())?),
        };
        debug!(hook = %invocation.hook(), targets = context.target_count(), "built hook context");
        Ok(context)
    }
}

/// Parse pre-receive lines: `<old-sha> <new-sha> <ref-name>`
fn parse_receive_lines(lines: &[String]) -> Result<Vec<RefUpdate>> {
    lines
        .iter()
        .map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next(), fields.next(), fields.next()) {
                (Some(old), Some(new), Some(ref_name), None) => {
                    Ok(RefUpdate::new(ref_name, old, new))
                }
                _ => bail!("malformed pre-receive line: '{line}'"),
            }
        })
        .collect()
}

/// Parse pre-push lines: `<local-ref> <local-sha> <remote-ref> <remote-sha>`.
/// The remote ref is the one being gated: its old value is the remote SHA
/// and its new value the local SHA being pushed.
fn parse_push_lines(lines: &[String]) -> Result<Vec<RefUpdate>> {
    lines
        .iter()
        .map(|line| {
            let mut fields = line.split_whitespace();
            match (
                fields.next(),
                fields.next(),
                fields.next(),
                fields.next(),
                fields.next(),
            ) {
                (Some(_local_ref), Some(local_sha), Some(remote_ref), Some(remote_sha), None) => {
                    Ok(RefUpdate::new(remote_ref, remote_sha, local_sha))
                }
                _ => bail!("malformed pre-push line: '{line}'"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::ChangeKind;

    const SHA_A: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const SHA_B: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
    const ZERO: &str = "0000000000000000000000000000000000000000";

    #[test]
    fn test_parse_receive_lines() {
        let lines = vec![
            format!("{SHA_A} {SHA_B} refs/heads/main"),
            format!("{ZERO} {SHA_B} refs/heads/feature"),
            format!("{SHA_A} {ZERO} refs/heads/stale"),
        ];
        let updates = parse_receive_lines(&lines).unwrap();

        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0].ref_name, "refs/heads/main");
        assert_eq!(updates[0].old_sha, SHA_A);
        assert_eq!(updates[0].new_sha, SHA_B);
        assert!(updates[1].is_create());
        assert!(updates[2].is_delete());
    }

    #[test]
    fn test_parse_receive_line_malformed() {
        assert!(parse_receive_lines(&["only two fields".to_string()]).is_err());
        assert!(parse_receive_lines(&[format!("{SHA_A} {SHA_B} ref extra")]).is_err());
    }

    #[test]
    fn test_parse_push_lines_maps_remote_ref() {
        let lines = vec![format!("refs/heads/topic {SHA_B} refs/heads/main {SHA_A}")];
        let updates = parse_push_lines(&lines).unwrap();

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].ref_name, "refs/heads/main");
        assert_eq!(updates[0].old_sha, SHA_A);
        assert_eq!(updates[0].new_sha, SHA_B);
    }

    #[test]
    fn test_parse_push_branch_deletion() {
        let lines = vec![format!("(delete) {ZERO} refs/heads/old {SHA_A}")];
        let updates = parse_push_lines(&lines).unwrap();
        assert!(updates[0].is_delete());
    }

    #[test]
    fn test_branch_name() {
        let branch = RefUpdate::new("refs/heads/main", SHA_A, SHA_B);
        assert_eq!(branch.branch_name(), Some("main"));

        let tag = RefUpdate::new("refs/tags/v1.0", SHA_A, SHA_B);
        assert_eq!(tag.branch_name(), None);
    }

    #[test]
    fn test_context_capability_matches_variant() {
        let files = HookContext::FileList(vec![FileEntry::new("a.rs", ChangeKind::Modified)]);
        assert_eq!(files.capability(), Capability::FileCheck);
        assert_eq!(files.target_count(), 1);

        let message = HookContext::Message(CommitMessage::new("fix: x"));
        assert_eq!(message.capability(), Capability::MessageCheck);
        assert_eq!(message.target_count(), 1);

        let refs = HookContext::RefUpdates(vec![]);
        assert_eq!(refs.capability(), Capability::RefCheck);
        assert_eq!(refs.target_count(), 0);
    }

    #[test]
    fn test_empty_file_list_is_valid() {
        let context = HookContext::FileList(Vec::new());
        assert_eq!(context.target_count(), 0);
    }
}
