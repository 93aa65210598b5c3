//! Commit message model
//!
//! A commit message splits into the summary line and the body. Both parts
//! are derived from the raw text on first access and memoized; the value is
//! immutable after construction, so the cached parse can never go stale.

use std::sync::OnceLock;

/// An immutable commit message with memoized summary/body access
#[derive(Debug, Clone)]
pub struct CommitMessage {
    raw: String,
    parts: OnceLock<(String, String)>,
}

impl CommitMessage {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            parts: OnceLock::new(),
        }
    }

    /// The raw message text
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// First line of the message, trailing whitespace trimmed.
    /// Empty only when the raw message has no first-line content.
    pub fn summary(&self) -> &str {
        &self.parts().0
    }

    /// Everything after the first line break, with the single conventional
    /// blank separator line stripped when present, otherwise as-is.
    pub fn body(&self) -> &str {
        &self.parts().1
    }

    fn parts(&self) -> &(String, String) {
        self.parts.get_or_init(|| match self.raw.split_once('\n') {
            Some((first, rest)) => {
                let summary = first.trim_end().to_string();
                let body = rest
                    .strip_prefix("\r\n")
                    .or_else(|| rest.strip_prefix('\n'))
                    .unwrap_or(rest)
                    .to_string();
                (summary, body)
            }
            None => (self.raw.trim_end().to_string(), String::new()),
        })
    }
}

impl PartialEq for CommitMessage {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for CommitMessage {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_and_body_with_separator() {
        let message = CommitMessage::new("Test.\n\nThis is a test commit.");
        assert_eq!(message.summary(), "Test.");
        assert_eq!(message.body(), "This is a test commit.");
    }

    #[test]
    fn test_empty_message() {
        let message = CommitMessage::new("");
        assert_eq!(message.summary(), "");
        assert_eq!(message.body(), "");
    }

    #[test]
    fn test_summary_only() {
        let message = CommitMessage::new("fix: single line");
        assert_eq!(message.summary(), "fix: single line");
        assert_eq!(message.body(), "");
    }

    #[test]
    fn test_summary_trims_trailing_whitespace() {
        let message = CommitMessage::new("fix: trailing   \nbody");
        assert_eq!(message.summary(), "fix: trailing");
        assert_eq!(message.body(), "body");
    }

    #[test]
    fn test_body_without_separator_kept_as_is() {
        let message = CommitMessage::new("subject\nimmediate body");
        assert_eq!(message.body(), "immediate body");
    }

    #[test]
    fn test_only_one_blank_line_stripped() {
        let message = CommitMessage::new("subject\n\n\nbody");
        assert_eq!(message.body(), "\nbody");
    }

    #[test]
    fn test_crlf_line_endings() {
        let message = CommitMessage::new("subject\r\n\r\nbody");
        assert_eq!(message.summary(), "subject");
        assert_eq!(message.body(), "body");
    }

    #[test]
    fn test_accessors_are_idempotent() {
        let message = CommitMessage::new("Test.\n\nThis is a test commit.");
        let first = message.summary();
        let second = message.summary();
        assert_eq!(first, second);
        // Memoized: both calls hand back the same allocation.
        assert!(std::ptr::eq(first, second));
        assert_eq!(message.body(), message.body());
    }
}
