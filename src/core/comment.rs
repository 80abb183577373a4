//! Comment representation and body rendering.
//!
//! The bot owns at most one comment per pull request. Ownership is
//! recognised by [`COMMENT_MARKER`] appearing anywhere in the body.

use serde::{Deserialize, Serialize};

/// Substring identifying the comment this tool owns.
///
/// Existing pull requests carry comments written with this exact text,
/// so it must not change.
pub const COMMENT_MARKER: &str = "<-- renovate-config-workflow-comment -->";

/// Command suggested to contributors for validating locally.
pub const LOCAL_VALIDATE_COMMAND: &str =
    "npx --yes --package renovate -- renovate-config-validator --no-global .github/renovate-config.js";

/// An issue comment as returned by the GitHub API.
///
/// Only the fields used for reconciliation are decoded.
///
/// # Examples
///
/// ```
/// use renovate_config_comment::core::Comment;
///
/// let comment = Comment::new(1, "hello");
/// assert!(!comment.is_marked());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier.
    pub id: u64,

    /// Markdown body. GitHub may return `null` for some comment kinds.
    #[serde(default)]
    pub body: Option<String>,
}

impl Comment {
    /// Creates a comment with a body.
    #[must_use]
    pub fn new(id: u64, body: impl Into<String>) -> Self {
        Self {
            id,
            body: Some(body.into()),
        }
    }

    /// Returns true if the body contains [`COMMENT_MARKER`].
    #[must_use]
    pub fn is_marked(&self) -> bool {
        self.body
            .as_deref()
            .is_some_and(|body| body.contains(COMMENT_MARKER))
    }
}

/// Finds the first comment owned by this tool.
#[must_use]
pub fn find_marked(comments: &[Comment]) -> Option<&Comment> {
    comments.iter().find(|c| c.is_marked())
}

/// Renders the comment body for a validation result.
///
/// The output text is embedded verbatim inside a fenced block.
#[must_use]
pub fn render_body(validation_output: &str) -> String {
    format!(
        "{COMMENT_MARKER}\n\
         ## Renovate Config Validation Results\n\
         \n\
         ```\n\
         {validation_output}\n\
         ```\n\
         \n\
         ---\n\
         \n\
         💡 **Tip:** Run `{LOCAL_VALIDATE_COMMAND}` locally to test your config before pushing!\n"
    )
}
