//! Comment reconciliation.
//!
//! Ensures a pull request carries exactly one comment owned by this tool,
//! holding the latest validation output. The procedure is one list request
//! followed by either an update of the first marked comment or a create.

use crate::core::{PrNumber, Repository, find_marked, render_body};
use crate::error::Result;
use crate::github::CommentApi;
use serde::Serialize;
use std::fmt;
use tracing::info;

/// Write performed by a reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// A new comment was posted.
    Created,
    /// The existing marked comment was overwritten.
    Updated,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Updated => f.write_str("updated"),
        }
    }
}

/// Result of a successful reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Write that was performed.
    pub action: Action,
    /// Identifier of the comment that now holds the results.
    pub comment_id: u64,
    /// Target pull request.
    pub pr_number: PrNumber,
    /// Repository the pull request belongs to.
    pub repository: Repository,
}

/// Posts or updates the validation comment on `pr`.
///
/// A failing list request aborts before any write.
///
/// # Errors
///
/// Propagates any error from `api`; nothing is retried.
pub fn reconcile(api: &impl CommentApi, pr: PrNumber, validation_output: &str) -> Result<Outcome> {
    let body = render_body(validation_output);
    let comments = api.list_comments(pr)?;

    let (action, comment_id) = if let Some(existing) = find_marked(&comments) {
        let updated = api.update_comment(existing.id, &body)?;
        (Action::Updated, updated.id)
    } else {
        let created = api.create_comment(pr, &body)?;
        (Action::Created, created.id)
    };

    let repository = api.repository().clone();
    info!(%repository, %pr, comment_id, %action, "reconciled validation comment");
    Ok(Outcome {
        action,
        comment_id,
        pr_number: pr,
        repository,
    })
}
