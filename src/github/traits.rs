//! Comment API trait definition.
//!
//! Decouples the reconciliation procedure from the HTTP transport so it
//! can run against the real GitHub API or an in-memory double.

use crate::core::{Comment, PrNumber, Repository};
use crate::error::Result;

/// Operations on the comments of a single repository's pull requests.
pub trait CommentApi {
    /// Repository whose pull requests this API addresses.
    fn repository(&self) -> &Repository;

    /// Lists comments on a pull request.
    ///
    /// Issues exactly one request; only the first page is returned.
    ///
    /// # Errors
    ///
    /// Returns an API error on a non-success status, transport failure,
    /// or undecodable response.
    fn list_comments(&self, pr: PrNumber) -> Result<Vec<Comment>>;

    /// Replaces the body of an existing comment.
    ///
    /// # Errors
    ///
    /// Returns an API error on a non-success status or transport failure.
    fn update_comment(&self, id: u64, body: &str) -> Result<Comment>;

    /// Creates a new comment on a pull request.
    ///
    /// # Errors
    ///
    /// Returns an API error on a non-success status or transport failure.
    fn create_comment(&self, pr: PrNumber, body: &str) -> Result<Comment>;
}
