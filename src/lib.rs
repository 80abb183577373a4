//! # renovate-config-comment
//!
//! Posts Renovate configuration-validation results to a GitHub pull
//! request, keeping a single bot-owned comment up to date.
//!
//! ## Flow
//!
//! - **Validate**: arguments and environment are checked before any request
//! - **Fetch**: one request lists the pull request's comments
//! - **Reconcile**: the first comment carrying [`COMMENT_MARKER`] is
//!   overwritten, otherwise a new comment is created

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod github;
pub mod reconcile;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use crate::core::{COMMENT_MARKER, Comment, PrNumber, Repository, find_marked, render_body};

// Re-export configuration types
pub use config::{RawInputs, Settings, Token};

// Re-export API types
pub use github::{CommentApi, GitHubClient};

// Re-export reconciliation types
pub use reconcile::{Action, Outcome, reconcile};

// Re-export CLI types
pub use cli::{Cli, OutputFormat};
