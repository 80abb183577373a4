//! GitHub REST API access.
//!
//! Provides the [`CommentApi`] seam and its blocking `reqwest`
//! implementation, [`GitHubClient`].

pub mod client;
pub mod traits;

pub use client::GitHubClient;
pub use traits::CommentApi;

/// REST API version sent with every request.
pub const API_VERSION: &str = "2022-11-28";

/// Media type requested from the API.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Page size for the comment listing.
pub const COMMENTS_PER_PAGE: u8 = 100;

/// User agent; GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
