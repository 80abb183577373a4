//! Error types for comment reconciliation.
//!
//! Every failure is terminal for the process. The hierarchy separates
//! usage mistakes, missing or malformed configuration, and GitHub API
//! failures so each can be reported with a distinct message.

use thiserror::Error;

/// Result type alias for reconciliation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(#[from] UsageError),

    /// Missing or malformed environment configuration.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// GitHub API request failed.
    #[error("error posting PR comment: {0}")]
    Api(#[from] ApiError),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// All categories share the same code; the message is what differs.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) | Self::Config(_) | Self::Api(_) => 1,
        }
    }
}

/// Command-line argument errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    /// Validation output argument is empty.
    #[error("validation output cannot be empty")]
    EmptyValidationOutput,

    /// PR number argument is empty.
    #[error("PR number cannot be empty")]
    EmptyPrNumber,

    /// PR number is not made of decimal digits, or is zero.
    #[error("PR number must be a positive integer, got '{value}'")]
    InvalidPrNumber {
        /// The rejected argument.
        value: String,
    },
}

/// Environment configuration errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is unset or empty.
    #[error("{name} environment variable not set")]
    MissingEnv {
        /// Variable name.
        name: &'static str,
    },

    /// Repository identifier is not `owner/name`.
    #[error("invalid repository '{value}': expected owner/name")]
    InvalidRepository {
        /// The rejected value.
        value: String,
    },

    /// Token contains characters that cannot appear in an HTTP header.
    #[error("{name} contains characters not allowed in an HTTP header")]
    InvalidToken {
        /// Variable name.
        name: &'static str,
    },

    /// API base URL is empty.
    #[error("API URL cannot be empty")]
    EmptyApiUrl,

    /// Request timeout of zero seconds.
    #[error("timeout must be at least 1 second")]
    ZeroTimeout,
}

/// GitHub API errors.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Listing PR comments returned a non-success status.
    #[error("failed to fetch comments: {status} {reason}")]
    FetchFailed {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// Updating the existing comment returned a non-success status.
    #[error("failed to update comment #{id}: {status} {reason}")]
    UpdateFailed {
        /// Comment identifier.
        id: u64,
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// Creating a new comment returned a non-success status.
    #[error("failed to create comment: {status} {reason}")]
    CreateFailed {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// Connection, TLS or timeout failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// Response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Api(err.into())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
