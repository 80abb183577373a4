//! Invocation settings.
//!
//! Resolves the raw command-line and environment values into a validated
//! [`Settings`]. Validation runs in a fixed order and stops at the first
//! problem, before any network activity.

use crate::core::{PrNumber, Repository};
use crate::error::{ConfigError, Result, UsageError};
use std::fmt;
use std::time::Duration;

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable holding the `owner/name` repository.
pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Public GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bearer credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw secret for the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// Unvalidated inputs, as collected from the command line and environment.
#[derive(Debug, Clone, Default)]
pub struct RawInputs<'a> {
    /// Validation output positional argument.
    pub validation_output: &'a str,
    /// PR number positional argument.
    pub pr_number: &'a str,
    /// Token, if present in the environment.
    pub token: Option<&'a str>,
    /// Repository, if present in the environment.
    pub repository: Option<&'a str>,
    /// API base URL.
    pub api_url: &'a str,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Text to embed in the comment.
    pub validation_output: String,
    /// Target pull request.
    pub pr_number: PrNumber,
    /// API credential.
    pub token: Token,
    /// Target repository.
    pub repository: Repository,
    /// API base URL without trailing slash.
    pub api_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Settings {
    /// Validates raw inputs.
    ///
    /// Order: validation output, PR number, token, repository, API URL,
    /// timeout.
    /// Empty environment values count as missing.
    ///
    /// # Errors
    ///
    /// Returns a usage error for bad arguments and a configuration error
    /// for missing or malformed environment values.
    pub fn resolve(raw: &RawInputs<'_>) -> Result<Self> {
        if raw.validation_output.is_empty() {
            return Err(UsageError::EmptyValidationOutput.into());
        }
        let pr_number: PrNumber = raw.pr_number.parse()?;

        let token = non_empty(raw.token).ok_or(ConfigError::MissingEnv { name: TOKEN_ENV })?;
        let repository: Repository = non_empty(raw.repository)
            .ok_or(ConfigError::MissingEnv {
                name: REPOSITORY_ENV,
            })?
            .parse()?;

        let api_url = raw.api_url.trim().trim_end_matches('/');
        if api_url.is_empty() {
            return Err(ConfigError::EmptyApiUrl.into());
        }
        if raw.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout.into());
        }

        Ok(Self {
            validation_output: raw.validation_output.to_string(),
            pr_number,
            token: Token::new(token),
            repository,
            api_url: api_url.to_string(),
            timeout: Duration::from_secs(raw.timeout_secs),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
