//! Pull-request addressing: repository identifier and PR number.

use crate::error::{ConfigError, UsageError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A GitHub repository in `owner/name` form.
///
/// Serializes as the `owner/name` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct Repository {
    /// Account or organization.
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl FromStr for Repository {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidRepository {
            value: s.to_string(),
        };
        let (owner, name) = s.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl From<Repository> for String {
    fn from(repo: Repository) -> Self {
        repo.to_string()
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A pull-request number: decimal digits only, at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PrNumber(u64);

impl PrNumber {
    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for PrNumber {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(UsageError::EmptyPrNumber);
        }
        let invalid = || UsageError::InvalidPrNumber {
            value: s.to_string(),
        };
        // `u64::from_str` would also accept a leading '+'.
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        match s.parse::<u64>() {
            Ok(0) | Err(_) => Err(invalid()),
            Ok(n) => Ok(Self(n)),
        }
    }
}

impl fmt::Display for PrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
