//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros. Environment-backed
//! values are read through clap so `--help` documents them; the token is
//! read from the environment only.

use crate::config::{
    API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, RawInputs, REPOSITORY_ENV, TOKEN_ENV,
};
use clap::{ArgAction, Parser};

const AFTER_HELP: &str = "\
Environment:
  GITHUB_TOKEN       Token used for bearer authentication (required)
  GITHUB_REPOSITORY  Target repository in owner/name form (required)

Validation output may start with '-'. Output that is exactly a flag name
(such as --help) must follow a '--' separator.";

/// Post or update a pull-request comment with Renovate config validation
/// results.
///
/// Finds the comment previously written by this tool on the pull request
/// and overwrites it, or creates one if none exists.
#[derive(Parser, Debug)]
#[command(name = "renovate-config-comment")]
#[command(version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Output of renovate-config-validator to embed in the comment.
    #[arg(allow_hyphen_values = true)]
    pub validation_output: String,

    /// Pull-request number (decimal digits only).
    #[arg(allow_hyphen_values = true)]
    pub pr_number: String,

    /// GitHub token, taken from the environment so it never appears in
    /// the process arguments.
    #[arg(skip = std::env::var(TOKEN_ENV).ok())]
    pub token: Option<String>,

    /// Target repository in owner/name form.
    #[arg(long, env = REPOSITORY_ENV)]
    pub repository: Option<String>,

    /// GitHub REST API base URL.
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format (text, json).
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl Cli {
    /// Borrows the unvalidated inputs for [`crate::config::Settings::resolve`].
    #[must_use]
    pub fn raw_inputs(&self) -> RawInputs<'_> {
        RawInputs {
            validation_output: &self.validation_output,
            pr_number: &self.pr_number,
            token: self.token.as_deref(),
            repository: self.repository.as_deref(),
            api_url: &self.api_url,
            timeout_secs: self.timeout,
        }
    }
}
