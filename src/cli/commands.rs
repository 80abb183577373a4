//! CLI command implementation.
//!
//! Resolves settings, builds the GitHub client and runs the
//! reconciliation. All validation happens before the client exists, so
//! bad input never reaches the network.

use crate::cli::output::{OutputFormat, format_outcome};
use crate::cli::parser::Cli;
use crate::config::Settings;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::reconcile::reconcile;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns a usage or configuration error for invalid input, or an API
/// error if either GitHub request fails.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let settings = Settings::resolve(&cli.raw_inputs())?;
    debug!(
        repository = %settings.repository,
        pr = %settings.pr_number,
        api_url = %settings.api_url,
        "resolved settings"
    );

    let client = GitHubClient::new(&settings)?;
    let outcome = reconcile(&client, settings.pr_number, &settings.validation_output)?;

    Ok(format_outcome(&outcome, format))
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity count. Safe to call more
/// than once; later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
