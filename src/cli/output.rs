//! Output formatting for CLI results.
//!
//! Supports text and JSON output formats.

use crate::error::Error;
use crate::reconcile::{Action, Outcome};
use serde::Serialize;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats the result of a reconciliation.
#[must_use]
pub fn format_outcome(outcome: &Outcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => match outcome.action {
            Action::Updated => format!("Updated existing PR comment #{}\n", outcome.comment_id),
            Action::Created => format!("Created new PR comment #{}\n", outcome.comment_id),
        },
        OutputFormat::Json => {
            let mut json = format_json(outcome);
            json.push('\n');
            json
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
                kind: &'static str,
            }
            let kind = match error {
                Error::Usage(_) => "usage",
                Error::Config(_) => "config",
                Error::Api(_) => "api",
            };
            format_json(&ErrorOutput {
                error: error.to_string(),
                kind,
            })
        }
    }
}

fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, UsageError};

    fn outcome(action: Action) -> Outcome {
        Outcome {
            action,
            comment_id: 321,
            pr_number: "9".parse().unwrap(),
            repository: "octo/repo".parse().unwrap(),
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_outcome_text() {
        assert_eq!(
            format_outcome(&outcome(Action::Updated), OutputFormat::Text),
            "Updated existing PR comment #321\n"
        );
        assert_eq!(
            format_outcome(&outcome(Action::Created), OutputFormat::Text),
            "Created new PR comment #321\n"
        );
    }

    #[test]
    fn test_format_outcome_json() {
        let out = format_outcome(&outcome(Action::Created), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["repository"], "octo/repo");
        assert_eq!(value["action"], "created");
        assert_eq!(value["comment_id"], 321);
        assert_eq!(value["pr_number"], 9);
    }

    #[test]
    fn test_format_error() {
        let err: Error = UsageError::EmptyPrNumber.into();
        assert_eq!(
            format_error(&err, OutputFormat::Text),
            "PR number cannot be empty"
        );

        let err: Error = ApiError::FetchFailed {
            status: 401,
            reason: "Unauthorized".to_string(),
        }
        .into();
        let value: serde_json::Value =
            serde_json::from_str(&format_error(&err, OutputFormat::Json)).unwrap();
        assert_eq!(value["kind"], "api");
        assert!(
            value["error"]
                .as_str()
                .unwrap()
                .contains("401 Unauthorized")
        );
    }
}
