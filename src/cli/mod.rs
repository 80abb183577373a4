//! CLI layer.
//!
//! Provides the command-line interface using clap, the command driver,
//! and output formatting.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, init_logging};
pub use output::OutputFormat;
pub use parser::Cli;
