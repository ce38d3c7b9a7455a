//! Error types for the command-line front end.

use filterql_core::ParseError;

/// Errors that can occur while reading and rendering a filter.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input exceeds the configured size limit.
    #[error("Input is larger than the limit of {limit} bytes")]
    InputTooLarge {
        /// The configured limit.
        limit: usize,
    },

    /// IO error while reading stdin.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The text does not parse in the selected dialect.
    #[error("Failed to parse input: {0}")]
    Parse(#[from] ParseError),

    /// A tree or flat fold was requested for a clause set without WHERE.
    #[error("Clause set has no WHERE clause to fold")]
    NoWhereClause,

    /// Failed to encode the JSON output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
