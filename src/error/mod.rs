//! Error handling for the community filter crate.
//!
//! The filter engine itself cannot fail. Errors only arise at the boundary:
//! reading input files, parsing JSON and validating configuration.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for boundary operations
#[derive(Debug, thiserror::Error)]
pub enum CommunityError {
    /// Error opening or reading a file
    #[error("IO error for {}: {context}: {source}", .path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// What was being attempted
        context: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for boundary operations
pub type Result<T> = std::result::Result<T, CommunityError>;
