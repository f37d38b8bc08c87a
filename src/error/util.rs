//! Utility functions for error handling
//!
//! File access helpers that attach the path and purpose to I/O failures.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{CommunityError, Result};

fn io_error(path: &Path, context: impl Into<String>, source: io::Error) -> CommunityError {
    CommunityError::Io {
        path: path.to_path_buf(),
        context: context.into(),
        source,
    }
}

/// Safely read a file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.is_file() {
        return Err(io_error(
            path,
            format!("Expected a file for: {purpose}"),
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        ));
    }

    fs::read_to_string(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions".to_string(),
            io::ErrorKind::InvalidData => {
                "File contains invalid UTF-8 data - cannot read as text".to_string()
            }
            _ => format!("Failed to read file content for: {purpose}"),
        };
        io_error(path, context, e)
    })
}
