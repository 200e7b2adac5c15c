//! Utility functions for error handling
//!
//! Helpers that turn file-system failures into [`DataLoadError`]s carrying
//! the offending path.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::DataLoadError;

/// Safely open a file with rich error information
///
/// Checks that the path exists and is a regular file before opening it, so
/// that the most common mistakes produce a specific error variant instead of
/// a bare io error.
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File, DataLoadError>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    if !path.is_file() {
        return Err(DataLoadError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::NotFound => {
                "File not found - it may have been deleted during operation".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        unreadable(path, context, e)
    })
}

/// Wrap an io error that occurred while reading `path`
pub fn unreadable(path: &Path, context: impl Into<String>, source: io::Error) -> DataLoadError {
    DataLoadError::Unreadable {
        path: path.to_path_buf(),
        context: context.into(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let err = safe_open_file(Path::new("/definitely/not/here.csv"), "test").unwrap_err();
        assert!(matches!(err, DataLoadError::NotFound { .. }));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = std::env::temp_dir();
        let err = safe_open_file(&dir, "test").unwrap_err();
        assert!(matches!(err, DataLoadError::NotAFile { .. }));
    }
}
