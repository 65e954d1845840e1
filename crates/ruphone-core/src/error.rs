//! Error types for the ruphone-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the ruphone library.
#[derive(Error, Debug)]
pub enum RuphoneError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Failures that end an extraction run early.
///
/// Neither variant is returned as an `Err` from the extractor. They travel
/// inside [`crate::Extraction::Failed`] next to whatever was collected.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The source path is missing or cannot be opened for reading.
    #[error("file {} not found", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or decoding failed part way through the source.
    #[error("failed to process file {} at line {line}: {source}", .path.display())]
    Processing {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of an [`ExtractError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SourceNotFound,
    ProcessingFailure,
}

impl ExtractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            Self::Processing { .. } => ErrorKind::ProcessingFailure,
        }
    }

    /// Path of the source the failure belongs to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::SourceNotFound { path, .. } | Self::Processing { path, .. } => path,
        }
    }
}

/// Result type for the ruphone library.
pub type Result<T> = std::result::Result<T, RuphoneError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_kind_matches_variant() {
        let missing = ExtractError::SourceNotFound {
            path: PathBuf::from("input.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(missing.kind(), ErrorKind::SourceNotFound);

        let broken = ExtractError::Processing {
            path: PathBuf::from("input.txt"),
            line: 3,
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert_eq!(broken.kind(), ErrorKind::ProcessingFailure);
        assert_eq!(broken.path(), std::path::Path::new("input.txt"));
    }

    #[test]
    fn test_display_includes_detail() {
        let err = ExtractError::Processing {
            path: PathBuf::from("data/input.txt"),
            line: 7,
            source: io::Error::new(io::ErrorKind::InvalidData, "bad bytes"),
        };
        assert_eq!(
            err.to_string(),
            "failed to process file data/input.txt at line 7: bad bytes"
        );
    }
}
