//! Error types for loading demo datasets.

use thiserror::Error;

/// Errors raised while loading a dataset document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The document is not valid JSON or misses required fields.
    #[error("invalid demo dataset JSON: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },

    /// The document declares a version this crate cannot read.
    #[error("unsupported demo dataset version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Version this crate reads.
        expected: u32,
        /// Version found in the document.
        actual: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_formats_message() {
        let err = DatasetError::Parse {
            message: "expected value".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid demo dataset JSON: expected value");
    }

    #[test]
    fn version_error_formats_both_versions() {
        let err = DatasetError::UnsupportedVersion {
            expected: 1,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "unsupported demo dataset version: expected 1, found 3"
        );
    }
}
