//! # Error Module
//!
//! Error types for the image similarity tool.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, file names, what went wrong
//! - **Name the failing image** - when one of the two inputs cannot be
//!   decoded, the error says which one

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum SimilarityError {
    #[error("Hashing error: {0}")]
    Hash(#[from] HashError),

    #[error("Comparison error: {0}")]
    Compare(#[from] CompareError),
}

/// Errors that occur while decoding or hashing a single image
#[derive(Error, Debug)]
pub enum HashError {
    #[error("Failed to decode image {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("Failed to open image file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid hash size: {size} (must be between 1 and 4096)")]
    InvalidHashSize { size: u32 },

    #[error("Malformed fingerprint: {reason}")]
    MalformedFingerprint { reason: String },

    #[error("Resize failed: {reason}")]
    Resize { reason: String },
}

/// Errors that occur when comparing two fingerprints
#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Fingerprint dimensions differ: {left}x{left} vs {right}x{right}")]
    DimensionMismatch { left: u32, right: u32 },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, SimilarityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_includes_path() {
        let error = HashError::Decode {
            path: PathBuf::from("/photos/broken.jpg"),
            reason: "invalid JPEG".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("/photos/broken.jpg"));
        assert!(message.contains("invalid JPEG"));
    }

    #[test]
    fn invalid_hash_size_names_the_value() {
        let error = HashError::InvalidHashSize { size: 0 };
        assert!(error.to_string().contains('0'));
    }

    #[test]
    fn malformed_fingerprint_carries_the_reason() {
        let error = HashError::MalformedFingerprint {
            reason: "expected 8 bytes for a 8x8 grid, got 1".to_string(),
        };
        assert!(error.to_string().contains("expected 8 bytes"));
    }

    #[test]
    fn dimension_mismatch_shows_both_sizes() {
        let error = CompareError::DimensionMismatch { left: 8, right: 16 };
        let message = error.to_string();
        assert!(message.contains("8x8"));
        assert!(message.contains("16x16"));
    }
}
