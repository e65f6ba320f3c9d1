//! # Image Similarity
//!
//! Compares two images with a difference hash (dHash) and reports how
//! similar they are as a percentage.
//!
//! ## How It Works
//! Each image is shrunk to a tiny grayscale grid, and a fingerprint is
//! built from the sign of each pixel's brightness difference to its
//! right neighbour. The Hamming distance between two fingerprints,
//! normalized by the fingerprint bit count, gives the score.
//!
//! ## Architecture
//! The library is split into a core engine (UI-agnostic) and the CLI:
//! - `core` - fingerprinting and scoring
//! - `error` - error types with path context
//! - `cli` - command-line interface (binary only)

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use crate::core::{compare_images, ComparisonReport, DifferenceHasher, Fingerprint};
pub use error::{Result, SimilarityError};

/// Initialize tracing for the library
///
/// This should be called by the application entry point.
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
