//! # Core Module
//!
//! The UI-agnostic similarity engine.
//!
//! ## Modules
//! - `codec` - Decodes images and downsamples them to the hash grid
//! - `hasher` - Computes difference-hash fingerprints
//! - `scorer` - Hamming distance and percentage similarity
//! - `compare` - Orchestrates a pairwise comparison

pub mod codec;
pub mod compare;
pub mod hasher;
pub mod scorer;

// Re-export commonly used types
pub use compare::{compare_images, ComparisonReport};
pub use hasher::{DifferenceHasher, Fingerprint, DEFAULT_HASH_SIZE, MAX_HASH_SIZE};
pub use scorer::{hamming_distance, similarity};
