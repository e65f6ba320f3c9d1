//! # Scorer Module
//!
//! Compares two fingerprints: Hamming distance and a percentage
//! similarity derived from it.

use crate::core::hasher::Fingerprint;
use crate::error::CompareError;

/// Count the bit positions where the two fingerprints differ.
///
/// Both fingerprints must come from the same grid size; mixing sizes is
/// caller misuse and fails with `DimensionMismatch`.
pub fn hamming_distance(a: &Fingerprint, b: &Fingerprint) -> Result<u32, CompareError> {
    check_dimensions(a, b)?;

    // Pad bits are zero on both sides, so XOR-popcount over the packed
    // bytes counts exactly the grid bits.
    Ok(a.as_bytes()
        .iter()
        .zip(b.as_bytes().iter())
        .map(|(x, y)| (x ^ y).count_ones())
        .sum())
}

/// Score the similarity of two fingerprints as a percentage in [0, 100].
///
/// 100.0 means bit-identical, 0.0 means every bit differs. The divisor
/// is the fingerprint bit count (hash_size squared) - NOT
/// hash_size * (hash_size + 1), since the extra resize column never
/// reaches the fingerprint.
pub fn similarity(a: &Fingerprint, b: &Fingerprint) -> Result<f64, CompareError> {
    let distance = hamming_distance(a, b)?;
    let max_distance = a.bit_count();
    if max_distance == 0 {
        return Ok(100.0);
    }
    Ok((1.0 - (distance as f64 / max_distance as f64)) * 100.0)
}

fn check_dimensions(a: &Fingerprint, b: &Fingerprint) -> Result<(), CompareError> {
    if a.hash_size() != b.hash_size() {
        return Err(CompareError::DimensionMismatch {
            left: a.hash_size(),
            right: b.hash_size(),
        });
    }
    Ok(())
}
