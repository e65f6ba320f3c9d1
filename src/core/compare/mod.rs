//! # Compare Module
//!
//! Orchestrates a single pairwise comparison: decode both images, hash
//! both with the same grid size, score the pair. Each call is
//! independent and pure given its inputs, so callers may run comparisons
//! of unrelated pairs in parallel without coordination.

use crate::core::hasher::{DifferenceHasher, Fingerprint};
use crate::core::scorer;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The outcome of comparing two images
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// First image path
    pub path_a: PathBuf,
    /// Second image path
    pub path_b: PathBuf,
    /// Fingerprint of the first image
    pub hash_a: Fingerprint,
    /// Fingerprint of the second image
    pub hash_b: Fingerprint,
    /// Number of differing fingerprint bits
    pub hamming_distance: u32,
    /// Similarity percentage in [0, 100]
    pub similarity: f64,
}

impl ComparisonReport {
    /// Grid size the fingerprints were computed with
    pub fn hash_size(&self) -> u32 {
        self.hash_a.hash_size()
    }
}

/// Compare two image files and report their similarity.
///
/// Both images are hashed with the same `hash_size`, so the fingerprints
/// are dimension-compatible by construction. A decode failure aborts the
/// comparison and names the image that failed; no partial score is ever
/// returned.
pub fn compare_images(path_a: &Path, path_b: &Path, hash_size: u32) -> Result<ComparisonReport> {
    let hasher = DifferenceHasher::new(hash_size);

    let hash_a = hasher.hash_file(path_a)?;
    let hash_b = hasher.hash_file(path_b)?;
    debug!(hash_a = %hash_a.to_hex(), hash_b = %hash_b.to_hex(), "fingerprints computed");

    let hamming_distance = scorer::hamming_distance(&hash_a, &hash_b)?;
    let similarity = scorer::similarity(&hash_a, &hash_b)?;
    info!(
        path_a = %path_a.display(),
        path_b = %path_b.display(),
        hamming_distance,
        similarity,
        "comparison complete"
    );

    Ok(ComparisonReport {
        path_a: path_a.to_path_buf(),
        path_b: path_b.to_path_buf(),
        hash_a,
        hash_b,
        hamming_distance,
        similarity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{HashError, SimilarityError};
    use image::{DynamicImage, ImageBuffer, Rgb};
    use tempfile::TempDir;

    fn write_solid_png(dir: &TempDir, name: &str, brightness: u8) -> PathBuf {
        let img = ImageBuffer::from_fn(2, 2, |_, _| Rgb([brightness, brightness, brightness]));
        let path = dir.path().join(name);
        DynamicImage::ImageRgb8(img).save(&path).unwrap();
        path
    }

    #[test]
    fn identical_solid_images_score_100() {
        let dir = TempDir::new().unwrap();
        let a = write_solid_png(&dir, "a.png", 128);
        let b = write_solid_png(&dir, "b.png", 128);

        let report = compare_images(&a, &b, 8).unwrap();

        // Uniform gray on both sides: every comparison is "equal, not
        // greater", both fingerprints are all-zero.
        assert_eq!(report.hamming_distance, 0);
        assert_eq!(report.similarity, 100.0);
        assert!(report.hash_a.as_bytes().iter().all(|&byte| byte == 0));
    }

    #[test]
    fn comparison_is_symmetric() {
        let dir = TempDir::new().unwrap();
        let a = write_solid_png(&dir, "a.png", 40);
        let b = write_solid_png(&dir, "b.png", 220);

        let forward = compare_images(&a, &b, 8).unwrap();
        let backward = compare_images(&b, &a, 8).unwrap();

        assert_eq!(forward.hamming_distance, backward.hamming_distance);
        assert_eq!(forward.similarity, backward.similarity);
    }

    #[test]
    fn decode_failure_names_the_broken_image() {
        let dir = TempDir::new().unwrap();
        let good = write_solid_png(&dir, "good.png", 128);
        let broken = dir.path().join("broken.png");
        std::fs::write(&broken, b"this is not a valid image file").unwrap();

        let error = compare_images(&good, &broken, 8).unwrap_err();

        assert!(matches!(
            error,
            SimilarityError::Hash(HashError::Decode { .. })
        ));
        assert!(error.to_string().contains("broken.png"));
    }

    #[test]
    fn report_records_the_hash_size() {
        let dir = TempDir::new().unwrap();
        let a = write_solid_png(&dir, "a.png", 128);
        let b = write_solid_png(&dir, "b.png", 128);

        let report = compare_images(&a, &b, 16).unwrap();

        assert_eq!(report.hash_size(), 16);
        assert_eq!(report.hash_a.bit_count(), 256);
    }
}
