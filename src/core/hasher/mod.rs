//! # Hasher Module
//!
//! Computes the difference hash (dHash) fingerprint of an image.
//!
//! ## How It Works
//! 1. Resize the image to (hash_size + 1) x hash_size - one extra column,
//!    because each pixel is compared to its right neighbour
//! 2. Convert to grayscale
//! 3. For each pixel, emit a 1 bit when it is strictly brighter than the
//!    pixel to its right, else 0
//! 4. The hash_size x hash_size bit grid is the fingerprint
//!
//! This captures the sign of the horizontal brightness gradient, which
//! survives rescaling, recompression and mild colour shifts.

use crate::core::codec;
use crate::error::HashError;
use image::DynamicImage;
use std::path::Path;
use tracing::debug;

/// The default comparison grid size (64-bit fingerprint)
pub const DEFAULT_HASH_SIZE: u32 = 8;

/// Largest accepted grid size. Keeps `hash_size + 1` and
/// `hash_size * hash_size` comfortably inside u32 and the resize target
/// inside what any decoder produces.
pub const MAX_HASH_SIZE: u32 = 4096;

/// A computed difference-hash fingerprint.
///
/// Bits are packed row-major, MSB first. The grid is square: a
/// fingerprint produced with `hash_size = 8` carries 64 bits. Trailing
/// pad bits in the last byte are always zero, so byte-wise XOR over the
/// packed form counts exactly the grid bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    bytes: Vec<u8>,
    hash_size: u32,
}

impl Fingerprint {
    /// Reconstruct a fingerprint from packed bytes.
    ///
    /// `bytes` must hold exactly `hash_size * hash_size` bits rounded up
    /// to whole bytes, with all pad bits zero. Anything else is rejected
    /// here so the scorer never sees a fingerprint whose payload
    /// disagrees with its claimed grid size.
    pub fn from_bytes(bytes: &[u8], hash_size: u32) -> Result<Self, HashError> {
        if hash_size == 0 || hash_size > MAX_HASH_SIZE {
            return Err(HashError::InvalidHashSize { size: hash_size });
        }

        let bit_total = hash_size * hash_size;
        let byte_total = bit_total.div_ceil(8) as usize;
        if bytes.len() != byte_total {
            return Err(HashError::MalformedFingerprint {
                reason: format!(
                    "expected {} bytes for a {}x{} grid, got {}",
                    byte_total,
                    hash_size,
                    hash_size,
                    bytes.len()
                ),
            });
        }

        let pad_bits = byte_total * 8 - bit_total as usize;
        if pad_bits > 0 {
            let pad_mask = (1u8 << pad_bits) - 1;
            if bytes[byte_total - 1] & pad_mask != 0 {
                return Err(HashError::MalformedFingerprint {
                    reason: format!("nonzero pad bits in last byte of a {0}x{0} grid", hash_size),
                });
            }
        }

        Ok(Self {
            bytes: bytes.to_vec(),
            hash_size,
        })
    }

    /// Side length of the bit grid
    pub fn hash_size(&self) -> u32 {
        self.hash_size
    }

    /// Total number of bits in the grid.
    ///
    /// This is hash_size squared, not hash_size * (hash_size + 1): the
    /// extra resize column is consumed by the neighbour comparison and
    /// contributes no bits.
    pub fn bit_count(&self) -> u32 {
        self.hash_size * self.hash_size
    }

    /// Get the raw packed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the fingerprint as a hexadecimal string
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

/// Difference Hash (dHash) generator
pub struct DifferenceHasher {
    /// Side length of the comparison grid
    hash_size: u32,
}

impl DifferenceHasher {
    /// Create a new dHash generator with the given grid size
    pub fn new(hash_size: u32) -> Self {
        Self { hash_size }
    }

    /// Compute the fingerprint of an already-decoded image.
    ///
    /// Pure: the same image and hash size always produce the same
    /// fingerprint. Rejects sizes outside `1..=MAX_HASH_SIZE`, so the
    /// grid arithmetic below cannot overflow.
    pub fn hash_image(&self, image: &DynamicImage) -> Result<Fingerprint, HashError> {
        if self.hash_size == 0 || self.hash_size > MAX_HASH_SIZE {
            return Err(HashError::InvalidHashSize {
                size: self.hash_size,
            });
        }

        // One extra column so every grid cell has a right neighbour
        let gray = codec::resize_to_grayscale(image, self.hash_size + 1, self.hash_size)?;

        let bit_total = self.hash_size * self.hash_size;
        let mut bytes = Vec::with_capacity(bit_total.div_ceil(8) as usize);
        let mut current_byte: u8 = 0;
        let mut bit_position = 0;

        for y in 0..self.hash_size {
            for x in 0..self.hash_size {
                let left = gray.get_pixel(x, y)[0];
                let right = gray.get_pixel(x + 1, y)[0];

                // Strictly greater: equal neighbours yield 0. This
                // tie-break sets the bit parity of flat regions and must
                // match on both sides of a comparison.
                if left > right {
                    current_byte |= 1 << (7 - bit_position);
                }

                bit_position += 1;
                if bit_position == 8 {
                    bytes.push(current_byte);
                    current_byte = 0;
                    bit_position = 0;
                }
            }
        }

        // Last partial byte, pad bits stay zero
        if bit_position > 0 {
            bytes.push(current_byte);
        }

        Ok(Fingerprint {
            bytes,
            hash_size: self.hash_size,
        })
    }

    /// Compute the fingerprint of an image file.
    ///
    /// Decode failures carry the offending path.
    pub fn hash_file(&self, path: &Path) -> Result<Fingerprint, HashError> {
        let image = codec::decode(path)?;
        debug!(path = %path.display(), hash_size = self.hash_size, "hashing image");
        self.hash_image(&image)
    }
}

impl Default for DifferenceHasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_SIZE)
    }
}
