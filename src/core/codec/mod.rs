//! # Codec Module
//!
//! Decoding and downsampling plumbing for the hasher.
//!
//! Decoding uses zune-jpeg for JPEG files (1.5-2x faster than the image
//! crate), falling back to the image crate for every other format.
//! Downsampling uses fast_image_resize with a box filter, which averages
//! the source area covered by each destination pixel - the deterministic
//! interpolation the difference hash is defined over.

use crate::error::HashError;
use fast_image_resize::{images::Image, PixelType, ResizeOptions, Resizer};
use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb};
use std::fs;
use std::path::Path;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_jpeg::JpegDecoder;

/// Decode an image from a file path using the fastest available decoder.
///
/// - JPEG: zune-jpeg, with the image crate as fallback
/// - Other formats: image crate
pub fn decode(path: &Path) -> Result<DynamicImage, HashError> {
    let is_jpeg = matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref(),
        Some("jpg" | "jpeg")
    );

    if is_jpeg {
        decode_jpeg(path).or_else(|_| decode_fallback(path))
    } else {
        decode_fallback(path)
    }
}

/// Fast JPEG decoding using zune-jpeg
fn decode_jpeg(path: &Path) -> Result<DynamicImage, HashError> {
    let file_bytes = fs::read(path).map_err(|e| HashError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let options = DecoderOptions::new_fast().jpeg_set_out_colorspace(ColorSpace::RGB);
    let mut decoder = JpegDecoder::new_with_options(&file_bytes, options);

    let pixels = decoder.decode().map_err(|e| HashError::Decode {
        path: path.to_path_buf(),
        reason: format!("zune-jpeg decode failed: {:?}", e),
    })?;

    let info = decoder.info().ok_or_else(|| HashError::Decode {
        path: path.to_path_buf(),
        reason: "Failed to get image info".to_string(),
    })?;

    let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(info.width as u32, info.height as u32, pixels).ok_or_else(|| {
            HashError::Decode {
                path: path.to_path_buf(),
                reason: "Failed to create RGB buffer".to_string(),
            }
        })?;

    Ok(DynamicImage::ImageRgb8(buffer))
}

/// Fallback to the image crate for non-JPEG formats
fn decode_fallback(path: &Path) -> Result<DynamicImage, HashError> {
    image::open(path).map_err(|e| HashError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Resize an image to the given dimensions and convert to grayscale.
///
/// Grayscale conversion happens first (resizing one channel is cheaper
/// than three) using the image crate's fixed luma weights, so both images
/// of a comparison go through the identical formula.
pub fn resize_to_grayscale(
    image: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<GrayImage, HashError> {
    let gray = image.to_luma8();

    let src_width = gray.width();
    let src_height = gray.height();

    if src_width == 0 || src_height == 0 {
        return Err(HashError::Resize {
            reason: "Invalid source dimensions".to_string(),
        });
    }

    if width == 0 || height == 0 {
        return Err(HashError::Resize {
            reason: "Invalid destination dimensions".to_string(),
        });
    }

    let src_image = Image::from_vec_u8(src_width, src_height, gray.into_raw(), PixelType::U8)
        .map_err(|e| HashError::Resize {
            reason: format!("Failed to create source image: {}", e),
        })?;

    let mut dst_image = Image::new(width, height, PixelType::U8);

    // Box filter = area averaging over the source footprint of each
    // destination pixel. Bilinear or Lanczos would also be deterministic
    // but shift bit parity on flat regions.
    let options = ResizeOptions::new().resize_alg(fast_image_resize::ResizeAlg::Convolution(
        fast_image_resize::FilterType::Box,
    ));

    let mut resizer = Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| HashError::Resize {
            reason: format!("Resize failed: {}", e),
        })?;

    let result_buffer: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, dst_image.into_vec()).ok_or_else(|| {
            HashError::Resize {
                reason: "Failed to create result buffer".to_string(),
            }
        })?;

    Ok(result_buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = ((x + y) * 128 / (width + height).max(1)) as u8;
            Rgb([r, g, b])
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn resize_produces_requested_dimensions() {
        let image = create_test_image(100, 100);
        let resized = resize_to_grayscale(&image, 9, 8).unwrap();

        assert_eq!(resized.width(), 9);
        assert_eq!(resized.height(), 8);
    }

    #[test]
    fn resize_upscales_tiny_sources() {
        // A 2x2 source is smaller than the 9x8 target; upscaling must
        // still work so small inputs can be hashed.
        let image = create_test_image(2, 2);
        let resized = resize_to_grayscale(&image, 9, 8).unwrap();

        assert_eq!(resized.width(), 9);
        assert_eq!(resized.height(), 8);
    }

    #[test]
    fn resize_rejects_zero_destination() {
        let image = create_test_image(10, 10);
        let result = resize_to_grayscale(&image, 0, 8);

        assert!(matches!(result, Err(HashError::Resize { .. })));
    }

    #[test]
    fn resize_of_solid_image_is_solid() {
        let img = ImageBuffer::from_fn(50, 50, |_, _| Rgb([128u8, 128, 128]));
        let image = DynamicImage::ImageRgb8(img);

        let resized = resize_to_grayscale(&image, 9, 8).unwrap();
        let first = resized.get_pixel(0, 0)[0];
        assert!(resized.pixels().all(|p| p[0] == first));
    }

    #[test]
    fn decode_reports_missing_file_path() {
        let result = decode(Path::new("/nonexistent/photo.png"));
        let error = result.unwrap_err();
        assert!(error.to_string().contains("/nonexistent/photo.png"));
    }
}
