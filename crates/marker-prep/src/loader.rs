//! Marker image loading and trackability validation.
//!
//! Image tracking needs feature-rich references: very small or very flat
//! images are rejected here rather than failing silently at runtime.

use crate::error::MarkerError;
use crate::identifier::generate_identifier;
use crate::types::MarkerAsset;
use image::GenericImageView;
use std::path::Path;

/// Minimum edge length for a usable reference image.
pub const MIN_DIMENSION_PX: u32 = 300;

/// Minimum luminance spread (max - min) for a trackable image.
pub const MIN_CONTRAST: u8 = 32;

/// Load a marker image, validate it, and derive its physical size.
///
/// `width_m` is the printed width; the height follows from the image's
/// aspect ratio so the on-screen overlay matches the physical print.
pub fn load_marker(path: &Path, width_m: f32) -> Result<MarkerAsset, MarkerError> {
    let img = image::open(path).map_err(|e| MarkerError::ImageDecode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let (px_width, px_height) = img.dimensions();
    if px_width < MIN_DIMENSION_PX || px_height < MIN_DIMENSION_PX {
        return Err(MarkerError::Validation {
            path: path.to_path_buf(),
            message: format!(
                "{}x{} px is below the {} px minimum edge length",
                px_width, px_height, MIN_DIMENSION_PX
            ),
        });
    }

    let luma = img.to_luma8();
    let (min, max) = luma
        .pixels()
        .fold((u8::MAX, u8::MIN), |(lo, hi), p| (lo.min(p.0[0]), hi.max(p.0[0])));
    let contrast = max.saturating_sub(min);
    if contrast < MIN_CONTRAST {
        return Err(MarkerError::Validation {
            path: path.to_path_buf(),
            message: format!(
                "luminance spread {} is below the {} minimum; image is too flat to track",
                contrast, MIN_CONTRAST
            ),
        });
    }

    let identifier = generate_identifier(path)?;
    let height_m = width_m * px_height as f32 / px_width as f32;

    log::info!(
        "  {}: {}x{} px, contrast {}, {}x{} m",
        identifier,
        px_width,
        px_height,
        contrast,
        width_m,
        height_m
    );

    Ok(MarkerAsset {
        source: path.to_path_buf(),
        identifier,
        px_width,
        px_height,
        width_m,
        height_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn write_png(dir: &Path, name: &str, img: &GrayImage) -> std::path::PathBuf {
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    fn checkerboard(size: u32) -> GrayImage {
        GrayImage::from_fn(size, size, |x, y| {
            if (x / 20 + y / 20) % 2 == 0 {
                Luma([255])
            } else {
                Luma([0])
            }
        })
    }

    #[test]
    fn test_valid_marker_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "sticky.png", &checkerboard(400));

        let asset = load_marker(&path, 0.1).unwrap();
        assert_eq!(asset.identifier, "STICKY");
        assert_eq!(asset.px_width, 400);
        assert!((asset.height_m - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_height_follows_aspect_ratio() {
        let dir = tempfile::tempdir().unwrap();
        let img = GrayImage::from_fn(500, 400, |x, y| Luma([((x + y) % 256) as u8]));
        let path = write_png(dir.path(), "wide.png", &img);

        let asset = load_marker(&path, 0.1).unwrap();
        assert!((asset.height_m - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_undersized_image_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "tiny.png", &checkerboard(100));

        let err = load_marker(&path, 0.1).unwrap_err();
        assert!(matches!(err, MarkerError::Validation { .. }));
    }

    #[test]
    fn test_flat_image_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let flat = GrayImage::from_pixel(400, 400, Luma([128]));
        let path = write_png(dir.path(), "flat.png", &flat);

        let err = load_marker(&path, 0.1).unwrap_err();
        match err {
            MarkerError::Validation { message, .. } => {
                assert!(message.contains("too flat"));
            }
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let err = load_marker(Path::new("does/not/exist.png"), 0.1).unwrap_err();
        assert!(matches!(err, MarkerError::ImageDecode { .. }));
    }
}
