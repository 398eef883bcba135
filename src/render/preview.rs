//! PNG previews of packed slip bitmaps.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::error::FortunaError;

use super::pack::PackedBitmap;

/// Expand a packed bitmap into a grayscale image (black ink on white).
pub fn to_image(bitmap: &PackedBitmap) -> GrayImage {
    let mut img = GrayImage::new(bitmap.width as u32, bitmap.height as u32);

    for y in 0..bitmap.height {
        for x in 0..bitmap.width {
            let color = if bitmap.is_black(x, y) { 0u8 } else { 255u8 };
            img.put_pixel(x as u32, y as u32, Luma([color]));
        }
    }

    img
}

/// Write a packed bitmap as a PNG file.
pub fn save_png(bitmap: &PackedBitmap, path: &Path) -> Result<(), FortunaError> {
    to_image(bitmap)
        .save(path)
        .map_err(|e| FortunaError::Image(format!("Failed to save PNG: {}", e)))?;

    log::info!(
        "wrote preview {} ({}x{})",
        path.display(),
        bitmap.width,
        bitmap.height
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_bits_become_black_pixels() {
        let bitmap = PackedBitmap {
            width: 8,
            height: 2,
            data: vec![0b1000_0001, 0x00],
        };
        let img = to_image(&bitmap);
        assert_eq!(img.dimensions(), (8, 2));
        assert_eq!(img.get_pixel(0, 0), &Luma([0]));
        assert_eq!(img.get_pixel(7, 0), &Luma([0]));
        assert_eq!(img.get_pixel(3, 0), &Luma([255]));
        assert_eq!(img.get_pixel(0, 1), &Luma([255]));
    }

    #[test]
    fn test_save_png_reports_bad_path() {
        let bitmap = PackedBitmap {
            width: 8,
            height: 1,
            data: vec![0xFF],
        };
        let err = save_png(&bitmap, Path::new("/nonexistent/dir/slip.png")).unwrap_err();
        assert!(matches!(err, FortunaError::Image(_)));
    }
}
