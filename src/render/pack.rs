//! # Bit Packing
//!
//! Converts canvases into the printer's packed 1-bit format.
//!
//! ## Layout
//!
//! Row-major, 8 pixels per byte:
//! - Bit 7 (MSB) = leftmost pixel of the byte
//! - 1 = black (print), 0 = white
//!
//! ```text
//! pixels:  █ █ ░ ░ █ ░ █ ░
//! byte:    1 1 0 0 1 0 1 0  = 0xCA
//! ```
//!
//! ## Width
//!
//! [`pack`] truncates the canvas to the nearest multiple of 8 before packing
//! (columns are dropped, never padded), so the returned width is always byte
//! aligned and `data.len() == width / 8 * height`.

use serde::{Deserialize, Serialize};

use super::canvas::MonoCanvas;
use super::rotate::{Rotation, rotate};

/// Packed 1-bit image ready for the printer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedBitmap {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl PackedBitmap {
    /// Bytes per row.
    pub fn width_bytes(&self) -> usize {
        self.width.div_ceil(8)
    }

    /// Whether pixel (x, y) is black.
    pub fn is_black(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[y * self.width_bytes() + x / 8];
        (byte >> (7 - (x % 8))) & 1 == 1
    }
}

/// Pack a row of pixels into bytes, MSB first.
///
/// The final byte is zero-padded when `pixels.len()` is not a multiple of 8.
///
/// ```
/// use fortuna::render::pack::pack_row;
///
/// let row = [true, true, false, false, true, false, true, false];
/// assert_eq!(pack_row(&row), vec![0b11001010]);
/// ```
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    let num_bytes = pixels.len().div_ceil(8);
    let mut bytes = vec![0u8; num_bytes];

    for (i, &pixel) in pixels.iter().enumerate() {
        if pixel {
            let byte_idx = i / 8;
            let bit_idx = 7 - (i % 8); // MSB first
            bytes[byte_idx] |= 1 << bit_idx;
        }
    }

    bytes
}

/// Crop to a byte-aligned width and pack.
pub fn pack(canvas: &MonoCanvas) -> PackedBitmap {
    let width = canvas.width() - canvas.width() % 8;
    let cropped;
    let canvas = if width != canvas.width() {
        log::debug!("cropping canvas width {} -> {}", canvas.width(), width);
        cropped = canvas.crop_width(width);
        &cropped
    } else {
        canvas
    };

    let height = canvas.height();
    let mut data = Vec::with_capacity(width / 8 * height);
    for y in 0..height {
        data.extend(pack_row(canvas.row(y)));
    }

    PackedBitmap {
        width,
        height,
        data,
    }
}

/// Rotate, crop and pack in one step.
pub fn rasterize(canvas: &MonoCanvas, rotation: Rotation) -> PackedBitmap {
    pack(&rotate(canvas, rotation))
}

/// Expand a packed bitmap back into a canvas.
pub fn unpack(bitmap: &PackedBitmap) -> MonoCanvas {
    let mut canvas = MonoCanvas::new(bitmap.width, bitmap.height);
    for y in 0..bitmap.height {
        for x in 0..bitmap.width {
            if bitmap.is_black(x, y) {
                canvas.set(x, y, true);
            }
        }
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_row_8_pixels() {
        let row = vec![true, false, true, false, true, false, true, false];
        assert_eq!(pack_row(&row), vec![0xAA]);

        let row = vec![true; 8];
        assert_eq!(pack_row(&row), vec![0xFF]);
    }

    #[test]
    fn test_pack_row_padding() {
        let row = vec![true, true, true];
        assert_eq!(pack_row(&row), vec![0b11100000]);
    }

    #[test]
    fn test_pack_row_empty() {
        assert!(pack_row(&[]).is_empty());
    }

    #[test]
    fn test_pack_length_invariant() {
        for (w, h) in [(8, 1), (16, 0), (384, 12), (0, 5), (24, 7)] {
            let packed = pack(&MonoCanvas::new(w, h));
            assert_eq!(packed.data.len(), (w / 8) * h, "{}x{}", w, h);
            assert_eq!(packed.width % 8, 0);
        }
    }

    #[test]
    fn test_pack_crops_unaligned_width() {
        let mut c = MonoCanvas::new(13, 2);
        c.set(0, 0, true);
        c.set(12, 1, true); // dropped
        let packed = pack(&c);
        assert_eq!(packed.width, 8);
        assert_eq!(packed.height, 2);
        assert_eq!(packed.data, vec![0x80, 0x00]);
    }

    #[test]
    fn test_black_pixel_is_bit_one() {
        let mut c = MonoCanvas::new(8, 1);
        c.fill_rect(0, 0, 7, 0);
        assert_eq!(pack(&c).data, vec![0xFF]);
    }

    #[test]
    fn test_rasterize_0_matches_pack() {
        let mut c = MonoCanvas::new(16, 3);
        c.set(5, 1, true);
        assert_eq!(rasterize(&c, Rotation::Deg0), pack(&c));
    }

    #[test]
    fn test_rasterize_90_swaps_dimensions() {
        let c = MonoCanvas::new(40, 16);
        let packed = rasterize(&c, Rotation::Deg90);
        assert_eq!((packed.width, packed.height), (16, 40));
        assert_eq!(packed.data.len(), 2 * 40);
    }

    #[test]
    fn test_unpack_inverts_pack() {
        let mut c = MonoCanvas::new(16, 2);
        c.set(3, 0, true);
        c.set(15, 1, true);
        assert_eq!(unpack(&pack(&c)), c);
    }
}
