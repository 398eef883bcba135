//! # Monochrome Canvas
//!
//! A width × height grid of 1-bit pixels that text and index marks are
//! drawn onto before rasterizing.
//!
//! ## Polarity
//!
//! `true` is ink (black), `false` is paper (white). Packing keeps that
//! mapping: a black pixel becomes bit value 1, which the printer burns.

/// 1-bit drawing surface. New canvases are all white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoCanvas {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl MonoCanvas {
    /// Create an all-white canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at (x, y). Out-of-bounds reads are white.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    /// Set pixel at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, black: bool) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = black;
        }
    }

    /// Set a pixel from signed coordinates, clipping anything off-canvas.
    #[inline]
    pub fn set_signed(&mut self, x: i32, y: i32, black: bool) {
        if x >= 0 && y >= 0 {
            self.set(x as usize, y as usize, black);
        }
    }

    /// Fill the inclusive rectangle (x0, y0)..=(x1, y1) with black.
    ///
    /// Coordinates are clipped to the canvas.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width as i32 - 1);
        let y1 = y1.min(self.height as i32 - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.pixels[y as usize * self.width + x as usize] = true;
            }
        }
    }

    /// Burn the four corner index marks.
    ///
    /// Each mark spans `block_w + 1` × `block_h + 1` pixels, flush with its
    /// corner, so a slip's extent is visible at a glance on paper.
    pub fn burn_corner_marks(&mut self, block_w: usize, block_h: usize) {
        let w = self.width as i32;
        let h = self.height as i32;
        let bw = block_w as i32;
        let bh = block_h as i32;

        self.fill_rect(0, 0, bw, bh);
        self.fill_rect(w - bw - 1, 0, w - 1, bh);
        self.fill_rect(0, h - bh - 1, bw, h - 1);
        self.fill_rect(w - bw - 1, h - bh - 1, w - 1, h - 1);
    }

    /// Keep only the leftmost `width` columns.
    pub fn crop_width(&self, width: usize) -> Self {
        let width = width.min(self.width);
        let mut out = Self::new(width, self.height);
        for y in 0..self.height {
            let src = &self.pixels[y * self.width..y * self.width + width];
            out.pixels[y * width..(y + 1) * width].copy_from_slice(src);
        }
        out
    }

    /// Number of black pixels.
    pub fn ink(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Row `y` as a slice of pixels.
    pub fn row(&self, y: usize) -> &[bool] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }
}
