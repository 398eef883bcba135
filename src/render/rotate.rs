//! # Right-Angle Rotation
//!
//! Slips are usually composed landscape and printed along the paper, so the
//! canvas is rotated before packing. Angles are counter-clockwise, and the
//! output canvas is expanded to hold the whole rotated image.
//!
//! ```text
//!   0°        90°        180°       270°
//! ┌────┐     ┌──┐       ┌────┐     ┌──┐
//! │A  B│     │B D│      │D  C│     │C A│
//! │C  D│     │A C│      │B  A│     │D B│
//! └────┘     └──┘       └────┘     └──┘
//! ```

use serde::{Deserialize, Serialize};

use super::canvas::MonoCanvas;

/// Rotation applied before packing, counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Parse degrees. Only right-angle multiples are accepted.
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees % 360 {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    pub fn degrees(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

/// Rotate a canvas counter-clockwise by a right angle.
///
/// 90° and 270° swap width and height. Every output pixel has a source
/// pixel, so there is no exposed background to fill.
pub fn rotate(canvas: &MonoCanvas, rotation: Rotation) -> MonoCanvas {
    let w = canvas.width();
    let h = canvas.height();

    match rotation {
        Rotation::Deg0 => canvas.clone(),
        Rotation::Deg90 => {
            let mut out = MonoCanvas::new(h, w);
            for ny in 0..w {
                for nx in 0..h {
                    out.set(nx, ny, canvas.get(w - 1 - ny, nx));
                }
            }
            out
        }
        Rotation::Deg180 => {
            let mut out = MonoCanvas::new(w, h);
            for ny in 0..h {
                for nx in 0..w {
                    out.set(nx, ny, canvas.get(w - 1 - nx, h - 1 - ny));
                }
            }
            out
        }
        Rotation::Deg270 => {
            let mut out = MonoCanvas::new(h, w);
            for ny in 0..w {
                for nx in 0..h {
                    out.set(nx, ny, canvas.get(ny, h - 1 - nx));
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x2 canvas with only the top-left pixel set.
    fn marked() -> MonoCanvas {
        let mut c = MonoCanvas::new(3, 2);
        c.set(0, 0, true);
        c
    }

    #[test]
    fn test_from_degrees() {
        assert_eq!(Rotation::from_degrees(90), Some(Rotation::Deg90));
        assert_eq!(Rotation::from_degrees(450), Some(Rotation::Deg90));
        assert_eq!(Rotation::from_degrees(45), None);
        assert_eq!(Rotation::Deg270.degrees(), 270);
    }

    #[test]
    fn test_rotate_0_is_identity() {
        let c = marked();
        assert_eq!(rotate(&c, Rotation::Deg0), c);
    }

    #[test]
    fn test_rotate_90_moves_top_left_to_bottom_left() {
        let r = rotate(&marked(), Rotation::Deg90);
        assert_eq!((r.width(), r.height()), (2, 3));
        assert!(r.get(0, 2));
        assert_eq!(r.ink(), 1);
    }

    #[test]
    fn test_rotate_180_moves_top_left_to_bottom_right() {
        let r = rotate(&marked(), Rotation::Deg180);
        assert_eq!((r.width(), r.height()), (3, 2));
        assert!(r.get(2, 1));
    }

    #[test]
    fn test_rotate_270_moves_top_left_to_top_right() {
        let r = rotate(&marked(), Rotation::Deg270);
        assert_eq!((r.width(), r.height()), (2, 3));
        assert!(r.get(1, 0));
    }

    #[test]
    fn test_90_then_270_restores() {
        let mut c = MonoCanvas::new(5, 3);
        c.set(1, 2, true);
        c.set(4, 0, true);
        let back = rotate(&rotate(&c, Rotation::Deg90), Rotation::Deg270);
        assert_eq!(back, c);
    }
}
