//! # Rendering Module
//!
//! Everything between laid-out text and bytes the printer can burn.
//!
//! ## Modules
//!
//! - [`canvas`]: 1-bit drawing surface with corner index marks
//! - [`rotate`]: right-angle rotation
//! - [`pack`]: MSB-first bit packing (the Rasterizer)
//! - [`slip`]: full fortune slip pipeline
//! - [`preview`]: PNG previews of packed bitmaps
//!
//! ## Usage Example
//!
//! ```
//! use fortuna::layout::BlockFont;
//! use fortuna::render::slip::{SlipOptions, render_slip};
//!
//! let slip = render_slip(&BlockFont, "Adventure awaits around the corner.", &SlipOptions::default())?;
//!
//! // Rotated 90°: the 120-dot tall slip runs along the paper
//! assert_eq!(slip.bitmap.width, 120);
//! assert_eq!(slip.bitmap.data.len(), 120 / 8 * slip.bitmap.height);
//! # Ok::<(), fortuna::FortunaError>(())
//! ```

pub mod canvas;
pub mod pack;
pub mod preview;
pub mod rotate;
pub mod slip;
