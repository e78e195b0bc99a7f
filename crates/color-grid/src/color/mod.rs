//! Color spaces and display normalization
//!
//! Generated grids are encoded either in RGB, which displays as-is, or in
//! YCrCb (luma, red-difference chroma, blue-difference chroma, in that
//! channel order), which must be converted before display.
//!
//! ```
//! use color_grid::{generate, to_display_rgb, Channel, ColorSpace};
//!
//! let space: ColorSpace = "ycbcr".parse().unwrap();
//! let image = generate(Channel::First, 127, 256).unwrap();
//! let rgb = to_display_rgb(&image, space);
//! assert_eq!(rgb.pixel(128, 128), [127, 127, 127]);
//! ```

mod normalize;
mod space;
mod ycrcb;

pub use normalize::to_display_rgb;
pub use space::ColorSpace;
pub use ycrcb::ycrcb_to_rgb;
