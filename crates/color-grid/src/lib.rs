//! color-grid: 8-bit color-space sample grids
//!
//! This library builds the synthetic images used to visualize a color space:
//! two channels sweep their full 8-bit range along the two image axes while
//! the third channel is held at a constant value. Images encoded in YCrCb
//! are converted to RGB so they can be handed to an RGB display.
//!
//! # Quick Start
//!
//! ```
//! use color_grid::{generate, to_display_rgb, Channel, ColorSpace};
//!
//! // Y held at 0, Cr across the columns, Cb down the rows
//! let ycrcb = generate(Channel::First, 0, 256).unwrap();
//! let rgb = to_display_rgb(&ycrcb, ColorSpace::YCrCb);
//!
//! assert_eq!(rgb.pixel(0, 0), [0, 135, 0]);
//! assert_eq!(rgb.pixel(255, 255), [178, 0, 225]);
//! ```
//!
//! # Axis Assignment
//!
//! Of the two channels that vary, the one with the lower channel index runs
//! along the horizontal axis (column index) and the other runs along the
//! vertical axis (row index). The origin is the upper-left pixel.
//!
//! | Constant channel | Horizontal (x) | Vertical (y) |
//! |------------------|----------------|--------------|
//! | [`Channel::First`]  | Second | Third  |
//! | [`Channel::Second`] | First  | Third  |
//! | [`Channel::Third`]  | First  | Second |
//!
//! For RGB with red held constant that is green across and blue down; for
//! YCrCb with Y held constant it is Cr across and Cb down.
//!
//! # Sample Spacing
//!
//! Both the grid axes and the constant values used for a sweep are drawn
//! from the same rule: `n` evenly spaced integers over `0..=255`, with both
//! endpoints included and intermediate values truncated toward zero. See
//! [`sample_values`].

pub mod color;
pub mod error;
pub mod grid;
pub mod image;


pub use color::{to_display_rgb, ycrcb_to_rgb, ColorSpace};
pub use error::GridError;
pub use grid::{generate, sample_values, sweep_values, AxisAssignment, Channel, FULL_RANGE};
pub use image::SampleImage;
