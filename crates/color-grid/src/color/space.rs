//! Source encodings a grid can be generated in.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// Encoding of a [`SampleImage`](crate::SampleImage)'s channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Red, green, blue. Already the display encoding.
    Rgb,
    /// Luma, Cr, Cb (BT.601 full range, Cr before Cb).
    YCrCb,
}

impl ColorSpace {
    /// Names of the three channels, in pixel order.
    pub fn channel_names(self) -> [&'static str; 3] {
        match self {
            ColorSpace::Rgb => ["Red", "Green", "Blue"],
            ColorSpace::YCrCb => ["Y", "Cr", "Cb"],
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpace::Rgb => write!(f, "RGB"),
            ColorSpace::YCrCb => write!(f, "YCbCr"),
        }
    }
}

impl FromStr for ColorSpace {
    type Err = GridError;

    /// Parse a color-space name.
    ///
    /// Accepts `rgb`, `ycrcb` and `ycbcr` (case-insensitive, surrounding
    /// whitespace ignored). Both YCbCr spellings select the Cr-before-Cb
    /// channel order used by the generator.
    ///
    /// ```
    /// use color_grid::{ColorSpace, GridError};
    ///
    /// assert_eq!("RGB".parse::<ColorSpace>().unwrap(), ColorSpace::Rgb);
    /// assert_eq!("YCbCr".parse::<ColorSpace>().unwrap(), ColorSpace::YCrCb);
    /// assert!(matches!(
    ///     "hsv".parse::<ColorSpace>(),
    ///     Err(GridError::UnsupportedColorSpace(_))
    /// ));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name.to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorSpace::Rgb),
            "ycrcb" | "ycbcr" => Ok(ColorSpace::YCrCb),
            _ => Err(GridError::UnsupportedColorSpace(name.to_string())),
        }
    }
}
