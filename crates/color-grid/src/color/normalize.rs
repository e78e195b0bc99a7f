//! Conversion of a generated grid into the display (RGB) encoding.

use super::space::ColorSpace;
use super::ycrcb::ycrcb_to_rgb;
use crate::image::SampleImage;

/// Convert `image`, encoded in `source`, to RGB for display.
///
/// RGB input is returned unchanged (as a copy). YCrCb input is converted
/// pixel by pixel with [`ycrcb_to_rgb`]; the source image is not modified.
/// Every output value is clamped to `0..=255`.
pub fn to_display_rgb(image: &SampleImage, source: ColorSpace) -> SampleImage {
    match source {
        ColorSpace::Rgb => image.clone(),
        ColorSpace::YCrCb => image.map(ycrcb_to_rgb),
    }
}
