//! The two-channel sweep.

use super::channel::Channel;
use super::spacing::sample_values;
use crate::error::GridError;
use crate::image::SampleImage;

/// Build a `sample_count x sample_count` sample image.
///
/// `constant_channel` is filled with `constant_value` everywhere. The other
/// two channels take the values of [`sample_values`]`(sample_count)`: the
/// horizontal channel indexed by column, the vertical channel indexed by row
/// (see [`Channel::axes`]).
///
/// Fails with [`GridError::InvalidInput`] when `constant_value` is outside
/// `0..=255` or `sample_count` is zero.
///
/// # Example
///
/// ```
/// use color_grid::{generate, Channel};
///
/// let image = generate(Channel::First, 127, 256).unwrap();
/// // red constant, green across, blue down
/// assert_eq!(image.pixel(0, 255), [127, 255, 0]);
/// assert_eq!(image.pixel(255, 0), [127, 0, 255]);
/// ```
pub fn generate(
    constant_channel: Channel,
    constant_value: i32,
    sample_count: usize,
) -> Result<SampleImage, GridError> {
    let constant =
        u8::try_from(constant_value).map_err(|_| GridError::constant_out_of_range(constant_value))?;
    let values = sample_values(sample_count)?;
    let axes = constant_channel.axes();

    let (c, h, v) = (
        constant_channel.index(),
        axes.horizontal.index(),
        axes.vertical.index(),
    );

    Ok(SampleImage::from_fn(sample_count, sample_count, |row, col| {
        let mut pixel = [0u8; 3];
        pixel[c] = constant;
        pixel[h] = values[col];
        pixel[v] = values[row];
        pixel
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_constant() {
        let err = generate(Channel::First, -1, 256).unwrap_err();
        assert!(matches!(err, GridError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_constant_above_range() {
        let err = generate(Channel::Second, 256, 256).unwrap_err();
        assert!(matches!(err, GridError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_zero_samples() {
        let err = generate(Channel::First, 0, 0).unwrap_err();
        assert!(matches!(err, GridError::InvalidInput(_)));
    }

    #[test]
    fn test_single_sample_image() {
        let image = generate(Channel::Third, 42, 1).unwrap();
        assert_eq!(image.width(), 1);
        assert_eq!(image.height(), 1);
        assert_eq!(image.pixel(0, 0), [0, 0, 42]);
    }

    #[test]
    fn test_reduced_grid_uses_spaced_values() {
        let image = generate(Channel::First, 10, 3).unwrap();
        assert_eq!(image.width(), 3);
        assert_eq!(image.pixel(0, 1), [10, 127, 0]);
        assert_eq!(image.pixel(2, 1), [10, 127, 255]);
    }

    #[test]
    fn test_middle_channel_constant() {
        let image = generate(Channel::Second, 200, 256).unwrap();
        assert_eq!(image.pixel(3, 7), [7, 200, 3]);
    }

    #[test]
    fn test_last_channel_constant() {
        let image = generate(Channel::Third, 5, 256).unwrap();
        assert_eq!(image.pixel(3, 7), [7, 3, 5]);
    }
}
