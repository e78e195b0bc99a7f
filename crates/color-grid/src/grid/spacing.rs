//! Evenly spaced 8-bit values with inclusive endpoints.

use crate::error::GridError;

/// Number of distinct 8-bit channel values, and the default grid size.
pub const FULL_RANGE: usize = 256;

const MAX_VALUE: usize = 255;

/// `count` evenly spaced integers over `0..=255`.
///
/// Value `i` is `floor(i * 255 / (count - 1))`, so both endpoints are always
/// present and intermediate values are truncated toward zero. A single
/// sample is `[0]`. With `count == 256` the result is exactly `0..=255`.
///
/// Counts above 256 repeat values; that is allowed.
///
/// # Example
///
/// ```
/// use color_grid::sample_values;
///
/// assert_eq!(sample_values(3).unwrap(), vec![0, 127, 255]);
/// assert_eq!(sample_values(5).unwrap(), vec![0, 63, 127, 191, 255]);
/// ```
pub fn sample_values(count: usize) -> Result<Vec<u8>, GridError> {
    if count == 0 {
        return Err(GridError::empty_samples("sample count"));
    }
    if count == 1 {
        return Ok(vec![0]);
    }
    let last = count - 1;
    Ok((0..count).map(|i| (i * MAX_VALUE / last) as u8).collect())
}

/// Constant values for a sweep of `steps` images across the full range.
///
/// Same spacing rule as [`sample_values`]; `steps == 0` is rejected.
pub fn sweep_values(steps: usize) -> Result<Vec<u8>, GridError> {
    if steps == 0 {
        return Err(GridError::empty_samples("step count"));
    }
    sample_values(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_range_is_identity() {
        let values = sample_values(FULL_RANGE).unwrap();
        assert_eq!(values.len(), 256);
        for (i, v) in values.iter().enumerate() {
            assert_eq!(*v as usize, i);
        }
    }

    #[test]
    fn test_two_samples_are_endpoints() {
        assert_eq!(sample_values(2).unwrap(), vec![0, 255]);
    }

    #[test]
    fn test_single_sample() {
        assert_eq!(sample_values(1).unwrap(), vec![0]);
    }

    #[test]
    fn test_zero_samples_rejected() {
        assert!(matches!(sample_values(0), Err(GridError::InvalidInput(_))));
        assert!(matches!(sweep_values(0), Err(GridError::InvalidInput(_))));
    }

    #[test]
    fn test_sweep_three_steps() {
        assert_eq!(sweep_values(3).unwrap(), vec![0, 127, 255]);
    }

    #[test]
    fn test_values_are_non_decreasing() {
        for count in [2, 7, 16, 100, 300] {
            let values = sample_values(count).unwrap();
            assert!(values.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(values[0], 0);
            assert_eq!(values[count - 1], 255);
        }
    }
}
