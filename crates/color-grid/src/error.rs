//! Error type for grid generation and color-space normalization.

use std::fmt;

/// Error returned by the color-grid public API.
///
/// Both variants are final for the call that produced them: there is no
/// partial output to recover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A constant value or sample count was outside its accepted range
    InvalidInput(String),
    /// The named source encoding is not RGB or YCbCr
    UnsupportedColorSpace(String),
}

impl GridError {
    pub(crate) fn constant_out_of_range(value: i32) -> Self {
        GridError::InvalidInput(format!(
            "constant value {} is outside 0..=255",
            value
        ))
    }

    pub(crate) fn empty_samples(what: &str) -> Self {
        GridError::InvalidInput(format!("{} must be at least 1", what))
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
            GridError::UnsupportedColorSpace(name) => {
                write!(f, "unsupported color space: {}", name)
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_out_of_range_message() {
        let err = GridError::constant_out_of_range(300);
        assert_eq!(err.to_string(), "invalid input: constant value 300 is outside 0..=255");
    }

    #[test]
    fn test_empty_samples_message() {
        let err = GridError::empty_samples("sample count");
        assert_eq!(err.to_string(), "invalid input: sample count must be at least 1");
    }

    #[test]
    fn test_unsupported_color_space_message() {
        let err = GridError::UnsupportedColorSpace("hsv".to_string());
        assert_eq!(err.to_string(), "unsupported color space: hsv");
    }
}
