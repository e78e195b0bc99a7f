//! Test fixtures and constants.

/// Reference triples for YCbCr → RGB conversion at the grid landmarks.
///
/// Each entry is (Y, upper-left, lower-right, center) for a full-range grid.
pub const YCBCR_LANDMARKS: &[(u8, [u8; 3], [u8; 3], [u8; 3])] = &[
    (0, [0, 135, 0], [178, 0, 225], [0, 0, 0]),
    (255, [75, 255, 28], [255, 121, 255], [255, 255, 255]),
];

/// A config with small panels so rendering stays fast
pub const SMALL_CONFIG: &str = r##"
samples: 16
figure:
  panel_size: 64
  margin_top: 16
  margin_bottom: 24
  margin_left: 24
  margin_right: 8
  tick_step: 85
"##;

/// A config that is not valid YAML for the config schema
pub const BROKEN_CONFIG: &str = "samples: [not, a, number\n";

/// Configs whose `samples` value lies outside 1..=256
pub const OUT_OF_RANGE_SAMPLES: &[&str] = &[
    "samples: 0\nviewer: feh\n",
    "samples: 1000\nviewer: feh\n",
];
