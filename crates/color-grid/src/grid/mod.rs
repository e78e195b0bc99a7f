//! Grid generation
//!
//! - [`generate`]: the two-channel sweep with one constant plane
//! - [`sample_values`] / [`sweep_values`]: evenly spaced 8-bit values
//! - [`Channel`] / [`AxisAssignment`]: which channel goes where

mod channel;
mod generator;
mod spacing;

pub use channel::{AxisAssignment, Channel};
pub use generator::generate;
pub use spacing::{sample_values, sweep_values, FULL_RANGE};
