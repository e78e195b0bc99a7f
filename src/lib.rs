//! Colorplot
//!
//! Renders RGB and YCbCr color-space sweeps to PNG figures.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
