//! The sample image produced by the grid generator.

mod sample_image;

pub use sample_image::SampleImage;
