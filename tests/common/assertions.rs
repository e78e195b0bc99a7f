//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

/// A decoded RGB PNG
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl DecodedPng {
    /// Pixel at (row, col)
    pub fn pixel(&self, row: u32, col: u32) -> [u8; 3] {
        let i = ((row * self.width + col) * 3) as usize;
        [self.rgb[i], self.rgb[i + 1], self.rgb[i + 2]]
    }
}

/// Assert bytes are a valid PNG and decode them to 8-bit RGB
pub fn assert_png(bytes: &[u8]) -> DecodedPng {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );

    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder.read_info().expect("Failed to read PNG header");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("Failed to decode PNG");
    buf.truncate(info.buffer_size());

    assert_eq!(info.bit_depth, png::BitDepth::Eight, "Expected 8-bit output");
    let rgb = match info.color_type {
        png::ColorType::Rgb => buf,
        png::ColorType::Rgba => buf
            .chunks_exact(4)
            .flat_map(|p| [p[0], p[1], p[2]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g]).collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0]])
            .collect(),
        other => panic!("Unexpected color type after expansion: {other:?}"),
    };

    DecodedPng {
        width: info.width,
        height: info.height,
        rgb,
    }
}

/// Assert a file exists, is a PNG, and return it decoded
pub fn assert_png_file(path: &Path) -> DecodedPng {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected {} to exist: {e}", path.display()));
    assert_png(&bytes)
}

/// Assert decoded dimensions
pub fn assert_dimensions(png: &DecodedPng, width: u32, height: u32) {
    assert_eq!(
        (png.width, png.height),
        (width, height),
        "Unexpected image dimensions"
    );
}
