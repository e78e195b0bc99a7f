use crate::error::RenderError;
use color_grid::SampleImage;
use std::io::Cursor;

/// Encode interleaved 8-bit RGB data as a PNG.
pub fn encode_rgb_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode a display-ready sample image as an RGB PNG.
pub fn encode_sample_image(image: &SampleImage) -> Result<Vec<u8>, RenderError> {
    encode_rgb_png(image.width() as u32, image.height() as u32, &image.to_bytes())
}

/// Re-compress a PNG with oxipng, keeping the input if optimization fails.
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            optimized
        }
        Err(e) => {
            tracing::debug!(%e, "PNG optimization failed, keeping original");
            png_bytes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_grid::{generate, Channel};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let mut decoder = png::Decoder::new(Cursor::new(bytes));
        decoder.set_transformations(png::Transformations::EXPAND);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_encode_sample_image_round_trips_pixels() {
        let image = generate(Channel::First, 127, 16).unwrap();
        let bytes = encode_sample_image(&image).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);

        let (info, data) = decode(&bytes);
        assert_eq!((info.width, info.height), (16, 16));
        assert_eq!(info.color_type, png::ColorType::Rgb);
        assert_eq!(data, image.to_bytes());
    }

    #[test]
    fn test_encode_rejects_short_buffer() {
        let err = encode_rgb_png(4, 4, &[0u8; 10]).unwrap_err();
        assert!(matches!(err, RenderError::PngEncode(_)));
    }

    #[test]
    fn test_optimize_keeps_pixels() {
        // 1024 distinct colors: no palette or grey reduction is possible
        let image = generate(Channel::First, 3, 32).unwrap();
        let bytes = encode_sample_image(&image).unwrap();
        let optimized = optimize_png(bytes);

        let (info, data) = decode(&optimized);
        assert_eq!((info.width, info.height), (32, 32));
        assert_eq!(data, image.to_bytes());
    }

    #[test]
    fn test_optimize_keeps_garbage_input() {
        let garbage = vec![1, 2, 3];
        assert_eq!(optimize_png(garbage.clone()), garbage);
    }
}
