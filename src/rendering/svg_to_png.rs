use crate::error::RenderError;
use resvg::usvg::{self, fontdb, Transform};
use std::sync::Arc;
use tiny_skia::Pixmap;

use super::png_encode::{encode_rgb_png, optimize_png};

/// Rasterizes figure SVGs to PNG.
///
/// Text is laid out with a font database holding any fonts handed to
/// [`SvgRenderer::with_fonts`] plus the system fonts. The output is an
/// opaque 8-bit RGB PNG at the SVG's intrinsic size.
pub struct SvgRenderer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SvgRenderer {
    /// Create a new SVG renderer with fonts loaded from the provided data
    pub fn with_fonts(fonts: Vec<(String, std::borrow::Cow<'static, [u8]>)>) -> Self {
        let mut fontdb = fontdb::Database::new();

        for (name, data) in fonts {
            fontdb.load_font_data(data.into_owned());
            tracing::debug!(font = %name, "Loaded font");
        }

        // Load system fonts as fallback
        fontdb.load_system_fonts();

        tracing::info!(
            font_count = fontdb.len(),
            "Loaded fonts for SVG text rendering"
        );
        if fontdb.is_empty() {
            tracing::warn!("No fonts available, figure text will not be drawn");
        }

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Create a new SVG renderer with no custom fonts (system fonts only)
    pub fn new() -> Self {
        Self::with_fonts(Vec::new())
    }

    /// Render SVG to an optimized RGB PNG.
    pub fn render_to_png(&self, svg_data: &[u8]) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize_svg(svg_data)?;

        let rgb: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue()]
            })
            .collect();

        let png_bytes = encode_rgb_png(pixmap.width(), pixmap.height(), &rgb)?;
        Ok(optimize_png(png_bytes))
    }

    /// Parse and rasterize SVG to an RGBA pixmap at its intrinsic size
    fn rasterize_svg(&self, svg_data: &[u8]) -> Result<Pixmap, RenderError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let size = tree.size().to_int_size();
        let mut pixmap =
            Pixmap::new(size.width(), size.height()).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);

        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());
        tracing::debug!(
            width = size.width(),
            height = size.height(),
            "Rasterized SVG"
        );

        Ok(pixmap)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn decode_rgb(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
        let mut decoder = png::Decoder::new(Cursor::new(bytes));
        decoder.set_transformations(png::Transformations::EXPAND);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info.width, info.height, buf)
    }

    #[test]
    fn test_render_solid_rect() {
        let renderer = SvgRenderer::with_fonts(Vec::new());
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
          <rect width="20" height="10" fill="#ff0000"/>
        </svg>"##;

        let png = renderer.render_to_png(svg.as_bytes()).unwrap();
        let (width, height, data) = decode_rgb(&png);
        assert_eq!((width, height), (20, 10));

        // oxipng may reduce a single-color image to a palette; EXPAND restores
        // 8-bit samples, so the first pixel's channels lead the buffer
        assert_eq!(&data[..3], &[255, 0, 0]);
    }

    #[test]
    fn test_invalid_svg_rejected() {
        let renderer = SvgRenderer::with_fonts(Vec::new());
        let err = renderer.render_to_png(b"<not-svg").unwrap_err();
        assert!(matches!(err, RenderError::SvgParse(_)));
    }
}
