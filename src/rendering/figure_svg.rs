//! Compose a [`Figure`] into an SVG document.
//!
//! Each panel occupies one cell of `FigureConfig::cell_width()` x
//! `cell_height()`. Inside a cell the panel image sits at
//! (`margin_left`, `margin_top`) with the title above it, tick labels and
//! the x label below, and the rotated y label on the left. The image origin
//! is the upper-left corner, so the vertical channel grows downwards.

use std::fmt::Write as _;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use super::png_encode::encode_sample_image;
use crate::error::RenderError;
use crate::models::{Figure, FigureConfig, Panel};

/// Render `figure` as a standalone SVG document.
pub fn compose_svg(figure: &Figure, layout: &FigureConfig) -> Result<String, RenderError> {
    if figure.panels.is_empty() {
        return Err(RenderError::EmptyFigure);
    }

    let width = layout.cell_width() * figure.panels.len() as u32;
    let height = layout.cell_height();

    let mut svg = String::new();
    // Writing into a String cannot fail
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = write!(
        svg,
        r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
        escape_xml(&layout.background)
    );

    for (i, panel) in figure.panels.iter().enumerate() {
        let origin_x = layout.cell_width() * i as u32;
        write_panel(&mut svg, panel, origin_x, layout)?;
    }

    svg.push_str("</svg>");
    Ok(svg)
}

fn write_panel(
    svg: &mut String,
    panel: &Panel,
    origin_x: u32,
    layout: &FigureConfig,
) -> Result<(), RenderError> {
    let size = layout.panel_size as f32;
    let left = (origin_x + layout.margin_left) as f32;
    let top = layout.margin_top as f32;
    let fg = escape_xml(&layout.foreground);
    let font = escape_xml(&layout.font_family);

    let png = encode_sample_image(&panel.image)?;
    let _ = write!(
        svg,
        r#"<image x="{left}" y="{top}" width="{size}" height="{size}" preserveAspectRatio="none" image-rendering="optimizeSpeed" xlink:href="data:image/png;base64,{}"/>"#,
        BASE64.encode(&png)
    );
    let _ = write!(
        svg,
        r#"<rect x="{left}" y="{top}" width="{size}" height="{size}" fill="none" stroke="{fg}" stroke-width="1"/>"#
    );

    // Title
    let _ = write!(
        svg,
        r#"<text x="{}" y="{}" font-family="{font}" font-size="{}" fill="{fg}" text-anchor="middle">{}</text>"#,
        left + size / 2.0,
        top - layout.title_font_size as f32 / 2.0,
        layout.title_font_size,
        escape_xml(&panel.title)
    );

    // Ticks along both axes; the grid is square so rows share the column values
    let tick_len = 4.0;
    let tick_font = layout.tick_font_size as f32;
    for (index, value) in tick_positions(&panel.axis_values, layout.tick_step) {
        let offset = (index as f32 + 0.5) * size / panel.axis_values.len() as f32;

        let x = left + offset;
        let bottom = top + size;
        let _ = write!(
            svg,
            r#"<line x1="{x}" y1="{bottom}" x2="{x}" y2="{}" stroke="{fg}" stroke-width="1"/>"#,
            bottom + tick_len
        );
        let _ = write!(
            svg,
            r#"<text x="{x}" y="{}" font-family="{font}" font-size="{}" fill="{fg}" text-anchor="middle">{value}</text>"#,
            bottom + tick_len + tick_font + 2.0,
            layout.tick_font_size
        );

        let y = top + offset;
        let _ = write!(
            svg,
            r#"<line x1="{}" y1="{y}" x2="{left}" y2="{y}" stroke="{fg}" stroke-width="1"/>"#,
            left - tick_len
        );
        let _ = write!(
            svg,
            r#"<text x="{}" y="{}" font-family="{font}" font-size="{}" fill="{fg}" text-anchor="end">{value}</text>"#,
            left - tick_len - 2.0,
            y + tick_font / 3.0,
            layout.tick_font_size
        );
    }

    // Axis labels
    let _ = write!(
        svg,
        r#"<text x="{}" y="{}" font-family="{font}" font-size="{}" fill="{fg}" text-anchor="middle">{}</text>"#,
        left + size / 2.0,
        top + size + layout.margin_bottom as f32 - layout.label_font_size as f32 / 2.0,
        layout.label_font_size,
        escape_xml(&panel.x_label)
    );
    let label_x = origin_x as f32 + layout.label_font_size as f32;
    let label_y = top + size / 2.0;
    let _ = write!(
        svg,
        r#"<text x="{label_x}" y="{label_y}" font-family="{font}" font-size="{}" fill="{fg}" text-anchor="middle" transform="rotate(-90 {label_x} {label_y})">{}</text>"#,
        layout.label_font_size,
        escape_xml(&panel.y_label)
    );

    Ok(())
}

/// Sample indices and values to label along an axis.
///
/// Picks the sample nearest to every multiple of `step` in `0..=255`,
/// skipping repeats when there are fewer samples than ticks.
fn tick_positions(axis_values: &[u8], step: u32) -> Vec<(usize, u8)> {
    if axis_values.is_empty() {
        return Vec::new();
    }
    let last = axis_values.len() - 1;
    let step = step.max(1) as usize;

    let mut ticks: Vec<(usize, u8)> = Vec::new();
    for target in (0..=255usize).step_by(step) {
        let index = (target * last + 127) / 255;
        if ticks.last().map(|&(i, _)| i) != Some(index) {
            ticks.push((index, axis_values[index]));
        }
    }
    ticks
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
