use color_grid::GridError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Unsupported output format: {} (only .png is supported)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Viewer error: {0}")]
    Viewer(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Figure has no panels")]
    EmptyFigure,

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}
