use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::PlotError;
use crate::models::Figure;
use crate::rendering::encode_sample_image;

/// A figure after rendering: the panels plus the composed PNG.
#[derive(Debug)]
pub struct RenderedFigure {
    pub figure: Figure,
    pub png_bytes: Vec<u8>,
}

/// Receives rendered figures (display or persistence).
///
/// Implementations acquire whatever they write to per call and release it
/// before returning, on success and on error.
pub trait FigureSink {
    fn present(&self, rendered: &RenderedFigure) -> Result<(), PlotError>;
}

/// Writes the figure, or the raw panel images, to a PNG path.
pub struct PngFileSink {
    path: PathBuf,
    raw: bool,
}

impl PngFileSink {
    /// Fails with [`PlotError::UnsupportedFormat`] unless `path` ends in `.png`.
    pub fn new(path: impl Into<PathBuf>, raw: bool) -> Result<Self, PlotError> {
        let path = path.into();
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if !is_png {
            return Err(PlotError::UnsupportedFormat(path));
        }
        Ok(Self { path, raw })
    }

    /// Destination of each raw panel.
    ///
    /// A single panel goes to the path itself; several panels go to
    /// `<stem>_<constant>.png` next to it.
    pub fn raw_paths(&self, figure: &Figure) -> Vec<PathBuf> {
        if figure.panels.len() == 1 {
            return vec![self.path.clone()];
        }
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| figure.name.clone());
        let parent = self.path.parent().unwrap_or_else(|| Path::new(""));
        figure
            .panels
            .iter()
            .map(|p| parent.join(format!("{}_{}.png", stem, p.constant)))
            .collect()
    }
}

impl FigureSink for PngFileSink {
    fn present(&self, rendered: &RenderedFigure) -> Result<(), PlotError> {
        if self.raw {
            for (panel, path) in rendered
                .figure
                .panels
                .iter()
                .zip(self.raw_paths(&rendered.figure))
            {
                let bytes = encode_sample_image(&panel.image)?;
                std::fs::write(&path, &bytes)?;
                tracing::info!(path = %path.display(), constant = panel.constant, "Saved raw image");
            }
        } else {
            std::fs::write(&self.path, &rendered.png_bytes)?;
            tracing::info!(
                path = %self.path.display(),
                bytes = rendered.png_bytes.len(),
                "Saved figure"
            );
        }
        Ok(())
    }
}

/// Shows a figure: writes it to a preview file and opens it in the
/// configured viewer, waiting for the viewer to exit.
///
/// Without a viewer the preview path is printed instead.
pub struct PreviewSink {
    dir: PathBuf,
    viewer: Option<String>,
}

impl PreviewSink {
    pub fn new(dir: impl Into<PathBuf>, viewer: Option<String>) -> Self {
        Self {
            dir: dir.into(),
            viewer,
        }
    }

    /// Preview in the system temp directory
    pub fn in_temp_dir(viewer: Option<String>) -> Self {
        Self::new(std::env::temp_dir(), viewer)
    }

    pub fn preview_path(&self, figure: &Figure) -> PathBuf {
        let constants: Vec<String> = figure.constants().iter().map(u8::to_string).collect();
        self.dir
            .join(format!("colorplot-{}-{}.png", figure.name, constants.join("-")))
    }

    fn run_viewer(&self, viewer: &str, path: &Path) -> Result<(), PlotError> {
        let mut parts = viewer.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| PlotError::Viewer("empty viewer command".to_string()))?;

        tracing::debug!(%program, path = %path.display(), "Launching viewer");
        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .map_err(|e| PlotError::Viewer(format!("failed to start {program}: {e}")))?;

        if !status.success() {
            return Err(PlotError::Viewer(format!("{program} exited with {status}")));
        }
        Ok(())
    }
}

impl FigureSink for PreviewSink {
    fn present(&self, rendered: &RenderedFigure) -> Result<(), PlotError> {
        let path = self.preview_path(&rendered.figure);
        std::fs::write(&path, &rendered.png_bytes)?;

        match self.viewer.as_deref() {
            Some(viewer) => self.run_viewer(viewer, &path),
            None => {
                tracing::info!(path = %path.display(), "No viewer configured");
                println!("Figure written to {}", path.display());
                Ok(())
            }
        }
    }
}
