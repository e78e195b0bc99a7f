//! Test application factory for integration tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use colorplot::assets::AssetLoader;
use colorplot::models::AppConfig;
use colorplot::rendering::SvgRenderer;
use colorplot::services::{FigureSink, PlotPipeline, PngFileSink, PreviewSink};

/// Pipeline wired like the CLI, writing into a private temp directory
pub struct TestApp {
    pub pipeline: PlotPipeline,
    pub dir: tempfile::TempDir,
}

impl TestApp {
    /// Create a new test application using the embedded config
    pub fn new() -> Self {
        let loader = AssetLoader::new(None, None);
        Self::with_config(AppConfig::load_from_assets(&loader))
    }

    /// Create a test application with a reduced sample count
    pub fn with_samples(samples: usize) -> Self {
        let loader = AssetLoader::new(None, None);
        let mut config = AppConfig::load_from_assets(&loader);
        config.samples = samples;
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let renderer = Arc::new(SvgRenderer::new());
        let pipeline = PlotPipeline::new(Arc::new(config), renderer);
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        Self { pipeline, dir }
    }

    /// Path inside the test directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// File sink writing to `name` inside the test directory
    pub fn file_sink(&self, name: &str, raw: bool) -> Box<dyn FigureSink> {
        Box::new(PngFileSink::new(self.path(name), raw).expect("Expected a .png path"))
    }

    /// Preview sink without a viewer, writing into the test directory
    pub fn preview_sink(&self) -> Box<dyn FigureSink> {
        Box::new(PreviewSink::new(self.dir.path(), None))
    }

    /// Names of all files written so far, sorted
    pub fn written_files(&self) -> Vec<String> {
        list_files(self.dir.path())
    }
}

fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
