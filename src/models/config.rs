use crate::assets::AssetLoader;
use color_grid::FULL_RANGE;
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Samples along each grid axis
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// External viewer command for showing figures
    #[serde(default)]
    pub viewer: Option<String>,

    /// Figure layout
    #[serde(default)]
    pub figure: FigureConfig,
}

fn default_samples() -> usize {
    FULL_RANGE
}

/// Layout and styling of rendered figures
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FigureConfig {
    pub panel_size: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    pub font_family: String,
    pub title_font_size: u32,
    pub label_font_size: u32,
    pub tick_font_size: u32,
    /// Channel-value distance between tick labels
    pub tick_step: u32,
    pub background: String,
    pub foreground: String,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            panel_size: 384,
            margin_top: 48,
            margin_bottom: 64,
            margin_left: 72,
            margin_right: 24,
            font_family: "DejaVu Sans, Arial, sans-serif".to_string(),
            title_font_size: 18,
            label_font_size: 15,
            tick_font_size: 11,
            tick_step: 50,
            background: "#ffffff".to_string(),
            foreground: "#000000".to_string(),
        }
    }
}

impl FigureConfig {
    /// Width of one panel including its margins
    pub fn cell_width(&self) -> u32 {
        self.margin_left + self.panel_size + self.margin_right
    }

    /// Height of one panel including its margins
    pub fn cell_height(&self) -> u32 {
        self.margin_top + self.panel_size + self.margin_bottom
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config = Self::validated(config);
                    tracing::info!(
                        samples = config.samples,
                        panel_size = config.figure.panel_size,
                        viewer = ?config.viewer,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with their defaults.
    ///
    /// `samples` must lie in 1..=256 so every grid column holds a distinct
    /// channel value.
    fn validated(mut self) -> Self {
        if !(1..=FULL_RANGE).contains(&self.samples) {
            tracing::warn!(
                samples = self.samples,
                default = default_samples(),
                "samples must be within 1..=256, using default"
            );
            self.samples = default_samples();
        }
        self
    }

    /// Viewer command, ignoring blank values
    pub fn viewer_command(&self) -> Option<&str> {
        self.viewer
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            viewer: None,
            figure: FigureConfig::default(),
        }
    }
}
