use std::sync::Arc;

use crate::error::PlotError;
use crate::models::{AppConfig, Figure, Visualization};
use crate::rendering::{compose_svg, SvgRenderer};
use crate::services::{FigureSink, RenderedFigure, SweepDriver};

/// What to draw for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotRequest {
    /// One panel with the constant channel at this value
    Single(u8),
    /// This many panels with evenly spaced constants
    Multiple(usize),
}

/// Pipeline that orchestrates grid → figure → SVG → PNG → sinks
pub struct PlotPipeline {
    config: Arc<AppConfig>,
    driver: SweepDriver,
    renderer: Arc<SvgRenderer>,
}

impl PlotPipeline {
    pub fn new(config: Arc<AppConfig>, renderer: Arc<SvgRenderer>) -> Self {
        let driver = SweepDriver::new(config.samples);
        Self {
            config,
            driver,
            renderer,
        }
    }

    /// Build the figure for a request
    pub fn figure(&self, viz: &Visualization, request: PlotRequest) -> Result<Figure, PlotError> {
        let figure = match request {
            PlotRequest::Single(value) => self.driver.single(viz, value)?,
            PlotRequest::Multiple(steps) => self.driver.multiple(viz, steps)?,
        };
        Ok(figure)
    }

    /// Compose and rasterize a figure
    pub fn render(&self, figure: Figure) -> Result<RenderedFigure, PlotError> {
        let svg = compose_svg(&figure, &self.config.figure)?;
        tracing::debug!(
            panels = figure.panels.len(),
            svg_len = svg.len(),
            "Figure composed"
        );

        let png_bytes = self.renderer.render_to_png(svg.as_bytes())?;
        tracing::debug!(bytes = png_bytes.len(), "Figure rendered");

        Ok(RenderedFigure { figure, png_bytes })
    }

    /// Build, render and hand the figure to every sink, in order
    pub fn run(
        &self,
        viz: &Visualization,
        request: PlotRequest,
        sinks: &[Box<dyn FigureSink>],
    ) -> Result<RenderedFigure, PlotError> {
        let figure = self.figure(viz, request)?;
        let rendered = self.render(figure)?;
        for sink in sinks {
            sink.present(&rendered)?;
        }
        Ok(rendered)
    }
}
