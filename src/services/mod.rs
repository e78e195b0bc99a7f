pub mod output;
pub mod plot_pipeline;
pub mod sweep_driver;

pub use output::{FigureSink, PngFileSink, PreviewSink, RenderedFigure};
pub use plot_pipeline::{PlotPipeline, PlotRequest};
pub use sweep_driver::{Probe, SweepDriver};
