pub mod config;
pub mod figure;
pub mod visualization;

pub use config::{AppConfig, FigureConfig};
pub use figure::{Figure, Panel};
pub use visualization::Visualization;
