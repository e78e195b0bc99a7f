use std::fmt;

use color_grid::{generate, sample_values, sweep_values, to_display_rgb, GridError};

use crate::models::{Figure, Panel, Visualization};

/// Generic single/multiple driver shared by every visualization.
///
/// Builds each panel by generating the grid in the visualization's color
/// space, normalizing it to RGB and attaching the visualization's labels.
/// Panels never share state; a sweep is just repeated single panels.
#[derive(Debug, Clone, Copy)]
pub struct SweepDriver {
    samples: usize,
}

impl SweepDriver {
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }

    /// One panel with the constant channel at `value`
    pub fn panel(&self, viz: &Visualization, value: u8) -> Result<Panel, GridError> {
        let source = generate(viz.constant_channel, value as i32, self.samples)?;
        let image = to_display_rgb(&source, viz.space);

        tracing::debug!(
            space = %viz.space,
            constant = value,
            samples = self.samples,
            "Generated panel"
        );

        Ok(Panel {
            title: viz.title(value),
            x_label: viz.x_label().to_string(),
            y_label: viz.y_label().to_string(),
            constant: value,
            image,
            axis_values: sample_values(self.samples)?,
        })
    }

    /// A figure with a single panel
    pub fn single(&self, viz: &Visualization, value: u8) -> Result<Figure, GridError> {
        Ok(Figure {
            name: viz.slug().to_string(),
            panels: vec![self.panel(viz, value)?],
        })
    }

    /// A figure with `steps` panels, constants evenly spaced over 0..=255
    pub fn multiple(&self, viz: &Visualization, steps: usize) -> Result<Figure, GridError> {
        let values = sweep_values(steps)?;
        tracing::info!(space = %viz.space, ?values, "Sweeping constant channel");

        let panels = values
            .iter()
            .map(|&v| self.panel(viz, v))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Figure {
            name: viz.slug().to_string(),
            panels,
        })
    }

    /// Source and display pixels at the upper-left, lower-right and center
    pub fn probe(&self, viz: &Visualization, value: u8) -> Result<Probe, GridError> {
        let source = generate(viz.constant_channel, value as i32, self.samples)?;
        let display = to_display_rgb(&source, viz.space);

        Ok(Probe {
            symbol: viz.constant_symbol(),
            value,
            source: source.landmarks(),
            display: display.landmarks(),
        })
    }
}

/// Landmark pixels of one generated grid, before and after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub symbol: &'static str,
    pub value: u8,
    /// Upper-left, lower-right, center in the source encoding
    pub source: [[u8; 3]; 3],
    /// Same pixels in RGB
    pub display: [[u8; 3]; 3],
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn triple(p: &[u8; 3]) -> String {
            format!("[{:>3} {:>3} {:>3}]", p[0], p[1], p[2])
        }
        writeln!(f, "{}={}", self.symbol, self.value)?;
        writeln!(
            f,
            "source:  {} {} {}",
            triple(&self.source[0]),
            triple(&self.source[1]),
            triple(&self.source[2])
        )?;
        write!(
            f,
            "display: {} {} {}",
            triple(&self.display[0]),
            triple(&self.display[1]),
            triple(&self.display[2])
        )
    }
}
