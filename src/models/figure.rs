use color_grid::SampleImage;

/// One rendered sample image with its labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Value of the constant channel
    pub constant: u8,
    /// Display-ready (RGB) image
    pub image: SampleImage,
    /// Channel value at each column (and row) index, for tick labels
    pub axis_values: Vec<u8>,
}

/// Panels laid out side by side, left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Used to name preview files ("rgb", "ycbcr")
    pub name: String,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn constants(&self) -> Vec<u8> {
        self.panels.iter().map(|p| p.constant).collect()
    }
}
