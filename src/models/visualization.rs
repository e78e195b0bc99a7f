use color_grid::{Channel, ColorSpace};

/// Describes one color-space plot: which encoding the grid is generated in,
/// which channel is held constant, and how the panel is labelled.
///
/// Labels derive from the color space's channel names and the generator's
/// axis assignment, so a descriptor cannot disagree with the image it labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visualization {
    pub space: ColorSpace,
    pub constant_channel: Channel,
}

impl Visualization {
    /// Red held constant; green across, blue down
    pub const RGB: Self = Self {
        space: ColorSpace::Rgb,
        constant_channel: Channel::First,
    };

    /// Luma held constant; Cr across, Cb down
    pub const YCBCR: Self = Self {
        space: ColorSpace::YCrCb,
        constant_channel: Channel::First,
    };

    /// Short lowercase name, used in file names
    pub fn slug(&self) -> &'static str {
        match self.space {
            ColorSpace::Rgb => "rgb",
            ColorSpace::YCrCb => "ycbcr",
        }
    }

    /// Name of the constant channel ("Red", "Y")
    pub fn constant_symbol(&self) -> &'static str {
        self.space.channel_names()[self.constant_channel.index()]
    }

    pub fn x_label(&self) -> &'static str {
        self.space.channel_names()[self.constant_channel.axes().horizontal.index()]
    }

    pub fn y_label(&self) -> &'static str {
        self.space.channel_names()[self.constant_channel.axes().vertical.index()]
    }

    pub fn title(&self, value: u8) -> String {
        format!(
            "{} color space with {}={}",
            self.space,
            self.constant_symbol(),
            value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_labels() {
        let viz = Visualization::RGB;
        assert_eq!(viz.title(127), "RGB color space with Red=127");
        assert_eq!(viz.x_label(), "Green");
        assert_eq!(viz.y_label(), "Blue");
        assert_eq!(viz.slug(), "rgb");
    }

    #[test]
    fn test_ycbcr_labels() {
        let viz = Visualization::YCBCR;
        assert_eq!(viz.title(0), "YCbCr color space with Y=0");
        assert_eq!(viz.x_label(), "Cr");
        assert_eq!(viz.y_label(), "Cb");
        assert_eq!(viz.slug(), "ycbcr");
    }

    #[test]
    fn test_other_constant_channel_labels() {
        let viz = Visualization {
            space: ColorSpace::Rgb,
            constant_channel: Channel::Third,
        };
        assert_eq!(viz.title(5), "RGB color space with Blue=5");
        assert_eq!(viz.x_label(), "Red");
        assert_eq!(viz.y_label(), "Green");
    }
}
