//! Channel identifiers and the axis each varying channel is drawn along.

/// One of the three 8-bit planes of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    First,
    Second,
    Third,
}

impl Channel {
    /// Channel index within a `[u8; 3]` pixel.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::First => 0,
            Channel::Second => 1,
            Channel::Third => 2,
        }
    }

    /// Where the two other channels go when this one is held constant.
    pub fn axes(self) -> AxisAssignment {
        match self {
            Channel::First => AxisAssignment {
                horizontal: Channel::Second,
                vertical: Channel::Third,
            },
            Channel::Second => AxisAssignment {
                horizontal: Channel::First,
                vertical: Channel::Third,
            },
            Channel::Third => AxisAssignment {
                horizontal: Channel::First,
                vertical: Channel::Second,
            },
        }
    }
}

/// The varying channels of a generated grid.
///
/// `horizontal` increases with the column index, `vertical` with the row
/// index. The lower-indexed varying channel is always horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisAssignment {
    pub horizontal: Channel,
    pub vertical: Channel,
}
