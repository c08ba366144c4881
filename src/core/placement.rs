//! Which quadrant a graph or axis lives in, and how its labels hang.
//!
//! The layout is a fixed 2×2 matrix: left or right of the central depth axis,
//! at the top (surface) or at the bottom (final depth) of the log. Every
//! combination is valid, so label anchoring is a plain exhaustive match.

use std::fmt;

/// Horizontal side of the central depth axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    #[default]
    Right,
}

impl Side {
    /// `-1.0` on the left, `1.0` on the right.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_left(place_left: bool) -> Self {
        if place_left { Self::Left } else { Self::Right }
    }
}

/// Vertical position of a horizontal axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Level {
    #[default]
    Top,
    Bottom,
}

impl Level {
    #[inline]
    #[must_use]
    pub const fn from_bottom(place_bottom: bool) -> Self {
        if place_bottom { Self::Bottom } else { Self::Top }
    }
}

/// Text alignment relative to the insertion point.
///
/// `TopLeft` means the insertion point is the top-left corner of the text box,
/// so the text hangs below and to the right of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TopLeft => "TOP_LEFT",
            Self::TopRight => "TOP_RIGHT",
            Self::BottomLeft => "BOTTOM_LEFT",
            Self::BottomRight => "BOTTOM_RIGHT",
        })
    }
}

/// One cell of the left/right × top/bottom layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    pub side: Side,
    pub level: Level,
}

impl Placement {
    #[inline]
    #[must_use]
    pub const fn new(side: Side, level: Level) -> Self {
        Self { side, level }
    }

    #[inline]
    #[must_use]
    pub const fn from_flags(place_left: bool, place_bottom: bool) -> Self {
        Self::new(Side::from_left(place_left), Level::from_bottom(place_bottom))
    }

    /// Anchor for the tick labels of a horizontal axis in this cell.
    ///
    /// Labels grow away from the graph: above a top axis, below a bottom one,
    /// and outward from the central depth axis.
    #[must_use]
    pub const fn anchor(self) -> Anchor {
        match (self.side, self.level) {
            (Side::Right, Level::Top) => Anchor::BottomLeft,
            (Side::Right, Level::Bottom) => Anchor::TopLeft,
            (Side::Left, Level::Top) => Anchor::BottomRight,
            (Side::Left, Level::Bottom) => Anchor::TopRight,
        }
    }
}

/// Resolve the label anchor for a flag pair.
#[inline]
#[must_use]
pub const fn resolve_alignment(place_left: bool, place_bottom: bool) -> Anchor {
    Placement::from_flags(place_left, place_bottom).anchor()
}

/// Text shown for a tick at `value`.
///
/// Left-side ticks sit at negative offsets but read as magnitudes, so a tick
/// drawn 30 units to the left is labelled "30".
#[must_use]
pub fn label_text(value: f64, side: Side) -> String {
    match side {
        Side::Left => format!("{}", value.abs()),
        Side::Right => format!("{value}"),
    }
}
