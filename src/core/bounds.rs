//! Bounding extent of everything drawn in one session.

use crate::core::transform::Point;

/// Grow-only bounding box.
///
/// * Every edge starts at the session origin, not at zero, so graphs placed
///   away from `(0, 0)` get a box around themselves.
/// * `extend_*` only ever moves an edge outward. A value that would shrink
///   the box is ignored.
/// * Depth grows downward, so the bottom edge moves toward negative y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

impl Extent {
    /// Zero-size box at `origin`.
    #[inline]
    #[must_use]
    pub const fn at(origin: Point) -> Self {
        Self {
            x_left: origin.x,
            x_right: origin.x,
            y_top: origin.y,
            y_bottom: origin.y,
        }
    }

    /// Collapse back onto `origin`. Used when relocating a whole graph.
    #[inline]
    pub fn reset(&mut self, origin: Point) {
        *self = Self::at(origin);
    }

    #[inline]
    #[must_use]
    pub fn extend_x_left(self, x: f64) -> Self {
        if x < self.x_left {
            Self { x_left: x, ..self }
        } else {
            self
        }
    }

    #[inline]
    #[must_use]
    pub fn extend_x_right(self, x: f64) -> Self {
        if x > self.x_right {
            Self { x_right: x, ..self }
        } else {
            self
        }
    }

    #[inline]
    #[must_use]
    pub fn extend_y_top(self, y: f64) -> Self {
        if y > self.y_top {
            Self { y_top: y, ..self }
        } else {
            self
        }
    }

    #[inline]
    #[must_use]
    pub fn extend_y_bottom(self, y: f64) -> Self {
        if y < self.y_bottom {
            Self { y_bottom: y, ..self }
        } else {
            self
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_right - self.x_left
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_top - self.y_bottom
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::at(Point::ORIGIN)
    }
}
