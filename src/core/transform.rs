//! Sample space to drawing space.
//!
//! Depth is always drawn downward (negative y); values are mirrored onto the
//! left of the depth axis when the graph is placed there. Everything is
//! relative to the session origin so several logs can share one drawing.

use crate::core::placement::Side;

/// A point in drawing units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Scale factors, side and origin for one renderer call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateTransform {
    pub depth_factor: f64,
    pub value_factor: f64,
    pub side: Side,
    pub origin: Point,
}

impl CoordinateTransform {
    #[inline]
    #[must_use]
    pub const fn new(depth_factor: f64, value_factor: f64, side: Side, origin: Point) -> Self {
        Self {
            depth_factor,
            value_factor,
            side,
            origin,
        }
    }

    /// Drawing-space y of a depth. Underground is negative.
    #[inline]
    #[must_use]
    pub fn depth_y(&self, depth: f64) -> f64 {
        self.origin.y + depth * -self.depth_factor
    }

    /// Drawing-space x of a value.
    #[inline]
    #[must_use]
    pub fn value_x(&self, value: f64) -> f64 {
        self.origin.x + value * self.value_factor * self.side.sign()
    }

    /// Map one `(depth, value)` sample. NaN and infinities pass straight through.
    #[inline]
    #[must_use]
    pub fn apply(&self, depth: f64, value: f64) -> Point {
        Point::new(self.value_x(value), self.depth_y(depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_sign_follows_side_depth_always_negated() {
        let right = CoordinateTransform::new(1.0, 4.0, Side::Right, Point::ORIGIN);
        let left = CoordinateTransform { side: Side::Left, ..right };

        assert_eq!(right.apply(2.0, 3.0), Point::new(12.0, -2.0));
        assert_eq!(left.apply(2.0, 3.0), Point::new(-12.0, -2.0));
    }

    #[test]
    fn depth_factor_scales_y() {
        let t = CoordinateTransform::new(2.5, 1.0, Side::Right, Point::ORIGIN);
        assert_eq!(t.apply(4.0, 0.0), Point::new(0.0, -10.0));
    }

    #[test]
    fn origin_offsets_both_axes() {
        let t = CoordinateTransform::new(1.0, 2.0, Side::Left, Point::new(100.0, 50.0));
        assert_eq!(t.apply(10.0, 5.0), Point::new(90.0, 40.0));
    }

    #[test]
    fn nan_is_not_filtered() {
        let t = CoordinateTransform::new(1.0, 1.0, Side::Right, Point::ORIGIN);
        assert!(t.apply(1.0, f64::NAN).x.is_nan());
    }
}
