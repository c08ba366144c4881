//! Read-only view on a sounding log plus the sample stream it yields.

use crate::core::constants::DEPTH_COLUMN;

/// One scan of one column.  `value` is `None` where the log holds a void.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub depth: f64,
    pub value: Option<f64>,
}

impl Sample {
    #[inline]
    #[must_use]
    pub const fn new(depth: f64, value: Option<f64>) -> Self {
        Self { depth, value }
    }
}

impl From<(f64, Option<f64>)> for Sample {
    #[inline]
    fn from((depth, value): (f64, Option<f64>)) -> Self {
        Self::new(depth, value)
    }
}

/// Column description from the log header.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnInfo {
    /// 1-based column number.
    pub number: usize,
    pub unit: String,
    pub name: String,
    /// Standardised quantity number, e.g. 2 for cone resistance.
    pub quantity: Option<u32>,
}

/// Accessor over a parsed sounding log.
///
/// Columns and scans are 1-based.
pub trait SoundingLog {
    fn column_info(&self, column: usize) -> Option<&ColumnInfo>;

    /// Single forward pass over `(depth, value)` pairs of `column`.
    fn data_iter(&self, column: usize, depth_column: usize) -> impl Iterator<Item = Sample> + '_;

    fn data(&self, column: usize, scan: usize) -> Option<f64>;

    fn nr_scans(&self) -> usize;

    /// Column holding quantity number `quantity`, if any.
    fn qn2column(&self, quantity: u32) -> Option<usize>;

    /// Depth of the last scan.
    fn max_depth(&self) -> Option<f64> {
        self.data(DEPTH_COLUMN, self.nr_scans())
    }
}

/// Replaces void values with the last value seen, zero before the first one.
#[derive(Clone, Debug)]
pub struct ForwardFill<I> {
    inner: I,
    last: f64,
}

impl<I> ForwardFill<I> {
    pub fn new(inner: I) -> Self {
        Self { inner, last: 0.0 }
    }
}

impl<I: Iterator<Item = Sample>> Iterator for ForwardFill<I> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.inner.next()?;
        if let Some(v) = s.value {
            self.last = v;
        }
        Some((s.depth, self.last))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Extension to call `.forward_fill()` on any sample iterator.
pub trait ForwardFillExt: Iterator<Item = Sample> + Sized {
    fn forward_fill(self) -> ForwardFill<Self> {
        ForwardFill::new(self)
    }
}

impl<I: Iterator<Item = Sample>> ForwardFillExt for I {}
