//! One drawing session: the sink plus the origin and extent shared by every
//! renderer call that draws into it.

use std::{io, path::Path};

use crate::{
    core::{bounds::Extent, transform::Point},
    render::sink::DrawingSink,
};

pub struct Session<S> {
    sink: S,
    origin: Point,
    extent: Extent,
}

impl<S: DrawingSink> Session<S> {
    /// Start at origin `(0, 0)`. `sink` may already hold entities.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            origin: Point::ORIGIN,
            extent: Extent::default(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Move the graph base to `origin`; the extent collapses onto it.
    ///
    /// Lets several logs be tiled into one drawing: relocate, draw, relocate.
    pub fn set_base_of_origin(&mut self, origin: Point) {
        log::debug!("origin moved to ({}, {})", origin.x, origin.y);
        self.origin = origin;
        self.extent.reset(origin);
    }

    /// Grow the extent; `f` receives the current box and returns the new one.
    pub(crate) fn fold_extent(&mut self, f: impl FnOnce(Extent) -> Extent) {
        self.extent = f(self.extent);
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        self.sink.save(path)
    }
}
