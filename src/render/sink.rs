//! Entity-creation interface of the output drawing.

use std::{io, path::Path};

use crate::core::{color::Aci, placement::Anchor, transform::Point};

/// Refers to a text entity created by [`DrawingSink::add_text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextHandle(pub usize);

/// Where renderers put their primitives.
pub trait DrawingSink {
    fn layer_exists(&self, name: &str) -> bool;

    fn create_layer(&mut self, name: &str, color: Aci);

    fn add_polyline(&mut self, points: &[Point], layer: &str);

    fn add_line(&mut self, start: Point, end: Point, layer: &str);

    /// Create a text entity; its position is set separately.
    fn add_text(&mut self, value: &str, layer: &str, height: f64) -> TextHandle;

    fn set_text_position(&mut self, text: TextHandle, position: Point, anchor: Anchor);

    fn save(&self, path: &Path) -> io::Result<()>;
}

/// Create `name` unless it already exists.
pub fn ensure_layer<S: DrawingSink + ?Sized>(sink: &mut S, name: &str, color: Aci) {
    if !sink.layer_exists(name) {
        log::debug!("creating layer `{name}` ({color})");
        sink.create_layer(name, color);
    }
}

/// Add a positioned text in one go.
pub fn place_text<S: DrawingSink + ?Sized>(
    sink: &mut S,
    value: &str,
    layer: &str,
    height: f64,
    position: Point,
    anchor: Anchor,
) {
    let t = sink.add_text(value, layer, height);
    sink.set_text_position(t, position, anchor);
}
