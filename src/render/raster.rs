//! Background grid sized by the accumulated extent.
//!
//! Must run after every axis has been drawn: it only sees the extent as it is
//! at the time of the call.

use crate::{
    core::{
        color::Aci,
        constants::RASTER_LAYER,
        range::decimal_range,
        transform::Point,
    },
    render::{
        session::Session,
        sink::{DrawingSink, ensure_layer},
    },
};

/// Draw the grid at a spacing of `value_factor * offset_value` drawing units.
///
/// Grid lines start one step away from the origin; the origin itself is
/// covered by the axes. Horizontal lines span the full width of the extent,
/// vertical lines run from the origin down to the bottom edge. Returns the
/// number of lines drawn.
pub fn render_raster<S: DrawingSink>(
    session: &mut Session<S>,
    value_factor: f64,
    offset_value: f64,
) -> usize {
    let step = value_factor * offset_value;
    let origin = session.origin();
    let e = session.extent();

    let sink = session.sink_mut();
    ensure_layer(sink, RASTER_LAYER, Aci::RED);

    // offsets stay on the decimal grid, the origin itself need not
    let mut lines = 0;
    for dy in decimal_range(0.0, e.y_bottom - origin.y, -step).skip(1) {
        let y = origin.y + dy;
        sink.add_line(Point::new(e.x_left, y), Point::new(e.x_right, y), RASTER_LAYER);
        lines += 1;
    }

    let left = decimal_range(0.0, e.x_left - origin.x, -step).skip(1);
    let right = decimal_range(0.0, e.x_right - origin.x, step).skip(1);
    for dx in left.chain(right) {
        let x = origin.x + dx;
        sink.add_line(Point::new(x, origin.y), Point::new(x, e.y_bottom), RASTER_LAYER);
        lines += 1;
    }

    log::debug!("raster: {lines} lines at spacing {step}");
    lines
}
