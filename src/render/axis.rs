//! Axis lines with fixed-point tick labels.
//!
//! The vertical (depth) axis stops its labels strictly before `max_depth`;
//! horizontal (value) axes run their range one step further so the end of the
//! axis carries a label too.

use crate::{
    core::{
        color::Aci,
        placement::{Anchor, Level, Placement, Side, label_text},
        range::decimal_range,
        transform::{CoordinateTransform, Point},
    },
    render::{
        session::Session,
        sink::{DrawingSink, ensure_layer, place_text},
    },
};

/// Central depth axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalAxis {
    pub max_depth: f64,
    pub depth_factor: f64,
    /// Spacing between depth labels.
    pub offset_value: f64,
    pub label_height: f64,
}

/// Value axis of one graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalAxis {
    pub max_value: f64,
    pub offset_value: f64,
    pub value_factor: f64,
    pub placement: Placement,
    pub depth_factor: f64,
    /// Depth of the last scan; only used for bottom axes.
    pub max_depth: f64,
    pub label_height: f64,
}

/// Draw the depth axis from the origin down to `max_depth`.
///
/// Labels hang top-left of their tick whatever the placement of the graphs.
/// Returns the number of labels.
pub fn render_vertical_axis<S: DrawingSink>(
    session: &mut Session<S>,
    axis: &VerticalAxis,
    layer: &str,
) -> usize {
    let origin = session.origin();
    let t = CoordinateTransform::new(axis.depth_factor, 1.0, Side::Right, origin);
    let end = Point::new(origin.x, t.depth_y(axis.max_depth));

    let sink = session.sink_mut();
    ensure_layer(sink, layer, Aci::default());
    sink.add_line(origin, end, layer);

    let mut labels = 0;
    for depth in decimal_range(0.0, axis.max_depth, axis.offset_value) {
        let at = Point::new(origin.x, t.depth_y(depth));
        place_text(
            sink,
            &label_text(depth, Side::Right),
            layer,
            axis.label_height,
            at,
            Anchor::TopLeft,
        );
        labels += 1;
    }
    if labels == 0 {
        log::warn!(
            "depth axis: no labels between 0 and {} at spacing {}",
            axis.max_depth,
            axis.offset_value
        );
    }

    session.fold_extent(|e| e.extend_y_bottom(end.y));
    log::debug!("depth axis: {labels} labels, extent {:?}", session.extent());
    labels
}

/// Draw a value axis at the top or bottom of the graph, left or right of the
/// depth axis. Returns the number of labels.
pub fn render_horizontal_axis<S: DrawingSink>(
    session: &mut Session<S>,
    axis: &HorizontalAxis,
    layer: &str,
) -> usize {
    let origin = session.origin();
    let Placement { side, level } = axis.placement;
    // values arrive signed, so the transform itself never mirrors
    let t = CoordinateTransform::new(axis.depth_factor, axis.value_factor, Side::Right, origin);

    let max_value = axis.max_value * side.sign();
    let offset_value = axis.offset_value * side.sign();
    let y = match level {
        Level::Top => origin.y,
        Level::Bottom => t.depth_y(axis.max_depth),
    };
    let start = Point::new(origin.x, y);
    let end = Point::new(t.value_x(max_value), y);
    let anchor = axis.placement.anchor();

    let sink = session.sink_mut();
    ensure_layer(sink, layer, Aci::default());
    sink.add_line(start, end, layer);

    let mut labels = 0;
    for value in decimal_range(0.0, max_value + offset_value, offset_value) {
        let at = Point::new(t.value_x(value), y);
        place_text(
            sink,
            &label_text(value, side),
            layer,
            axis.label_height,
            at,
            anchor,
        );
        labels += 1;
    }
    if labels == 0 {
        log::warn!(
            "axis `{layer}`: no labels up to {} at spacing {}",
            axis.max_value,
            axis.offset_value
        );
    }

    let label_height = axis.label_height;
    session.fold_extent(|e| {
        let e = match side {
            Side::Left => e.extend_x_left(end.x),
            Side::Right => e.extend_x_right(end.x),
        };
        match level {
            // labels stand on top of the line
            Level::Top => e.extend_y_top(y + label_height),
            Level::Bottom => e,
        }
    });
    log::debug!("axis `{layer}`: {labels} labels, extent {:?}", session.extent());
    labels
}
