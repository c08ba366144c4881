//! Graph line: one polyline per log column.

use crate::{
    core::{
        color::Aci,
        data::{ForwardFillExt, Sample},
        placement::Side,
        transform::{CoordinateTransform, Point},
    },
    render::{
        session::Session,
        sink::{DrawingSink, ensure_layer},
    },
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub value_factor: f64,
    pub depth_factor: f64,
    pub side: Side,
    /// Colour given to the layer if it has to be created.
    pub color: Aci,
}

impl LineStyle {
    #[must_use]
    pub fn new(value_factor: f64, depth_factor: f64, side: Side) -> Self {
        Self {
            value_factor,
            depth_factor,
            side,
            color: Aci::default(),
        }
    }
}

/// Draw `samples` as one connected polyline on `layer` and return its points.
///
/// The samples are consumed in a single pass. Void values repeat the previous
/// value (zero before the first one). An empty series draws nothing.
pub fn render_line<S, I>(
    session: &mut Session<S>,
    samples: I,
    style: &LineStyle,
    layer: &str,
) -> Vec<Point>
where
    S: DrawingSink,
    I: IntoIterator<Item = Sample>,
{
    let t = CoordinateTransform::new(
        style.depth_factor,
        style.value_factor,
        style.side,
        session.origin(),
    );
    let points: Vec<Point> = samples
        .into_iter()
        .forward_fill()
        .map(|(depth, value)| t.apply(depth, value))
        .collect();

    let sink = session.sink_mut();
    ensure_layer(sink, layer, style.color);
    if points.is_empty() {
        log::warn!("no samples for layer `{layer}`, nothing drawn");
    } else {
        sink.add_polyline(&points, layer);
        log::debug!("layer `{layer}`: polyline of {} points", points.len());
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::drawing::{Drawing, Entity};

    fn samples(raw: &[(f64, Option<f64>)]) -> Vec<Sample> {
        raw.iter().copied().map(Sample::from).collect()
    }

    #[test]
    fn forward_filled_and_scaled() {
        let mut s = Session::new(Drawing::new());
        let style = LineStyle::new(2.0, 1.0, Side::Right);
        let pts = render_line(
            &mut s,
            samples(&[(0.0, Some(10.0)), (1.0, Some(12.0)), (2.0, None)]),
            &style,
            "cone resistance",
        );
        let want = vec![
            Point::new(20.0, 0.0),
            Point::new(24.0, -1.0),
            Point::new(24.0, -2.0),
        ];
        assert_eq!(pts, want);

        let d = s.into_sink();
        assert!(d.layer_exists("cone resistance"));
        assert_eq!(
            d.entities(),
            &[Entity::Polyline {
                points: want,
                layer: "cone resistance".into()
            }]
        );
    }

    #[test]
    fn left_side_mirrors_and_origin_offsets() {
        let mut s = Session::new(Drawing::new());
        s.set_base_of_origin(Point::new(100.0, 10.0));
        let style = LineStyle::new(1.0, 2.0, Side::Left);
        let pts = render_line(
            &mut s,
            samples(&[(1.0, Some(5.0)), (2.0, None), (3.0, None)]),
            &style,
            "friction",
        );
        assert_eq!(
            pts,
            vec![
                Point::new(95.0, 8.0),
                Point::new(95.0, 6.0),
                Point::new(95.0, 4.0),
            ]
        );
    }

    #[test]
    fn empty_series_creates_layer_only() {
        let mut s = Session::new(Drawing::new());
        let pts = render_line(&mut s, Vec::<Sample>::new(), &LineStyle::new(1.0, 1.0, Side::Right), "empty");
        assert!(pts.is_empty());
        let d = s.into_sink();
        assert!(d.layer_exists("empty"));
        assert!(d.entities().is_empty());
    }

    #[test]
    fn existing_layer_keeps_its_colour() {
        let mut d = Drawing::new();
        d.create_layer("friction", Aci::BLUE);
        let mut s = Session::new(d);
        let style = LineStyle {
            color: Aci::GREEN,
            ..LineStyle::new(1.0, 1.0, Side::Right)
        };
        render_line(&mut s, samples(&[(0.0, Some(1.0))]), &style, "friction");
        let d = s.into_sink();
        assert_eq!(d.layer("friction").map(|l| l.color), Some(Aci::BLUE));
        assert_eq!(d.layers().len(), 2); // "0" + friction
    }
}
