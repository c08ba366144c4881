//! One sounding log drawn into one session.

use std::path::Path;

use crate::{
    core::{
        color::Aci,
        config::{ColumnRef, LayoutConfig, PanelConfig},
        constants::{AXIS_LAYER, AXIS_LAYER_SUFFIX, DEPTH_COLUMN},
        data::SoundingLog,
        error::GraphError,
        placement::Side,
        transform::Point,
    },
    render::{
        axis::{HorizontalAxis, VerticalAxis, render_horizontal_axis, render_vertical_axis},
        line::{LineStyle, render_line},
        raster::render_raster,
        session::Session,
        sink::DrawingSink,
    },
};

/// Draws graph lines, axes and raster of `log` into a sink.
///
/// The session (origin and extent) outlives any single call, so draw the
/// axes before the raster.
pub struct SoundingPlot<'a, L, S> {
    log: &'a L,
    session: Session<S>,
    line_color: Aci,
}

impl<'a, L: SoundingLog, S: DrawingSink> SoundingPlot<'a, L, S> {
    /// Draw `log` into `sink`, which may already hold other plots.
    pub fn new(log: &'a L, sink: S) -> Self {
        Self {
            log,
            session: Session::new(sink),
            line_color: Aci::default(),
        }
    }

    /// Colour of graph-line layers created from here on.
    #[must_use]
    pub fn with_line_color(mut self, color: Aci) -> Self {
        self.line_color = color;
        self
    }

    #[inline]
    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    #[inline]
    pub fn session_mut(&mut self) -> &mut Session<S> {
        &mut self.session
    }

    pub fn into_sink(self) -> S {
        self.session.into_sink()
    }

    /// Column number for `column`, checked against the log header.
    pub fn resolve(&self, column: ColumnRef) -> Result<usize, GraphError> {
        let number = match column {
            ColumnRef::Index(n) => n,
            ColumnRef::Quantity(qn) => self
                .log
                .qn2column(qn)
                .ok_or(GraphError::UnknownQuantity(qn))?,
        };
        self.log
            .column_info(number)
            .map(|c| c.number)
            .ok_or(GraphError::UnknownColumn(number))
    }

    fn column_name(&self, column: usize) -> Result<String, GraphError> {
        self.log
            .column_info(column)
            .map(|c| c.name.clone())
            .ok_or(GraphError::UnknownColumn(column))
    }

    /// Polyline of `column` against depth on the layer named after the column.
    pub fn draw_graph_line(
        &mut self,
        column: usize,
        value_factor: f64,
        depth_factor: f64,
        side: Side,
    ) -> Result<Vec<Point>, GraphError> {
        let layer = self.column_name(column)?;
        let style = LineStyle {
            color: self.line_color,
            ..LineStyle::new(value_factor, depth_factor, side)
        };
        let samples = self.log.data_iter(column, DEPTH_COLUMN);
        Ok(render_line(&mut self.session, samples, &style, &layer))
    }

    /// Depth axis down to the depth of the last scan.
    pub fn draw_vertical_axis(
        &mut self,
        depth_factor: f64,
        offset_value: f64,
        label_height: f64,
    ) -> Result<usize, GraphError> {
        let max_depth = self.log.max_depth().ok_or(GraphError::EmptyLog)?;
        let axis = VerticalAxis {
            max_depth,
            depth_factor,
            offset_value,
            label_height,
        };
        Ok(render_vertical_axis(&mut self.session, &axis, AXIS_LAYER))
    }

    /// Value axis of `panel` on the layer `"<column name> Axis"`.
    pub fn draw_horizontal_axis(
        &mut self,
        panel: &PanelConfig,
        depth_factor: f64,
        label_height: f64,
    ) -> Result<usize, GraphError> {
        let column = self.resolve(panel.column)?;
        let layer = self.column_name(column)? + AXIS_LAYER_SUFFIX;
        let axis = HorizontalAxis {
            max_value: panel.max_value,
            offset_value: panel.offset_value,
            value_factor: panel.value_factor,
            placement: panel.placement,
            depth_factor,
            // top axes never look at it
            max_depth: self.log.max_depth().unwrap_or(0.0),
            label_height,
        };
        Ok(render_horizontal_axis(&mut self.session, &axis, &layer))
    }

    /// Graph line plus value axis of one panel.
    pub fn draw_panel(
        &mut self,
        panel: &PanelConfig,
        depth_factor: f64,
        label_height: f64,
    ) -> Result<(), GraphError> {
        let column = self.resolve(panel.column)?;
        self.draw_graph_line(column, panel.value_factor, depth_factor, panel.placement.side)?;
        self.draw_horizontal_axis(panel, depth_factor, label_height)?;
        Ok(())
    }

    /// Grid over everything drawn since the origin was last set.
    pub fn draw_raster(&mut self, value_factor: f64, offset_value: f64) -> usize {
        render_raster(&mut self.session, value_factor, offset_value)
    }

    /// Full sheet: every panel, the depth axis, then the raster.
    pub fn draw_layout(&mut self, layout: &LayoutConfig) -> Result<(), GraphError> {
        layout.validate()?;
        self.set_base_of_origin(layout.origin);
        for panel in &layout.panels {
            self.draw_panel(panel, layout.depth_factor, layout.label_height)?;
        }
        self.draw_vertical_axis(layout.depth_factor, layout.depth_offset, layout.label_height)?;
        if let Some(r) = layout.raster {
            self.draw_raster(r.value_factor, r.offset_value);
        }
        let e = self.session.extent();
        log::info!(
            "{} panels drawn, {} x {} drawing units",
            layout.panels.len(),
            e.width(),
            e.height()
        );
        Ok(())
    }

    pub fn set_base_of_origin(&mut self, origin: Point) {
        self.session.set_base_of_origin(origin);
    }

    pub fn save(&self, path: &Path) -> Result<(), GraphError> {
        Ok(self.session.save(path)?)
    }
}
