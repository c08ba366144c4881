//! Public-facing crate root: re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

use std::path::Path;

pub use crate::core::{
    bounds::Extent,
    color::{Aci, ColorError},
    config::{ColumnRef, LayoutConfig, PanelConfig, PanelConfigBuilder, RasterConfig},
    data::{Sample, SoundingLog},
    error::{ConfigError, GraphError},
    gef::{GefLog, ParseGefError, read_gef, read_gef_from_path},
    placement::{Anchor, Level, Placement, Side},
    range::decimal_range,
    transform::{CoordinateTransform, Point},
};

pub use render::{Drawing, DrawingSink, Session, SoundingPlot};

/// Convenience function: read one GEF file, draw `layout` and write the
/// result as DXF to `output`.
pub fn plot_gef(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    layout: &LayoutConfig,
) -> Result<Drawing, GraphError> {
    let log = read_gef_from_path(input)?;
    let mut plot = SoundingPlot::new(&log, Drawing::new());
    plot.draw_layout(layout)?;
    plot.save(output.as_ref())?;
    Ok(plot.into_sink())
}
