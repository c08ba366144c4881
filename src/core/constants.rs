//! A collection of constants.

/// Tick and raster values live on a 1/100 grid.
///
/// 0.125 becomes 0.12
pub const DECIMAL_SCALE: f64 = 100.0;

/// Text height of axis labels in drawing units.
pub const DEFAULT_LABEL_HEIGHT: f64 = 0.2;

/// GEF column holding the penetration length (depth). Columns are 1-based.
pub const DEPTH_COLUMN: usize = 1;

/// Layer of the central depth axis.
pub const AXIS_LAYER: &str = "Axis";
/// Layer of the background raster.
pub const RASTER_LAYER: &str = "Raster";
/// Appended to a column name to form the layer of its value axis.
pub const AXIS_LAYER_SUFFIX: &str = " Axis";
