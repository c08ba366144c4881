//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod gef;
pub mod placement;
pub mod range;
pub mod transform;

// re-export frequently-used items for convenience
pub use bounds::Extent;
pub use color::{Aci, ColorError};
pub use config::{ColumnRef, LayoutConfig, PanelConfig, PanelConfigBuilder, RasterConfig};
pub use constants::{AXIS_LAYER, DEFAULT_LABEL_HEIGHT, RASTER_LAYER};
pub use data::{ColumnInfo, Sample, SoundingLog};
pub use error::{ConfigError, GraphError};
pub use gef::{GefLog, ParseGefError};
pub use placement::{Anchor, Level, Placement, Side};
pub use range::{DecimalRange, decimal_range};
pub use transform::{CoordinateTransform, Point};
