pub mod axis;
pub mod drawing;
pub mod dxf;
pub mod line;
pub mod plot;
pub mod raster;
pub mod session;
pub mod sink;

pub use axis::{HorizontalAxis, VerticalAxis, render_horizontal_axis, render_vertical_axis};
pub use drawing::{Drawing, Entity, Layer, Text};
pub use dxf::write_dxf;
pub use line::{LineStyle, render_line};
pub use plot::SoundingPlot;
pub use raster::render_raster;
pub use session::Session;
pub use sink::{DrawingSink, TextHandle};
