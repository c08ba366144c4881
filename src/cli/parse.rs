use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::{color::Aci, config::PanelConfig, transform::Point};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "sounding-graph",
    version,
    about = "Render GEF sounding logs as DXF drawings"
)]
pub struct Cli {
    /// Log every drawing step to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Draw a GEF file to DXF
    Render(RenderArgs),
    /// List the columns of a GEF file
    Columns(ColumnsArgs),
    /// Show colour names accepted by `--line-color`
    Colors,
    /// Print example invocations
    Examples,
}

/// `sounding-graph render …`
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// GEF input file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// DXF output (defaults to FILE with a `.dxf` extension)
    #[arg(short, long, value_name = "DXF")]
    pub output: Option<PathBuf>,

    /// Panel `COL:MAX:STEP:FACTOR[:left|right][:top|bottom]`, `COL` being a
    /// column number or `qN` for a quantity number. Repeatable; the standard
    /// four-panel CPT sheet is drawn if omitted
    #[arg(short, long = "panel", value_name = "SPEC")]
    pub panels: Vec<PanelConfig>,

    /// Drawing units per metre of depth
    #[arg(long, default_value_t = 1.0)]
    pub depth_factor: f64,

    /// Spacing of the depth labels
    #[arg(long, default_value_t = 1.0)]
    pub depth_step: f64,

    #[arg(long, default_value_t = crate::core::constants::DEFAULT_LABEL_HEIGHT)]
    pub label_height: f64,

    /// Raster spacing in value units
    #[arg(long, default_value_t = 1.0)]
    pub raster_step: f64,

    /// Value factor applied to the raster spacing
    #[arg(long, default_value_t = 1.0)]
    pub raster_factor: f64,

    /// Skip the background raster
    #[arg(long)]
    pub no_raster: bool,

    /// Base of the graph as `X,Y`
    #[arg(long, value_name = "X,Y", value_parser = parse_point, default_value = "0,0")]
    pub origin: Point,

    /// Colour of newly created graph-line layers (name or ACI number)
    #[arg(long, default_value = "white")]
    pub line_color: Aci,
}

/// `sounding-graph columns …`
#[derive(Args, Debug)]
pub struct ColumnsArgs {
    /// GEF input file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got `{s}`"))?;
    let num = |t: &str| {
        t.trim()
            .parse::<f64>()
            .map_err(|e| format!("`{t}`: {e}"))
    };
    Ok(Point::new(num(x)?, num(y)?))
}
