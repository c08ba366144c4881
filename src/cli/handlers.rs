use std::time::Instant;

use crate::{
    core::{
        color::Aci,
        config::{LayoutConfig, RasterConfig},
        data::SoundingLog,
        error::GraphError,
        gef::read_gef_from_path,
    },
    render::{Drawing, SoundingPlot},
};

use super::parse::{ColumnsArgs, RenderArgs};

/// Layout from the command line; no `--panel` means the CPT sheet.
fn layout(a: &RenderArgs) -> LayoutConfig {
    let mut layout = LayoutConfig::cpt_default();
    if !a.panels.is_empty() {
        layout.panels.clone_from(&a.panels);
    }
    layout.depth_factor = a.depth_factor;
    layout.depth_offset = a.depth_step;
    layout.label_height = a.label_height;
    layout.origin = a.origin;
    layout.raster = (!a.no_raster).then_some(RasterConfig {
        value_factor: a.raster_factor,
        offset_value: a.raster_step,
    });
    layout
}

pub fn render(a: &RenderArgs) -> Result<(), GraphError> {
    let t_ingest = Instant::now();
    let log = read_gef_from_path(&a.file)?;
    log::debug!(
        "GEF ingest: {} µs ({} scans)",
        t_ingest.elapsed().as_micros(),
        log.nr_scans()
    );

    let layout = layout(a);
    let mut plot = SoundingPlot::new(&log, Drawing::new()).with_line_color(a.line_color);
    plot.draw_layout(&layout)?;

    let output = a
        .output
        .clone()
        .unwrap_or_else(|| a.file.with_extension("dxf"));
    plot.save(&output)?;
    log::info!("{} -> {}", a.file.display(), output.display());
    Ok(())
}

/// Column table: number, quantity, unit and name.
pub fn columns(a: &ColumnsArgs) -> Result<(), GraphError> {
    let log = read_gef_from_path(&a.file)?;
    println!("{:>3}  {:>3}  {:<8} name", "col", "qn", "unit");
    for c in log.columns() {
        let qn = c.quantity.map_or_else(|| "-".to_owned(), |q| q.to_string());
        println!("{:>3}  {qn:>3}  {:<8} {}", c.number, c.unit, c.name);
    }
    println!(
        "\n{} scans, final depth {}",
        log.nr_scans(),
        log.max_depth().map_or_else(|| "-".to_owned(), |d| d.to_string())
    );
    Ok(())
}

/// Named layer colours; any index 1..=255 is accepted too.
pub fn colors() {
    println!("\nPossible colours:");
    for (name, c) in Aci::NAMED {
        println!("{:>3}  {name}", c.index());
    }
    println!("  or any ACI number 1..=255\n");
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "sounding-graph";
    println!(
        "
Example invocations
-------------------
• CPT sheet         : {bin} render CPT-01.gef
• Explicit output   : {bin} render CPT-01.gef -o sheet.dxf
• Inspect columns   : {bin} columns CPT-01.gef
• Custom panels     : {bin} render CPT-01.gef -p q2:30:5:0.4:left -p q4:12:2:1:right
• Column by number  : {bin} render CPT-01.gef -p 3:0.5:0.1:20:left:bottom
• Stretched depth   : {bin} render CPT-01.gef --depth-factor 2 --depth-step 0.5
• Tiled next to one : {bin} render CPT-02.gef --origin 40,0
• No raster         : {bin} render CPT-01.gef --no-raster
• Debug mode        : {bin} --debug render CPT-01.gef
"
    );
}
