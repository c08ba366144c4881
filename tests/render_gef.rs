use std::path::{Path, PathBuf};

use sounding_graph::{
    ColumnRef, Drawing, DrawingSink, GefLog, GraphError, LayoutConfig, Point, SoundingLog,
    SoundingPlot, plot_gef, read_gef_from_path,
    render::Entity,
};

const FIXTURE: &str = "tests/data/cpt-01.gef";

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(FIXTURE)
}

fn cpt_sheet() -> Drawing {
    let log = read_gef_from_path(fixture()).unwrap();
    let mut plot = SoundingPlot::new(&log, Drawing::new());
    plot.draw_layout(&LayoutConfig::cpt_default()).unwrap();
    plot.into_sink()
}

#[test]
fn fixture_header() {
    let log = read_gef_from_path(fixture()).unwrap();
    assert_eq!(log.nr_scans(), 8);
    assert_eq!(log.max_depth(), Some(3.4));
    assert_eq!(log.header("TESTID"), Some("CPT-01"));
    assert_eq!(log.qn2column(6), Some(5));
    assert_eq!(log.data(2, 4), None);
}

#[test]
fn cpt_sheet_layers() {
    let d = cpt_sheet();
    let mut names: Vec<&str> = d.layers().iter().map(|l| l.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "0",
            "Axis",
            "Raster",
            "cone resistance",
            "cone resistance Axis",
            "friction ratio",
            "friction ratio Axis",
            "local friction",
            "local friction Axis",
            "pore pressure u2",
            "pore pressure u2 Axis",
        ]
    );
}

#[test]
fn cpt_sheet_geometry() {
    let d = cpt_sheet();

    // one polyline per panel, one vertex per scan
    let polylines: Vec<usize> = d
        .entities()
        .iter()
        .filter_map(|e| match e {
            Entity::Polyline { points, .. } => Some(points.len()),
            _ => None,
        })
        .collect();
    assert_eq!(polylines, vec![8; 4]);

    // cone resistance: 30 MPa at 0.4 units/MPa, 7 labels
    assert_eq!(d.entities_on("cone resistance Axis").count(), 1 + 7);
    // depth axis: 0, 1, 2, 3
    assert_eq!(d.entities_on("Axis").count(), 1 + 4);
    // 3 horizontal, 11 left, 11 right
    assert_eq!(d.entities_on("Raster").count(), 25);

    let (lo, hi) = d.bounds().unwrap();
    assert_eq!(lo, Point::new(-12.0, -3.4));
    assert_eq!(hi, Point::new(12.0, 0.0));
}

#[test]
fn voids_hold_previous_value() {
    let d = cpt_sheet();
    let Some(Entity::Polyline { points, .. }) = d
        .entities_on("cone resistance")
        .next()
    else {
        panic!("no cone resistance line");
    };
    // scan 4 is void: x stays at 3.4 MPa * 0.4, mirrored left
    assert!((points[3].x - points[2].x).abs() < 1e-12);
    assert!((points[2].x + 3.4 * 0.4).abs() < 1e-12);
    assert!((points[3].y + 1.5).abs() < 1e-12);
}

#[test]
fn two_logs_share_one_drawing() {
    let log = read_gef_from_path(fixture()).unwrap();
    let mut layout = LayoutConfig::cpt_default();
    let mut first = SoundingPlot::new(&log, Drawing::new());
    first.draw_layout(&layout).unwrap();

    layout.origin = Point::new(40.0, 0.0);
    let mut second = SoundingPlot::new(&log, first.into_sink());
    second.draw_layout(&layout).unwrap();
    let e = second.session().extent();
    assert_eq!((e.x_left, e.x_right), (28.0, 52.0));

    let d = second.into_sink();
    assert_eq!(d.layers().len(), 11);
    assert_eq!(d.entities_on("Raster").count(), 50);
}

#[test]
fn unknown_column_is_reported() {
    let log = GefLog::parse("#COLUMN= 2\n#COLUMNINFO= 1, m, depth, 1\n#COLUMNINFO= 2, MPa, qc, 2\n#EOH=\n0 1\n")
        .unwrap();
    let mut plot = SoundingPlot::new(&log, Drawing::new());
    let err = plot
        .draw_panel(
            &sounding_graph::PanelConfig::builder(ColumnRef::Index(7))
                .max_value(1.0)
                .offset_value(1.0)
                .build()
                .unwrap(),
            1.0,
            0.2,
        )
        .unwrap_err();
    assert!(matches!(err, GraphError::UnknownColumn(7)));
    assert!(!plot.session().sink().layer_exists("qc"));
}

#[test]
fn plot_gef_writes_dxf() {
    let out = std::env::temp_dir().join(format!("sounding-graph-{}.dxf", std::process::id()));
    let d = plot_gef(fixture(), &out, &LayoutConfig::cpt_default()).unwrap();
    let text = std::fs::read_to_string(&out).unwrap();
    std::fs::remove_file(&out).unwrap();

    assert_eq!(text, d.to_dxf().unwrap());
    assert!(text.starts_with("  0\nSECTION\n  2\nHEADER\n"));
    assert!(text.ends_with("  0\nEOF\n"));
    assert!(text.contains("\n  2\nRaster\n 70\n0\n 62\n1\n"));
    assert_eq!(text.matches("\nPOLYLINE\n").count(), 4);
    // R12 layer names carry no spaces
    assert!(text.contains("\n  2\ncone_resistance_Axis\n"));
    assert!(text.contains("\n  8\npore_pressure_u2\n"));
    assert!(!text.contains("\ncone resistance"));
}

#[test]
fn missing_input_is_an_error() {
    let err = plot_gef("does/not/exist.gef", "out.dxf", &LayoutConfig::cpt_default()).unwrap_err();
    assert!(matches!(err, GraphError::Gef(_)));
    assert!(!Path::new("out.dxf").exists());
}
