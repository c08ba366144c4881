//! ASCII DXF (R12) writer.
//!
//! Only the sections a viewer needs: HEADER with version and extents, the
//! LTYPE and LAYER tables, and ENTITIES.
//!
//! R12 symbol names only allow letters, digits, `$`, `-` and `_`. Layer names
//! are rewritten on output; the in-memory [`Drawing`] keeps them as given.

use std::{
    borrow::Cow,
    io::{self, Write},
};

use crate::{
    core::{placement::Anchor, transform::Point},
    render::drawing::{Drawing, Entity, Layer, Text},
};

const VERSION: &str = "AC1009";
const LINETYPE: &str = "CONTINUOUS";

/// Horizontal (72) and vertical (73) text justification codes.
fn justification(anchor: Anchor) -> (u8, u8) {
    match anchor {
        Anchor::TopLeft => (0, 3),
        Anchor::TopRight => (2, 3),
        Anchor::BottomLeft => (0, 1),
        Anchor::BottomRight => (2, 1),
    }
}

#[inline]
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '$' | '-' | '_')
}

/// Layer name as written to the file: every other character becomes `_`.
#[must_use]
pub fn r12_name(name: &str) -> Cow<'_, str> {
    if name.chars().all(is_name_char) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(
            name.chars()
                .map(|c| if is_name_char(c) { c } else { '_' })
                .collect(),
        )
    }
}

struct GroupWriter<W> {
    out: W,
}

impl<W: Write> GroupWriter<W> {
    #[inline]
    fn pair(&mut self, code: u16, value: impl std::fmt::Display) -> io::Result<()> {
        write!(self.out, "{code:>3}\n{value}\n")
    }

    fn point(&mut self, base: u16, p: Point) -> io::Result<()> {
        self.pair(base, p.x)?;
        self.pair(base + 10, p.y)?;
        self.pair(base + 20, 0.0)
    }

    fn section(&mut self, name: &str, body: impl FnOnce(&mut Self) -> io::Result<()>) -> io::Result<()> {
        self.pair(0, "SECTION")?;
        self.pair(2, name)?;
        body(self)?;
        self.pair(0, "ENDSEC")
    }

    fn table(&mut self, name: &str, count: usize, body: impl FnOnce(&mut Self) -> io::Result<()>) -> io::Result<()> {
        self.pair(0, "TABLE")?;
        self.pair(2, name)?;
        self.pair(70, count)?;
        body(self)?;
        self.pair(0, "ENDTAB")
    }

    fn header(&mut self, drawing: &Drawing) -> io::Result<()> {
        let (lo, hi) = drawing.bounds().unwrap_or((Point::ORIGIN, Point::ORIGIN));
        self.pair(9, "$ACADVER")?;
        self.pair(1, VERSION)?;
        self.pair(9, "$EXTMIN")?;
        self.point(10, lo)?;
        self.pair(9, "$EXTMAX")?;
        self.point(10, hi)
    }

    fn linetype(&mut self) -> io::Result<()> {
        self.pair(0, "LTYPE")?;
        self.pair(2, LINETYPE)?;
        self.pair(70, 0)?;
        self.pair(3, "Solid line")?;
        self.pair(72, 65)?;
        self.pair(73, 0)?;
        self.pair(40, 0.0)
    }

    fn layer(&mut self, layer: &Layer) -> io::Result<()> {
        self.pair(0, "LAYER")?;
        self.pair(2, r12_name(&layer.name))?;
        self.pair(70, 0)?;
        self.pair(62, layer.color.index())?;
        self.pair(6, LINETYPE)
    }

    fn text(&mut self, t: &Text) -> io::Result<()> {
        self.pair(0, "TEXT")?;
        self.pair(8, r12_name(&t.layer))?;
        self.point(10, t.position)?;
        self.pair(40, t.height)?;
        self.pair(1, &t.value)?;
        if let Some(anchor) = t.anchor {
            let (h, v) = justification(anchor);
            self.pair(72, h)?;
            // alignment point carries the position once justified
            self.point(11, t.position)?;
            self.pair(73, v)?;
        }
        Ok(())
    }

    fn entity(&mut self, entity: &Entity) -> io::Result<()> {
        match entity {
            Entity::Line { start, end, layer } => {
                self.pair(0, "LINE")?;
                self.pair(8, r12_name(layer))?;
                self.point(10, *start)?;
                self.point(11, *end)
            }
            Entity::Polyline { points, layer } => {
                self.pair(0, "POLYLINE")?;
                self.pair(8, r12_name(layer))?;
                self.pair(66, 1)?;
                self.point(10, Point::ORIGIN)?;
                self.pair(70, 0)?;
                for p in points {
                    self.pair(0, "VERTEX")?;
                    self.pair(8, r12_name(layer))?;
                    self.point(10, *p)?;
                }
                self.pair(0, "SEQEND")?;
                self.pair(8, r12_name(layer))
            }
            Entity::Text(t) => self.text(t),
        }
    }
}

/// Write `drawing` to `out` as a complete DXF document.
pub fn write_dxf<W: Write>(out: W, drawing: &Drawing) -> io::Result<()> {
    let mut w = GroupWriter { out };
    w.section("HEADER", |w| w.header(drawing))?;
    w.section("TABLES", |w| {
        w.table("LTYPE", 1, |w| w.linetype())?;
        w.table("LAYER", drawing.layers().len(), |w| {
            drawing.layers().iter().try_for_each(|l| w.layer(l))
        })
    })?;
    w.section("ENTITIES", |w| {
        drawing.entities().iter().try_for_each(|e| w.entity(e))
    })?;
    w.pair(0, "EOF")?;
    w.out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::color::Aci, render::sink::DrawingSink};

    fn pairs(dxf: &str) -> Vec<(u16, &str)> {
        let lines: Vec<&str> = dxf.lines().collect();
        lines
            .chunks(2)
            .map(|c| (c[0].trim().parse().unwrap(), c[1]))
            .collect()
    }

    #[test]
    fn empty_drawing_is_well_formed() {
        let dxf = Drawing::new().to_dxf().unwrap();
        let p = pairs(&dxf);
        assert_eq!(p.first(), Some(&(0, "SECTION")));
        assert_eq!(p.last(), Some(&(0, "EOF")));
        assert!(p.contains(&(1, VERSION)));
        assert_eq!(p.iter().filter(|(c, v)| *c == 0 && *v == "LAYER").count(), 1);
        assert_eq!(p.iter().filter(|(c, v)| *c == 0 && *v == "ENDSEC").count(), 3);
    }

    #[test]
    fn group_codes_are_right_aligned() {
        let dxf = Drawing::new().to_dxf().unwrap();
        assert!(dxf.starts_with("  0\nSECTION\n  2\nHEADER\n"));
    }

    #[test]
    fn layer_colour_and_entities() {
        let mut d = Drawing::new();
        d.create_layer("Raster", Aci::RED);
        d.add_line(Point::new(0.0, -1.0), Point::new(5.0, -1.0), "Raster");
        d.add_polyline(&[Point::new(1.0, 0.0), Point::new(2.0, -1.0)], "0");
        let dxf = d.to_dxf().unwrap();
        let p = pairs(&dxf);

        let at = p.iter().position(|&e| e == (2, "Raster")).unwrap();
        assert_eq!(p[at + 2], (62, "1"));
        assert_eq!(p.iter().filter(|(c, v)| *c == 0 && *v == "VERTEX").count(), 2);
        assert_eq!(p.iter().filter(|(c, v)| *c == 0 && *v == "SEQEND").count(), 1);
        // extents
        let ext = p.iter().position(|&e| e == (9, "$EXTMIN")).unwrap();
        assert_eq!(&p[ext + 1..ext + 3], &[(10, "0"), (20, "-1")]);
    }

    #[test]
    fn positioned_text_is_justified() {
        let mut d = Drawing::new();
        let t = d.add_text("12", "0", 0.2);
        d.set_text_position(t, Point::new(12.0, 0.0), Anchor::BottomRight);
        let dxf = d.to_dxf().unwrap();
        let p = pairs(&dxf);
        assert!(p.contains(&(1, "12")));
        assert!(p.contains(&(72, "2")));
        assert!(p.contains(&(73, "1")));
        assert!(p.contains(&(11, "12")));
    }

    #[test]
    fn layer_names_are_valid_r12_symbols() {
        let mut d = Drawing::new();
        d.create_layer("cone resistance Axis", Aci::WHITE);
        d.create_layer("pore pressure u2", Aci::WHITE);
        d.add_line(Point::ORIGIN, Point::new(1.0, 0.0), "cone resistance Axis");
        let t = d.add_text("0", "pore pressure u2", 0.2);
        d.set_text_position(t, Point::ORIGIN, Anchor::TopLeft);
        d.add_polyline(&[Point::ORIGIN], "pore pressure u2");
        let dxf = d.to_dxf().unwrap();
        let p = pairs(&dxf);

        assert!(p.contains(&(1, "AC1009")));
        let names: Vec<&str> = p
            .windows(2)
            .filter(|w| w[0] == (0, "LAYER"))
            .map(|w| w[1].1)
            .chain(p.iter().filter(|(c, _)| *c == 8).map(|(_, v)| *v))
            .collect();
        assert_eq!(names.len(), 3 + 5);
        assert!(names.iter().all(|n| !n.is_empty() && n.chars().all(is_name_char)));
        assert!(names.contains(&"cone_resistance_Axis"));
        assert!(names.contains(&"pore_pressure_u2"));
        // the drawing itself keeps the readable names
        assert!(d.layer("cone resistance Axis").is_some());
    }

    #[test]
    fn valid_names_are_borrowed() {
        assert!(matches!(r12_name("Raster"), Cow::Borrowed("Raster")));
        assert_eq!(r12_name("qc (MPa)"), "qc__MPa_");
    }

    #[test]
    fn anchor_codes() {
        assert_eq!(justification(Anchor::TopLeft), (0, 3));
        assert_eq!(justification(Anchor::TopRight), (2, 3));
        assert_eq!(justification(Anchor::BottomLeft), (0, 1));
        assert_eq!(justification(Anchor::BottomRight), (2, 1));
    }
}
