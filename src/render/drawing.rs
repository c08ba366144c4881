//! In-memory drawing document: layers plus a flat entity list.

use std::{fs::File, io::BufWriter, io, path::Path};

use crate::{
    core::{color::Aci, placement::Anchor, transform::Point},
    render::{
        dxf,
        sink::{DrawingSink, TextHandle},
    },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub name: String,
    pub color: Aci,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub value: String,
    pub layer: String,
    pub height: f64,
    pub position: Point,
    /// `None` until positioned: baseline-left at `position`.
    pub anchor: Option<Anchor>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Line {
        start: Point,
        end: Point,
        layer: String,
    },
    Polyline {
        points: Vec<Point>,
        layer: String,
    },
    Text(Text),
}

impl Entity {
    #[must_use]
    pub fn layer(&self) -> &str {
        match self {
            Self::Line { layer, .. } | Self::Polyline { layer, .. } => layer,
            Self::Text(t) => &t.layer,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Drawing {
    layers: Vec<Layer>,
    entities: Vec<Entity>,
}

impl Drawing {
    /// Empty drawing holding only the mandatory layer "0".
    #[must_use]
    pub fn new() -> Self {
        Self {
            layers: vec![Layer {
                name: "0".into(),
                color: Aci::WHITE,
            }],
            entities: Vec::new(),
        }
    }

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer names compare case-insensitively, as in DXF.
    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_on<'a>(&'a self, layer: &'a str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.entities
            .iter()
            .filter(move |e| e.layer().eq_ignore_ascii_case(layer))
    }

    /// Lower-left and upper-right corner over all entity coordinates.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut pts = self.entities.iter().flat_map(|e| match e {
            Entity::Line { start, end, .. } => vec![*start, *end],
            Entity::Polyline { points, .. } => points.clone(),
            Entity::Text(t) => vec![t.position],
        });
        let first = pts.next()?;
        Some(pts.fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }

    /// Serialise as ASCII DXF.
    pub fn to_dxf(&self) -> io::Result<String> {
        let mut buf = Vec::with_capacity(64 * (self.entities.len() + 16));
        dxf::write_dxf(&mut buf, self)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSink for Drawing {
    fn layer_exists(&self, name: &str) -> bool {
        self.layer(name).is_some()
    }

    fn create_layer(&mut self, name: &str, color: Aci) {
        if !self.layer_exists(name) {
            self.layers.push(Layer {
                name: name.to_owned(),
                color,
            });
        }
    }

    fn add_polyline(&mut self, points: &[Point], layer: &str) {
        self.entities.push(Entity::Polyline {
            points: points.to_vec(),
            layer: layer.to_owned(),
        });
    }

    fn add_line(&mut self, start: Point, end: Point, layer: &str) {
        self.entities.push(Entity::Line {
            start,
            end,
            layer: layer.to_owned(),
        });
    }

    fn add_text(&mut self, value: &str, layer: &str, height: f64) -> TextHandle {
        self.entities.push(Entity::Text(Text {
            value: value.to_owned(),
            layer: layer.to_owned(),
            height,
            position: Point::ORIGIN,
            anchor: None,
        }));
        TextHandle(self.entities.len() - 1)
    }

    fn set_text_position(&mut self, text: TextHandle, position: Point, anchor: Anchor) {
        if let Some(Entity::Text(t)) = self.entities.get_mut(text.0) {
            t.position = position;
            t.anchor = Some(anchor);
        }
    }

    fn save(&self, path: &Path) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        dxf::write_dxf(&mut out, self)?;
        log::info!(
            "wrote {} entities on {} layers to {}",
            self.entities.len(),
            self.layers.len(),
            path.display()
        );
        Ok(())
    }
}
