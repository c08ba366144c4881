//! Panel and layout configuration + fluent builder.

use std::str::FromStr;

use crate::core::{
    constants::DEFAULT_LABEL_HEIGHT,
    error::ConfigError,
    placement::{Level, Placement, Side},
    transform::Point,
};

/// How a panel names its log column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnRef {
    /// 1-based column number.
    Index(usize),
    /// Standardised quantity number, looked up in the log header.
    Quantity(u32),
}

/// One graph line plus its value axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub column: ColumnRef,
    pub max_value: f64,
    pub offset_value: f64,
    pub value_factor: f64,
    pub placement: Placement,
}

impl PanelConfig {
    #[inline]
    pub fn builder(column: ColumnRef) -> PanelConfigBuilder {
        PanelConfigBuilder::new(column)
    }
}

/// Fluent builder; validation happens in `build`.
#[derive(Debug)]
pub struct PanelConfigBuilder {
    column: ColumnRef,
    max_value: Option<f64>,
    offset_value: Option<f64>,
    value_factor: Option<f64>,
    placement: Placement,
}

fn positive(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

impl PanelConfigBuilder {
    pub(crate) fn new(column: ColumnRef) -> Self {
        Self {
            column,
            max_value: None,
            offset_value: None,
            value_factor: None,
            placement: Placement::default(),
        }
    }

    #[inline]
    pub fn max_value(mut self, v: f64) -> Self {
        self.max_value = Some(v);
        self
    }
    #[inline]
    pub fn offset_value(mut self, v: f64) -> Self {
        self.offset_value = Some(v);
        self
    }
    #[inline]
    pub fn value_factor(mut self, v: f64) -> Self {
        self.value_factor = Some(v);
        self
    }
    #[inline]
    pub fn side(mut self, side: Side) -> Self {
        self.placement.side = side;
        self
    }
    #[inline]
    pub fn level(mut self, level: Level) -> Self {
        self.placement.level = level;
        self
    }

    pub fn build(self) -> Result<PanelConfig, ConfigError> {
        let max_value = self.max_value.ok_or(ConfigError::MissingField("max_value"))?;
        let offset_value = self
            .offset_value
            .ok_or(ConfigError::MissingField("offset_value"))?;
        Ok(PanelConfig {
            column: self.column,
            max_value: positive("max_value", max_value)?,
            offset_value: positive("offset_value", offset_value)?,
            value_factor: positive("value_factor", self.value_factor.unwrap_or(1.0))?,
            placement: self.placement,
        })
    }
}

/// `COL:MAX:STEP:FACTOR[:left|right][:top|bottom]`, `COL` being `N` or `qN`.
impl FromStr for PanelConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = |reason| ConfigError::BadPanelSpec {
            spec: s.to_owned(),
            reason,
        };
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        if parts.len() < 4 {
            return Err(bad("expected COL:MAX:STEP:FACTOR"));
        }

        let column = match parts[0].strip_prefix(['q', 'Q']) {
            Some(qn) => ColumnRef::Quantity(qn.parse().map_err(|_| bad("bad quantity number"))?),
            None => ColumnRef::Index(parts[0].parse().map_err(|_| bad("bad column number"))?),
        };
        let num = |t: &str| t.parse::<f64>().map_err(|_| bad("bad number"));

        let mut b = PanelConfig::builder(column)
            .max_value(num(parts[1])?)
            .offset_value(num(parts[2])?)
            .value_factor(num(parts[3])?);
        for flag in &parts[4..] {
            b = match flag.to_ascii_lowercase().as_str() {
                "left" => b.side(Side::Left),
                "right" => b.side(Side::Right),
                "top" => b.level(Level::Top),
                "bottom" => b.level(Level::Bottom),
                _ => return Err(bad("unknown placement flag")),
            };
        }
        b.build()
    }
}

/// Background raster spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterConfig {
    pub value_factor: f64,
    pub offset_value: f64,
}

/// Everything one drawing needs.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub panels: Vec<PanelConfig>,
    pub depth_factor: f64,
    /// Spacing of depth labels on the central axis.
    pub depth_offset: f64,
    pub label_height: f64,
    pub raster: Option<RasterConfig>,
    pub origin: Point,
}

impl LayoutConfig {
    /// Four-quadrant cone penetration test sheet.
    ///
    /// Cone resistance top-left, local friction bottom-left, friction ratio
    /// top-right, pore pressure bottom-right.
    #[must_use]
    pub fn cpt_default() -> Self {
        let panel = |qn, max_value, offset_value, value_factor, left, bottom| PanelConfig {
            column: ColumnRef::Quantity(qn),
            max_value,
            offset_value,
            value_factor,
            placement: Placement::from_flags(left, bottom),
        };
        Self {
            panels: vec![
                panel(2, 30.0, 5.0, 0.4, true, false),
                panel(3, 0.5, 0.1, 20.0, true, true),
                panel(4, 12.0, 2.0, 1.0, false, false),
                panel(6, 0.5, 0.1, 20.0, false, true),
            ],
            depth_factor: 1.0,
            depth_offset: 1.0,
            label_height: DEFAULT_LABEL_HEIGHT,
            raster: Some(RasterConfig {
                value_factor: 1.0,
                offset_value: 1.0,
            }),
            origin: Point::ORIGIN,
        }
    }

    /// Check factors and spacings of the layout as a whole.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("depth_factor", self.depth_factor)?;
        positive("depth_offset", self.depth_offset)?;
        positive("label_height", self.label_height)?;
        if let Some(r) = self.raster {
            positive("raster value_factor", r.value_factor)?;
            positive("raster offset_value", r.offset_value)?;
        }
        Ok(())
    }
}
