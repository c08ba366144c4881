//! AutoCAD Colour Index (ACI) wrapper for layer colours.

use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("unknown colour name `{0}`")]
    UnknownName(String),
    #[error("colour index {0} outside 1..=255")]
    OutOfRange(u32),
}

/// A DXF layer colour, `1..=255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Aci(u8);

impl Aci {
    pub const RED: Self = Self(1);
    pub const YELLOW: Self = Self(2);
    pub const GREEN: Self = Self(3);
    pub const CYAN: Self = Self(4);
    pub const BLUE: Self = Self(5);
    pub const MAGENTA: Self = Self(6);
    /// Drawn black on a white background.
    pub const WHITE: Self = Self(7);
    pub const GREY: Self = Self(8);

    /// Named colours, in index order.
    pub const NAMED: [(&'static str, Self); 8] = [
        ("red", Self::RED),
        ("yellow", Self::YELLOW),
        ("green", Self::GREEN),
        ("cyan", Self::CYAN),
        ("blue", Self::BLUE),
        ("magenta", Self::MAGENTA),
        ("white", Self::WHITE),
        ("grey", Self::GREY),
    ];

    pub fn new(index: u32) -> Result<Self, ColorError> {
        match u8::try_from(index) {
            Ok(i) if i > 0 => Ok(Self(i)),
            _ => Err(ColorError::OutOfRange(index)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Parse a colour name or a bare index.  Falls back to the index parser on miss.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let s = s.trim().to_ascii_lowercase();
        let name = if s == "gray" { "grey" } else { s.as_str() };
        if let Some((_, c)) = Self::NAMED.iter().find(|(n, _)| *n == name) {
            return Ok(*c);
        }
        let index = name
            .parse::<u32>()
            .map_err(|_| ColorError::UnknownName(s.clone()))?;
        Self::new(index)
    }

    /// Name of a colour, if it has one.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        Self::NAMED.iter().find(|(_, c)| *c == self).map(|(n, _)| *n)
    }
}

impl Default for Aci {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Aci {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Aci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(n) => f.write_str(n),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_indices() {
        assert_eq!(Aci::from_name("Red"), Ok(Aci::RED));
        assert_eq!(Aci::from_name(" gray "), Ok(Aci::GREY));
        assert_eq!("42".parse::<Aci>().map(Aci::index), Ok(42));
        assert_eq!(Aci::from_name("0"), Err(ColorError::OutOfRange(0)));
        assert_eq!(Aci::from_name("256"), Err(ColorError::OutOfRange(256)));
        assert!(matches!(
            Aci::from_name("chartreuse"),
            Err(ColorError::UnknownName(_))
        ));
    }

    #[test]
    fn display_prefers_names() {
        assert_eq!(Aci::RED.to_string(), "red");
        assert_eq!(Aci::new(30).map(|c| c.to_string()), Ok("30".into()));
    }
}
