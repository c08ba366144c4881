//! Centralised error types used across the crate.

use std::io;

use crate::core::{color::ColorError, gef::ParseGefError};

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration missing field `{0}`")]
    MissingField(&'static str),
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("invalid panel `{spec}`: {reason}")]
    BadPanelSpec { spec: String, reason: &'static str },
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Gef(#[from] ParseGefError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("sounding log has no column {0}")]
    UnknownColumn(usize),
    #[error("sounding log has no column with quantity number {0}")]
    UnknownQuantity(u32),
    #[error("sounding log has no scans")]
    EmptyLog,
    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
