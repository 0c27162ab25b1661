use std::fmt;

use thiserror::Error;

use crate::validation::ValidationReport;

/// One of the two axes of a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    Latitude,
    Longitude,
}

impl Coordinate {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
        }
    }

    /// Largest absolute value, in degrees, this axis may take
    pub const fn bound(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }

    pub fn contains(self, degrees: f64) -> bool {
        (-self.bound()..=self.bound()).contains(&degrees)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug)]
pub enum SucursalError {
    /// The request body isn't valid JSON or doesn't have the expected shape
    #[error("Failed to decode payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),
    /// The payload decoded but one or more fields broke a rule
    #[error("{} ({} violations)", .0.message, .0.errors.len())]
    ValidationFailed(ValidationReport),
    #[error("{0} must be in float64 format")]
    InvalidFormat(Coordinate),
    #[error("{0} must be between -{bound} and {bound}", bound = .0.bound())]
    OutOfRange(Coordinate),
    #[error("Sucursal {0} already exists")]
    AlreadyExists(String),
    #[error("Sucursal {0} was not found")]
    NotFound(String),
    /// Nearest-location lookup against a store with nothing in it
    #[error("No sucursales are loaded")]
    NoRecords,
    /// Storage or decoding failure, the cause chain is kept for logging only
    #[error("Internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}
