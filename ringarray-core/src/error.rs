//! Error types for array design and depth estimation
//!
//! Failures are grouped in three categories. Each category has its own enum
//! and all of them convert into [`ArrayError`], which is what the public
//! operations return.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ArrayError>;

/// Top-level error returned by every fallible operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArrayError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("input data error: {0}")]
    InputData(#[from] InputDataError),

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(#[from] DegenerateGeometryError),
}

/// The requested design or estimation parameters cannot be satisfied
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// The inner ring alone uses up the whole station budget
    #[error(
        "not enough stations to fill both rings: a {max_gap_deg}° gap needs {inner} inner stations but only {total} are available"
    )]
    InsufficientStations {
        inner: usize,
        total: usize,
        max_gap_deg: f64,
    },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Coordinate input is unusable
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputDataError {
    #[error("at least 2 stations are required, got {count}")]
    TooFewStations { count: usize },

    #[error("station {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("line {line}: expected two numbers, got `{content}`")]
    MalformedRow { line: usize, content: String },
}

/// The station geometry leaves azimuths or spacings undefined
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DegenerateGeometryError {
    #[error("station {index} sits on the array center, its azimuth is undefined")]
    StationAtOrigin { index: usize },

    #[error("all stations coincide, no inter-station spacing is defined")]
    CoincidentStations,

    #[error("all stations lie on one line through the array center, azimuthal gaps are undefined")]
    CollinearThroughOrigin,
}

impl ConfigurationError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ConfigurationError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
