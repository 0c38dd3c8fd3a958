//! Two-ring sensor array design for subsurface depth sensing
//!
//! This crate designs station layouts for seismic / geophysical monitoring
//! arrays and estimates which depth range an existing layout can resolve.
//! It is pure computation: no file access, no plotting, no process control.
//! Reading and writing layout files is left to the caller, using the text
//! codec in [`layout_file`].
//!
//! # Architecture
//!
//! | Module | Role |
//! |--------|------|
//! | [`allocator`] | Splits the station budget over an inner and outer ring, computes radii |
//! | [`layout`] | Places stations on the rings, outer ring staggered by half a step |
//! | [`coverage`] | Angular gaps and inter-station distances of any layout |
//! | [`estimator`] | Inverts gaps and spacings back into a depth range |
//! | [`geometry`] | Stations and compass-style azimuth helpers |
//! | [`layout_file`] | Persisted coordinate list format |
//! | [`pipeline`] | Forward [`design`] and inverse [`assess`] drivers |
//!
//! # Example
//!
//! ```
//! use ringarray_core::{assess, design, DesignParameters, EstimatorConfig};
//!
//! let params = DesignParameters::new(1000.0, 5000.0).with_penetration(1.4);
//! let array = design(&params)?;
//! assert_eq!(array.layout.len(), 12);
//!
//! let assessment = assess(&array.layout, 1.4, &EstimatorConfig::default())?;
//! assert!((assessment.estimate.zmax - 5000.0).abs() < 1.0);
//! # Ok::<(), ringarray_core::ArrayError>(())
//! ```

pub mod allocator;
pub mod coverage;
pub mod error;
pub mod estimator;
pub mod geometry;
pub mod layout;
pub mod layout_file;
pub mod pipeline;

pub use allocator::{allocate, DesignParameters, RingSpec};
pub use coverage::{analyze, CoverageMetrics};
pub use error::{
    ArrayError, ConfigurationError, DegenerateGeometryError, InputDataError, Result,
};
pub use estimator::{estimate, estimate_with, DepthEstimate, EstimatorConfig};
pub use geometry::Station;
pub use layout::{generate, Layout};
pub use layout_file::{format_layout, parse_layout};
pub use pipeline::{assess, design, ArrayDesign, DepthAssessment};
