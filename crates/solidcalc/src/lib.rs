#![warn(missing_docs)]

//! solidcalc: volume, surface area and meshes of common 3D solids.
//!
//! # Example
//!
//! ```rust,no_run
//! use solidcalc::{ShapeParameters, Solid};
//!
//! let cone = Solid::new(ShapeParameters::Cone { radius: 4.0, height: 6.0 }).unwrap();
//! println!("V = {:.2}, A = {:.2}", cone.volume(), cone.surface_area());
//! cone.write_stl("cone.stl", 64).unwrap();
//! ```

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

pub mod export;

pub use solidcalc_metrics::{
    check_length, compute, formula, formulas, Formula, MetricsError, ShapeKind,
    ShapeMetricsResult, ShapeParameters, Slant,
};
pub use solidcalc_tessellate::{TessellationParams, TriangleMesh};

/// Errors returned by solid operations.
#[derive(Error, Debug)]
pub enum SolidError {
    /// The parameters were rejected.
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    /// An I/O error occurred during export.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The geometry is empty (no vertices or triangles).
    #[error("Empty geometry")]
    EmptyGeometry,
}

/// A validated shape together with its computed metrics.
///
/// Construction runs [`compute`], so holding a `Solid` means every length
/// was strictly positive and both metrics are finite and non-zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solid {
    parameters: ShapeParameters,
    metrics: ShapeMetricsResult,
}

impl Solid {
    /// Validate `parameters` and compute their metrics.
    pub fn new(parameters: ShapeParameters) -> Result<Self, SolidError> {
        let metrics = compute(&parameters)?;
        tracing::debug!(
            shape = %parameters.kind(),
            volume = metrics.volume,
            surface_area = metrics.surface_area,
            "computed metrics"
        );
        Ok(Self {
            parameters,
            metrics,
        })
    }

    /// Build from lengths ordered as [`ShapeKind::parameter_names`].
    pub fn from_values(kind: ShapeKind, values: &[f64]) -> Result<Self, SolidError> {
        Self::new(ShapeParameters::from_values(kind, values)?)
    }

    /// The shape kind.
    pub fn kind(&self) -> ShapeKind {
        self.parameters.kind()
    }

    /// The validated parameters.
    pub fn parameters(&self) -> &ShapeParameters {
        &self.parameters
    }

    /// Volume, surface area and any slant heights.
    pub fn metrics(&self) -> &ShapeMetricsResult {
        &self.metrics
    }

    /// Enclosed volume.
    pub fn volume(&self) -> f64 {
        self.metrics.volume
    }

    /// Total surface area.
    pub fn surface_area(&self) -> f64 {
        self.metrics.surface_area
    }

    /// Triangle mesh centred on the origin, for plotting.
    ///
    /// `segments` is the number of segments around circular features.
    pub fn to_mesh(&self, segments: u32) -> TriangleMesh {
        let params = TessellationParams::from_segments(segments);
        let mesh = solidcalc_tessellate::tessellate(&self.parameters, &params);
        solidcalc_tessellate::centered(&mesh)
    }

    /// Binary STL of [`Solid::to_mesh`].
    pub fn to_stl(&self, segments: u32) -> Result<Vec<u8>, SolidError> {
        export::stl_bytes(&self.to_mesh(segments), &self.stl_header())
    }

    /// Write [`Solid::to_stl`] to `path`.
    pub fn write_stl(&self, path: impl AsRef<Path>, segments: u32) -> Result<(), SolidError> {
        export::write_stl(&self.to_mesh(segments), &self.stl_header(), path.as_ref())
    }

    fn stl_header(&self) -> String {
        format!("solidcalc {}", self.kind())
    }
}
