#![warn(missing_docs)]

//! Volume and surface area of common 3D solids.
//!
//! The shape set is closed: [`ShapeKind`] names it and [`ShapeParameters`]
//! carries the lengths for one shape. [`compute`] maps parameters to a
//! [`ShapeMetricsResult`], rejecting any length that is not strictly
//! positive with [`MetricsError::InvalidDimension`].
//!
//! # Example
//!
//! ```
//! use solidcalc_metrics::{compute, ShapeParameters};
//!
//! let m = compute(&ShapeParameters::Cuboid { length: 6.0, width: 4.0, height: 3.0 }).unwrap();
//! assert_eq!(m.volume, 72.0);
//! assert_eq!(m.surface_area, 108.0);
//! ```

mod error;
mod formula;
mod metrics;
mod shape;

pub use error::{check_length, MetricsError, Result};
pub use formula::{formula, formulas, Formula};
pub use metrics::{
    compute, cone, cube, cuboid, cylinder, pyramid, sphere, triangular_prism, ShapeMetricsResult,
    Slant,
};
pub use shape::{ShapeKind, ShapeParameters};
