//! Error types for shape metrics.

use thiserror::Error;

use crate::ShapeKind;

/// Errors that can occur while building parameters or computing metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// A length was zero, negative, NaN or infinite.
    #[error("invalid dimension `{field}`: {value} (must be a finite length greater than zero)")]
    InvalidDimension {
        /// Name of the offending field, e.g. `"radius"`.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Wrong number of values supplied for a shape.
    #[error("{kind} takes {expected} dimension(s) ({names}), got {actual}", names = .kind.parameter_names().join(", "))]
    ParameterCount {
        /// Shape the values were meant for.
        kind: ShapeKind,
        /// Number of dimensions the shape takes.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// The lengths were valid but a result overflowed to infinity or
    /// underflowed to zero in `f64`.
    #[error("{kind} metrics out of range (volume {volume}, surface area {surface_area}); use a different length unit")]
    OutOfRange {
        /// Shape being computed.
        kind: ShapeKind,
        /// Volume as computed.
        volume: f64,
        /// Surface area as computed.
        surface_area: f64,
    },

    /// A shape name that does not match any [`ShapeKind`].
    #[error("unknown shape `{0}`")]
    UnknownShape(String),
}

/// Result type for metrics operations.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Check that `value` is a usable length for `field`: strictly positive and
/// finite. Returns the value unchanged on success.
///
/// `NaN` fails the `> 0.0` comparison, so only the infinity case needs a
/// separate check.
pub fn check_length(field: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(MetricsError::InvalidDimension { field, value })
    }
}
