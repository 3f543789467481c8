//! Shape identifiers and their parameter records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{check_length, MetricsError, Result};

/// The closed set of supported solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Cube with equal sides.
    Cube,
    /// Rectangular box.
    Cuboid,
    /// Sphere.
    Sphere,
    /// Right circular cylinder.
    Cylinder,
    /// Right circular cone.
    Cone,
    /// Right pyramid on a rectangular base.
    Pyramid,
    /// Prism with a triangular cross-section.
    TriangularPrism,
}

impl ShapeKind {
    /// Every shape, in menu order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Cube,
        ShapeKind::Cuboid,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Pyramid,
        ShapeKind::TriangularPrism,
    ];

    /// Stable lowercase identifier, also used by serde.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Cuboid => "cuboid",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::TriangularPrism => "triangular-prism",
        }
    }

    /// Names of the lengths this shape takes, in the order
    /// [`ShapeParameters::from_values`] expects them.
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            ShapeKind::Cube => &["side"],
            ShapeKind::Cuboid | ShapeKind::Pyramid => &["length", "width", "height"],
            ShapeKind::Sphere => &["radius"],
            ShapeKind::Cylinder | ShapeKind::Cone => &["radius", "height"],
            ShapeKind::TriangularPrism => &["base", "height", "length"],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = MetricsError;

    /// Accepts the [`ShapeKind::name`] spelling (case-insensitive, `_` or
    /// space in place of `-`) and the Indonesian names.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        let kind = match normalized.as_str() {
            "cube" | "kubus" => ShapeKind::Cube,
            "cuboid" | "box" | "balok" => ShapeKind::Cuboid,
            "sphere" | "bola" => ShapeKind::Sphere,
            "cylinder" | "tabung" => ShapeKind::Cylinder,
            "cone" | "kerucut" => ShapeKind::Cone,
            "pyramid" | "limas" => ShapeKind::Pyramid,
            "triangular-prism" | "prism" | "prisma" => ShapeKind::TriangularPrism,
            _ => return Err(MetricsError::UnknownShape(s.to_string())),
        };
        Ok(kind)
    }
}

/// Measurements for one shape. The variant tag and its lengths travel
/// together, so a shape can never receive another shape's parameters.
///
/// All fields are lengths in one caller-chosen unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum ShapeParameters {
    /// Cube with edge `side`.
    Cube {
        /// Edge length.
        side: f64,
    },
    /// Box of `length × width × height`.
    Cuboid {
        /// Extent along X.
        length: f64,
        /// Extent along Y.
        width: f64,
        /// Extent along Z.
        height: f64,
    },
    /// Sphere of the given radius.
    Sphere {
        /// Radius.
        radius: f64,
    },
    /// Cylinder of the given radius and height.
    Cylinder {
        /// Base radius.
        radius: f64,
        /// Axis length.
        height: f64,
    },
    /// Cone of the given base radius and height.
    Cone {
        /// Base radius.
        radius: f64,
        /// Apex height above the base.
        height: f64,
    },
    /// Right pyramid on a `length × width` rectangle.
    Pyramid {
        /// Base extent along X.
        length: f64,
        /// Base extent along Y.
        width: f64,
        /// Apex height above the base.
        height: f64,
    },
    /// Triangle of `base` and `height`, extruded by `length`.
    TriangularPrism {
        /// Triangle base edge.
        base: f64,
        /// Triangle height over the base edge.
        height: f64,
        /// Extrusion length.
        length: f64,
    },
}

impl ShapeParameters {
    /// Build parameters for `kind` from lengths ordered as
    /// [`ShapeKind::parameter_names`].
    ///
    /// Only the count is checked here; see [`ShapeParameters::validate`].
    pub fn from_values(kind: ShapeKind, values: &[f64]) -> Result<Self> {
        let expected = kind.parameter_names().len();
        if values.len() != expected {
            return Err(MetricsError::ParameterCount {
                kind,
                expected,
                actual: values.len(),
            });
        }
        let v = values;
        Ok(match kind {
            ShapeKind::Cube => ShapeParameters::Cube { side: v[0] },
            ShapeKind::Cuboid => ShapeParameters::Cuboid {
                length: v[0],
                width: v[1],
                height: v[2],
            },
            ShapeKind::Sphere => ShapeParameters::Sphere { radius: v[0] },
            ShapeKind::Cylinder => ShapeParameters::Cylinder {
                radius: v[0],
                height: v[1],
            },
            ShapeKind::Cone => ShapeParameters::Cone {
                radius: v[0],
                height: v[1],
            },
            ShapeKind::Pyramid => ShapeParameters::Pyramid {
                length: v[0],
                width: v[1],
                height: v[2],
            },
            ShapeKind::TriangularPrism => ShapeParameters::TriangularPrism {
                base: v[0],
                height: v[1],
                length: v[2],
            },
        })
    }

    /// The shape these parameters describe.
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParameters::Cube { .. } => ShapeKind::Cube,
            ShapeParameters::Cuboid { .. } => ShapeKind::Cuboid,
            ShapeParameters::Sphere { .. } => ShapeKind::Sphere,
            ShapeParameters::Cylinder { .. } => ShapeKind::Cylinder,
            ShapeParameters::Cone { .. } => ShapeKind::Cone,
            ShapeParameters::Pyramid { .. } => ShapeKind::Pyramid,
            ShapeParameters::TriangularPrism { .. } => ShapeKind::TriangularPrism,
        }
    }

    /// `(field, value)` pairs in [`ShapeKind::parameter_names`] order.
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        let values: Vec<f64> = match *self {
            ShapeParameters::Cube { side } => vec![side],
            ShapeParameters::Cuboid {
                length,
                width,
                height,
            }
            | ShapeParameters::Pyramid {
                length,
                width,
                height,
            } => vec![length, width, height],
            ShapeParameters::Sphere { radius } => vec![radius],
            ShapeParameters::Cylinder { radius, height }
            | ShapeParameters::Cone { radius, height } => vec![radius, height],
            ShapeParameters::TriangularPrism {
                base,
                height,
                length,
            } => vec![base, height, length],
        };
        self.kind()
            .parameter_names()
            .iter()
            .copied()
            .zip(values)
            .collect()
    }

    /// Reject the first length that is not strictly positive and finite.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.dimensions() {
            check_length(field, value)?;
        }
        Ok(())
    }
}
