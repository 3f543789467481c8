//! Closed-form volume and surface area for each [`ShapeKind`](crate::ShapeKind).
//!
//! Every function validates its lengths first and returns unrounded `f64`
//! values; rounding for display is left to the caller.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{check_length, MetricsError, Result};
use crate::{ShapeKind, ShapeParameters};

/// Slant heights derived while computing a surface area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum Slant {
    /// Apex to base rim of a cone.
    Cone {
        /// `√(r² + t²)`.
        slant: f64,
    },
    /// Apex to base-edge midpoints of a rectangular pyramid.
    Pyramid {
        /// Slant of the two faces standing on the width edges, `√((p/2)² + t²)`.
        over_width_faces: f64,
        /// Slant of the two faces standing on the length edges, `√((l/2)² + t²)`.
        over_length_faces: f64,
    },
}

/// Volume and surface area of one solid.
///
/// Units are the cube and square of whatever unit the lengths were given in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeMetricsResult {
    /// Enclosed volume.
    pub volume: f64,
    /// Total area of all bounding faces.
    pub surface_area: f64,
    /// Slant height(s) used by the area formula, for cones and pyramids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slant: Option<Slant>,
}

impl ShapeMetricsResult {
    /// Valid lengths can still overflow to infinity or underflow to zero.
    fn checked(kind: ShapeKind, volume: f64, surface_area: f64) -> Result<Self> {
        let usable = |x: f64| x > 0.0 && x.is_finite();
        if !usable(volume) || !usable(surface_area) {
            return Err(MetricsError::OutOfRange {
                kind,
                volume,
                surface_area,
            });
        }
        Ok(Self {
            volume,
            surface_area,
            slant: None,
        })
    }

    fn with_slant(mut self, slant: Slant) -> Self {
        self.slant = Some(slant);
        self
    }
}

/// Compute volume and surface area for any shape.
///
/// Fails with [`MetricsError::InvalidDimension`] naming the first length that
/// is not strictly positive and finite, or with [`MetricsError::OutOfRange`]
/// when the lengths are so large or small that a result leaves `f64` range.
pub fn compute(params: &ShapeParameters) -> Result<ShapeMetricsResult> {
    match *params {
        ShapeParameters::Cube { side } => cube(side),
        ShapeParameters::Cuboid {
            length,
            width,
            height,
        } => cuboid(length, width, height),
        ShapeParameters::Sphere { radius } => sphere(radius),
        ShapeParameters::Cylinder { radius, height } => cylinder(radius, height),
        ShapeParameters::Cone { radius, height } => cone(radius, height),
        ShapeParameters::Pyramid {
            length,
            width,
            height,
        } => pyramid(length, width, height),
        ShapeParameters::TriangularPrism {
            base,
            height,
            length,
        } => triangular_prism(base, height, length),
    }
}

/// Cube: `V = s³`, `A = 6s²`.
pub fn cube(side: f64) -> Result<ShapeMetricsResult> {
    let s = check_length("side", side)?;
    ShapeMetricsResult::checked(ShapeKind::Cube, s * s * s, 6.0 * s * s)
}

/// Cuboid: `V = p·l·t`, `A = 2(p·l + p·t + l·t)`.
pub fn cuboid(length: f64, width: f64, height: f64) -> Result<ShapeMetricsResult> {
    let p = check_length("length", length)?;
    let l = check_length("width", width)?;
    let t = check_length("height", height)?;
    ShapeMetricsResult::checked(ShapeKind::Cuboid, p * l * t, 2.0 * (p * l + p * t + l * t))
}

/// Sphere: `V = (4/3)πr³`, `A = 4πr²`.
pub fn sphere(radius: f64) -> Result<ShapeMetricsResult> {
    let r = check_length("radius", radius)?;
    ShapeMetricsResult::checked(ShapeKind::Sphere, 4.0 / 3.0 * PI * r * r * r, 4.0 * PI * r * r)
}

/// Cylinder: `V = πr²t`, `A = 2πr(r + t)`.
pub fn cylinder(radius: f64, height: f64) -> Result<ShapeMetricsResult> {
    let r = check_length("radius", radius)?;
    let t = check_length("height", height)?;
    ShapeMetricsResult::checked(ShapeKind::Cylinder, PI * r * r * t, 2.0 * PI * r * (r + t))
}

/// Cone: `V = (1/3)πr²t`, `A = πr(r + s)` with slant `s = √(r² + t²)`.
pub fn cone(radius: f64, height: f64) -> Result<ShapeMetricsResult> {
    let r = check_length("radius", radius)?;
    let t = check_length("height", height)?;
    let s = r.hypot(t);
    Ok(
        ShapeMetricsResult::checked(ShapeKind::Cone, PI * r * r * t / 3.0, PI * r * (r + s))?
            .with_slant(Slant::Cone { slant: s }),
    )
}

/// Right pyramid on a `length × width` rectangle.
///
/// `V = (1/3)·p·l·t` and `A = p·l + p·s_w + l·s_p`, where
/// `s_p = √((p/2)² + t²)` is the slant of the two faces on the width edges
/// and `s_w = √((l/2)² + t²)` the slant of the two faces on the length edges.
/// Each pair of triangles contributes `2 · ½ · edge · slant`.
pub fn pyramid(length: f64, width: f64, height: f64) -> Result<ShapeMetricsResult> {
    let p = check_length("length", length)?;
    let l = check_length("width", width)?;
    let t = check_length("height", height)?;
    let s_p = (p / 2.0).hypot(t);
    let s_w = (l / 2.0).hypot(t);
    let area = p * l + p * s_w + l * s_p;
    Ok(
        ShapeMetricsResult::checked(ShapeKind::Pyramid, p * l * t / 3.0, area)?.with_slant(
            Slant::Pyramid {
                over_width_faces: s_p,
                over_length_faces: s_w,
            },
        ),
    )
}

/// Triangular prism: `V = ½·a·h·L`, `A = a·h + 3·L·a`.
///
/// The area is an approximation: it counts the two triangular ends and
/// treats all three side faces as `a × L` rectangles. That is only exact for
/// an equilateral cross-section with `h = a·√3/2`; for other triangles the
/// side faces are `L` times the actual edge lengths.
pub fn triangular_prism(base: f64, height: f64, length: f64) -> Result<ShapeMetricsResult> {
    let a = check_length("base", base)?;
    let h = check_length("height", height)?;
    let len = check_length("length", length)?;
    ShapeMetricsResult::checked(
        ShapeKind::TriangularPrism,
        0.5 * a * h * len,
        a * h + 3.0 * (len * a),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube() {
        let m = cube(5.0).unwrap();
        assert_eq!(m.volume, 125.0);
        assert_eq!(m.surface_area, 150.0);
        assert_eq!(m.slant, None);
    }

    #[test]
    fn test_cuboid() {
        let m = cuboid(6.0, 4.0, 3.0).unwrap();
        assert_eq!(m.volume, 72.0);
        assert_eq!(m.surface_area, 108.0);
    }

    #[test]
    fn test_sphere() {
        let m = sphere(5.0).unwrap();
        assert_relative_eq!(m.volume, 523.598_775_598_298_9, max_relative = 1e-12);
        assert_relative_eq!(m.surface_area, 314.159_265_358_979_3, max_relative = 1e-12);
        assert_eq!(format!("{:.2}", m.volume), "523.60");
        assert_eq!(format!("{:.2}", m.surface_area), "314.16");
    }

    #[test]
    fn test_cylinder() {
        let m = cylinder(3.0, 8.0).unwrap();
        assert_eq!(format!("{:.2}", m.volume), "226.19");
        assert_eq!(format!("{:.2}", m.surface_area), "207.35");
    }

    #[test]
    fn test_cone() {
        let m = cone(4.0, 6.0).unwrap();
        let Some(Slant::Cone { slant }) = m.slant else {
            panic!("cone should report its slant, got {:?}", m.slant);
        };
        assert_relative_eq!(slant, 52f64.sqrt(), max_relative = 1e-12);
        assert_eq!(format!("{slant:.4}"), "7.2111");
        assert_eq!(format!("{:.2}", m.volume), "100.53");
        assert_relative_eq!(m.surface_area, PI * 4.0 * (4.0 + 52f64.sqrt()), max_relative = 1e-12);
        assert_eq!(format!("{:.2}", m.surface_area), "140.88");
    }

    #[test]
    fn test_pyramid() {
        let m = pyramid(6.0, 4.0, 4.0).unwrap();
        assert_relative_eq!(m.volume, 32.0, max_relative = 1e-12);
        // s_p = √(3² + 4²) = 5, s_w = √(2² + 4²) = √20
        assert_relative_eq!(
            m.surface_area,
            24.0 + 6.0 * 20f64.sqrt() + 4.0 * 5.0,
            max_relative = 1e-12
        );
        match m.slant {
            Some(Slant::Pyramid {
                over_width_faces,
                over_length_faces,
            }) => {
                assert_relative_eq!(over_width_faces, 5.0, max_relative = 1e-12);
                assert_relative_eq!(over_length_faces, 20f64.sqrt(), max_relative = 1e-12);
            }
            other => panic!("expected pyramid slants, got {other:?}"),
        }
    }

    #[test]
    fn test_square_pyramid_faces_share_one_slant() {
        let m = pyramid(6.0, 6.0, 4.0).unwrap();
        // Four congruent triangles of base 6 and slant 5.
        assert_relative_eq!(m.surface_area, 36.0 + 4.0 * 0.5 * 6.0 * 5.0, max_relative = 1e-12);
    }

    #[test]
    fn test_triangular_prism_keeps_rectangle_approximation() {
        let m = triangular_prism(3.0, 4.0, 10.0).unwrap();
        assert_eq!(m.volume, 60.0);
        assert_eq!(m.surface_area, 12.0 + 90.0);
    }

    #[test]
    fn test_triangular_prism_equilateral_is_exact() {
        let a = 2.0;
        let h = a * 3f64.sqrt() / 2.0;
        let m = triangular_prism(a, h, 5.0).unwrap();
        let exact = 2.0 * (0.5 * a * h) + 3.0 * a * 5.0;
        assert_relative_eq!(m.surface_area, exact, max_relative = 1e-12);
    }

    #[test]
    fn test_compute_dispatches_each_shape() {
        let cases = [
            (ShapeParameters::Cube { side: 2.0 }, cube(2.0)),
            (
                ShapeParameters::Cuboid {
                    length: 1.0,
                    width: 2.0,
                    height: 3.0,
                },
                cuboid(1.0, 2.0, 3.0),
            ),
            (ShapeParameters::Sphere { radius: 1.5 }, sphere(1.5)),
            (
                ShapeParameters::Cylinder {
                    radius: 1.0,
                    height: 2.0,
                },
                cylinder(1.0, 2.0),
            ),
            (
                ShapeParameters::Cone {
                    radius: 1.0,
                    height: 2.0,
                },
                cone(1.0, 2.0),
            ),
            (
                ShapeParameters::Pyramid {
                    length: 1.0,
                    width: 2.0,
                    height: 3.0,
                },
                pyramid(1.0, 2.0, 3.0),
            ),
            (
                ShapeParameters::TriangularPrism {
                    base: 1.0,
                    height: 2.0,
                    length: 3.0,
                },
                triangular_prism(1.0, 2.0, 3.0),
            ),
        ];
        for (params, expected) in cases {
            assert_eq!(compute(&params), expected, "{}", params.kind());
        }
    }

    #[test]
    fn test_deterministic() {
        for kind in ShapeKind::ALL {
            let values: Vec<f64> = [1.7, 2.3, 0.9][..kind.parameter_names().len()].to_vec();
            let params = ShapeParameters::from_values(kind, &values).unwrap();
            let a = compute(&params).unwrap();
            let b = compute(&params).unwrap();
            assert_eq!(a.volume.to_bits(), b.volume.to_bits());
            assert_eq!(a.surface_area.to_bits(), b.surface_area.to_bits());
        }
    }

    #[test]
    fn test_cube_is_equal_sided_cuboid() {
        for s in [0.1, 1.0, 5.0, 123.456] {
            let c = cube(s).unwrap();
            let b = cuboid(s, s, s).unwrap();
            assert_relative_eq!(c.volume, b.volume, max_relative = 1e-12);
            assert_relative_eq!(c.surface_area, b.surface_area, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_sphere_volume_derivative_is_area() {
        let h = 1e-5;
        for r in [0.5, 1.0, 5.0, 20.0] {
            let dv = (sphere(r + h).unwrap().volume - sphere(r - h).unwrap().volume) / (2.0 * h);
            assert_relative_eq!(dv, sphere(r).unwrap().surface_area, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_flat_cylinder_is_two_caps() {
        let r = 3.0;
        let m = cylinder(r, 1e-9).unwrap();
        assert_relative_eq!(m.surface_area, 2.0 * PI * r * r, max_relative = 1e-6);
        assert!(m.volume < 1e-7);
    }

    #[test]
    fn test_rejects_bad_lengths() {
        assert_eq!(
            cube(0.0),
            Err(MetricsError::InvalidDimension {
                field: "side",
                value: 0.0
            })
        );
        assert_eq!(
            cone(4.0, -6.0),
            Err(MetricsError::InvalidDimension {
                field: "height",
                value: -6.0
            })
        );
        assert_eq!(
            triangular_prism(1.0, 1.0, f64::INFINITY),
            Err(MetricsError::InvalidDimension {
                field: "length",
                value: f64::INFINITY
            })
        );
        assert!(sphere(f64::NAN).is_err());
    }

    #[test]
    fn test_every_shape_rejects_each_zero_field() {
        for kind in ShapeKind::ALL {
            let names = kind.parameter_names();
            for (i, name) in names.iter().enumerate() {
                let mut values = vec![2.0; names.len()];
                values[i] = 0.0;
                let params = ShapeParameters::from_values(kind, &values).unwrap();
                assert_eq!(
                    compute(&params),
                    Err(MetricsError::InvalidDimension {
                        field: *name,
                        value: 0.0
                    }),
                    "{kind}.{name}"
                );
            }
        }
    }

    #[test]
    fn test_overflowing_results_are_rejected() {
        assert!(matches!(
            cube(1e103),
            Err(MetricsError::OutOfRange {
                kind: ShapeKind::Cube,
                volume,
                surface_area,
            }) if volume == f64::INFINITY && surface_area.is_finite()
        ));
        assert!(matches!(
            cuboid(1e200, 1e200, 1.0),
            Err(MetricsError::OutOfRange { kind: ShapeKind::Cuboid, .. })
        ));
        assert!(matches!(
            cone(1e200, 1e200),
            Err(MetricsError::OutOfRange { kind: ShapeKind::Cone, .. })
        ));
        assert!(cube(1e102).unwrap().volume.is_finite());
    }

    #[test]
    fn test_underflowing_results_are_rejected() {
        let err = sphere(1e-120).unwrap_err();
        match err {
            MetricsError::OutOfRange {
                kind,
                volume,
                surface_area,
            } => {
                assert_eq!(kind, ShapeKind::Sphere);
                assert_eq!(volume, 0.0);
                assert!(surface_area > 0.0);
            }
            other => panic!("expected out of range, got {other:?}"),
        }
        assert!(matches!(
            compute(&ShapeParameters::TriangularPrism {
                base: 1e-200,
                height: 1e-200,
                length: 1.0,
            }),
            Err(MetricsError::OutOfRange { .. })
        ));
        assert!(sphere(1e-100).is_ok());
    }
}
