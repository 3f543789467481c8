#![warn(missing_docs)]

//! Triangle meshes for solidcalc shapes.
//!
//! Samples each [`ShapeParameters`] variant parametrically into a closed
//! triangle mesh for plotting and STL export. Every face is wound
//! counter-clockwise when seen from outside the solid, so the signed volume
//! from [`mesh_volume`] is positive.
//!
//! Placement:
//! - cube and cuboid: corner at the origin, extending along +X, +Y, +Z
//! - sphere: centred at the origin
//! - cylinder, cone and pyramid: base on `z = 0`, centred on the Z axis
//! - triangular prism: triangle in the XZ plane (base along X, apex at
//!   `z = height`), extruded along +Y

use std::f64::consts::PI;

use solidcalc_math::{Point3, Transform};
use solidcalc_metrics::ShapeParameters;

mod measure;

pub use measure::{bounding_box, centered, mesh_surface_area, mesh_volume};

/// Output triangle mesh for rendering and export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]` (f32).
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]` (u32).
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// True if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Vertex `i` as a point.
    pub fn vertex(&self, i: usize) -> Point3 {
        let v = &self.vertices[i * 3..i * 3 + 3];
        Point3::new(v[0] as f64, v[1] as f64, v[2] as f64)
    }

    /// Iterate over triangles as vertex-position triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertex(tri[0] as usize),
                self.vertex(tri[1] as usize),
                self.vertex(tri[2] as usize),
            ]
        })
    }

    /// Merge another mesh into this one.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.num_vertices() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
    }

    /// Copy of this mesh with every vertex mapped through `transform`.
    ///
    /// Winding is preserved, so `transform` must not mirror.
    pub fn transformed(&self, transform: &Transform) -> TriangleMesh {
        let mut out = TriangleMesh {
            vertices: Vec::with_capacity(self.vertices.len()),
            indices: self.indices.clone(),
        };
        for i in 0..self.num_vertices() {
            let p = transform.apply_point(&self.vertex(i));
            out.vertices
                .extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
        }
        out
    }

    fn push_vertex(&mut self, p: Point3) -> u32 {
        let idx = self.num_vertices() as u32;
        self.vertices
            .extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
        idx
    }

    /// Append a convex planar polygon as a triangle fan.
    ///
    /// `verts` must be counter-clockwise seen from outside.
    fn push_polygon(&mut self, verts: &[Point3]) {
        let first = self.num_vertices() as u32;
        for v in verts {
            self.push_vertex(*v);
        }
        for i in 1..(verts.len() as u32 - 1) {
            self.indices
                .extend_from_slice(&[first, first + i, first + i + 1]);
        }
    }
}

/// Tessellation parameters controlling mesh quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessellationParams {
    /// Number of segments around circular features.
    pub circle_segments: u32,
    /// Number of latitude bands for spheres.
    pub latitude_segments: u32,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            circle_segments: 32,
            latitude_segments: 16,
        }
    }
}

impl TessellationParams {
    /// Upper bound on segments around a circle. A sphere at this count is
    /// about half a million vertices.
    pub const MAX_SEGMENTS: u32 = 1024;

    /// Create params from a segment count hint (used for circular features),
    /// clamped to `3..=MAX_SEGMENTS`.
    pub fn from_segments(segments: u32) -> Self {
        let circle_segments = segments.clamp(3, Self::MAX_SEGMENTS);
        Self {
            circle_segments,
            latitude_segments: (circle_segments / 2).max(4),
        }
    }
}

/// Tessellate a shape into a closed triangle mesh.
///
/// Lengths are not validated here; callers pass parameters that already
/// went through [`ShapeParameters::validate`].
pub fn tessellate(shape: &ShapeParameters, params: &TessellationParams) -> TriangleMesh {
    let n_circ = params.circle_segments.clamp(3, TessellationParams::MAX_SEGMENTS) as usize;
    let n_lat = params.latitude_segments.clamp(2, TessellationParams::MAX_SEGMENTS) as usize;

    match *shape {
        ShapeParameters::Cube { side } => tessellate_box(side, side, side),
        ShapeParameters::Cuboid {
            length,
            width,
            height,
        } => tessellate_box(length, width, height),
        ShapeParameters::Sphere { radius } => {
            tessellate_unit_sphere(n_circ, n_lat).transformed(&Transform::uniform_scale(radius))
        }
        ShapeParameters::Cylinder { radius, height } => {
            tessellate_round(radius, radius, height, n_circ)
        }
        ShapeParameters::Cone { radius, height } => tessellate_round(radius, 0.0, height, n_circ),
        ShapeParameters::Pyramid {
            length,
            width,
            height,
        } => tessellate_pyramid(length, width, height),
        ShapeParameters::TriangularPrism {
            base,
            height,
            length,
        } => tessellate_triangular_prism(base, height, length),
    }
}

/// Axis-aligned box with one corner at the origin.
///
/// Vertex layout:
/// ```text
///     v4----v5
///    /|    /|
///   v7----v6|    z
///   | v0--|-v1   | y
///   |/    |/     |/
///   v3----v2     +---x
/// ```
fn tessellate_box(sx: f64, sy: f64, sz: f64) -> TriangleMesh {
    let v0 = Point3::new(0.0, 0.0, 0.0);
    let v1 = Point3::new(sx, 0.0, 0.0);
    let v2 = Point3::new(sx, sy, 0.0);
    let v3 = Point3::new(0.0, sy, 0.0);
    let v4 = Point3::new(0.0, 0.0, sz);
    let v5 = Point3::new(sx, 0.0, sz);
    let v6 = Point3::new(sx, sy, sz);
    let v7 = Point3::new(0.0, sy, sz);

    let faces = [
        [v0, v3, v2, v1], // bottom, -Z
        [v4, v5, v6, v7], // top, +Z
        [v0, v1, v5, v4], // front, -Y
        [v2, v3, v7, v6], // back, +Y
        [v0, v4, v7, v3], // left, -X
        [v1, v2, v6, v5], // right, +X
    ];

    let mut mesh = TriangleMesh::new();
    for face in &faces {
        mesh.push_polygon(face);
    }
    mesh
}

/// UV sphere of radius 1 centred at the origin.
fn tessellate_unit_sphere(n_lon: usize, n_lat: usize) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();

    let south = mesh.push_vertex(Point3::new(0.0, 0.0, -1.0));

    // Interior latitude bands, each with a duplicated seam vertex.
    for j in 1..n_lat {
        let v = -PI / 2.0 + PI * (j as f64 / n_lat as f64);
        let (sin_v, cos_v) = v.sin_cos();
        for i in 0..=n_lon {
            let u = 2.0 * PI * (i as f64 / n_lon as f64);
            let (sin_u, cos_u) = u.sin_cos();
            mesh.push_vertex(Point3::new(cos_v * cos_u, cos_v * sin_u, sin_v));
        }
    }

    let north = mesh.push_vertex(Point3::new(0.0, 0.0, 1.0));
    let stride = (n_lon + 1) as u32;

    for i in 0..n_lon as u32 {
        mesh.indices.extend_from_slice(&[south, 1 + i + 1, 1 + i]);
    }

    for j in 0..(n_lat - 2) as u32 {
        let band = 1 + j * stride;
        let next = band + stride;
        for i in 0..n_lon as u32 {
            let (bl, br) = (band + i, band + i + 1);
            let (tl, tr) = (next + i, next + i + 1);
            mesh.indices.extend_from_slice(&[bl, br, tl]);
            mesh.indices.extend_from_slice(&[br, tr, tl]);
        }
    }

    let last = 1 + (n_lat - 2) as u32 * stride;
    for i in 0..n_lon as u32 {
        mesh.indices.extend_from_slice(&[north, last + i, last + i + 1]);
    }

    mesh
}

/// Solid of revolution about Z: a cylinder when the radii match, a pointed
/// cone when `radius_top` is zero.
fn tessellate_round(radius_bottom: f64, radius_top: f64, height: f64, n_circ: usize) -> TriangleMesh {
    let mut mesh = tessellate_lateral(radius_bottom, radius_top, height, n_circ);
    mesh.merge(&tessellate_disk(radius_bottom, 0.0, n_circ, true));
    if radius_top > 0.0 {
        mesh.merge(&tessellate_disk(radius_top, height, n_circ, false));
    }
    mesh
}

/// Lateral band between two circles, collapsing to an apex when the top
/// radius is 0. The bottom radius must be positive.
fn tessellate_lateral(radius_bottom: f64, radius_top: f64, height: f64, n_circ: usize) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    let mut rows: Vec<Vec<u32>> = Vec::with_capacity(2);

    for (r, z) in [(radius_bottom, 0.0), (radius_top, height)] {
        let mut row = Vec::new();
        if r <= 0.0 {
            row.push(mesh.push_vertex(Point3::new(0.0, 0.0, z)));
        } else {
            for i in 0..=n_circ {
                let u = 2.0 * PI * (i as f64 / n_circ as f64);
                row.push(mesh.push_vertex(Point3::new(r * u.cos(), r * u.sin(), z)));
            }
        }
        rows.push(row);
    }

    let (bot, top) = (&rows[0], &rows[1]);
    if top.len() == 1 {
        let apex = top[0];
        for i in 0..n_circ {
            mesh.indices.extend_from_slice(&[bot[i], bot[i + 1], apex]);
        }
    } else {
        for i in 0..n_circ {
            let (bl, br, tl, tr) = (bot[i], bot[i + 1], top[i], top[i + 1]);
            mesh.indices.extend_from_slice(&[bl, br, tl]);
            mesh.indices.extend_from_slice(&[br, tr, tl]);
        }
    }

    mesh
}

/// Planar disk at height `z`, facing +Z (or -Z when `flip` is set).
fn tessellate_disk(radius: f64, z: f64, segments: usize, flip: bool) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();

    let center = mesh.push_vertex(Point3::new(0.0, 0.0, z));
    for i in 0..=segments {
        let u = 2.0 * PI * (i as f64 / segments as f64);
        mesh.push_vertex(Point3::new(radius * u.cos(), radius * u.sin(), z));
    }

    for i in 0..segments as u32 {
        let (v1, v2) = (i + 1, i + 2);
        if flip {
            mesh.indices.extend_from_slice(&[center, v2, v1]);
        } else {
            mesh.indices.extend_from_slice(&[center, v1, v2]);
        }
    }

    mesh
}

/// Right pyramid with its `length × width` base centred on the Z axis.
fn tessellate_pyramid(length: f64, width: f64, height: f64) -> TriangleMesh {
    let (hx, hy) = (length / 2.0, width / 2.0);
    let b0 = Point3::new(-hx, -hy, 0.0);
    let b1 = Point3::new(hx, -hy, 0.0);
    let b2 = Point3::new(hx, hy, 0.0);
    let b3 = Point3::new(-hx, hy, 0.0);
    let apex = Point3::new(0.0, 0.0, height);

    let mut mesh = TriangleMesh::new();
    mesh.push_polygon(&[b0, b3, b2, b1]);
    for (a, b) in [(b0, b1), (b1, b2), (b2, b3), (b3, b0)] {
        mesh.push_polygon(&[a, b, apex]);
    }
    mesh
}

/// Isosceles triangle (base along X, apex above its midpoint) extruded along +Y.
fn tessellate_triangular_prism(base: f64, height: f64, length: f64) -> TriangleMesh {
    let t0 = Point3::new(0.0, 0.0, 0.0);
    let t1 = Point3::new(base, 0.0, 0.0);
    let t2 = Point3::new(base / 2.0, 0.0, height);
    let [b0, b1, b2] = [t0, t1, t2].map(|p| Point3::new(p.x, length, p.z));

    let mut mesh = TriangleMesh::new();
    mesh.push_polygon(&[t0, t1, t2]); // front end, -Y
    mesh.push_polygon(&[b0, b2, b1]); // back end, +Y
    mesh.push_polygon(&[t0, b0, b1, t1]); // floor, -Z
    mesh.push_polygon(&[t1, b1, b2, t2]); // right slope
    mesh.push_polygon(&[t2, b2, b0, t0]); // left slope
    mesh
}
