//! Measurements taken directly from a [`TriangleMesh`].

use solidcalc_math::{Point3, Transform};

use crate::TriangleMesh;

/// Signed volume of the mesh (uses the divergence theorem).
///
/// Positive for closed meshes with outward winding.
pub fn mesh_volume(mesh: &TriangleMesh) -> f64 {
    let vol: f64 = mesh
        .triangles()
        .map(|[v0, v1, v2]| v0.coords.dot(&v1.coords.cross(&v2.coords)))
        .sum();
    vol / 6.0
}

/// Total surface area of the mesh.
pub fn mesh_surface_area(mesh: &TriangleMesh) -> f64 {
    mesh.triangles()
        .map(|[v0, v1, v2]| (v1 - v0).cross(&(v2 - v0)).norm() / 2.0)
        .sum()
}

/// Axis-aligned bounding box as `(min, max)`, or `None` for a mesh without
/// vertices.
pub fn bounding_box(mesh: &TriangleMesh) -> Option<(Point3, Point3)> {
    if mesh.num_vertices() == 0 {
        return None;
    }
    let mut min = [f64::MAX; 3];
    let mut max = [f64::MIN; 3];
    for chunk in mesh.vertices.chunks_exact(3) {
        for i in 0..3 {
            let v = chunk[i] as f64;
            min[i] = min[i].min(v);
            max[i] = max[i].max(v);
        }
    }
    Some((Point3::from(min), Point3::from(max)))
}

/// Translate the mesh so its bounding-box centre sits at the origin.
pub fn centered(mesh: &TriangleMesh) -> TriangleMesh {
    match bounding_box(mesh) {
        Some((min, max)) => {
            let c = (min.coords + max.coords) / 2.0;
            mesh.transformed(&Transform::translation(-c.x, -c.y, -c.z))
        }
        None => mesh.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tessellate, TessellationParams};
    use approx::assert_relative_eq;
    use solidcalc_metrics::ShapeParameters;

    fn cuboid() -> TriangleMesh {
        tessellate(
            &ShapeParameters::Cuboid {
                length: 10.0,
                width: 20.0,
                height: 30.0,
            },
            &TessellationParams::default(),
        )
    }

    #[test]
    fn test_volume_and_area() {
        let mesh = cuboid();
        assert_relative_eq!(mesh_volume(&mesh), 6000.0, max_relative = 1e-9);
        assert_relative_eq!(mesh_surface_area(&mesh), 2200.0, max_relative = 1e-9);
    }

    #[test]
    fn test_bounding_box() {
        let (min, max) = bounding_box(&cuboid()).unwrap();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(10.0, 20.0, 30.0));
        assert!(bounding_box(&TriangleMesh::new()).is_none());
    }

    #[test]
    fn test_centered_keeps_measurements() {
        let mesh = cuboid();
        let moved = centered(&mesh);
        let (min, max) = bounding_box(&moved).unwrap();
        assert_eq!(min, Point3::new(-5.0, -10.0, -15.0));
        assert_eq!(max, Point3::new(5.0, 10.0, 15.0));
        assert_relative_eq!(mesh_volume(&moved), mesh_volume(&mesh), max_relative = 1e-9);
        assert_eq!(moved.indices, mesh.indices);
    }

    #[test]
    fn test_empty_mesh() {
        let empty = TriangleMesh::new();
        assert_eq!(mesh_volume(&empty), 0.0);
        assert_eq!(mesh_surface_area(&empty), 0.0);
        assert_eq!(centered(&empty), empty);
    }
}
