//! Binary STL export.
//!
//! Layout: 80-byte header, little-endian `u32` triangle count, then per
//! triangle a facet normal and three vertices as `f32` triples followed by a
//! `u16` attribute byte count.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use solidcalc_math::Tolerance;
use solidcalc_tessellate::TriangleMesh;

use crate::SolidError;

const HEADER_LEN: usize = 80;
const TRIANGLE_LEN: usize = 50;

/// Encode `mesh` as binary STL. `header` is truncated or space-padded to 80 bytes.
pub fn stl_bytes(mesh: &TriangleMesh, header: &str) -> Result<Vec<u8>, SolidError> {
    if mesh.is_empty() {
        return Err(SolidError::EmptyGeometry);
    }

    let num_triangles = mesh.num_triangles();
    let mut data = Vec::with_capacity(HEADER_LEN + 4 + num_triangles * TRIANGLE_LEN);

    let mut head = [b' '; HEADER_LEN];
    let text = header.as_bytes();
    let n = text.len().min(HEADER_LEN);
    head[..n].copy_from_slice(&text[..n]);
    data.extend_from_slice(&head);
    data.extend_from_slice(&(num_triangles as u32).to_le_bytes());

    for [v0, v1, v2] in mesh.triangles() {
        let n = (v1 - v0).cross(&(v2 - v0));
        let len = n.norm();
        let normal = if Tolerance::DEFAULT.is_zero(len) {
            [0.0f32, 0.0, 1.0]
        } else {
            [(n.x / len) as f32, (n.y / len) as f32, (n.z / len) as f32]
        };

        for c in normal {
            data.extend_from_slice(&c.to_le_bytes());
        }
        for v in [v0, v1, v2] {
            for c in [v.x, v.y, v.z] {
                data.extend_from_slice(&(c as f32).to_le_bytes());
            }
        }
        data.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(data)
}

/// Write `mesh` as a binary STL file at `path`.
pub fn write_stl(mesh: &TriangleMesh, header: &str, path: &Path) -> Result<(), SolidError> {
    let bytes = stl_bytes(mesh, header)?;
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(&bytes)?;
    w.flush()?;
    tracing::debug!(
        path = %path.display(),
        triangles = mesh.num_triangles(),
        "wrote STL"
    );
    Ok(())
}
