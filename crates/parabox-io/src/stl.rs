//! Binary STL serialization of a tessellated solid.
//!
//! Layout: 80-byte header, u32 LE triangle count, then 50 bytes per triangle
//! (3 x f32 normal, 3 x 3 x f32 vertices, u16 attribute count).

use crate::export::write_atomic;
use crate::mesh::triangulate_solid;
use anyhow::{Result, bail};
use parabox_topology::{Point3, Solid};
use std::path::Path;

const HEADER: &[u8] = b"parabox binary STL";

/// Serialize a polygon mesh into binary STL bytes. Quad faces are split into
/// two triangles; normals are recomputed from the triangle winding so the
/// output does not depend on stored vertex normals.
pub fn stl_bytes(mesh: &truck_polymesh::PolygonMesh) -> Vec<u8> {
    let positions = mesh.positions();
    let mut triangles: Vec<[usize; 3]> = Vec::new();
    for face in mesh.tri_faces() {
        triangles.push([face[0].pos, face[1].pos, face[2].pos]);
    }
    for quad in mesh.quad_faces() {
        triangles.push([quad[0].pos, quad[1].pos, quad[2].pos]);
        triangles.push([quad[0].pos, quad[2].pos, quad[3].pos]);
    }

    let mut buf = Vec::with_capacity(84 + triangles.len() * 50);
    buf.extend_from_slice(HEADER);
    buf.resize(80, 0u8);
    buf.extend_from_slice(&(triangles.len() as u32).to_le_bytes());

    for tri in &triangles {
        let v0 = positions[tri[0]];
        let v1 = positions[tri[1]];
        let v2 = positions[tri[2]];

        for c in face_normal(v0, v1, v2) {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        for v in [v0, v1, v2] {
            buf.extend_from_slice(&(v.x as f32).to_le_bytes());
            buf.extend_from_slice(&(v.y as f32).to_le_bytes());
            buf.extend_from_slice(&(v.z as f32).to_le_bytes());
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    buf
}

pub fn export_stl(solid: &Solid, path: impl AsRef<Path>, tol: f64) -> Result<()> {
    let path = path.as_ref();

    let mesh = triangulate_solid(solid, tol);
    if mesh.positions().is_empty() {
        bail!("triangulation produced empty mesh");
    }

    write_atomic(path, &stl_bytes(&mesh))
}

fn face_normal(v0: Point3, v1: Point3, v2: Point3) -> [f32; 3] {
    let e1 = [v1.x - v0.x, v1.y - v0.y, v1.z - v0.z];
    let e2 = [v2.x - v0.x, v2.y - v0.y, v2.z - v0.z];
    let nx = e1[1] * e2[2] - e1[2] * e2[1];
    let ny = e1[2] * e2[0] - e1[0] * e2[2];
    let nz = e1[0] * e2[1] - e1[1] * e2[0];
    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    if len > 1.0e-12 {
        [(nx / len) as f32, (ny / len) as f32, (nz / len) as f32]
    } else {
        [0.0, 0.0, 0.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parabox_topology::SolidBuilder;

    #[test]
    fn stl_bytes_have_binary_layout() {
        let solid = SolidBuilder::box_solid(10.0, 10.0, 10.0).unwrap();
        let mesh = triangulate_solid(&solid, crate::DEFAULT_TESSELLATION_TOLERANCE);
        let bytes = stl_bytes(&mesh);

        assert!(bytes.len() > 84);
        assert!(bytes.starts_with(HEADER));
        let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize;
        assert_eq!(bytes.len(), 84 + count * 50);
        // A box tessellates to at least two triangles per face.
        assert!(count >= 12);
    }
}
