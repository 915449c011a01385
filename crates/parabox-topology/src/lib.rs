use parabox_base::Tolerance;
use parabox_geometry::Point2;
use parabox_geometry::profiles::{OutlineSegment, RoundedRectangleProfile};
use std::collections::HashSet;
use thiserror::Error;
use truck_modeling::{InnerSpace, Rad, builder};

pub use truck_modeling::{Curve, Edge, Face, Point3, Shell, Solid, Surface, Vector3, Vertex, Wire};

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("no face with the requested normal")]
    NoMatchingFace,
    #[error("face selection is ambiguous: {0} candidates")]
    AmbiguousFace(usize),
    #[error(transparent)]
    Modeling(#[from] truck_modeling::errors::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub struct SolidBuilder;

impl SolidBuilder {
    /// Axis-aligned box centered on the origin in all three axes.
    pub fn box_solid(width: f64, depth: f64, height: f64) -> Result<Solid> {
        ensure_positive("width", width)?;
        ensure_positive("depth", depth)?;
        ensure_positive("height", height)?;

        let v = builder::vertex(Point3::new(-0.5 * width, -0.5 * depth, -0.5 * height));
        let e = builder::tsweep(&v, Vector3::unit_x() * width);
        let f = builder::tsweep(&e, Vector3::unit_y() * depth);
        Ok(builder::tsweep(&f, Vector3::unit_z() * height))
    }

    /// Box centered on the origin whose four vertical edges are rounded with a
    /// constant radius. The rounding is built into the swept profile, so every
    /// Z-parallel sharp edge of the plain box becomes a quarter cylinder.
    pub fn rounded_box(width: f64, depth: f64, height: f64, corner_radius: f64) -> Result<Solid> {
        ensure_positive("width", width)?;
        ensure_positive("depth", depth)?;
        ensure_positive("height", height)?;
        ensure_positive("corner_radius", corner_radius)?;
        if corner_radius >= 0.5 * width.min(depth) {
            return Err(Error::InvalidParameter(
                "corner_radius must be smaller than half of the shorter side".to_string(),
            ));
        }

        let profile = RoundedRectangleProfile {
            width,
            depth,
            corner_radius,
        };
        let z = -0.5 * height;
        let segments = profile.outline();
        let vertices: Vec<Vertex> = segments
            .iter()
            .map(|segment| builder::vertex(lift(segment.start(), z)))
            .collect();

        let mut edges = Vec::with_capacity(segments.len());
        for (i, segment) in segments.iter().enumerate() {
            let v0 = &vertices[i];
            let v1 = &vertices[(i + 1) % vertices.len()];
            let edge = match segment {
                OutlineSegment::Line { .. } => builder::line(v0, v1),
                OutlineSegment::Arc { transit, .. } => builder::circle_arc(v0, v1, lift(*transit, z)),
            };
            edges.push(edge);
        }

        let wire: Wire = edges.into();
        let face = builder::try_attach_plane(&[wire])?;
        Ok(builder::tsweep(&face, Vector3::unit_z() * height))
    }

    /// Cylinder swept along +Z from `center`.
    pub fn cylinder_z(center: Point3, radius: f64, height: f64) -> Result<Solid> {
        ensure_positive("radius", radius)?;
        ensure_positive("height", height)?;

        let v = builder::vertex(Point3::new(center.x + radius, center.y, center.z));
        let wire = builder::rsweep(
            &v,
            center,
            Vector3::unit_z(),
            Rad(std::f64::consts::PI * 2.0),
        );
        let face = builder::try_attach_plane(&[wire])?;
        Ok(builder::tsweep(&face, Vector3::unit_z() * height))
    }
}

/// Select the single planar face whose outward normal matches `direction`.
/// Errors if no face matches or if the selection is ambiguous.
pub fn face_with_normal(solid: &Solid, direction: Vector3) -> Result<Face> {
    let angular = Tolerance::default().angular;
    let dir = direction.normalize();
    let mut matches = Vec::new();
    for shell in solid.boundaries().iter() {
        for face in shell.face_iter() {
            if let Surface::Plane(plane) = face.oriented_surface() {
                if plane.normal().normalize().dot(dir) > 1.0 - angular {
                    matches.push(face.clone());
                }
            }
        }
    }
    if matches.len() > 1 {
        return Err(Error::AmbiguousFace(matches.len()));
    }
    matches.pop().ok_or(Error::NoMatchingFace)
}

/// Unique edges whose chord is parallel to `direction`. Closed edges (zero
/// chord) never match.
pub fn edges_parallel_to(solid: &Solid, direction: Vector3) -> Vec<Edge> {
    let angular = Tolerance::default().angular;
    let dir = direction.normalize();
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for shell in solid.boundaries().iter() {
        for edge in shell.edge_iter() {
            if !seen.insert(edge.id()) {
                continue;
            }
            let chord = edge.back().point() - edge.front().point();
            if chord.magnitude2() <= f64::EPSILON {
                continue;
            }
            if chord.normalize().dot(dir).abs() > 1.0 - angular {
                result.push(edge.clone());
            }
        }
    }
    result
}

/// Average of a face's boundary vertex positions.
pub fn boundary_centroid(face: &Face) -> Point3 {
    let mut sum = Vector3::new(0.0, 0.0, 0.0);
    let mut count = 0.0;
    for wire in face.boundaries() {
        for v in wire.vertex_iter() {
            let p = v.point();
            sum += Vector3::new(p.x, p.y, p.z);
            count += 1.0;
        }
    }
    if count > 0.0 {
        Point3::new(sum.x / count, sum.y / count, sum.z / count)
    } else {
        Point3::new(0.0, 0.0, 0.0)
    }
}

fn lift(p: Point2, z: f64) -> Point3 {
    Point3::new(p.x, p.y, z)
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value <= 0.0 {
        return Err(Error::InvalidParameter(format!("{name} must be > 0")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_solid_exists() -> Result<()> {
        let solid = SolidBuilder::box_solid(30.0, 20.0, 10.0)?;
        assert!(solid.face_iter().count() > 0);
        Ok(())
    }
}
