use crate::mesh::triangulate_solid;
use parabox_topology::{Point3, Solid};
use truck_base::bounding_box::BoundingBox;
use truck_meshalgo::prelude::*;

/// Axis-aligned bounding box of the tessellated solid. The planar faces of a
/// swept profile tessellate with vertices exactly on the extreme planes, so
/// the box is exact for the solids built here.
pub fn bounding_box(solid: &Solid, tol: f64) -> BoundingBox<Point3> {
    triangulate_solid(solid, tol).bounding_box()
}

/// Extent of the solid along each axis, `(x, y, z)`.
pub fn extents(solid: &Solid, tol: f64) -> (f64, f64, f64) {
    let bdd = bounding_box(solid, tol);
    let (min, max) = (bdd.min(), bdd.max());
    (max.x - min.x, max.y - min.y, max.z - min.z)
}
