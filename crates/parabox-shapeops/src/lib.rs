use parabox_topology::{
    Point3, Solid, SolidBuilder, Vector3, boundary_centroid, edges_parallel_to, face_with_normal,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SHAPEOPS_TOLERANCE: f64 = 0.05;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("boolean operation failed")]
    BooleanFailed,
    #[error(transparent)]
    Topology(#[from] parabox_topology::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn difference(base: &Solid, tool: &Solid, tol: f64) -> Result<Solid> {
    if tol <= 0.0 {
        return Err(Error::InvalidParameter("tolerance must be > 0".to_string()));
    }

    let mut inverted_tool = tool.clone();
    inverted_tool.not();

    let result = truck_shapeops::and(base, &inverted_tool, tol).ok_or(Error::BooleanFailed)?;
    Ok(result)
}

/// Named dimensions of the test box, all in millimeters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestBoxParams {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub fillet_radius: f64,
    pub hole_diameter: f64,
}

impl Default for TestBoxParams {
    fn default() -> Self {
        Self {
            width: 30.0,
            depth: 20.0,
            height: 10.0,
            fillet_radius: 2.0,
            hole_diameter: 8.0,
        }
    }
}

impl TestBoxParams {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("width", self.width)?;
        ensure_positive("depth", self.depth)?;
        ensure_positive("height", self.height)?;
        ensure_positive("fillet_radius", self.fillet_radius)?;
        ensure_positive("hole_diameter", self.hole_diameter)?;

        let shorter = self.width.min(self.depth);
        if self.fillet_radius >= 0.5 * shorter {
            return Err(Error::InvalidParameter(
                "fillet_radius must be smaller than half of min(width, depth)".to_string(),
            ));
        }
        if self.hole_diameter >= shorter {
            return Err(Error::InvalidParameter(
                "hole_diameter must be smaller than width and depth".to_string(),
            ));
        }
        Ok(())
    }
}

/// Build the test box: a centered rectangular solid with filleted vertical
/// edges and a through-hole drilled into the +Z face.
pub fn test_box(params: &TestBoxParams, tol: f64) -> Result<Solid> {
    if tol <= 0.0 {
        return Err(Error::InvalidParameter("tolerance must be > 0".to_string()));
    }
    params.validate()?;

    let base = SolidBuilder::rounded_box(
        params.width,
        params.depth,
        params.height,
        params.fillet_radius,
    )?;

    // The hole is centered on the top face and cut through the full
    // thickness, with clearance on both ends so the boolean is transversal.
    let top = face_with_normal(&base, Vector3::unit_z())?;
    let center = boundary_centroid(&top);
    let radius = params.hole_diameter * 0.5;
    let clearance = params.height * 0.1;
    let start = Point3::new(center.x, center.y, -0.5 * params.height - clearance);
    let tool = SolidBuilder::cylinder_z(start, radius, params.height + 2.0 * clearance)?;

    let result = difference(&base, &tool, tol)?;
    if edges_parallel_to(&result, Vector3::unit_z()).is_empty() {
        return Err(Error::BooleanFailed);
    }
    Ok(result)
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value <= 0.0 {
        return Err(Error::InvalidParameter(format!("{name} must be > 0")));
    }
    Ok(())
}
