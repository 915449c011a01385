pub mod export;
pub mod measure;
pub mod mesh;
pub mod step;
pub mod stl;

pub use export::{ExportFormat, export_solid};
pub use measure::{bounding_box, extents};
pub use mesh::{DEFAULT_TESSELLATION_TOLERANCE, export_obj, triangulate_solid};
pub use step::export_step;
pub use stl::{export_stl, stl_bytes};
