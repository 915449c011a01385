use anyhow::Result;
use parabox_io::{
    DEFAULT_TESSELLATION_TOLERANCE, export_solid, export_step, export_stl, extents,
    triangulate_solid,
};
use parabox_shapeops::{DEFAULT_SHAPEOPS_TOLERANCE, TestBoxParams, test_box};
use parabox_topology::SolidBuilder;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let stamp = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(duration) => duration.as_nanos(),
        Err(_) => 0,
    };
    path.push(format!("parabox_{stamp}_{file_name}"));
    path
}

#[test]
fn export_step_creates_file() -> Result<()> {
    let solid = SolidBuilder::box_solid(30.0, 20.0, 10.0)?;
    let path = temp_path("box.step");

    export_step(&solid, &path)?;

    let metadata = fs::metadata(&path)?;
    assert!(metadata.len() > 0);

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn triangulation_produces_mesh() -> Result<()> {
    let solid = SolidBuilder::rounded_box(30.0, 20.0, 10.0, 2.0)?;
    let mesh = triangulate_solid(&solid, DEFAULT_TESSELLATION_TOLERANCE);
    assert!(!mesh.positions().is_empty());
    assert!(mesh.faces().len() > 0);
    Ok(())
}

#[test]
fn export_stl_writes_valid_binary_file() -> Result<()> {
    let solid = test_box(&TestBoxParams::default(), DEFAULT_SHAPEOPS_TOLERANCE)?;
    let path = temp_path("test-box.stl");

    export_stl(&solid, &path, DEFAULT_TESSELLATION_TOLERANCE)?;

    let bytes = fs::read(&path)?;
    assert!(bytes.len() > 84);
    let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize;
    assert_eq!(bytes.len(), 84 + count * 50);

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn identical_parameters_export_identical_bytes() -> Result<()> {
    let params = TestBoxParams::default();
    let path_a = temp_path("determinism-a.stl");
    let path_b = temp_path("determinism-b.stl");

    let solid_a = test_box(&params, DEFAULT_SHAPEOPS_TOLERANCE)?;
    export_stl(&solid_a, &path_a, DEFAULT_TESSELLATION_TOLERANCE)?;
    let solid_b = test_box(&params, DEFAULT_SHAPEOPS_TOLERANCE)?;
    export_stl(&solid_b, &path_b, DEFAULT_TESSELLATION_TOLERANCE)?;

    assert_eq!(fs::read(&path_a)?, fs::read(&path_b)?);

    let _ = fs::remove_file(&path_a);
    let _ = fs::remove_file(&path_b);
    Ok(())
}

#[test]
fn test_box_extents_match_input_dimensions() -> Result<()> {
    let params = TestBoxParams::default();
    let solid = test_box(&params, DEFAULT_SHAPEOPS_TOLERANCE)?;

    // Vertical-edge fillets round inward and the hole is interior, so the
    // bounding box equals the base dimensions.
    let (x, y, z) = extents(&solid, DEFAULT_TESSELLATION_TOLERANCE);
    assert!((x - params.width).abs() < 1.0e-6);
    assert!((y - params.depth).abs() < 1.0e-6);
    assert!((z - params.height).abs() < 1.0e-6);
    Ok(())
}

#[test]
fn missing_output_directory_fails_without_partial_file() -> Result<()> {
    let solid = SolidBuilder::box_solid(10.0, 10.0, 10.0)?;
    let mut dir = temp_path("no-such-dir");
    dir.push("box.stl");

    assert!(export_stl(&solid, &dir, DEFAULT_TESSELLATION_TOLERANCE).is_err());
    assert!(!dir.exists());
    Ok(())
}

#[test]
fn unknown_extension_is_rejected() -> Result<()> {
    let solid = SolidBuilder::box_solid(10.0, 10.0, 10.0)?;
    let path = temp_path("box.ply");

    assert!(export_solid(&solid, &path, DEFAULT_TESSELLATION_TOLERANCE).is_err());
    assert!(!path.exists());
    Ok(())
}

#[test]
fn export_solid_dispatches_on_extension() -> Result<()> {
    let solid = SolidBuilder::rounded_box(30.0, 20.0, 10.0, 2.0)?;

    let stl = temp_path("dispatch.stl");
    export_solid(&solid, &stl, DEFAULT_TESSELLATION_TOLERANCE)?;
    let stl_bytes = fs::read(&stl)?;
    assert!(stl_bytes.starts_with(b"parabox binary STL"));

    let obj = temp_path("dispatch.obj");
    export_solid(&solid, &obj, DEFAULT_TESSELLATION_TOLERANCE)?;
    let obj_text = fs::read_to_string(&obj)?;
    assert!(obj_text.contains("v "));

    let _ = fs::remove_file(&stl);
    let _ = fs::remove_file(&obj);
    Ok(())
}
