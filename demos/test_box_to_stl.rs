use anyhow::Result;
use parabox_io::{DEFAULT_TESSELLATION_TOLERANCE, export_stl};
use parabox_shapeops::{DEFAULT_SHAPEOPS_TOLERANCE, TestBoxParams, test_box};

fn main() -> Result<()> {
    std::fs::create_dir_all("out")?;
    let solid = test_box(&TestBoxParams::default(), DEFAULT_SHAPEOPS_TOLERANCE)?;
    export_stl(&solid, "out/test-box.stl", DEFAULT_TESSELLATION_TOLERANCE)?;
    Ok(())
}
