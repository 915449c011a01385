use anyhow::Result;
use parabox_io::export_step;
use parabox_topology::SolidBuilder;

fn main() -> Result<()> {
    std::fs::create_dir_all("out")?;
    let solid = SolidBuilder::box_solid(30.0, 20.0, 10.0)?;
    export_step(&solid, "out/box.step")?;
    Ok(())
}
