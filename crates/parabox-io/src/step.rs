use crate::export::write_atomic;
use anyhow::Result;
use parabox_topology::Solid;
use std::path::Path;
use truck_stepio::out;

pub fn export_step(solid: &Solid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let compressed = solid.compress();
    let header = out::StepHeaderDescriptor {
        file_name: path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("model.step")
            .to_string(),
        organization_system: "parabox".to_string(),
        ..Default::default()
    };

    let step_string =
        out::CompleteStepDisplay::new(out::StepModel::from(&compressed), header).to_string();

    write_atomic(path, step_string.as_bytes())
}
