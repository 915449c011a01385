use crate::{export_obj, export_step, export_stl};
use anyhow::{Context, Result};
use parabox_base::Error as BaseError;
use parabox_topology::Solid;
use std::path::Path;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportFormat {
    Stl,
    Obj,
    Step,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> parabox_base::Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("stl") => Ok(Self::Stl),
            Some("obj") => Ok(Self::Obj),
            Some("step") | Some("stp") => Ok(Self::Step),
            _ => Err(BaseError::InvalidParameter(format!(
                "unsupported export extension in {}",
                path.display()
            ))),
        }
    }
}

/// Export a solid in the format implied by the output path's extension.
pub fn export_solid(solid: &Solid, path: impl AsRef<Path>, tol: f64) -> Result<()> {
    let path = path.as_ref();
    match ExportFormat::from_path(path)? {
        ExportFormat::Stl => export_stl(solid, path, tol),
        ExportFormat::Obj => export_obj(solid, path, tol),
        ExportFormat::Step => export_step(solid, path),
    }
}

/// Write the file in one shot through a sibling temp file, so a failed export
/// never leaves a partial file at the destination. The output directory must
/// already exist.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, bytes)
        .with_context(|| format!("create output file {}", path.display()))?;
    if let Err(err) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("finalize output file {}", path.display()));
    }
    Ok(())
}
