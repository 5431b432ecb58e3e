//! Saving export artifacts to disk.
//!
//! The filesystem stand-in for a browser's download trigger: one synchronous
//! write under the artifact's suggested name, nothing retained afterwards.

use std::path::{Path, PathBuf};

use crate::error::RenderResult;
use crate::export::ExportArtifact;

/// Write `artifact` into `dir` under its suggested file name.
///
/// The directory is created if missing. Returns the path of the written
/// file.
///
/// # Errors
///
/// Returns [`crate::RenderError::Io`] if the directory cannot be created or
/// the file cannot be written.
pub fn save_artifact(artifact: &ExportArtifact, dir: &Path) -> RenderResult<PathBuf> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    let path = dir.join(artifact.file_name);
    std::fs::write(&path, &artifact.bytes)?;
    tracing::debug!(path = %path.display(), bytes = artifact.bytes.len(), "saved artifact");
    Ok(path)
}
