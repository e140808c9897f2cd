//! Filesystem-based output service implementation

use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::generation::{Artifact, OutputService};

/// Output service that writes artifacts to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

impl OutputService for FileSystemOutputService {
    fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<()> {
        for artifact in artifacts {
            // Create parent directory if needed
            if let Some(parent) = artifact.path.parent() {
                self.ensure_directory(parent)?;
            }

            // Write file content
            let mut file = fs::File::create(&artifact.path).map_err(|e| {
                Error::output(format!(
                    "Failed to create file {}: {}",
                    artifact.path.display(),
                    e
                ))
            })?;

            file.write_all(artifact.content.as_bytes()).map_err(|e| {
                Error::output(format!(
                    "Failed to write file {}: {}",
                    artifact.path.display(),
                    e
                ))
            })?;

            file.flush().map_err(|e| {
                Error::output(format!(
                    "Failed to flush file {}: {}",
                    artifact.path.display(),
                    e
                ))
            })?;

            debug!(path = %artifact.path.display(), bytes = artifact.content.len(), "Wrote artifact");
        }

        Ok(())
    }

    fn ensure_directory(&self, path: &Path) -> Result<()> {
        // `Path::parent` yields "" for bare file names
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(path).map_err(|e| {
            Error::output(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
