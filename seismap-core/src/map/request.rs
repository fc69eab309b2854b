use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{MapConfig, SeismapError};

/// a map configuration whose relative paths have been resolved against a root
/// directory. this is the record handed to a [`super::MapBuilder`]; it
/// serializes to the flat set of named parameters the renderer accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MapRequest(MapConfig);

impl MapRequest {
    /// resolves `output_dir` and every entry of `faults_files` against `root`.
    /// absolute paths are kept as they are.
    pub fn resolve(config: &MapConfig, root: &Path) -> MapRequest {
        let mut resolved = config.clone();
        resolved.data.output_dir = resolve_path(root, &config.data.output_dir);
        resolved.data.faults_files = config
            .data
            .faults_files
            .iter()
            .map(|p| resolve_path(root, p))
            .collect();
        log::debug!(
            "resolved output directory '{}' and {} fault file(s) against root '{}'",
            resolved.data.output_dir.display(),
            resolved.data.faults_files.len(),
            root.display()
        );
        MapRequest(resolved)
    }

    pub fn config(&self) -> &MapConfig {
        &self.0
    }

    pub fn output_dir(&self) -> &Path {
        &self.0.data.output_dir
    }

    pub fn faults_files(&self) -> &[PathBuf] {
        &self.0.data.faults_files
    }

    pub fn to_json_pretty(&self) -> Result<String, SeismapError> {
        serde_json::to_string_pretty(self).map_err(|e| SeismapError::SerializeError(e.to_string()))
    }
}

fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else if path == Path::new(".") {
        root.to_path_buf()
    } else {
        root.join(path)
    }
}
