use std::path::PathBuf;
use std::process::Command;

use serde::{Deserialize, Serialize};

use super::{MapRequest, RendererConfig, SeismapError};
use crate::util::fs::create_dirs;

/// file written to the output directory holding the serialized [`MapRequest`]
pub const REQUEST_FILENAME: &str = "map_request.json";

/// what a renderer reports back after writing a map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapResult {
    /// path of the rendered HTML map
    pub html: String,
    /// path of the CSV export of the filtered catalog events
    pub csv: String,
    pub event_count: u64,
}

/// renders a map from a request. implementations block until the map and data
/// files have been written.
pub trait MapBuilder {
    fn build_map(&self, request: &MapRequest) -> Result<MapResult, SeismapError>;
}

/// creates the output directory and writes the request there as pretty JSON,
/// returning the path of the request file.
pub fn write_request(request: &MapRequest) -> Result<PathBuf, SeismapError> {
    create_dirs(request.output_dir())?;
    let request_path = request.output_dir().join(REQUEST_FILENAME);
    let json = request.to_json_pretty()?;
    std::fs::write(&request_path, json).map_err(|e| SeismapError::WriteError {
        filepath: request_path.to_string_lossy().to_string(),
        error: e.to_string(),
    })?;
    log::debug!("wrote map request to '{}'", request_path.display());
    Ok(request_path)
}

/// delegates rendering to an external program. the program receives the path of
/// the request file as its last argument and must print a JSON [`MapResult`]
/// to standard output.
#[derive(Debug, Clone)]
pub struct CommandMapBuilder {
    program: String,
    args: Vec<String>,
}

impl CommandMapBuilder {
    pub fn new(program: String, args: Vec<String>) -> CommandMapBuilder {
        CommandMapBuilder { program, args }
    }
}

impl From<RendererConfig> for CommandMapBuilder {
    fn from(value: RendererConfig) -> Self {
        CommandMapBuilder::new(value.program, value.args)
    }
}

impl MapBuilder for CommandMapBuilder {
    fn build_map(&self, request: &MapRequest) -> Result<MapResult, SeismapError> {
        let request_path = write_request(request)?;
        log::info!(
            "running renderer '{}' with request '{}'",
            self.program,
            request_path.display()
        );
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&request_path)
            .output()
            .map_err(|e| SeismapError::RendererSpawn {
                program: self.program.clone(),
                error: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SeismapError::RendererFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_map_result(&stdout)
    }
}

/// reads the renderer's result object. renderers may log before printing the
/// result, so when the whole output is not a result object, the last object in
/// the output that reads as a result is used. the object may span several lines.
pub fn parse_map_result(stdout: &str) -> Result<MapResult, SeismapError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Err(SeismapError::RendererOutput(String::from(
            "renderer printed nothing to standard output",
        )));
    }
    match serde_json::from_str::<MapResult>(trimmed) {
        Ok(result) => Ok(result),
        Err(whole_err) => trimmed
            .rmatch_indices('{')
            .find_map(|(start, _)| {
                serde_json::Deserializer::from_str(&trimmed[start..])
                    .into_iter::<MapResult>()
                    .next()
                    .and_then(Result::ok)
            })
            .ok_or_else(|| {
                SeismapError::RendererOutput(format!(
                    "expected a JSON object with 'html', 'csv' and 'event_count': {whole_err}"
                ))
            }),
    }
}
