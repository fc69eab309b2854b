use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{MapConfig, SeismapError};

pub const DEFAULT_RENDERER_PROGRAM: &str = "kashima-mapper";

/// a map configuration document: the map parameters plus optional settings for
/// the renderer process that consumes them.
///
/// # Example
///
/// ```toml
/// latitude = -12.939727
/// longitude = 15.240812
/// radius_km = 2500
/// # ... remaining map parameters
///
/// [renderer]
/// program = "kashima-mapper"
/// args = ["--quiet"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfigFile {
    #[serde(flatten)]
    pub map: MapConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renderer: Option<RendererConfig>,
}

/// external program that renders the map. the program is called with `args`
/// followed by the path of the JSON request file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        RendererConfig {
            program: String::from(DEFAULT_RENDERER_PROGRAM),
            args: vec![],
        }
    }
}

impl MapConfigFile {
    /// parses a TOML document. `source_name` only appears in error messages.
    ///
    /// top-level keys that are not map or renderer parameters are rejected, so a
    /// misspelled parameter is not silently left out of the request.
    pub fn from_toml_str(toml_str: &str, source_name: &str) -> Result<MapConfigFile, SeismapError> {
        let parse_error = |error: String| SeismapError::ConfigParseError {
            source_name: source_name.to_string(),
            error,
        };
        let document: toml::Table =
            toml::from_str(toml_str).map_err(|e| parse_error(e.to_string()))?;
        let file: MapConfigFile =
            toml::from_str(toml_str).map_err(|e| parse_error(e.to_string()))?;

        // flattened records cannot deny unknown fields, so compare against what was read
        let known = serde_json::to_value(&file).map_err(|e| parse_error(e.to_string()))?;
        let unknown = document
            .keys()
            .filter(|key| known.get(key.as_str()).is_none())
            .map(|key| format!("'{key}'"))
            .collect_vec();
        if !unknown.is_empty() {
            return Err(parse_error(format!(
                "unknown parameter(s) {}",
                unknown.join(", ")
            )));
        }
        Ok(file)
    }

    pub fn read<P>(path: P) -> Result<MapConfigFile, SeismapError>
    where
        P: AsRef<Path>,
    {
        let filepath = path.as_ref().to_string_lossy().to_string();
        let contents =
            std::fs::read_to_string(path.as_ref()).map_err(|e| SeismapError::ReadError {
                filepath: filepath.clone(),
                error: e.to_string(),
            })?;
        log::debug!("read {} bytes of map configuration from '{filepath}'", contents.len());
        MapConfigFile::from_toml_str(&contents, &format!("'{filepath}'"))
    }

    /// the configured renderer, or the default renderer program
    pub fn renderer_or_default(&self) -> RendererConfig {
        self.renderer.clone().unwrap_or_default()
    }
}
