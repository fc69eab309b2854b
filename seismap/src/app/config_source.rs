use std::path::{Path, PathBuf};

use clap::Args;
use seismap_core::map::{MapConfigFile, MapRequest, Preset, SeismapError};
use serde::{Deserialize, Serialize};

/// where the map configuration comes from, and what its relative paths resolve against
#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct ConfigSource {
    /// TOML map configuration file. when omitted, the preset is used
    #[arg(short, long)]
    pub config: Option<String>,
    /// built-in map configuration, used when no configuration file is given
    #[arg(short, long, value_parser = parse_preset, default_value = "longonjo-tsf")]
    pub preset: Preset,
    /// directory that relative output and fault paths resolve against. defaults
    /// to the directory of the configuration file, or the working directory
    /// when a preset is used
    #[arg(short, long)]
    pub root: Option<String>,
}

/// a map configuration document along with its path resolution root
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub file: MapConfigFile,
    pub root: PathBuf,
}

impl ConfigSource {
    pub fn load(&self) -> Result<LoadedConfig, SeismapError> {
        let (file, default_root, description) = match &self.config {
            Some(config_path) => {
                let file = MapConfigFile::read(config_path)?;
                let parent = Path::new(config_path)
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                (file, parent, format!("'{config_path}'"))
            }
            None => (
                self.preset.load()?,
                PathBuf::from("."),
                format!("preset '{}'", self.preset),
            ),
        };
        let root_dir = self.root.as_ref().map(PathBuf::from).unwrap_or(default_root);
        let root = std::path::absolute(&root_dir).map_err(|e| {
            SeismapError::InvalidUserInput(format!(
                "unable to resolve root directory '{}': {e}",
                root_dir.display()
            ))
        })?;
        log::info!(
            "loaded map configuration from {description}, resolving paths against '{}'",
            root.display()
        );
        Ok(LoadedConfig { file, root })
    }
}

impl LoadedConfig {
    pub fn request(&self) -> MapRequest {
        MapRequest::resolve(&self.file.map, &self.root)
    }
}

fn parse_preset(s: &str) -> Result<Preset, String> {
    s.parse::<Preset>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod test {
    use super::*;
    use seismap_core::map::RendererConfig;

    fn preset_source(root: Option<&Path>) -> ConfigSource {
        ConfigSource {
            config: None,
            preset: Preset::LongonjoTsf,
            root: root.map(|r| r.to_string_lossy().to_string()),
        }
    }

    #[test]
    fn test_preset_resolves_against_root() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = preset_source(Some(dir.path())).load().unwrap();
        let request = loaded.request();
        assert_eq!(request.output_dir(), dir.path());
        assert_eq!(
            request.faults_files()[0],
            dir.path().join("faults").join("Angola1982.geojson")
        );
    }

    #[test]
    fn test_config_file_resolves_against_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut toml_str = Preset::LongonjoTsf.toml_source().replace(
            "output_dir = \".\"",
            "output_dir = \"out\"",
        );
        toml_str.push_str("\n[renderer]\nprogram = \"render-map\"\nargs = [\"--offline\"]\n");
        let config_path = dir.path().join("longonjo.toml");
        std::fs::write(&config_path, toml_str).unwrap();

        let source = ConfigSource {
            config: Some(config_path.to_string_lossy().to_string()),
            preset: Preset::LongonjoTsf,
            root: None,
        };
        let loaded = source.load().unwrap();
        assert_eq!(loaded.request().output_dir(), dir.path().join("out"));
        assert_eq!(
            loaded.file.renderer_or_default(),
            RendererConfig {
                program: String::from("render-map"),
                args: vec![String::from("--offline")],
            }
        );
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = ConfigSource {
            config: Some(dir.path().join("nope.toml").to_string_lossy().to_string()),
            preset: Preset::LongonjoTsf,
            root: None,
        };
        assert!(matches!(source.load(), Err(SeismapError::ReadError { .. })));
    }

    #[test]
    fn test_descending_bins_fail_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let toml_str = Preset::LongonjoTsf.toml_source().replace(
            "mag_bins = [3.5, 4.5,",
            "mag_bins = [4.5, 3.5,",
        );
        let config_path = dir.path().join("bad.toml");
        std::fs::write(&config_path, toml_str).unwrap();
        let source = ConfigSource {
            config: Some(config_path.to_string_lossy().to_string()),
            preset: Preset::LongonjoTsf,
            root: None,
        };
        match source.load() {
            Err(SeismapError::ConfigParseError { error, .. }) => {
                assert!(error.contains("strictly ascending"), "{error}")
            }
            other => panic!("expected parse error, found {other:?}"),
        }
    }
}
