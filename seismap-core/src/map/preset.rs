use serde::{Deserialize, Serialize};

use super::{MapConfigFile, SeismapError};

const LONGONJO_TSF_TOML: &str = include_str!("preset/longonjo_tsf.toml");

/// map configurations shipped with the crate. relative paths in a preset are
/// resolved against the directory the map is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Longonjo tailings-storage facility, Angola
    LongonjoTsf,
}

impl Preset {
    pub const ALL: [Preset; 1] = [Preset::LongonjoTsf];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::LongonjoTsf => "longonjo-tsf",
        }
    }

    pub fn toml_source(&self) -> &'static str {
        match self {
            Preset::LongonjoTsf => LONGONJO_TSF_TOML,
        }
    }

    pub fn load(&self) -> Result<MapConfigFile, SeismapError> {
        MapConfigFile::from_toml_str(self.toml_source(), &format!("preset '{}'", self.name()))
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Preset {
    type Err = SeismapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| {
                let names = Preset::ALL.iter().map(|p| p.name()).collect::<Vec<_>>();
                SeismapError::InvalidUserInput(format!(
                    "unknown preset '{s}', expected one of: {}",
                    names.join(", ")
                ))
            })
    }
}
