mod config_source;
mod seismap_app;

pub use config_source::{ConfigSource, LoadedConfig};
pub use seismap_app::{SeismapApp, SeismapOperation};
