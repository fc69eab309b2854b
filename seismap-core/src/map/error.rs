use super::validation::ValidationReport;

#[derive(thiserror::Error, Debug)]
pub enum SeismapError {
    #[error("failed reading '{filepath}': {error}")]
    ReadError { filepath: String, error: String },
    #[error("failure writing '{filepath}': {error}")]
    WriteError { filepath: String, error: String },
    #[error("failure parsing map configuration from {source_name}: {error}")]
    ConfigParseError { source_name: String, error: String },
    #[error("invalid magnitude bins: {0}")]
    InvalidMagnitudeBins(String),
    #[error("{0}")]
    InvalidUserInput(String),
    #[error("map configuration failed validation with {} error(s)", .0.error_count())]
    ValidationFailed(ValidationReport),
    #[error("failed reading fault file '{filepath}': {error}")]
    FaultFileRead { filepath: String, error: String },
    #[error("fault file '{filepath}' is not valid GeoJSON: {error}")]
    FaultFileParse { filepath: String, error: String },
    #[error("failure serializing map request: {0}")]
    SerializeError(String),
    #[error("failed to launch renderer '{program}': {error}")]
    RendererSpawn { program: String, error: String },
    #[error("renderer '{program}' exited with {status}: {stderr}")]
    RendererFailed {
        program: String,
        status: String,
        stderr: String,
    },
    #[error("unable to read map result from renderer output: {0}")]
    RendererOutput(String),
}
