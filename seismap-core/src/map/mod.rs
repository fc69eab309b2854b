mod assembler;
mod builder;
mod config;
mod config_file;
mod error;
mod fault_style;
mod magnitude_bins;
mod preset;
mod quantity;
mod request;
mod style_table;
mod summary;

pub mod faults;
pub mod validation;

pub use assembler::{assemble_and_build, check_request, preflight};
pub use builder::{
    parse_map_result, write_request, CommandMapBuilder, MapBuilder, MapResult, REQUEST_FILENAME,
};
pub use config::{
    AreaOfInterest, DataOptions, FaultStyle, HeatmapConfig, LayerVisibility, MagnitudeRange,
    MapBehavior, MapConfig, ProjectMetadata, VisualStyle, ZoomConfig,
};
pub use config_file::{MapConfigFile, RendererConfig, DEFAULT_RENDERER_PROGRAM};
pub use error::SeismapError;
pub use fault_style::{FaultStyleTable, FaultTypeStyle};
pub use magnitude_bins::{bin_label, MagnitudeBins};
pub use preset::Preset;
pub use quantity::Quantity;
pub use request::MapRequest;
pub use style_table::{is_hex_color, StyleKeyReport, StyleTable, StyleTableMismatch};
pub use summary::{group_thousands, MapSummary};
pub use validation::{Finding, Severity, ValidationReport};
