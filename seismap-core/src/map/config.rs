use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{FaultStyleTable, MagnitudeBins, Quantity, StyleKeyReport, StyleTable};

/// the complete parameter record for one seismic-hazard map. the sub-records
/// group related parameters; they are flattened so that the serialized form is
/// the flat set of named parameters the map renderer accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(flatten)]
    pub area: AreaOfInterest,
    #[serde(flatten)]
    pub magnitude: MagnitudeRange,
    #[serde(flatten)]
    pub project: ProjectMetadata,
    #[serde(flatten)]
    pub layers: LayerVisibility,
    #[serde(flatten)]
    pub zoom: ZoomConfig,
    #[serde(flatten)]
    pub behavior: MapBehavior,
    #[serde(flatten)]
    pub style: VisualStyle,
    #[serde(flatten)]
    pub heatmap: HeatmapConfig,
    #[serde(flatten)]
    pub faults: FaultStyle,
    #[serde(flatten)]
    pub data: DataOptions,
}

/// circular area of interest around the facility
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaOfInterest {
    /// signed degrees, negative south of the equator
    pub latitude: f64,
    /// signed degrees, negative west of the prime meridian
    pub longitude: f64,
    pub radius_km: Quantity,
}

/// magnitude filter applied to catalog events
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeRange {
    pub vmin: f64,
    pub vmax: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub project_name: String,
    pub client: String,
}

/// which layers are switched on when the map first opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerVisibility {
    pub show_events_default: bool,
    pub show_cluster_default: bool,
    pub show_heatmap_default: bool,
    pub show_beachballs_default: bool,
    pub show_faults_default: bool,
    pub show_epicentral_circles_default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomConfig {
    pub base_zoom_level: u8,
    pub min_zoom_level: u8,
    pub max_zoom_level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBehavior {
    pub default_tile_layer: String,
    pub auto_fit_bounds: bool,
    pub lock_pan: bool,
    /// number of distance rings drawn around the facility
    pub epicentral_circles: u32,
}

/// per-bin styling of event dots and focal-mechanism beachballs.
///
/// the three bin-keyed tables are expected to share the labels derived from
/// `mag_bins`, but their keys are passed through exactly as configured. use
/// [`VisualStyle::style_key_report`] to find tables that disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualStyle {
    pub mag_bins: MagnitudeBins,
    /// hex color per bin label
    pub dot_palette: StyleTable<String>,
    pub dot_sizes: StyleTable<Quantity>,
    pub beachball_sizes: StyleTable<Quantity>,
    pub fault_style_meta: FaultStyleTable,
    pub event_radius_multiplier: f64,
}

impl VisualStyle {
    pub const DOT_PALETTE: &'static str = "dot_palette";
    pub const DOT_SIZES: &'static str = "dot_sizes";
    pub const BEACHBALL_SIZES: &'static str = "beachball_sizes";

    pub fn style_key_report(&self) -> StyleKeyReport {
        let mut report = StyleKeyReport::new(self.mag_bins.labels());
        report.compare(Self::DOT_PALETTE, &self.dot_palette);
        report.compare(Self::DOT_SIZES, &self.dot_sizes);
        report.compare(Self::BEACHBALL_SIZES, &self.beachball_sizes);
        report
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapConfig {
    pub heatmap_radius: u32,
    pub heatmap_blur: u32,
    pub heatmap_min_opacity: f64,
}

/// styling of the renderer's own regional fault layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultStyle {
    pub regional_faults_color: String,
    pub regional_faults_weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataOptions {
    pub output_dir: PathBuf,
    /// keep the downloaded catalog data next to the map
    pub keep_data: bool,
    /// user GeoJSON fault geometries, drawn in order
    pub faults_files: Vec<PathBuf>,
}
