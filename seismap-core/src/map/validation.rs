use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{style_table::is_hex_color, MapConfig, StyleKeyReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => f.pad("warning"),
            Severity::Error => f.pad("error"),
        }
    }
}

/// one observation about a map configuration, tied to the parameter it concerns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<7} [{}] {}", self.severity, self.field, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn warn(&mut self, field: &str, message: String) {
        self.findings.push(Finding {
            severity: Severity::Warning,
            field: field.to_string(),
            message,
        });
    }

    pub fn error(&mut self, field: &str, message: String) {
        self.findings.push(Finding {
            severity: Severity::Error,
            field: field.to_string(),
            message,
        });
    }

    pub fn extend(&mut self, other: ValidationReport) {
        self.findings.extend(other.findings);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// writes each finding to the log at a level matching its severity
    pub fn log(&self) {
        for finding in self.findings.iter() {
            match finding.severity {
                Severity::Warning => log::warn!("{finding}"),
                Severity::Error => log::error!("{finding}"),
            }
        }
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.findings.iter().join("\n"))
    }
}

/// checks a map configuration for values the renderer cannot work with.
///
/// coordinates, radius and the magnitude range are errors when out of bounds.
/// style tables whose keys disagree with the magnitude bin labels are reported
/// as warnings, or as errors when `strict` is set; the tables are never rewritten.
/// fault files are not touched here, see [`super::faults::inspect_fault_files`].
pub fn validate_config(config: &MapConfig, strict: bool) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_area(config, &mut report);
    validate_magnitudes(config, &mut report);
    validate_colors(config, &mut report);
    validate_style_keys(&config.style.style_key_report(), strict, &mut report);
    report
}

fn validate_area(config: &MapConfig, report: &mut ValidationReport) {
    let area = &config.area;
    if !(-90.0..=90.0).contains(&area.latitude) {
        report.error(
            "latitude",
            format!("'{}' is not in range [-90, 90]", area.latitude),
        );
    }
    if !(-180.0..=180.0).contains(&area.longitude) {
        report.error(
            "longitude",
            format!("'{}' is not in range [-180, 180]", area.longitude),
        );
    }
    let radius_km = area.radius_km.value();
    if !(radius_km > 0.0) || !radius_km.is_finite() {
        report.error(
            "radius_km",
            format!("'{}' must be a positive distance", area.radius_km),
        );
    }
}

fn validate_magnitudes(config: &MapConfig, report: &mut ValidationReport) {
    let range = &config.magnitude;
    let bins = &config.style.mag_bins;
    if !(range.vmin < range.vmax) {
        report.error(
            "vmin",
            format!(
                "vmin ({}) must be less than vmax ({})",
                range.vmin, range.vmax
            ),
        );
    }
    if !(range.vmin <= bins.lower()) {
        report.error(
            "vmin",
            format!(
                "vmin ({}) is above the lowest magnitude bin edge ({})",
                range.vmin,
                bins.lower()
            ),
        );
    }
    if !(range.vmax >= bins.upper()) {
        report.error(
            "vmax",
            format!(
                "vmax ({}) is below the highest magnitude bin edge ({})",
                range.vmax,
                bins.upper()
            ),
        );
    }
}

fn validate_colors(config: &MapConfig, report: &mut ValidationReport) {
    for (label, color) in config.style.dot_palette.iter() {
        if !is_hex_color(color) {
            report.warn(
                "dot_palette",
                format!("color '{color}' for bin '{label}' is not a hex color"),
            );
        }
    }
    for (code, style) in config.style.fault_style_meta.iter() {
        if !is_hex_color(&style.color) {
            report.warn(
                "fault_style_meta",
                format!(
                    "color '{}' for fault type '{code}' is not a hex color",
                    style.color
                ),
            );
        }
    }
}

fn validate_style_keys(style_keys: &StyleKeyReport, strict: bool, report: &mut ValidationReport) {
    for mismatch in style_keys.mismatches.iter() {
        let message = mismatch.to_string();
        if strict {
            report.error(&mismatch.table, message);
        } else {
            report.warn(&mismatch.table, message);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::map::{FaultTypeStyle, MagnitudeBins, Preset, Quantity};

    fn preset_config() -> MapConfig {
        Preset::LongonjoTsf.load().unwrap().map
    }

    #[test]
    fn test_preset_only_warns_about_style_keys() {
        let report = validate_config(&preset_config(), false);
        assert!(!report.has_errors());
        let fields = report.warnings().map(|f| f.field.as_str()).collect_vec();
        assert_eq!(fields, vec!["dot_sizes", "beachball_sizes"]);
    }

    #[test]
    fn test_strict_promotes_style_key_mismatch() {
        let report = validate_config(&preset_config(), true);
        assert_eq!(report.error_count(), 2);
        assert_eq!(report.warnings().count(), 0);
    }

    #[test]
    fn test_out_of_range_area() {
        let mut config = preset_config();
        config.area.latitude = -91.0;
        config.area.longitude = 181.0;
        config.area.radius_km = Quantity::Integer(0);
        let report = validate_config(&config, false);
        let fields = report.errors().map(|f| f.field.as_str()).collect_vec();
        assert_eq!(fields, vec!["latitude", "longitude", "radius_km"]);
    }

    #[test]
    fn test_magnitude_range_must_bracket_bins() {
        let mut config = preset_config();
        config.magnitude.vmin = 4.0;
        config.magnitude.vmax = 8.0;
        let report = validate_config(&config, false);
        let fields = report.errors().map(|f| f.field.as_str()).collect_vec();
        assert_eq!(fields, vec!["vmin", "vmax"]);
    }

    #[test]
    fn test_inverted_magnitude_range() {
        let mut config = preset_config();
        config.style.mag_bins = MagnitudeBins::new(vec![5.0, 6.0]).unwrap();
        config.magnitude.vmin = 7.0;
        config.magnitude.vmax = 4.0;
        let report = validate_config(&config, false);
        assert!(report
            .errors()
            .any(|f| f.message.contains("must be less than vmax")));
    }

    #[test]
    fn test_named_colors_are_warnings() {
        let mut config = preset_config();
        config
            .style
            .fault_style_meta
            .insert(String::from("X"), FaultTypeStyle::new("Unknown", "grey"));
        let report = validate_config(&config, false);
        assert!(!report.has_errors());
        assert!(report
            .warnings()
            .any(|f| f.field == "fault_style_meta" && f.message.contains("'grey'")));
    }

    #[test]
    fn test_finding_display() {
        let mut report = ValidationReport::default();
        report.error("radius_km", String::from("'0' must be a positive distance"));
        assert_eq!(
            report.to_string(),
            "error   [radius_km] '0' must be a positive distance"
        );
    }
}
