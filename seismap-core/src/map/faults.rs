use std::path::{Path, PathBuf};

use geo::{line_string, CoordsIter, Geometry, Haversine, Length, Point};
use geojson::GeoJson;
use kdam::tqdm;
use serde::{Deserialize, Serialize};

use super::{AreaOfInterest, MapRequest, SeismapError, ValidationReport};

const FAULTS_FILES_FIELD: &str = "faults_files";

/// what was learned from reading one user fault file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultFileSummary {
    pub path: PathBuf,
    pub feature_count: usize,
    /// great-circle distance from the map center to the closest fault vertex,
    /// or None if the file holds no geometry
    pub nearest_km: Option<f64>,
}

/// reads a GeoJSON fault file, counting its features and measuring how close
/// its geometry comes to the center of the area of interest.
pub fn read_fault_file(path: &Path, area: &AreaOfInterest) -> Result<FaultFileSummary, SeismapError> {
    let filepath = path.to_string_lossy().to_string();
    let contents = std::fs::read_to_string(path).map_err(|e| SeismapError::FaultFileRead {
        filepath: filepath.clone(),
        error: e.to_string(),
    })?;
    let (feature_count, geometries) = contents
        .parse::<GeoJson>()
        .and_then(collect_geometries)
        .map_err(|e| SeismapError::FaultFileParse {
            filepath: filepath.clone(),
            error: e.to_string(),
        })?;
    let center = Point::new(area.longitude, area.latitude);
    let nearest_km = nearest_distance_km(&center, &geometries);
    log::debug!("fault file '{filepath}' has {feature_count} feature(s), nearest vertex {nearest_km:?} km");
    Ok(FaultFileSummary {
        path: path.to_path_buf(),
        feature_count,
        nearest_km,
    })
}

/// checks every fault file of a request. files that cannot be read are errors,
/// since the renderer requires them. files that are not valid GeoJSON, hold no
/// features, or lie entirely outside the area of interest are warnings.
pub fn inspect_fault_files(request: &MapRequest) -> (Vec<FaultFileSummary>, ValidationReport) {
    let mut report = ValidationReport::default();
    let mut summaries = vec![];
    let paths = request.faults_files();
    if paths.is_empty() {
        return (summaries, report);
    }
    let area = request.config().area;

    let iter = tqdm!(paths.iter(), desc = "inspect fault files", total = paths.len());
    for path in iter {
        match read_fault_file(path, &area) {
            Ok(summary) => {
                if summary.feature_count == 0 {
                    report.warn(
                        FAULTS_FILES_FIELD,
                        format!("'{}' contains no features", path.display()),
                    );
                }
                if let Some(nearest_km) = summary.nearest_km {
                    if nearest_km > area.radius_km.value() {
                        report.warn(
                            FAULTS_FILES_FIELD,
                            format!(
                                "'{}' lies outside the area of interest, nearest fault is {:.1} km from the center (radius {} km)",
                                path.display(),
                                nearest_km,
                                area.radius_km
                            ),
                        );
                    }
                }
                summaries.push(summary);
            }
            Err(e @ SeismapError::FaultFileRead { .. }) => {
                report.error(FAULTS_FILES_FIELD, e.to_string());
            }
            Err(e) => {
                report.warn(FAULTS_FILES_FIELD, e.to_string());
            }
        }
    }
    eprintln!();
    (summaries, report)
}

fn collect_geometries(geojson: GeoJson) -> Result<(usize, Vec<Geometry<f64>>), geojson::Error> {
    match geojson {
        GeoJson::FeatureCollection(collection) => {
            let feature_count = collection.features.len();
            let geometries = collection
                .features
                .into_iter()
                .filter_map(|feature| feature.geometry)
                .map(Geometry::<f64>::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            Ok((feature_count, geometries))
        }
        GeoJson::Feature(feature) => {
            let geometries = match feature.geometry {
                Some(geometry) => vec![Geometry::<f64>::try_from(geometry)?],
                None => vec![],
            };
            Ok((1, geometries))
        }
        GeoJson::Geometry(geometry) => Ok((1, vec![Geometry::<f64>::try_from(geometry)?])),
    }
}

fn nearest_distance_km(center: &Point<f64>, geometries: &[Geometry<f64>]) -> Option<f64> {
    geometries
        .iter()
        .flat_map(|g| g.coords_iter())
        .map(|coord| Haversine.length(&line_string![center.0, coord]) / 1000.0)
        .min_by(|a, b| a.total_cmp(b))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::map::Preset;
    use std::io::Write;

    const TWO_FAULTS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"type": "N"},
                "geometry": {"type": "LineString", "coordinates": [[15.0, -13.0], [15.5, -12.5]]}
            },
            {
                "type": "Feature",
                "properties": {"type": "SS"},
                "geometry": {"type": "LineString", "coordinates": [[20.0, -10.0], [21.0, -9.0]]}
            }
        ]
    }"#;

    const FAR_FAULT: &str = r#"{
        "type": "Feature",
        "properties": {},
        "geometry": {"type": "LineString", "coordinates": [[-120.0, 40.0], [-119.0, 41.0]]}
    }"#;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn request_with_faults(faults: Vec<PathBuf>) -> MapRequest {
        let mut config = Preset::LongonjoTsf.load().unwrap().map;
        config.data.faults_files = faults;
        MapRequest::resolve(&config, Path::new("/"))
    }

    #[test]
    fn test_read_fault_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "two.geojson", TWO_FAULTS);
        let area = Preset::LongonjoTsf.load().unwrap().map.area;
        let summary = read_fault_file(&path, &area).unwrap();
        assert_eq!(summary.feature_count, 2);
        let nearest = summary.nearest_km.unwrap();
        assert!(nearest > 0.0 && nearest < 50.0, "nearest was {nearest}");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Angola1982.geojson");
        let (summaries, report) = inspect_fault_files(&request_with_faults(vec![missing]));
        assert!(summaries.is_empty());
        assert_eq!(report.error_count(), 1);
        assert!(report.findings[0].message.contains("Angola1982.geojson"));
    }

    #[test]
    fn test_malformed_and_distant_files_are_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let broken = write_file(dir.path(), "broken.geojson", "{ not geojson");
        let far = write_file(dir.path(), "far.geojson", FAR_FAULT);
        let near = write_file(dir.path(), "near.geojson", TWO_FAULTS);
        let (summaries, report) = inspect_fault_files(&request_with_faults(vec![broken, far, near]));
        assert!(!report.has_errors());
        assert_eq!(summaries.len(), 2);
        assert_eq!(report.warnings().count(), 2);
        assert!(report.findings[0].message.contains("not valid GeoJSON"));
        assert!(report.findings[1].message.contains("outside the area of interest"));
    }

    #[test]
    fn test_empty_collection_warns() {
        let dir = tempfile::tempdir().unwrap();
        let empty = write_file(
            dir.path(),
            "empty.geojson",
            r#"{"type": "FeatureCollection", "features": []}"#,
        );
        let (summaries, report) = inspect_fault_files(&request_with_faults(vec![empty]));
        assert_eq!(summaries[0].feature_count, 0);
        assert_eq!(summaries[0].nearest_km, None);
        assert!(report.findings[0].message.contains("no features"));
    }

    #[test]
    fn test_no_fault_files() {
        let (summaries, report) = inspect_fault_files(&request_with_faults(vec![]));
        assert!(summaries.is_empty());
        assert!(report.is_empty());
    }
}
