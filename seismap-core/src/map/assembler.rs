use super::{
    faults::{inspect_fault_files, FaultFileSummary},
    validation::validate_config,
    MapBuilder, MapRequest, MapResult, SeismapError, ValidationReport,
};

/// runs every precondition check on a request: the configuration checks and
/// the fault file inspection.
pub fn check_request(
    request: &MapRequest,
    strict: bool,
) -> (ValidationReport, Vec<FaultFileSummary>) {
    let mut report = validate_config(request.config(), strict);
    let (summaries, fault_report) = inspect_fault_files(request);
    report.extend(fault_report);
    (report, summaries)
}

/// logs the findings of [`check_request`] and decides whether the request may
/// go on to the renderer. findings are advisory: the renderer is the authority
/// on what it accepts. in strict mode any error-level finding stops the request.
pub fn preflight(
    request: &MapRequest,
    strict: bool,
) -> Result<Vec<FaultFileSummary>, SeismapError> {
    let (report, summaries) = check_request(request, strict);
    report.log();
    if report.has_errors() {
        if strict {
            return Err(SeismapError::ValidationFailed(report));
        }
        log::warn!(
            "continuing with {} error finding(s), use --strict to stop on them",
            report.error_count()
        );
    }
    Ok(summaries)
}

/// runs the [`preflight`] checks, then hands the request to the builder.
/// failures inside the builder are returned unchanged.
pub fn assemble_and_build(
    request: &MapRequest,
    builder: &dyn MapBuilder,
    strict: bool,
) -> Result<MapResult, SeismapError> {
    let summaries = preflight(request, strict)?;

    let config = request.config();
    let feature_count: usize = summaries.iter().map(|s| s.feature_count).sum();
    log::info!(
        "building map for '{}' ({}) centered at ({}, {}) with radius {} km, {} fault file(s) with {} feature(s)",
        config.project.project_name,
        config.project.client,
        config.area.latitude,
        config.area.longitude,
        config.area.radius_km,
        summaries.len(),
        feature_count
    );
    let result = builder.build_map(request)?;
    log::info!("map written to '{}' with {} event(s)", result.html, result.event_count);
    Ok(result)
}
