use crate::domain::models::{FloodReport, GeoLocation, ReportDistance};
use crate::engine::geo::distance_km;

/// Where an evacuation search starts from.
#[derive(Debug, Clone, Copy)]
pub enum Origin<'a> {
    Report(&'a FloodReport),
    Location(GeoLocation),
}

impl Origin<'_> {
    pub fn location(&self) -> GeoLocation {
        match self {
            Origin::Report(r) => r.location,
            Origin::Location(l) => *l,
        }
    }

    fn already_safe(&self) -> bool {
        matches!(self, Origin::Report(r) if r.is_safe_point())
    }
}

/// Closest `Low` report strictly inside `max_radius_km`; first one wins on ties.
/// A `Low` origin report is already safe and gets no route.
pub fn nearest_safe_point(
    origin: Origin<'_>,
    candidates: &[FloodReport],
    max_radius_km: f64,
) -> Option<ReportDistance> {
    if origin.already_safe() {
        return None;
    }
    let from = origin.location();
    let mut best: Option<(&FloodReport, f64)> = None;
    for candidate in candidates.iter().filter(|c| c.is_safe_point()) {
        let dist = distance_km(from, candidate.location);
        if dist >= max_radius_km {
            continue;
        }
        if best.map(|(_, d)| dist < d).unwrap_or(true) {
            best = Some((candidate, dist));
        }
    }
    best.map(|(report, distance_km)| ReportDistance {
        report: report.clone(),
        distance_km,
    })
}
