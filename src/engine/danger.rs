use crate::domain::constants::{
    ALERT_RADIUS_KM, LOCAL_TRUTH_RADIUS_KM, OVERRIDE_SUPPRESSION_RADIUS_KM,
};
use crate::domain::models::{DangerState, FloodReport, GeoLocation, ReportDistance, RiskLevel};
use crate::engine::geo::distance_km;

/// Result of one danger scan. `alarm` asks the host for a one-shot siren.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    pub state: DangerState,
    pub alarm: bool,
}

/// Most recent report within 50 m of the user. Equal timestamps resolve to the
/// first one in store order.
pub fn local_truth(user: GeoLocation, reports: &[FloodReport]) -> Option<&FloodReport> {
    let mut latest: Option<&FloodReport> = None;
    for r in reports {
        if distance_km(user, r.location) >= LOCAL_TRUTH_RADIUS_KM {
            continue;
        }
        if latest.map(|l| r.timestamp > l.timestamp).unwrap_or(true) {
            latest = Some(r);
        }
    }
    latest
}

/// Scans the full, unfiltered report list around `user`.
///
/// A fresh `Low` report at the user's position silences every threat within 1 km
/// and the siren; threats are `High` or `Rising` reports strictly inside 2 km.
pub fn scan(user: GeoLocation, reports: &[FloodReport]) -> ScanOutcome {
    let override_active = local_truth(user, reports)
        .map(|r| r.risk == RiskLevel::Low)
        .unwrap_or(false);

    let mut nearest: Option<(&FloodReport, f64)> = None;
    let mut alarm = false;
    for r in reports {
        let dist = distance_km(user, r.location);
        if override_active && dist < OVERRIDE_SUPPRESSION_RADIUS_KM {
            continue;
        }
        if dist >= ALERT_RADIUS_KM {
            continue;
        }
        let rising = r.is_rising();
        if r.risk != RiskLevel::High && !rising {
            continue;
        }
        if nearest.map(|(_, d)| dist < d).unwrap_or(true) {
            nearest = Some((r, dist));
        }
        if rising && !override_active {
            alarm = true;
        }
    }

    ScanOutcome {
        state: DangerState {
            is_user_safe_override: override_active,
            nearest_threat: nearest.map(|(report, distance_km)| ReportDistance {
                report: report.clone(),
                distance_km,
            }),
        },
        alarm,
    }
}

/// Host entry point: without a location nothing runs and the caller keeps its
/// previous state.
pub fn rescan(user: Option<GeoLocation>, reports: &[FloodReport]) -> Option<ScanOutcome> {
    user.map(|u| scan(u, reports))
}
