//! Ingestion of the external image classifier's answer and the report-creation handler.

use crate::domain::constants::{
    ADDRESS_CURRENT_LOCATION, ADDRESS_FALLBACK_CENTER, FALLBACK_ADVICE, FALLBACK_DEPTH,
    FALLBACK_OBJECT,
};
use crate::domain::models::{
    AnalysisResult, FloodForecast, FloodReport, ForecastTrend, GeoLocation, RiskLevel,
};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Cautious stand-in used whenever the classifier answer is unusable.
pub fn fallback_analysis() -> AnalysisResult {
    AnalysisResult {
        depth: FALLBACK_DEPTH.to_string(),
        risk: RiskLevel::Low,
        objects_detected: vec![FALLBACK_OBJECT.to_string()],
        vulnerable_people: vec![],
        advice: FALLBACK_ADVICE.to_string(),
    }
}

pub fn parse_analysis(raw: &str) -> anyhow::Result<AnalysisResult> {
    let text = raw.trim();
    if text.is_empty() {
        anyhow::bail!("no response from classifier");
    }
    Ok(serde_json::from_str(text)?)
}

/// Reads a classifier answer. Failures degrade to [`fallback_analysis`] and are not retried.
pub fn load_analysis(path: &Path) -> AnalysisResult {
    let parsed = std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|raw| parse_analysis(&raw));
    match parsed {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "classifier answer unusable, using fallback");
            fallback_analysis()
        }
    }
}

/// Extra inputs to the creation handler beyond the classifier answer.
#[derive(Debug, Default, Clone)]
pub struct ReportDraft {
    pub image_url: Option<String>,
    pub is_sos: bool,
    pub forecast: Option<FloodForecast>,
    /// Explicit position; wins over the user fix.
    pub location: Option<GeoLocation>,
}

/// Forecast attached to fresh citizen reports when none is known.
pub fn default_forecast() -> FloodForecast {
    FloodForecast {
        trend: ForecastTrend::Rising,
        predicted_change: "+?".to_string(),
        estimated_clearance_time: Some("Unknown".to_string()),
    }
}

/// Builds the report for a completed analysis. Position falls back from the explicit one to
/// the user fix and then to `fallback_center`.
pub fn build_report(
    id: String,
    analysis: AnalysisResult,
    draft: ReportDraft,
    user_location: Option<GeoLocation>,
    fallback_center: GeoLocation,
    now: DateTime<Utc>,
) -> FloodReport {
    let (location, address) = match (draft.location, user_location) {
        (Some(explicit), _) => (explicit, None),
        (None, Some(user)) => (user, Some(ADDRESS_CURRENT_LOCATION.to_string())),
        (None, None) => (fallback_center, Some(ADDRESS_FALLBACK_CENTER.to_string())),
    };
    FloodReport {
        id,
        location,
        image_url: draft.image_url,
        depth: analysis.depth,
        risk: analysis.risk,
        objects_detected: analysis.objects_detected,
        vulnerable_people: Some(analysis.vulnerable_people),
        advice: analysis.advice,
        timestamp: now,
        address,
        is_sos: draft.is_sos,
        status: None,
        forecast: Some(draft.forecast.unwrap_or_else(default_forecast)),
        historical_peaks: Some(vec![]),
    }
}
