use crate::engine::store::ReportStore;
use crate::engine::window::WindowBounds;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_MAX_NAVIGATION_RADIUS_KM, DEFAULT_SAFE_POINT_RADIUS_KM, FALLBACK_CENTER,
};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Coordinate in degrees. Range checks live at the input boundary, see
/// [`crate::engine::geo::checked_location`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
}

impl GeoLocation {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// `Low` doubles as "verified safe point": the safe-point locator and the local
/// truth override both read it that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ForecastTrend {
    Rising,
    Receding,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ReportStatus {
    Pending,
    Acknowledged,
    Rescued,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloodForecast {
    pub trend: ForecastTrend,
    pub predicted_change: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_clearance_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPeak {
    pub year: i32,
    pub level: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloodReport {
    pub id: String,
    pub location: GeoLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub depth: String,
    pub risk: RiskLevel,
    #[serde(default)]
    pub objects_detected: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vulnerable_people: Option<Vec<String>>,
    #[serde(default)]
    pub advice: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, rename = "isSOS")]
    pub is_sos: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<FloodForecast>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_peaks: Option<Vec<HistoricalPeak>>,
}

impl FloodReport {
    pub fn is_safe_point(&self) -> bool {
        self.risk == RiskLevel::Low
    }

    pub fn is_rising(&self) -> bool {
        self.forecast
            .as_ref()
            .map(|f| f.trend == ForecastTrend::Rising)
            .unwrap_or(false)
    }

    /// Non-empty vulnerable list marks the report as a rescue priority.
    pub fn has_vulnerable_people(&self) -> bool {
        self.vulnerable_people
            .as_ref()
            .map(|v| !v.is_empty())
            .unwrap_or(false)
    }
}

/// Answer of the external image classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub depth: String,
    pub risk: RiskLevel,
    pub objects_detected: Vec<String>,
    pub vulnerable_people: Vec<String>,
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDistance {
    pub report: FloodReport,
    pub distance_km: f64,
}

/// Derived alert state; recomputed on every scan, never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DangerState {
    pub is_user_safe_override: bool,
    pub nearest_threat: Option<ReportDistance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    Urgent,
    Day,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum RiskFilter {
    All,
    High,
    Medium,
    Low,
}

impl RiskFilter {
    pub fn admits(self, risk: RiskLevel) -> bool {
        match self {
            RiskFilter::All => true,
            RiskFilter::High => risk == RiskLevel::High,
            RiskFilter::Medium => risk == RiskLevel::Medium,
            RiskFilter::Low => risk == RiskLevel::Low,
        }
    }
}

/// Session carried between invocations.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct State {
    #[serde(default)]
    pub reports: ReportStore,
    #[serde(default)]
    pub user_location: Option<GeoLocation>,
    #[serde(default)]
    pub danger: Option<DangerState>,
}

fn default_fallback_center() -> GeoLocation {
    FALLBACK_CENTER
}

fn default_safe_point_radius() -> f64 {
    DEFAULT_SAFE_POINT_RADIUS_KM
}

fn default_max_navigation_radius() -> f64 {
    DEFAULT_MAX_NAVIGATION_RADIUS_KM
}

fn default_alarm_enabled() -> bool {
    true
}

#[derive(Debug, Deserialize, Default)]
pub struct SettingsFile {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub alarm: AlarmSettings,
}

#[derive(Debug, Deserialize)]
pub struct GeneralSettings {
    #[serde(default = "default_fallback_center")]
    pub fallback_center: GeoLocation,
    #[serde(default = "default_safe_point_radius")]
    pub safe_point_radius_km: f64,
    #[serde(default = "default_max_navigation_radius")]
    pub max_navigation_radius_km: f64,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            fallback_center: default_fallback_center(),
            safe_point_radius_km: default_safe_point_radius(),
            max_navigation_radius_km: default_max_navigation_radius(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AlarmSettings {
    #[serde(default = "default_alarm_enabled")]
    pub enabled: bool,
    /// Program and arguments to spawn; a terminal bell is used when absent.
    #[serde(default)]
    pub command: Vec<String>,
}

impl Default for AlarmSettings {
    fn default() -> Self {
        Self {
            enabled: default_alarm_enabled(),
            command: Vec::new(),
        }
    }
}

#[derive(Serialize)]
pub struct ReportDetail {
    pub report: FloodReport,
    pub distance_km: Option<f64>,
    pub navigation_available: bool,
    pub navigation_url: Option<String>,
}

#[derive(Serialize)]
pub struct ReportAdded {
    pub report: FloodReport,
    pub danger: DangerReport,
}

#[derive(Serialize)]
pub struct LocationReport {
    pub user_location: Option<GeoLocation>,
    pub danger: Option<DangerReport>,
}

#[derive(Serialize)]
pub struct DangerReport {
    /// False when no user location was known; `state` is then the last stored one.
    pub scanned: bool,
    pub alarm: bool,
    pub state: Option<DangerState>,
}

#[derive(Serialize)]
pub struct ActiveView {
    pub mode: TimeMode,
    pub window_minutes: Option<u32>,
    /// Slider range for the mode; absent in history mode.
    pub bounds: Option<WindowBounds>,
    pub risk_filter: RiskFilter,
    pub label: String,
    pub reports: Vec<FloodReport>,
}

#[derive(Serialize)]
pub struct StatsReport {
    pub label: String,
    pub total: usize,
    pub high_risk: usize,
    pub vulnerable: usize,
    pub sos: usize,
    /// Rescue queue: ids of the newest reports with vulnerable people.
    pub priority: Vec<String>,
}

#[derive(Serialize)]
pub struct SafePointReport {
    pub origin: GeoLocation,
    pub origin_report: Option<String>,
    pub radius_km: f64,
    pub safe_point: Option<ReportDistance>,
    pub navigation_url: Option<String>,
}
