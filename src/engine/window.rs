use crate::domain::constants::{DAY_DEFAULT_WINDOW_MINUTES, URGENT_DEFAULT_WINDOW_MINUTES};
use crate::domain::models::{FloodReport, RiskFilter, TimeMode};
use crate::error::FloodError;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Slider affordance for a time mode. `select_active` never enforces these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl TimeMode {
    pub fn bounds(self) -> Option<WindowBounds> {
        match self {
            TimeMode::Urgent => Some(WindowBounds {
                min: 5,
                max: 240,
                step: 5,
                default: URGENT_DEFAULT_WINDOW_MINUTES,
            }),
            TimeMode::Day => Some(WindowBounds {
                min: 5,
                max: 720,
                step: 30,
                default: DAY_DEFAULT_WINDOW_MINUTES,
            }),
            TimeMode::History => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeMode::Urgent => "urgent",
            TimeMode::Day => "day",
            TimeMode::History => "history",
        }
    }
}

/// Resolves the requested window for `mode`, defaulting it and checking the slider range.
/// History mode has no window.
pub fn resolve_window(mode: TimeMode, requested: Option<u32>) -> Result<Option<u32>, FloodError> {
    let Some(bounds) = mode.bounds() else {
        return Ok(None);
    };
    let window = requested.unwrap_or(bounds.default);
    if window < bounds.min || window > bounds.max {
        return Err(FloodError::WindowOutOfRange {
            mode: mode.as_str(),
            window,
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(Some(window))
}

pub fn age_minutes(report: &FloodReport, now: DateTime<Utc>) -> f64 {
    (now - report.timestamp).num_milliseconds() as f64 / 60_000.0
}

/// Reports visible under the risk filter and time window, in store order.
///
/// `urgent` and `day` share one inclusive rule: age in minutes `<= window_minutes`.
pub fn select_active<'a>(
    reports: &'a [FloodReport],
    mode: TimeMode,
    window_minutes: u32,
    risk_filter: RiskFilter,
    now: DateTime<Utc>,
) -> Vec<&'a FloodReport> {
    reports
        .iter()
        .filter(|r| risk_filter.admits(r.risk))
        .filter(|r| match mode {
            TimeMode::History => true,
            TimeMode::Urgent | TimeMode::Day => age_minutes(r, now) <= f64::from(window_minutes),
        })
        .collect()
}

pub fn window_label(mode: TimeMode, window_minutes: Option<u32>) -> String {
    let minutes = match (mode, window_minutes) {
        (TimeMode::History, _) | (_, None) => return "All History".to_string(),
        (_, Some(m)) => m,
    };
    if minutes < 60 {
        return format!("Last {} mins", minutes);
    }
    let (h, m) = (minutes / 60, minutes % 60);
    if m > 0 {
        format!("Last {}h {}m", h, m)
    } else {
        format!("Last {}h", h)
    }
}
