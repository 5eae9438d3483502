//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `reports.rs` — report add/list/show/status and the demo seed.
//! - `alerts.rs` — location updates, danger scan, safe-point lookup.
//! - `views.rs` — active view and stats over a time window.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate alerting logic to `engine/*` and side effects to `services/*`.
//! - Every mutation saves the session and re-runs the danger scan before printing.

pub mod alerts;
pub mod reports;
pub mod views;

use crate::domain::models::{SettingsFile, State};
use crate::services::alarm::Siren;
use chrono::{DateTime, Utc};

pub use alerts::{handle_danger, handle_location_commands, handle_safe_point};
pub use reports::{handle_demo_commands, handle_report_commands};
pub use views::handle_view_commands;

/// Everything one invocation works on.
pub struct Session {
    pub state: State,
    pub settings: SettingsFile,
    pub now: DateTime<Utc>,
    pub siren: Box<dyn Siren>,
}
