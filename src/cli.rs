use crate::domain::models::{ForecastTrend, ReportStatus, RiskFilter, RiskLevel, TimeMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "floodguard",
    version,
    about = "Citizen flood reports and proximity danger alerts"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Evaluate time-dependent logic at this instant (RFC 3339) instead of the clock"
    )]
    pub now: Option<String>,
    #[arg(long, global = true, help = "Never play the siren")]
    pub quiet_alarm: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    Location {
        #[command(subcommand)]
        command: LocationCommands,
    },
    /// Reports visible under a time window and risk filter
    Active {
        #[command(flatten)]
        filter: ViewFilter,
    },
    /// Counts over the active view
    Stats {
        #[command(flatten)]
        filter: ViewFilter,
    },
    /// Scan for the nearest threat around the user
    Danger,
    /// Nearest verified-safe point for evacuation
    SafePoint {
        #[arg(conflicts_with_all = ["lat", "lng"], required_unless_present_all = ["lat", "lng"])]
        report: Option<String>,
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Search radius in km (default from config, 2.0)"
        )]
        radius: Option<f64>,
    },
    Demo {
        #[command(subcommand)]
        command: DemoCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Record a completed photo analysis as a new report
    Add(AddReport),
    List,
    Show {
        id: String,
    },
    /// Responder workflow status update
    Status {
        id: String,
        #[arg(value_enum)]
        status: ReportStatus,
    },
}

#[derive(Args, Debug)]
pub struct AddReport {
    #[arg(
        long,
        conflicts_with = "risk",
        help = "Classifier answer (JSON); unusable answers fall back to a cautious low-risk result"
    )]
    pub analysis: Option<PathBuf>,
    #[arg(long, value_enum, required_unless_present = "analysis")]
    pub risk: Option<RiskLevel>,
    #[arg(long, default_value = "Unknown")]
    pub depth: String,
    #[arg(long, default_value = "")]
    pub advice: String,
    #[arg(long = "object")]
    pub objects: Vec<String>,
    #[arg(long = "vulnerable")]
    pub vulnerable: Vec<String>,
    #[arg(long, value_enum)]
    pub trend: Option<ForecastTrend>,
    #[arg(long, requires = "trend", allow_hyphen_values = true)]
    pub predicted_change: Option<String>,
    #[arg(long, requires = "trend")]
    pub clearance: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
    #[arg(long)]
    pub sos: bool,
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum LocationCommands {
    /// Record a new geolocation fix and rescan
    Set {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
    /// Forget the fix; the last danger state is kept
    Clear,
    Show,
}

#[derive(Subcommand, Debug)]
pub enum DemoCommands {
    /// Load the demonstration reports (idempotent)
    Seed,
}

#[derive(Args, Debug, Clone)]
pub struct ViewFilter {
    #[arg(long, value_enum, default_value_t = TimeMode::Urgent)]
    pub mode: TimeMode,
    #[arg(long, help = "Window in minutes (urgent: 5-240, day: 5-720)")]
    pub window: Option<u32>,
    #[arg(long, value_enum, default_value_t = RiskFilter::All)]
    pub risk: RiskFilter,
}
