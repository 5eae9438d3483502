use chrono::{DateTime, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod engine;
mod error;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use engine::geo::{checked_location, distance_km};
pub use engine::safe_point::{nearest_safe_point, Origin};
pub use engine::window::{age_minutes, resolve_window, select_active, window_label};
pub use error::FloodError;
pub use services::alarm::siren_from_settings;
pub use services::classifier::{build_report, load_analysis, ReportDraft};
pub use services::demo::demo_reports;
pub use services::monitor::refresh_danger;
pub use services::navigation::{navigation_available, routing_url};
pub use services::output::{print_error, print_one, print_out};
pub use services::settings::load_settings;
pub use services::storage::{audit, load_state, save_state};

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        print_error(cli.json, &err);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so `--json` stdout stays parseable. `RUST_LOG` overrides.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_now(raw: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    let Some(raw) = raw else {
        return Ok(Utc::now());
    };
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|_| FloodError::InvalidTimestamp(raw.to_string()))?;
    Ok(parsed.with_timezone(&Utc))
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let now = resolve_now(cli.now.as_deref())?;
    let settings = load_settings()?;
    let state = load_state()?;
    let siren = siren_from_settings(&settings.alarm, cli.quiet_alarm);
    let mut session = Session {
        state,
        settings,
        now,
        siren,
    };

    if handle_report_commands(cli, &mut session)? {
        return Ok(());
    }
    if handle_location_commands(cli, &mut session)? {
        return Ok(());
    }
    if handle_danger(cli, &mut session)? {
        return Ok(());
    }
    if handle_safe_point(cli, &mut session)? {
        return Ok(());
    }
    if handle_demo_commands(cli, &mut session)? {
        return Ok(());
    }
    if handle_view_commands(cli, &session)? {
        return Ok(());
    }

    anyhow::bail!("unhandled command")
}
