use crate::domain::models::State;
use crate::engine::geo::checked_location;
use crate::error::FloodError;
use std::path::PathBuf;

pub fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/floodguard"))
}

/// Appends one JSON line to the audit log. Best effort: never fails the command.
pub fn audit(action: &str, data: serde_json::Value) {
    let path = match config_dir() {
        Ok(dir) => dir.join("audit.jsonl"),
        Err(_) => return,
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let written = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
    if let Err(e) = written {
        tracing::debug!(error = %e, path = %path.display(), "audit write skipped");
    }
}

fn state_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("state.json"))
}

pub fn load_state() -> anyhow::Result<State> {
    let p = state_path()?;
    if !p.exists() {
        return Ok(State::default());
    }
    let raw = std::fs::read_to_string(&p)?;
    let state: State = serde_json::from_str(&raw)
        .map_err(|e| FloodError::StateCorrupt(format!("{}: {}", p.display(), e)))?;
    let positions = state
        .reports
        .all()
        .iter()
        .map(|r| r.location)
        .chain(state.user_location);
    for loc in positions {
        checked_location(loc.lat, loc.lng)
            .map_err(|e| FloodError::StateCorrupt(format!("{}: {}", p.display(), e)))?;
    }
    tracing::debug!(reports = state.reports.len(), "session loaded");
    Ok(state)
}

pub fn save_state(s: &State) -> anyhow::Result<()> {
    let p = state_path()?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, serde_json::to_string_pretty(s)?)?;
    Ok(())
}
