#[derive(thiserror::Error, Debug)]
pub enum FloodError {
    #[error("report not found: {0}")]
    ReportNotFound(String),
    #[error("invalid coordinate: lat={lat} lng={lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },
    #[error("window of {window} minutes is outside {min}..={max} for {mode} mode")]
    WindowOutOfRange {
        mode: &'static str,
        window: u32,
        min: u32,
        max: u32,
    },
    #[error("invalid timestamp (expected RFC 3339): {0}")]
    InvalidTimestamp(String),
    #[error("state file is corrupt: {0}")]
    StateCorrupt(String),
}

impl FloodError {
    pub fn code(&self) -> &'static str {
        match self {
            FloodError::ReportNotFound(_) => "REPORT_NOT_FOUND",
            FloodError::InvalidCoordinate { .. } => "INVALID_COORDINATE",
            FloodError::WindowOutOfRange { .. } => "WINDOW_OUT_OF_RANGE",
            FloodError::InvalidTimestamp(_) => "INVALID_TIMESTAMP",
            FloodError::StateCorrupt(_) => "STATE_CORRUPT",
        }
    }
}

/// Stable code for `--json` error output.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<FloodError>()
        .map(FloodError::code)
        .unwrap_or("INTERNAL")
}
