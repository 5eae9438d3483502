use crate::domain::models::SettingsFile;
use crate::engine::geo::checked_location;
use crate::services::storage::config_dir;

pub fn load_settings() -> anyhow::Result<SettingsFile> {
    let path = config_dir()?.join("config.toml");
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    parse_settings(&raw)
}

pub fn parse_settings(raw: &str) -> anyhow::Result<SettingsFile> {
    let settings: SettingsFile = toml::from_str(raw)?;
    let center = settings.general.fallback_center;
    checked_location(center.lat, center.lng)?;
    let radii = [
        ("safe_point_radius_km", settings.general.safe_point_radius_km),
        ("max_navigation_radius_km", settings.general.max_navigation_radius_km),
    ];
    for (key, radius) in radii {
        if radius.is_nan() || radius <= 0.0 {
            anyhow::bail!("general.{} must be positive, got {}", key, radius);
        }
    }
    Ok(settings)
}
