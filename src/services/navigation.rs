use crate::domain::constants::ROUTING_URL_BASE;
use crate::domain::models::GeoLocation;

/// Destination link for the third-party routing app.
pub fn routing_url(target: GeoLocation) -> String {
    format!("{}{},{}", ROUTING_URL_BASE, target.lat, target.lng)
}

/// Navigation is offered unless the user is known to be farther than `max_radius_km`.
pub fn navigation_available(distance_km: Option<f64>, max_radius_km: f64) -> bool {
    distance_km.map(|d| d <= max_radius_km).unwrap_or(true)
}
