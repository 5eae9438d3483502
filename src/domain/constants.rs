use super::models::GeoLocation;

/// Mean Earth radius used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Reports closer than this to the user count as the user's own local observation.
pub const LOCAL_TRUTH_RADIUS_KM: f64 = 0.05;

/// A local "safe" observation silences threats closer than this.
pub const OVERRIDE_SUPPRESSION_RADIUS_KM: f64 = 1.0;

/// Threats are only considered strictly inside this radius.
pub const ALERT_RADIUS_KM: f64 = 2.0;

pub const DEFAULT_SAFE_POINT_RADIUS_KM: f64 = 2.0;

/// Beyond this distance from the user, external navigation is not offered.
pub const DEFAULT_MAX_NAVIGATION_RADIUS_KM: f64 = 30.0;

/// Used as a report location when no GPS fix is available.
pub const FALLBACK_CENTER: GeoLocation = GeoLocation {
    lat: 10.8850,
    lng: 106.7810,
};

/// Length of the rescue priority queue in `stats`.
pub const PRIORITY_QUEUE_LEN: usize = 5;

pub const URGENT_DEFAULT_WINDOW_MINUTES: u32 = 240;
pub const DAY_DEFAULT_WINDOW_MINUTES: u32 = 720;

pub const ADDRESS_CURRENT_LOCATION: &str = "My Current Location";
pub const ADDRESS_FALLBACK_CENTER: &str = "Map Center (No GPS)";

pub const FALLBACK_DEPTH: &str = "Unknown";
pub const FALLBACK_OBJECT: &str = "Analysis Failed";
pub const FALLBACK_ADVICE: &str = "Could not analyze image. Please proceed with caution.";

pub const ROUTING_URL_BASE: &str = "https://www.google.com/maps/dir/?api=1&destination=";
