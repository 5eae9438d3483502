use crate::domain::constants::EARTH_RADIUS_KM;
use crate::domain::models::GeoLocation;
use crate::error::FloodError;

/// Great-circle distance in kilometers (haversine, mean Earth radius).
///
/// Inputs are not range-checked: NaN in, NaN out.
pub fn distance_km(a: GeoLocation, b: GeoLocation) -> f64 {
    // abs: distance_km(a, b) and distance_km(b, a) are bit-identical
    let d_lat = (b.lat - a.lat).abs().to_radians();
    let d_lng = (b.lng - a.lng).abs().to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Rejects NaN and out-of-range degrees. Used wherever coordinates enter the session.
pub fn checked_location(lat: f64, lng: f64) -> Result<GeoLocation, FloodError> {
    let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
    let lng_ok = lng.is_finite() && (-180.0..=180.0).contains(&lng);
    if lat_ok && lng_ok {
        Ok(GeoLocation::new(lat, lng))
    } else {
        Err(FloodError::InvalidCoordinate { lat, lng })
    }
}
