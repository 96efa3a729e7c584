use crate::app::models::GeoPoint;
use crate::constants::EARTH_RADIUS_M;

/// Great-circle distance between two points in meters
///
/// Uses the arcsine form of the haversine formula on a sphere of radius
/// [`EARTH_RADIUS_M`]. Accurate enough at airport scale, where projection and
/// runway-width calibration both rely on it.
pub fn haversine_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    // Rounding can push `a` a hair past 1 for antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_M * c
}
