use super::haversine::haversine_distance;
use crate::app::models::GeoPoint;
use crate::constants::{BOUNDS_SENTINEL_MAX, BOUNDS_SENTINEL_MIN};
use serde::Serialize;

/// Latitude/longitude extent of a set of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub max_lat: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub min_lon: f64,
}

impl BoundingBox {
    /// Bounding box of `points`, or `None` when there are none
    ///
    /// Extremes are seeded with values no coordinate can take, so negative
    /// latitudes and longitudes are tracked correctly.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a GeoPoint>,
    {
        let mut bounds = Self {
            max_lat: BOUNDS_SENTINEL_MAX,
            max_lon: BOUNDS_SENTINEL_MAX,
            min_lat: BOUNDS_SENTINEL_MIN,
            min_lon: BOUNDS_SENTINEL_MIN,
        };
        let mut seen = false;

        for point in points {
            bounds.max_lat = bounds.max_lat.max(point.lat);
            bounds.max_lon = bounds.max_lon.max(point.lon);
            bounds.min_lat = bounds.min_lat.min(point.lat);
            bounds.min_lon = bounds.min_lon.min(point.lon);
            seen = true;
        }

        seen.then_some(bounds)
    }

    pub fn mid_lat(&self) -> f64 {
        (self.max_lat + self.min_lat) / 2.0
    }

    pub fn mid_lon(&self) -> f64 {
        (self.max_lon + self.min_lon) / 2.0
    }

    /// North-east corner, the projection origin
    pub fn north_east(&self) -> GeoPoint {
        GeoPoint::new(self.max_lat, self.max_lon)
    }

    pub fn south_west(&self) -> GeoPoint {
        GeoPoint::new(self.min_lat, self.min_lon)
    }

    /// East-west extent in meters, measured along the middle latitude
    pub fn width_m(&self) -> f64 {
        let mid_lat = self.mid_lat();
        haversine_distance(
            &GeoPoint::new(mid_lat, self.max_lon),
            &GeoPoint::new(mid_lat, self.min_lon),
        )
    }

    /// North-south extent in meters, measured along the middle longitude
    pub fn height_m(&self) -> f64 {
        let mid_lon = self.mid_lon();
        haversine_distance(
            &GeoPoint::new(self.max_lat, mid_lon),
            &GeoPoint::new(self.min_lat, mid_lon),
        )
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lon >= self.min_lon
            && point.lon <= self.max_lon
    }
}
