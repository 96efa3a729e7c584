//! Per-airport projection frame
//!
//! A frame maps latitude/longitude onto a flat draw space anchored at the
//! north-east corner of an airport's boundary. Distances along each axis are
//! haversine meters scaled into draw units.
//!
//! The x axis carries north-south distance from the anchor and the y axis
//! carries east-west distance, so `draw_width` is the scaled north-south
//! extent and `draw_height` the scaled east-west extent.

use super::bounds::BoundingBox;
use super::haversine::haversine_distance;
use crate::app::models::{Airport, DrawPoint, GeoPoint};
use crate::app::services::airport_db::AirportDatabase;
use crate::config::ProjectionConfig;
use crate::{Error, Result};
use serde::Serialize;
use tracing::debug;

/// Scale and origin for projecting one airport
///
/// Built fresh by [`ProjectionFrame::prepare`] for every draw request; a frame
/// borrows nothing from the database and holds no identity beyond the call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionFrame {
    icao: String,
    bounds: BoundingBox,
    real_width_m: f64,
    real_height_m: f64,
    draw_width: f64,
    draw_height: f64,
    x_ratio: f64,
    y_ratio: f64,
    #[serde(skip)]
    reference_segment: Option<[GeoPoint; 2]>,
}

impl ProjectionFrame {
    /// Compute the frame for the airport at `index`
    ///
    /// # Errors
    /// * `Error::AirportIndexOutOfRange` if `index` is not in the database
    /// * `Error::EmptyBoundary` if the airport has no boundary vertices
    /// * `Error::DegenerateBounds` if the boundary spans zero meters both ways
    pub fn prepare(db: &AirportDatabase, index: usize, config: &ProjectionConfig) -> Result<Self> {
        Self::for_airport(db.airport(index)?, config)
    }

    /// Compute the frame for an airport record
    pub fn for_airport(airport: &Airport, config: &ProjectionConfig) -> Result<Self> {
        let bounds = BoundingBox::from_points(&airport.boundary)
            .ok_or_else(|| Error::empty_boundary(&airport.icao))?;

        let real_width_m = bounds.width_m();
        let real_height_m = bounds.height_m();
        if real_width_m <= 0.0 && real_height_m <= 0.0 {
            return Err(Error::degenerate_bounds(&airport.icao));
        }

        // The north-south extent lies along x, so it is fitted to the draw width
        let across_x = real_height_m;
        let across_y = real_width_m;
        let scale = if across_x >= across_y {
            config.draw_width / across_x
        } else {
            config.draw_height / across_y
        };

        let draw_width = across_x * scale;
        let draw_height = across_y * scale;
        let x_ratio = if across_x > 0.0 { draw_width / across_x } else { scale };
        let y_ratio = if across_y > 0.0 { draw_height / across_y } else { scale };

        debug!(
            "Frame for {}: {:.0}m x {:.0}m -> {:.1} x {:.1} draw units",
            airport.icao, real_width_m, real_height_m, draw_width, draw_height
        );

        Ok(Self {
            icao: airport.icao.clone(),
            bounds,
            real_width_m,
            real_height_m,
            draw_width,
            draw_height,
            x_ratio,
            y_ratio,
            reference_segment: airport.reference_runway().map(|runway| runway.ends),
        })
    }

    /// Project a latitude/longitude into draw space
    ///
    /// Each axis distance is taken at the average of the point and the anchor
    /// on the other coordinate. Valid only at airport-scale extents.
    pub fn project(&self, lat: f64, lon: f64) -> DrawPoint {
        let anchor = self.bounds.north_east();
        let avg_lat = (anchor.lat + lat) / 2.0;
        let avg_lon = (anchor.lon + lon) / 2.0;

        let to_anchor_lat =
            haversine_distance(&GeoPoint::new(lat, avg_lon), &GeoPoint::new(anchor.lat, avg_lon));
        let to_anchor_lon =
            haversine_distance(&GeoPoint::new(avg_lat, lon), &GeoPoint::new(avg_lat, anchor.lon));

        DrawPoint::new(self.x_ratio * to_anchor_lat, self.y_ratio * to_anchor_lon)
    }

    pub fn project_point(&self, point: &GeoPoint) -> DrawPoint {
        self.project(point.lat, point.lon)
    }

    /// Effective draw units per real meter along the first runway
    ///
    /// # Errors
    /// * `Error::NoReferenceRunway` if the airport has no runway or its ends
    ///   coincide
    pub fn pixels_per_meter(&self) -> Result<f64> {
        let [start, end] = self
            .reference_segment
            .ok_or_else(|| Error::no_reference_runway(&self.icao))?;

        let real_m = haversine_distance(&start, &end);
        if real_m <= 0.0 {
            return Err(Error::no_reference_runway(&self.icao));
        }

        let projected = self.project_point(&start).distance_to(&self.project_point(&end));
        Ok(projected / real_m)
    }

    /// Convert a real-world length into draw units
    pub fn meters_to_pixels(&self, meters: f64) -> Result<f64> {
        Ok(self.pixels_per_meter()? * meters)
    }

    /// Offset that centers the draw box inside a window
    pub fn centering_offset(&self, window_width: f64, window_height: f64) -> DrawPoint {
        DrawPoint::new(
            window_width / 2.0 - self.draw_width / 2.0,
            window_height / 2.0 - self.draw_height / 2.0,
        )
    }

    pub fn icao(&self) -> &str {
        &self.icao
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// East-west extent of the boundary in meters
    pub fn real_width_m(&self) -> f64 {
        self.real_width_m
    }

    /// North-south extent of the boundary in meters
    pub fn real_height_m(&self) -> f64 {
        self.real_height_m
    }

    pub fn draw_width(&self) -> f64 {
        self.draw_width
    }

    pub fn draw_height(&self) -> f64 {
        self.draw_height
    }

    pub fn x_ratio(&self) -> f64 {
        self.x_ratio
    }

    pub fn y_ratio(&self) -> f64 {
        self.y_ratio
    }
}
