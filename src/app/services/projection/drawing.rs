//! Draw plan for one airport
//!
//! Everything a renderer needs to paint an airport, already in draw space:
//! the boundary outline, filled pavement polygons and runway strokes, plus
//! the offset that centers the drawing in the window. Nothing here paints.

use super::frame::ProjectionFrame;
use crate::app::models::{Airport, DrawPoint, Polygon};
use crate::app::services::airport_db::AirportDatabase;
use crate::config::ProjectionConfig;
use crate::Result;
use serde::Serialize;
use tracing::debug;

/// One runway as a stroked segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunwayStroke {
    /// Designator such as "16L/34R"
    pub designator: String,
    pub start: DrawPoint,
    pub end: DrawPoint,
    /// Stroke width in draw units
    pub width_px: f64,
}

/// Projected geometry of one airport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportDrawing {
    pub icao: String,
    pub name: String,
    pub draw_width: f64,
    pub draw_height: f64,

    /// Translation that centers the drawing inside the configured window
    pub offset: DrawPoint,

    /// Calibration from the first runway, when the airport has one
    pub pixels_per_meter: Option<f64>,

    pub boundary_line_width: f64,

    /// Boundary vertices in row order, drawn as an open polyline
    pub boundary: Vec<DrawPoint>,

    /// Non-empty pavement polygons, each drawn closed and filled
    pub pavements: Vec<Vec<DrawPoint>>,

    pub runways: Vec<RunwayStroke>,
}

impl AirportDrawing {
    /// Prepare a frame for the airport at `index` and project its geometry
    pub fn build(db: &AirportDatabase, index: usize, config: &ProjectionConfig) -> Result<Self> {
        let airport = db.airport(index)?;
        let frame = ProjectionFrame::for_airport(airport, config)?;
        Ok(Self::from_frame(&frame, airport, config))
    }

    /// Project an airport through an already prepared frame
    pub fn from_frame(frame: &ProjectionFrame, airport: &Airport, config: &ProjectionConfig) -> Self {
        let pixels_per_meter = match frame.pixels_per_meter() {
            Ok(ppm) => Some(ppm),
            Err(e) => {
                debug!("{}", e);
                None
            }
        };

        let project_polygon = |polygon: &Polygon| -> Vec<DrawPoint> {
            polygon.iter().map(|p| frame.project_point(p)).collect()
        };

        let runways = airport
            .runways
            .iter()
            .map(|runway| {
                let width_px = match pixels_per_meter {
                    Some(ppm) if runway.width_m > 0.0 => ppm * runway.width_m,
                    _ => config.default_runway_width_px,
                };
                RunwayStroke {
                    designator: runway.designator(),
                    start: frame.project_point(&runway.ends[0]),
                    end: frame.project_point(&runway.ends[1]),
                    width_px,
                }
            })
            .collect();

        Self {
            icao: airport.icao.clone(),
            name: airport.name.clone(),
            draw_width: frame.draw_width(),
            draw_height: frame.draw_height(),
            offset: frame.centering_offset(config.window_width, config.window_height),
            pixels_per_meter,
            boundary_line_width: config.boundary_line_width_px,
            boundary: project_polygon(&airport.boundary),
            pavements: airport
                .pavements
                .iter()
                .filter(|pavement| !pavement.is_empty())
                .map(project_polygon)
                .collect(),
            runways,
        }
    }

    /// Consecutive boundary vertex pairs
    pub fn boundary_segments(&self) -> impl Iterator<Item = (DrawPoint, DrawPoint)> + '_ {
        self.boundary.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Translate a drawing-local point into window coordinates
    pub fn to_window(&self, point: DrawPoint) -> DrawPoint {
        DrawPoint::new(point.x + self.offset.x, point.y + self.offset.y)
    }
}
