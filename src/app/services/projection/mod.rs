//! Geo-projection engine
//!
//! Converts airport coordinates into a locally flat draw space:
//!
//! - [`haversine`] - Great-circle distance in meters
//! - [`bounds`] - Boundary bounding box and real-world extents
//! - [`frame`] - Per-airport scale, point projection and calibration
//! - [`drawing`] - Projected boundary, pavements and runway strokes
//!
//! Frames are computed from an immutable [`AirportDatabase`] and never
//! cached, so any number of threads may project from a shared database.
//!
//! [`AirportDatabase`]: crate::app::services::airport_db::AirportDatabase

pub mod bounds;
pub mod drawing;
pub mod frame;
pub mod haversine;

#[cfg(test)]
mod tests;

pub use bounds::BoundingBox;
pub use drawing::{AirportDrawing, RunwayStroke};
pub use frame::ProjectionFrame;
pub use haversine::haversine_distance;
