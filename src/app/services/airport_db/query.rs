//! Airport lookup and search functionality
//!
//! This module provides query methods for finding airports in the database
//! by name, geographic region and distance from a point.

use super::AirportDatabase;
use crate::app::models::{Airport, GeoPoint};
use crate::app::services::projection::haversine_distance;
use serde::Serialize;

/// An airport returned by a query, with its database index
#[derive(Debug, Clone, Serialize)]
pub struct AirportMatch<'a> {
    pub index: usize,
    pub airport: &'a Airport,

    /// Distance in meters from the query point, for proximity queries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
}

impl<'a> AirportMatch<'a> {
    fn new(index: usize, airport: &'a Airport) -> Self {
        Self {
            index,
            airport,
            distance_m: None,
        }
    }
}

impl AirportDatabase {
    /// Find airports by name or city pattern (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// # use aptmap::{Airport, AirportDatabase};
    /// let db = AirportDatabase::from_airports(vec![Airport::new("KSEA", "Seattle Tacoma Intl", 433.0)]);
    /// assert_eq!(db.find_by_name("tacoma").len(), 1);
    /// ```
    pub fn find_by_name(&self, pattern: &str) -> Vec<AirportMatch<'_>> {
        let pattern_lower = pattern.to_lowercase();
        self.matches()
            .filter(|m| name_matches(m.airport, &pattern_lower))
            .collect()
    }

    /// Find airports whose location falls within a bounding box
    ///
    /// Location is the datum, or the first runway end when no datum was
    /// supplied. Airports with neither are never returned.
    pub fn find_in_region(
        &self,
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Vec<AirportMatch<'_>> {
        let region = GeographicRegion::new(min_lat, max_lat, min_lon, max_lon);
        self.matches()
            .filter(|m| m.airport.location().is_some_and(|p| region.contains(&p)))
            .collect()
    }

    /// Closest airports to a point by great-circle distance, nearest first
    pub fn find_nearest(&self, point: GeoPoint, limit: usize) -> Vec<AirportMatch<'_>> {
        self.find_by_criteria(&SearchCriteria {
            near: Some(point),
            limit: Some(limit),
            ..SearchCriteria::default()
        })
    }

    /// Find airports by multiple criteria
    ///
    /// Only airports matching every specified filter are returned. With a
    /// `near` point results are ordered by distance, otherwise by index.
    pub fn find_by_criteria(&self, criteria: &SearchCriteria) -> Vec<AirportMatch<'_>> {
        let pattern_lower = criteria.name_pattern.as_deref().map(str::to_lowercase);

        let mut results: Vec<AirportMatch<'_>> = self
            .matches()
            .filter(|m| {
                pattern_lower
                    .as_deref()
                    .is_none_or(|pattern| name_matches(m.airport, pattern))
            })
            .filter(|m| {
                criteria.region.as_ref().is_none_or(|region| {
                    m.airport.location().is_some_and(|p| region.contains(&p))
                })
            })
            .filter_map(|mut m| match criteria.near {
                Some(point) => {
                    let location = m.airport.location()?;
                    m.distance_m = Some(haversine_distance(&point, &location));
                    Some(m)
                }
                None => Some(m),
            })
            .collect();

        if criteria.near.is_some() {
            results.sort_by(|a, b| {
                a.distance_m
                    .unwrap_or(f64::INFINITY)
                    .total_cmp(&b.distance_m.unwrap_or(f64::INFINITY))
            });
        }

        if let Some(limit) = criteria.limit {
            results.truncate(limit);
        }

        results
    }

    fn matches(&self) -> impl Iterator<Item = AirportMatch<'_>> {
        self.airports
            .iter()
            .enumerate()
            .map(|(index, airport)| AirportMatch::new(index, airport))
    }
}

fn name_matches(airport: &Airport, pattern_lower: &str) -> bool {
    airport.name.to_lowercase().contains(pattern_lower)
        || airport
            .city
            .as_deref()
            .is_some_and(|city| city.to_lowercase().contains(pattern_lower))
}

/// Search criteria for multi-criteria airport queries
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    /// Name or city pattern to search for (case-insensitive)
    pub name_pattern: Option<String>,

    /// Geographic region bounds
    pub region: Option<GeographicRegion>,

    /// Order results by distance from this point
    pub near: Option<GeoPoint>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// Geographic region definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicRegion {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeographicRegion {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lon >= self.min_lon
            && point.lon <= self.max_lon
    }
}
