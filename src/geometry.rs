use geo::Point;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::constants::COORDINATE_SCALE;

/// A GeoJSON geometry. Only points are generated, so only points exist.
///
/// Serializes as `{"type":"point","coordinates":[x,y]}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
}

impl Geometry {
    /// Builds a point, truncating both coordinates to 6 decimal places.
    pub fn truncated_point(x: f64, y: f64) -> Self {
        Geometry::Point {
            coordinates: [truncate_coordinate(x), truncate_coordinate(y)],
        }
    }

    pub fn coordinates(&self) -> [f64; 2] {
        match self {
            Geometry::Point { coordinates } => *coordinates,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Point<f64>> for Geometry {
    fn from(point: Point<f64>) -> Self {
        Geometry::Point {
            coordinates: [point.x(), point.y()],
        }
    }
}

impl From<&Geometry> for Point<f64> {
    fn from(geometry: &Geometry) -> Self {
        let [x, y] = geometry.coordinates();
        Point::new(x, y)
    }
}

/// Truncates toward zero (never rounds) at 6 decimal places.
pub fn truncate_coordinate(value: f64) -> f64 {
    (value * COORDINATE_SCALE).trunc() / COORDINATE_SCALE
}

/// Whether `value` survives [`truncate_coordinate`] without overflowing.
pub(crate) fn fits_precision(value: f64) -> bool {
    (value * COORDINATE_SCALE).is_finite()
}
