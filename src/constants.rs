use geo::Point;

/// Meters per degree of latitude at the equator. Only a good approximation
/// for small radii.
pub const METERS_PER_DEGREE: f64 = 111_300.0;

/// Coordinates are truncated to 6 decimal places.
pub const COORDINATE_SCALE: f64 = 1e6;

/// Landmark centers, stored `[lat, lon]` as the sample data records them
/// (not geo's x = lon convention).
pub const NEW_YORK: Point<f64> = Point(geo::Coord {
    x: 40.750422,
    y: -73.996328,
});
pub const BANGALORE: Point<f64> = Point(geo::Coord {
    x: 12.953997,
    y: 77.630939,
});
