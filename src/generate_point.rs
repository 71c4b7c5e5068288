use geo::Point;
use rand::Rng;

use crate::{BoundingBox, BoxSampler, CircleSampler, Geometry, Result};

pub fn random_points_in_circle_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    center: Point<f64>,
    radius_in_meters: f64,
) -> Result<Vec<Geometry>> {
    Ok(CircleSampler::new(center, radius_in_meters)?.generate(rng, count))
}

/// Like [`random_points_in_circle_with`], drawing from the thread-local rng.
pub fn random_points_in_circle(
    count: usize,
    center: Point<f64>,
    radius_in_meters: f64,
) -> Result<Vec<Geometry>> {
    random_points_in_circle_with(&mut rand::rng(), count, center, radius_in_meters)
}

pub fn random_points_in_box_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    bbox: BoundingBox,
) -> Vec<Geometry> {
    BoxSampler::new(bbox).generate(rng, count)
}

pub fn random_points_in_box(count: usize, bbox: BoundingBox) -> Vec<Geometry> {
    random_points_in_box_with(&mut rand::rng(), count, bbox)
}
