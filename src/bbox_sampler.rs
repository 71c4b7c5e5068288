use rand::Rng;
use rand::distr::Distribution;
use tracing::{debug, trace};

use crate::{BoundingBox, Geometry};

/// Uniform points inside an axis-aligned bounding box.
///
/// Each axis is sampled from its own range: x from `[min_x, max_x]` and
/// y from `[min_y, max_y]`. Coordinates are truncated toward zero, so bounds
/// that are not multiples of 1e-6 can yield points just outside the box.
#[derive(Debug, Clone, Copy)]
pub struct BoxSampler {
    bbox: BoundingBox,
}

impl BoxSampler {
    pub fn new(bbox: BoundingBox) -> Self {
        debug!(?bbox, "box sampler created");
        Self { bbox }
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Geometry> {
        debug!(count, "generating points in box");
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            points.push(self.sample(rng));
        }
        points
    }
}

impl Distribution<Geometry> for BoxSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Geometry {
        let u: f64 = rng.random();
        let v: f64 = rng.random();

        let point = Geometry::truncated_point(
            self.bbox.min_x() + u * self.bbox.width(),
            self.bbox.min_y() + v * self.bbox.height(),
        );
        trace!(?point, "sampled point in box");
        point
    }
}
