use std::f64::consts::PI;

use geo::Point;
use rand::Rng;
use rand::distr::Distribution;
use tracing::{debug, trace};

use crate::constants::METERS_PER_DEGREE;
use crate::geometry::fits_precision;
use crate::{Error, Geometry, Result};

/// Uniform points (by area) inside a disk around `center`.
#[derive(Debug, Clone, Copy)]
pub struct CircleSampler {
    center: Point<f64>,
    radius_in_degrees: f64,
}

impl CircleSampler {
    pub fn new(center: Point<f64>, radius_in_meters: f64) -> Result<Self> {
        if !center.x().is_finite() || !center.y().is_finite() {
            return Err(Error::invalid(
                "center",
                format!("coordinates must be finite, got {:?}", center.x_y()),
            ));
        }
        if !radius_in_meters.is_finite() || radius_in_meters < 0.0 {
            return Err(Error::invalid(
                "radius_in_meters",
                format!("must be a finite non-negative number, got {radius_in_meters}"),
            ));
        }

        let radius_in_degrees = radius_in_meters / METERS_PER_DEGREE;
        // every sampled coordinate lies within |center| + radius
        if !fits_precision(center.x().abs() + radius_in_degrees)
            || !fits_precision(center.y().abs() + radius_in_degrees)
        {
            return Err(Error::invalid(
                "center",
                format!(
                    "{:?} with radius {radius_in_degrees} degrees overflows 6-decimal precision",
                    center.x_y()
                ),
            ));
        }
        debug!(?center, radius_in_meters, radius_in_degrees, "circle sampler created");
        Ok(Self {
            center,
            radius_in_degrees,
        })
    }

    pub fn center(&self) -> Point<f64> {
        self.center
    }

    pub fn radius_in_degrees(&self) -> f64 {
        self.radius_in_degrees
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Geometry> {
        debug!(count, "generating points in circle");
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            points.push(self.sample(rng));
        }
        points
    }
}

impl Distribution<Geometry> for CircleSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Geometry {
        let u: f64 = rng.random();
        let v: f64 = rng.random();

        // sqrt keeps the density uniform over area rather than over radius
        let w = self.radius_in_degrees * u.sqrt();
        let t = 2.0 * PI * v;

        let point = Geometry::truncated_point(
            self.center.x() + w * t.cos(),
            self.center.y() + w * t.sin(),
        );
        trace!(?point, "sampled point in circle");
        point
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NEW_YORK;
    use crate::rng::{FixedRng, seeded};

    // one truncation step on each axis
    const TOLERANCE: f64 = 2e-6;

    fn distance(a: Point<f64>, b: Point<f64>) -> f64 {
        (a.x() - b.x()).hypot(a.y() - b.y())
    }

    #[test]
    fn converts_meters_to_degrees() {
        let sampler = CircleSampler::new(NEW_YORK, 111_300.0).unwrap();
        assert_eq!(sampler.radius_in_degrees(), 1.0);
    }

    #[test]
    fn generates_requested_count() {
        let sampler = CircleSampler::new(NEW_YORK, 1000.0).unwrap();
        let mut rng = seeded(7);
        for count in [0, 1, 3, 250] {
            assert_eq!(sampler.generate(&mut rng, count).len(), count);
        }
    }

    #[test]
    fn new_york_scenario() {
        let sampler = CircleSampler::new(NEW_YORK, 1000.0).unwrap();
        let points = sampler.generate(&mut seeded(1), 3);
        assert_eq!(points.len(), 3);
        for point in &points {
            let [x, y] = point.coordinates();
            assert!((x - 40.750422).abs() < 0.009 + TOLERANCE);
            assert!((y - -73.996328).abs() < 0.009 + TOLERANCE);
            let json = point.to_json().unwrap();
            assert!(json.starts_with(r#"{"type":"point","coordinates":["#));
        }
    }

    #[test]
    fn points_stay_inside_radius() {
        let radius_in_meters = 5_000.0;
        let sampler = CircleSampler::new(NEW_YORK, radius_in_meters).unwrap();
        let mut rng = seeded(42);
        for point in sampler.generate(&mut rng, 2_000) {
            let d = distance(Point::from(&point), NEW_YORK);
            assert!(d <= sampler.radius_in_degrees() + TOLERANCE);
            assert!(d * METERS_PER_DEGREE <= radius_in_meters + TOLERANCE * METERS_PER_DEGREE);
        }
    }

    #[test]
    fn density_is_uniform_by_area() {
        // half the area of a disk lies outside radius r / sqrt(2)
        let sampler = CircleSampler::new(Point::new(0.0, 0.0), 111_300.0).unwrap();
        let points = sampler.generate(&mut seeded(3), 10_000);
        let inner = points
            .iter()
            .filter(|p| distance(Point::from(*p), Point::new(0.0, 0.0)) < 1.0 / 2f64.sqrt())
            .count();
        let share = inner as f64 / points.len() as f64;
        assert!((share - 0.5).abs() < 0.03, "inner share was {share}");
    }

    #[test]
    fn coordinates_have_six_decimals() {
        let sampler = CircleSampler::new(NEW_YORK, 2_500.0).unwrap();
        for point in sampler.generate(&mut seeded(11), 500) {
            for c in point.coordinates() {
                let scaled = c * 1e6;
                assert!((scaled - scaled.round()).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn zero_radius_collapses_to_center() {
        let center = Point::new(12.5, -3.25);
        let sampler = CircleSampler::new(center, 0.0).unwrap();
        for point in sampler.generate(&mut seeded(5), 10) {
            assert_eq!(point.coordinates(), [12.5, -3.25]);
        }
    }

    #[test]
    fn same_seed_same_points() {
        let sampler = CircleSampler::new(NEW_YORK, 1000.0).unwrap();
        let first = sampler.generate(&mut seeded(99), 20);
        let second = sampler.generate(&mut seeded(99), 20);
        assert_eq!(first, second);
        let other = sampler.generate(&mut seeded(100), 20);
        assert_ne!(first, other);
    }

    #[test]
    fn rejects_bad_radius() {
        for radius in [-1.0, f64::NAN, f64::INFINITY] {
            let err = CircleSampler::new(NEW_YORK, radius).unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidArgument {
                    argument: "radius_in_meters",
                    ..
                }
            ));
        }
    }

    #[test]
    fn rejects_non_finite_center() {
        assert!(CircleSampler::new(Point::new(f64::NAN, 0.0), 10.0).is_err());
    }

    #[test]
    fn rejects_overflowing_extent() {
        assert!(CircleSampler::new(Point::new(1e303, 0.0), 10.0).is_err());
        assert!(CircleSampler::new(Point::new(0.0, 0.0), 1e308).is_err());
    }

    const QUARTER: u64 = 1 << 62;
    const HALF: u64 = 1 << 63;

    #[test]
    fn polar_offsets_follow_cos_and_sin() {
        // radius of 2 degrees; u = 0.25 puts every point at w = 1
        let sampler = CircleSampler::new(Point::new(10.0, 20.0), 222_600.0).unwrap();

        // v = 0: t = 0
        let mut rng = FixedRng(vec![QUARTER, 0]);
        assert_eq!(sampler.sample(&mut rng).coordinates(), [11.0, 20.0]);

        // v = 0.25: t = pi / 2
        let mut rng = FixedRng(vec![QUARTER, QUARTER]);
        assert_eq!(sampler.sample(&mut rng).coordinates(), [10.0, 21.0]);

        // v = 0.5: t = pi
        let mut rng = FixedRng(vec![QUARTER, HALF]);
        assert_eq!(sampler.sample(&mut rng).coordinates(), [9.0, 20.0]);
    }

    #[test]
    fn value_stability() {
        let sampler = CircleSampler::new(Point::new(10.0, 20.0), 222_600.0).unwrap();
        let expected = [
            [11.110411, 20.613944],
            [10.295893, 21.516142],
            [9.73904, 18.967206],
        ];
        let points: Vec<[f64; 2]> = sampler
            .generate(&mut seeded(1), 3)
            .iter()
            .map(Geometry::coordinates)
            .collect();
        assert_eq!(points, expected);
    }
}
