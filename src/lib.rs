//! Random GeoJSON point geometries for sample and test data.
//!
//! Points are drawn uniformly inside a circle (center plus radius in meters)
//! or inside an axis-aligned bounding box. Every sampler takes its random
//! source explicitly; use [`rng::seeded`] for reproducible output.

mod error;
pub use error::{Error, Result};

pub mod constants;

mod geometry;
pub use geometry::{Geometry, truncate_coordinate};

mod bounding_box;
pub use bounding_box::{BoundingBox, center_from_slice};

mod circle;
pub use circle::CircleSampler;

mod bbox_sampler;
pub use bbox_sampler::BoxSampler;

mod generate_point;
pub use generate_point::{
    random_points_in_box, random_points_in_box_with, random_points_in_circle,
    random_points_in_circle_with,
};

pub mod rng;
