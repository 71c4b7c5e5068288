use geo::{Point, Rect, coord};
use serde::{Deserialize, Serialize};

use crate::geometry::fits_precision;
use crate::{Error, Result};

/// GeoJSON bbox: `[min_x, min_y, max_x, max_y]`.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(try_from = "[f64; 4]")]
pub struct BoundingBox([f64; 4]);

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        Self::try_from([min_x, min_y, max_x, max_y])
    }

    pub fn min_x(&self) -> f64 {
        self.0[0]
    }

    pub fn min_y(&self) -> f64 {
        self.0[1]
    }

    pub fn max_x(&self) -> f64 {
        self.0[2]
    }

    pub fn max_y(&self) -> f64 {
        self.0[3]
    }

    pub fn width(&self) -> f64 {
        self.max_x() - self.min_x()
    }

    pub fn height(&self) -> f64 {
        self.max_y() - self.min_y()
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_x(), y: self.min_y() },
            coord! { x: self.max_x(), y: self.max_y() },
        )
    }
}

impl TryFrom<[f64; 4]> for BoundingBox {
    type Error = Error;

    fn try_from(values: [f64; 4]) -> Result<Self> {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::invalid(
                "bbox",
                format!("all bounds must be finite, got {values:?}"),
            ));
        }
        // bounds within precision also keep width and height finite
        if !values.iter().all(|v| fits_precision(*v)) {
            return Err(Error::invalid(
                "bbox",
                format!("bounds overflow 6-decimal precision, got {values:?}"),
            ));
        }
        let [min_x, min_y, max_x, max_y] = values;
        if min_x > max_x {
            return Err(Error::invalid(
                "bbox",
                format!("min_x {min_x} is greater than max_x {max_x}"),
            ));
        }
        if min_y > max_y {
            return Err(Error::invalid(
                "bbox",
                format!("min_y {min_y} is greater than max_y {max_y}"),
            ));
        }
        Ok(Self(values))
    }
}

impl TryFrom<&[f64]> for BoundingBox {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        let values: [f64; 4] = values.try_into().map_err(|_| {
            Error::invalid(
                "bbox",
                format!("expected 4 values, got {}", values.len()),
            )
        })?;
        Self::try_from(values)
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        Self([rect.min().x, rect.min().y, rect.max().x, rect.max().y])
    }
}

/// Reads a center coordinate from the first two values of a slice.
pub fn center_from_slice(values: &[f64]) -> Result<Point<f64>> {
    match values {
        [x, y, ..] => Ok(Point::new(*x, *y)),
        _ => Err(Error::invalid(
            "center",
            format!("expected at least 2 values, got {}", values.len()),
        )),
    }
}
