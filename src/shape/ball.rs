//! Support mapping based Ball shape.

use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeError, SupportMap};

/// A Ball shape: a disc centered on the local origin.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball from its radius and center.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }

    /// Creates a new ball, checking that its radius is finite and strictly positive.
    pub fn try_new(radius: Real) -> Result<Ball, ShapeError> {
        if radius.is_finite() && radius > 0.0 {
            Ok(Ball { radius })
        } else {
            Err(ShapeError::InvalidRadius(radius))
        }
    }
}

impl SupportMap for Ball {
    /// The whole boundary of a ball is a single feature, so the index is always `0`.
    #[inline]
    fn local_support_point_id(&self, dir: &Vector) -> (u32, Point) {
        let dir = dir.try_normalize(0.0).unwrap_or_else(Vector::x);
        (0, Point::from(dir * self.radius))
    }

    #[inline]
    fn vertices(&self) -> &[Point] {
        &[]
    }

    #[inline]
    fn center_of_mass(&self) -> Point {
        Point::origin()
    }

    #[inline]
    fn witness_point(&self, _: u32, local_dir: &Vector) -> Point {
        self.local_support_point(local_dir)
    }

    #[inline]
    fn margin(&self) -> Real {
        self.radius
    }

    /// The core of a ball is its center.
    #[inline]
    fn local_core_support_point_id(&self, _: &Vector) -> (u32, Point) {
        (0, Point::origin())
    }
}
