//! Definition of the segment shape.

use crate::math::{Point, Vector};
use crate::shape::SupportMap;

/// A segment shape: the convex hull of its two endpoints.
///
/// A segment is the degenerate polygon used to model thin static geometry like walls
/// and floors. Its single edge goes from `a()` (vertex `0`) to `b()` (vertex `1`).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    points: [Point; 2],
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point, b: Point) -> Segment {
        Segment { points: [a, b] }
    }

    /// The first endpoint.
    #[inline]
    pub fn a(&self) -> &Point {
        &self.points[0]
    }

    /// The second endpoint.
    #[inline]
    pub fn b(&self) -> &Point {
        &self.points[1]
    }
}

impl SupportMap for Segment {
    #[inline]
    fn local_support_point_id(&self, dir: &Vector) -> (u32, Point) {
        if self.points[1].coords.dot(dir) > self.points[0].coords.dot(dir) {
            (1, self.points[1])
        } else {
            (0, self.points[0])
        }
    }

    #[inline]
    fn vertices(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    fn center_of_mass(&self) -> Point {
        na::center(&self.points[0], &self.points[1])
    }
}
