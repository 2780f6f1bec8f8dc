use crate::math::{Point, Vector};
use crate::motion::Pose;
use crate::shape::SupportMap;
use core::ops::Sub;

/// A point of the Minkowski difference `A - B` of two shapes.
///
/// It keeps track of the world-space points of both shapes it was computed from, as well
/// as the vertex indices that identify the features these points belong to.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SupportPoint {
    /// The point on the Minkowski difference: `orig1 - orig2`.
    pub point: Point,
    /// The world-space point on the first shape.
    pub orig1: Point,
    /// The world-space point on the second shape.
    pub orig2: Point,
    /// The index of the support vertex on the first shape.
    pub id1: u32,
    /// The index of the support vertex on the second shape.
    pub id2: u32,
}

impl SupportPoint {
    /// Initializes a Minkowski difference point from its origins on both shapes.
    pub fn new(orig1: Point, id1: u32, orig2: Point, id2: u32) -> Self {
        SupportPoint {
            point: Point::from(orig1 - orig2),
            orig1,
            orig2,
            id1,
            id2,
        }
    }

    /// Computes the support point of the Minkowski difference `g1 - g2` along `dir`.
    ///
    /// `g1` is queried along `dir` and `g2` along `-dir`. All vectors are in world-space.
    pub fn from_shapes<G1, G2>(g1: &G1, pose1: &Pose, g2: &G2, pose2: &Pose, dir: &Vector) -> Self
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let (id1, sp1) = g1.support_point_id(pose1, dir);
        let (id2, sp2) = g2.support_point_id(pose2, &-*dir);

        SupportPoint::new(sp1, id1, sp2, id2)
    }

    /// Does this point come from the same pair of vertices as `other`?
    #[inline]
    pub fn same_ids(&self, other: &SupportPoint) -> bool {
        self.id1 == other.id1 && self.id2 == other.id2
    }

    /// The same point, seen from the Minkowski difference `B - A`.
    #[must_use]
    pub fn swapped(&self) -> Self {
        SupportPoint::new(self.orig2, self.id2, self.orig1, self.id1)
    }
}

impl Sub<SupportPoint> for SupportPoint {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: SupportPoint) -> Vector {
        self.point - rhs.point
    }
}
