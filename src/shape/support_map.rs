//! Traits for support mapping based shapes.

use crate::math::{Point, Real, Vector};
use crate::motion::Pose;

/// Traits of convex shapes representable by a support mapping function.
///
/// A support function is a function associating a direction to the shape point which
/// maximizes their dot product. Vertex indices returned alongside the support points
/// identify the shape feature the point belongs to.
pub trait SupportMap {
    /// Evaluates the support function of this shape in its local frame, returning the
    /// index of the support vertex along with the vertex itself.
    ///
    /// Ties are broken in favor of the lowest index so results do not depend on the
    /// floating-point evaluation order.
    fn local_support_point_id(&self, dir: &Vector) -> (u32, Point);

    /// The vertices of this shape, in its local frame, wound counter-clockwise.
    ///
    /// Shapes without discrete vertices (balls) return an empty slice.
    fn vertices(&self) -> &[Point];

    /// The center of mass of this shape, in its local frame.
    fn center_of_mass(&self) -> Point;

    /// The radius of the ball this shape is dilated by.
    ///
    /// A shape with a non-zero margin is the Minkowski sum of its core, see
    /// [`SupportMap::local_core_support_point_id`], and a ball of this radius.
    #[inline]
    fn margin(&self) -> Real {
        0.0
    }

    /// Evaluates the support function of the core of this shape, i.e. the shape without
    /// its margin, in its local frame.
    #[inline]
    fn local_core_support_point_id(&self, dir: &Vector) -> (u32, Point) {
        self.local_support_point_id(dir)
    }

    /// Evaluates the support function of this shape in its local frame.
    #[inline]
    fn local_support_point(&self, dir: &Vector) -> Point {
        self.local_support_point_id(dir).1
    }

    /// Evaluates the support function of this shape placed at `pose`.
    ///
    /// Both `dir` and the returned point are expressed in world-space.
    #[inline]
    fn support_point_id(&self, pose: &Pose, dir: &Vector) -> (u32, Point) {
        let local_dir = pose.local_support_direction(dir);
        let (id, pt) = self.local_support_point_id(&local_dir);
        (id, pose.transform_point(&pt))
    }

    /// Evaluates the support function of this shape placed at `pose`.
    #[inline]
    fn support_point(&self, pose: &Pose, dir: &Vector) -> Point {
        self.support_point_id(pose, dir).1
    }

    /// The local point identified by the vertex index `id`.
    ///
    /// Shapes without discrete vertices evaluate their support point along `local_dir`
    /// instead, so the witness follows the direction it is observed from.
    #[inline]
    fn witness_point(&self, id: u32, local_dir: &Vector) -> Point {
        let _ = local_dir;
        self.vertices()[id as usize]
    }

    /// The largest number of support-vertex changes a separating-axis search over this
    /// shape can go through.
    #[inline]
    fn num_vertices(&self) -> usize {
        self.vertices().len().max(1)
    }
}

impl<T: SupportMap + ?Sized> SupportMap for &T {
    #[inline]
    fn local_support_point_id(&self, dir: &Vector) -> (u32, Point) {
        (**self).local_support_point_id(dir)
    }

    #[inline]
    fn vertices(&self) -> &[Point] {
        (**self).vertices()
    }

    #[inline]
    fn center_of_mass(&self) -> Point {
        (**self).center_of_mass()
    }

    #[inline]
    fn witness_point(&self, id: u32, local_dir: &Vector) -> Point {
        (**self).witness_point(id, local_dir)
    }

    #[inline]
    fn margin(&self) -> Real {
        (**self).margin()
    }

    #[inline]
    fn local_core_support_point_id(&self, dir: &Vector) -> (u32, Point) {
        (**self).local_core_support_point_id(dir)
    }
}
