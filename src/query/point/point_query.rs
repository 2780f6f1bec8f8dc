use crate::math::{Point, Real};
use crate::motion::Pose;
use crate::query::gjk::{gjk, ConstantPoint};
use crate::query::{ClosestFeature, GjkOptions};
use crate::shape::SupportMap;

/// Description of the projection of a point on a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointProjection {
    /// Whether the point to project was inside of the shape.
    pub is_inside: bool,
    /// The projection result, in world-space.
    ///
    /// If the point was inside of the shape, this is the point itself.
    pub point: Point,
    /// The distance between the point and its projection.
    pub distance: Real,
    /// The feature of the shape the projection lies on, if the point was outside of it.
    pub feature: Option<ClosestFeature>,
}

/// Projects a world-space point on a shape placed at `pose`.
///
/// Points inside of the shape are their own projection.
pub fn project_point<G>(shape: &G, pose: &Pose, point: &Point) -> PointProjection
where
    G: ?Sized + SupportMap,
{
    let res = gjk(
        shape,
        pose,
        &ConstantPoint(*point),
        &Pose::identity(),
        &GjkOptions::default(),
    );

    if res.intersecting {
        PointProjection {
            is_inside: true,
            point: *point,
            distance: 0.0,
            feature: None,
        }
    } else {
        PointProjection {
            is_inside: false,
            point: res.point1,
            distance: res.distance,
            feature: res.feature1,
        }
    }
}
