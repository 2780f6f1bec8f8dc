use crate::motion::Pose;
use crate::query::gjk::{gjk, GjkResult};
use crate::query::GjkOptions;
use crate::shape::SupportMap;

/// Computes the minimum distance separating two shapes, along with their closest points
/// and features.
///
/// Returns a zero distance if the shapes are intersecting.
#[inline]
pub fn distance<G1, G2>(g1: &G1, pose1: &Pose, g2: &G2, pose2: &Pose) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    distance_with_options(g1, pose1, g2, pose2, &GjkOptions::default())
}

/// Computes the minimum distance separating two shapes with custom GJK options.
pub fn distance_with_options<G1, G2>(
    g1: &G1,
    pose1: &Pose,
    g2: &G2,
    pose2: &Pose,
    options: &GjkOptions,
) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    gjk(g1, pose1, g2, pose2, options)
}
