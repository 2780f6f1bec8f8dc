use crate::motion::Pose;
use crate::query::epa::{self, Penetration};
use crate::query::gjk::Simplex;
use crate::query::EpaOptions;
use crate::shape::SupportMap;

/// Computes the penetration depth and normal of two overlapping shapes.
///
/// `simplex` is the terminal simplex of a [`distance`](crate::query::distance) query run on
/// the same shapes at the same poses. Returns `None` if the shapes are not overlapping or if
/// the expansion did not converge.
#[inline]
pub fn penetration<G1, G2>(
    g1: &G1,
    pose1: &Pose,
    g2: &G2,
    pose2: &Pose,
    simplex: &Simplex,
) -> Option<Penetration>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    penetration_with_options(g1, pose1, g2, pose2, simplex, &EpaOptions::default())
}

/// Computes the penetration depth and normal of two overlapping shapes with custom EPA
/// options.
pub fn penetration_with_options<G1, G2>(
    g1: &G1,
    pose1: &Pose,
    g2: &G2,
    pose2: &Pose,
    simplex: &Simplex,
    options: &EpaOptions,
) -> Option<Penetration>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    epa::penetration(g1, pose1, g2, pose2, simplex, options)
}
