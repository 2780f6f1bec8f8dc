//! The Gilbert-Johnson-Keerthi distance algorithm.
//!
//! GJK operates on the Minkowski difference `A - B` of two convex shapes: the distance
//! between the shapes is the distance from the origin to this difference, and the shapes
//! overlap iff it contains the origin. The algorithm grows a simplex of support points of
//! the difference toward the origin, reducing it after each insertion to the vertices
//! supporting its point closest to the origin.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::motion::Pose;
use crate::query::closest_feature::{closest_features, ClosestFeature};
use crate::query::gjk::{CoreShape, Simplex, SupportPoint};
use crate::query::GjkOptions;
use crate::shape::SupportMap;

/// The tolerance used by GJK to decide whether a distance is zero.
pub fn eps_tol() -> Real {
    DEFAULT_EPSILON * 10.0
}

/// The reason the GJK algorithm stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum GjkStatus {
    /// The simplex encloses the origin: the shapes overlap.
    Containment,
    /// The origin lies on the simplex: the shapes touch.
    Touching,
    /// No support point could bring the simplex closer to the origin. This is the normal
    /// termination for separated shapes.
    NoProgress,
    /// The iteration limit was reached. The result is the best estimate found so far.
    MaxIterations,
}

/// The result of the GJK algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GjkResult {
    /// The world-space point of the first shape closest to the second shape.
    pub point1: Point,
    /// The world-space point of the second shape closest to the first shape.
    pub point2: Point,
    /// The distance between both shapes. Zero if they overlap.
    pub distance: Real,
    /// Whether the shapes overlap.
    pub intersecting: bool,
    /// The feature of the first shape closest to the second one, unless they overlap.
    pub feature1: Option<ClosestFeature>,
    /// The feature of the second shape closest to the first one, unless they overlap.
    pub feature2: Option<ClosestFeature>,
    /// The terminal simplex, to be fed to the EPA for penetration queries.
    ///
    /// If both shapes have a margin and are separated, this is the simplex of their cores.
    pub simplex: Simplex,
    /// Why the algorithm stopped.
    pub status: GjkStatus,
    /// The number of support points computed after the initial one.
    pub iterations: usize,
}

impl GjkResult {
    /// The unit direction pointing from `point1` toward `point2`, if the shapes are
    /// separated.
    pub fn normal(&self) -> Option<UnitVector> {
        UnitVector::try_new(self.point2 - self.point1, eps_tol())
    }
}

/// Computes the distance and closest points between two convex shapes.
///
/// Shapes with a margin, like balls, are handled through their cores: if the cores are
/// further apart than the sum of the margins, the distance and witness points are those of
/// the cores, offset by the margins. This makes the result exact for balls.
pub fn gjk<G1, G2>(g1: &G1, pose1: &Pose, g2: &G2, pose2: &Pose, options: &GjkOptions) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    if let (Some(margin1), Some(margin2)) = (world_margin(g1, pose1), world_margin(g2, pose2)) {
        if margin1 + margin2 > 0.0 {
            let (simplex, status, niter) =
                closest_simplex(&CoreShape(g1), pose1, &CoreShape(g2), pose2, options);
            let (core1, core2) = simplex.closest_points();
            let core_dist = simplex.closest_point().coords.norm();

            if status != GjkStatus::Containment && core_dist - margin1 - margin2 > eps_tol() {
                let axis = (core2 - core1) / core_dist;
                let (feature1, feature2) =
                    closest_features(g1, pose1, g2, pose2, &simplex, Some(&axis));

                return GjkResult {
                    point1: core1 + axis * margin1,
                    point2: core2 - axis * margin2,
                    distance: core_dist - margin1 - margin2,
                    intersecting: false,
                    feature1: Some(feature1),
                    feature2: Some(feature2),
                    simplex,
                    status,
                    iterations: niter,
                };
            }
        }
    }

    let (simplex, status, niter) = closest_simplex(g1, pose1, g2, pose2, options);
    let (point1, point2) = simplex.closest_points();

    if status == GjkStatus::Containment {
        return GjkResult {
            point1,
            point2,
            distance: 0.0,
            intersecting: true,
            feature1: None,
            feature2: None,
            simplex,
            status,
            iterations: niter,
        };
    }

    let distance = simplex.closest_point().coords.norm();
    let axis = (distance > eps_tol()).then(|| (point2 - point1) / distance);
    let (feature1, feature2) = closest_features(g1, pose1, g2, pose2, &simplex, axis.as_ref());

    GjkResult {
        point1,
        point2,
        distance,
        intersecting: false,
        feature1: Some(feature1),
        feature2: Some(feature2),
        simplex,
        status,
        iterations: niter,
    }
}

// The world-space margin of a shape. `None` if the pose does not scale uniformly, in which
// case a dilated shape is not a dilated core anymore.
fn world_margin<G: ?Sized + SupportMap>(g: &G, pose: &Pose) -> Option<Real> {
    let margin = g.margin();

    if margin == 0.0 {
        return Some(0.0);
    }

    let (sx, sy) = (pose.scale.x.abs(), pose.scale.y.abs());
    (sx == sy).then_some(margin * sx)
}

// The GJK loop: grows and reduces the simplex until it stops making progress toward the
// origin. Returns the terminal simplex, the stop reason and the iteration count.
fn closest_simplex<G1, G2>(
    g1: &G1,
    pose1: &Pose,
    g2: &G2,
    pose2: &Pose,
    options: &GjkOptions,
) -> (Simplex, GjkStatus, usize)
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let eps_tol = eps_tol();
    let mut simplex = Simplex::new(SupportPoint::from_shapes(
        g1,
        pose1,
        g2,
        pose2,
        &Vector::x(),
    ));
    let mut niter = 0;

    let status = loop {
        let snapshot = simplex;
        let _ = simplex.reduce(&Point::origin());

        if simplex.len() == 3 {
            break GjkStatus::Containment;
        }

        if niter >= options.max_iterations {
            log::warn!(
                "GJK reached its iteration limit ({}) without converging.",
                options.max_iterations
            );
            break GjkStatus::MaxIterations;
        }

        niter += 1;

        let Some(dir) = simplex.search_direction() else {
            break GjkStatus::Touching;
        };

        let support = SupportPoint::from_shapes(g1, pose1, g2, pose2, &dir);

        if snapshot.contains(&support) {
            break GjkStatus::NoProgress;
        }

        let max_bound = simplex.closest_point().coords.norm();
        let min_bound = -support.point.coords.dot(&dir) / dir.norm();

        if max_bound - min_bound <= eps_tol * max_bound {
            break GjkStatus::NoProgress;
        }

        simplex.push(support);
    };

    (simplex, status, niter)
}
