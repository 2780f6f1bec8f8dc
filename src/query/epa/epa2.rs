//! Two-dimensional penetration depth queries using the Expanding Polytope Algorithm.

use num::Bounded;

use crate::math::{Point, Real, UnitVector, Vector};
use crate::motion::Pose;
use crate::query::gjk::{Simplex, SupportPoint};
use crate::query::EpaOptions;
use crate::shape::SupportMap;
use crate::utils;

/// The penetration of two overlapping shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct Penetration {
    /// The penetration direction, pointing from the first shape toward the second one.
    ///
    /// Translating the second shape by `normal * depth` brings both shapes in touching
    /// contact.
    pub normal: UnitVector,
    /// The penetration depth.
    pub depth: Real,
    /// The deepest point of the first shape inside of the second one.
    pub point1: Point,
    /// The deepest point of the second shape inside of the first one.
    pub point2: Point,
    /// The final polytope, a counter-clockwise convex polygon of the Minkowski difference.
    pub polytope: Vec<SupportPoint>,
    /// The number of vertices inserted into the polytope.
    pub iterations: usize,
}

/// Computes the penetration depth and normal of two overlapping shapes, starting from the
/// terminal simplex of a GJK query.
///
/// The simplex must contain the origin, or lie on it: if its point closest to the origin is
/// further than `options.epsilon`, `None` is returned. A simplex with less than three
/// vertices is first completed into a triangle. Returns `None` as well if the polytope is
/// degenerate or if it did not converge within `options.max_iterations` insertions.
pub fn penetration<G1, G2>(
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
    let support = |dir: &Vector| SupportPoint::from_shapes(g1, pose1, g2, pose2, dir);

    if simplex.closest_point().coords.norm() > options.epsilon {
        log::debug!("EPA called on a simplex that does not contain the origin.");
        return None;
    }

    let mut polytope: Vec<SupportPoint> = Vec::with_capacity(options.max_iterations + 3);
    polytope.extend_from_slice(simplex.points());

    /*
     * Complete the initial simplex into a triangle.
     */
    if polytope.len() == 1 {
        let a = polytope[0].point;

        for dir in [Vector::x(), Vector::y(), -Vector::x(), -Vector::y()] {
            let pt = support(&dir);

            if (pt.point - a).norm() > options.epsilon {
                polytope.push(pt);
                break;
            }
        }
    }

    if polytope.len() == 2 {
        let ab = polytope[1].point - polytope[0].point;
        let n = Vector::new(-ab.y, ab.x).try_normalize(0.0)?;

        for dir in [n, -n] {
            let pt = support(&dir);

            if (pt.point - polytope[0].point).dot(&dir) > options.epsilon {
                polytope.push(pt);
                break;
            }
        }
    }

    if polytope.len() != 3 {
        log::debug!("EPA could not build a non-degenerate initial triangle.");
        return None;
    }

    let ab = polytope[1].point - polytope[0].point;
    let ac = polytope[2].point - polytope[0].point;
    let area = ab.perp(&ac);

    if area == 0.0 {
        return None;
    }

    if area < 0.0 {
        polytope.swap(1, 2);
    }

    /*
     * Expansion.
     */
    for niter in 0..=options.max_iterations {
        let (edge, normal, dist) = closest_edge(&polytope)?;
        let pt = support(&normal);
        let gap = pt.point.coords.dot(&normal) - dist;

        if gap < options.epsilon {
            let next = (edge + 1) % polytope.len();
            let (point1, point2) = edge_witnesses(&polytope[edge], &polytope[next]);

            return Some(Penetration {
                normal,
                depth: dist,
                point1,
                point2,
                polytope,
                iterations: niter,
            });
        }

        if niter == options.max_iterations {
            break;
        }

        polytope.insert(edge + 1, pt);
    }

    log::debug!(
        "EPA did not converge after {} iterations.",
        options.max_iterations
    );
    None
}

// The edge of the polytope closest to the origin, with its outward normal and distance.
fn closest_edge(polytope: &[SupportPoint]) -> Option<(usize, UnitVector, Real)> {
    let mut best = None;
    let mut best_dist = <Real as Bounded>::max_value();

    for i in 0..polytope.len() {
        let j = (i + 1) % polytope.len();

        if let Some(normal) = utils::ccw_face_normal([&polytope[i].point, &polytope[j].point]) {
            let dist = normal.dot(&polytope[i].point.coords);

            if dist < best_dist {
                best_dist = dist;
                best = Some((i, normal));
            }
        }
    }

    best.map(|(i, normal)| (i, normal, best_dist))
}

// The points of both shapes whose difference is the projection of the origin on the edge `ab`.
fn edge_witnesses(a: &SupportPoint, b: &SupportPoint) -> (Point, Point) {
    let ab = b.point - a.point;
    let sqnab = ab.norm_squared();
    let t = if sqnab > 0.0 {
        (-a.point.coords.dot(&ab) / sqnab).clamp(0.0, 1.0)
    } else {
        0.0
    };

    (
        a.orig1 + (b.orig1 - a.orig1) * t,
        a.orig2 + (b.orig2 - a.orig2) * t,
    )
}
