use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::motion::RigidMotion;
use crate::query::{ClosestFeature, GjkResult};
use crate::shape::SupportMap;

/// The kind of separating axis tracked by a [`SeparationFunction`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SeparationKind {
    /// The axis joins two vertices and stays fixed in world-space.
    Points,
    /// The axis is the normal of an edge of the first shape and rotates with it.
    EdgeA,
    /// The axis is the normal of an edge of the second shape and rotates with it.
    EdgeB,
}

/// The vertex indices realizing the minimum separation along an axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WitnessPair {
    /// The vertex of the first shape.
    pub id1: u32,
    /// The vertex of the second shape.
    pub id2: u32,
}

/// The separation of two moving shapes along an axis, as a function of time.
///
/// The axis is chosen from the closest features of the shapes at the time the function is
/// built, and evaluated at later times by following the motion of both shapes.
pub struct SeparationFunction<'a, G1: ?Sized, G2: ?Sized, M1: ?Sized, M2: ?Sized> {
    g1: &'a G1,
    motion1: &'a M1,
    g2: &'a G2,
    motion2: &'a M2,
    kind: SeparationKind,
    // World-space axis, only used by `SeparationKind::Points`.
    axis: Vector,
    // Local endpoints of the edge, only used by the edge kinds.
    edge: [Point; 2],
    sign: Real,
}

impl<'a, G1, G2, M1, M2> SeparationFunction<'a, G1, G2, M1, M2>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
    M1: ?Sized + RigidMotion,
    M2: ?Sized + RigidMotion,
{
    /// Builds the separation function from the result of a distance query run at the time `t`.
    ///
    /// If one of the closest features is an edge, its normal is the axis, the first shape's edge
    /// being preferred if both are. Otherwise, the axis joins the closest points. The axis is
    /// oriented toward the other shape. Returns `None` if the shapes are not separated.
    pub fn new(
        g1: &'a G1,
        motion1: &'a M1,
        g2: &'a G2,
        motion2: &'a M2,
        closest: &GjkResult,
        t: Real,
    ) -> Option<Self> {
        let mut result = SeparationFunction {
            g1,
            motion1,
            g2,
            motion2,
            kind: SeparationKind::Points,
            axis: Vector::zeros(),
            edge: [Point::origin(); 2],
            sign: 1.0,
        };

        match (closest.feature1?, closest.feature2?) {
            (ClosestFeature::Edge(i, j), _) => {
                let pts = g1.vertices();
                result.kind = SeparationKind::EdgeA;
                result.edge = [pts[i as usize], pts[j as usize]];
                let (normal, origin) = result.edge_axis(t)?;
                if (closest.point2 - origin).dot(&normal) < 0.0 {
                    result.sign = -1.0;
                }
            }
            (_, ClosestFeature::Edge(i, j)) => {
                let pts = g2.vertices();
                result.kind = SeparationKind::EdgeB;
                result.edge = [pts[i as usize], pts[j as usize]];
                let (normal, origin) = result.edge_axis(t)?;
                if (closest.point1 - origin).dot(&normal) < 0.0 {
                    result.sign = -1.0;
                }
            }
            _ => {
                result.axis = *closest.normal()?;
            }
        }

        Some(result)
    }

    /// The kind of axis this function tracks.
    pub fn kind(&self) -> SeparationKind {
        self.kind
    }

    /// Finds the vertices of both shapes that are the deepest along the axis at the time `t`,
    /// and returns their separation.
    pub fn find_min_separation(&self, t: Real) -> (Real, WitnessPair) {
        let pose1 = self.motion1.pose_at(t);
        let pose2 = self.motion2.pose_at(t);

        match self.kind {
            SeparationKind::Points => {
                let (id1, pt1) = self.g1.support_point_id(&pose1, &self.axis);
                let (id2, pt2) = self.g2.support_point_id(&pose2, &-self.axis);
                ((pt2 - pt1).dot(&self.axis), WitnessPair { id1, id2 })
            }
            SeparationKind::EdgeA => {
                let Some((normal, origin)) = self.edge_axis(t) else {
                    return (0.0, WitnessPair { id1: 0, id2: 0 });
                };
                let (id2, pt2) = self.g2.support_point_id(&pose2, &-normal);
                ((pt2 - origin).dot(&normal), WitnessPair { id1: 0, id2 })
            }
            SeparationKind::EdgeB => {
                let Some((normal, origin)) = self.edge_axis(t) else {
                    return (0.0, WitnessPair { id1: 0, id2: 0 });
                };
                let (id1, pt1) = self.g1.support_point_id(&pose1, &-normal);
                ((pt1 - origin).dot(&normal), WitnessPair { id1, id2: 0 })
            }
        }
    }

    /// The separation along the axis at the time `t` of the vertices identified by `witnesses`.
    pub fn evaluate(&self, witnesses: &WitnessPair, t: Real) -> Real {
        let pose1 = self.motion1.pose_at(t);
        let pose2 = self.motion2.pose_at(t);

        match self.kind {
            SeparationKind::Points => {
                let local1 = self
                    .g1
                    .witness_point(witnesses.id1, &pose1.local_support_direction(&self.axis));
                let local2 = self
                    .g2
                    .witness_point(witnesses.id2, &pose2.local_support_direction(&-self.axis));
                let pt1 = pose1.transform_point(&local1);
                let pt2 = pose2.transform_point(&local2);
                (pt2 - pt1).dot(&self.axis)
            }
            SeparationKind::EdgeA => {
                let Some((normal, origin)) = self.edge_axis(t) else {
                    return 0.0;
                };
                let local2 = self
                    .g2
                    .witness_point(witnesses.id2, &pose2.local_support_direction(&-normal));
                (pose2.transform_point(&local2) - origin).dot(&normal)
            }
            SeparationKind::EdgeB => {
                let Some((normal, origin)) = self.edge_axis(t) else {
                    return 0.0;
                };
                let local1 = self
                    .g1
                    .witness_point(witnesses.id1, &pose1.local_support_direction(&-normal));
                (pose1.transform_point(&local1) - origin).dot(&normal)
            }
        }
    }

    // The oriented world-space normal of the tracked edge at the time `t`, and the world-space
    // location of the edge midpoint.
    fn edge_axis(&self, t: Real) -> Option<(Vector, Point)> {
        let pose = match self.kind {
            SeparationKind::EdgeA => self.motion1.pose_at(t),
            SeparationKind::EdgeB => self.motion2.pose_at(t),
            SeparationKind::Points => return None,
        };

        let edge = pose.transform_vector(&(self.edge[1] - self.edge[0]));
        let normal = UnitVector::try_new(Vector::new(edge.y, -edge.x), DEFAULT_EPSILON)?;
        let midpoint = na::center(&self.edge[0], &self.edge[1]);

        Some((*normal * self.sign, pose.transform_point(&midpoint)))
    }
}
