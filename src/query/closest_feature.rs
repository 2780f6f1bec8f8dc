use arrayvec::ArrayVec;

use crate::math::{Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::motion::Pose;
use crate::query::gjk::Simplex;
use crate::shape::SupportMap;

/// Cosine of the largest angle, one degree, between an edge normal and the separating axis
/// for the edge to be reported instead of one of its vertices.
const EDGE_ALIGNMENT_COS: Real = 0.999_847_7;

/// The feature of a shape closest to another shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ClosestFeature {
    /// A single vertex, identified by its index.
    Vertex(u32),
    /// An edge going from the first vertex to the second one, counter-clockwise.
    Edge(u32, u32),
}

impl ClosestFeature {
    /// Is this feature a vertex?
    pub fn is_vertex(&self) -> bool {
        matches!(self, ClosestFeature::Vertex(_))
    }

    /// Is this feature an edge?
    pub fn is_edge(&self) -> bool {
        matches!(self, ClosestFeature::Edge(..))
    }

    /// Derives a feature from the vertex indices of a simplex, along with their barycentric
    /// weights.
    ///
    /// Two distinct indices make an edge if they are adjacent on a shape with
    /// `num_vertices` vertices. Otherwise, the vertex with the largest accumulated weight
    /// is kept.
    pub fn from_ids(ids: impl IntoIterator<Item = (u32, Real)>, num_vertices: usize) -> Self {
        let mut distinct: ArrayVec<(u32, Real), 3> = ArrayVec::new();

        for (id, weight) in ids {
            if let Some(entry) = distinct.iter_mut().find(|e| e.0 == id) {
                entry.1 += weight;
            } else if !distinct.is_full() {
                distinct.push((id, weight));
            }
        }

        match distinct.as_slice() {
            [(i, _)] => ClosestFeature::Vertex(*i),
            [(i, _), (j, _)] if num_vertices == 2 => {
                ClosestFeature::Edge((*i).min(*j), (*i).max(*j))
            }
            [(i, _), (j, _)] if num_vertices > 2 && is_next(*i, *j, num_vertices) => {
                ClosestFeature::Edge(*i, *j)
            }
            [(i, _), (j, _)] if num_vertices > 2 && is_next(*j, *i, num_vertices) => {
                ClosestFeature::Edge(*j, *i)
            }
            _ => {
                let heaviest = distinct
                    .iter()
                    .max_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|e| e.0)
                    .unwrap_or(0);
                ClosestFeature::Vertex(heaviest)
            }
        }
    }

    /// Replaces a vertex by one of its adjacent edges if the edge faces `axis`.
    ///
    /// `axis` is the unit world-space direction pointing from `shape` toward the other shape.
    /// An edge faces it when its outward normal is within one degree of `axis`. Both
    /// orientations of a segment are accepted.
    #[must_use]
    pub fn promote<S: ?Sized + SupportMap>(self, shape: &S, pose: &Pose, axis: &Vector) -> Self {
        let ClosestFeature::Vertex(i) = self else {
            return self;
        };

        let pts = shape.vertices();
        let n = pts.len();
        let i = i as usize;

        if n < 2 || i >= n {
            return self;
        }

        let candidates: ArrayVec<(usize, usize), 2> = if n == 2 {
            [(0, 1)].into_iter().collect()
        } else {
            [((i + n - 1) % n, i), (i, (i + 1) % n)].into_iter().collect()
        };

        for (a, b) in candidates {
            let edge = pose.transform_vector(&(pts[b] - pts[a]));

            let normal = UnitVector::try_new(Vector::new(edge.y, -edge.x), DEFAULT_EPSILON);

            if let Some(normal) = normal {
                let alignment = if n == 2 {
                    normal.dot(axis).abs()
                } else {
                    normal.dot(axis)
                };

                if alignment >= EDGE_ALIGNMENT_COS {
                    return ClosestFeature::Edge(a as u32, b as u32);
                }
            }
        }

        self
    }
}

// Is `j` the vertex following `i` on a closed polygon with `n` vertices?
fn is_next(i: u32, j: u32, n: usize) -> bool {
    j as usize == (i as usize + 1) % n
}

/// Computes the closest features of both shapes from the final simplex of a GJK run.
///
/// If `axis`, the unit direction from the first shape toward the second, is provided, the
/// vertex features are promoted to edges facing the other shape.
pub fn closest_features<G1, G2>(
    g1: &G1,
    pose1: &Pose,
    g2: &G2,
    pose2: &Pose,
    simplex: &Simplex,
    axis: Option<&Vector>,
) -> (ClosestFeature, ClosestFeature)
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let weights = (0..simplex.len()).map(|i| simplex.bcoord(i));
    let ids1 = simplex.points().iter().map(|p| p.id1).zip(weights.clone());
    let ids2 = simplex.points().iter().map(|p| p.id2).zip(weights);

    let mut feature1 = ClosestFeature::from_ids(ids1, g1.vertices().len());
    let mut feature2 = ClosestFeature::from_ids(ids2, g2.vertices().len());

    if let Some(axis) = axis {
        feature1 = feature1.promote(g1, pose1, axis);
        feature2 = feature2.promote(g2, pose2, &-axis);
    }

    (feature1, feature2)
}
