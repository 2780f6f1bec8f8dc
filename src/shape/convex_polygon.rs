use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{ShapeError, SupportMap};
use crate::utils;

/// A 2D strictly convex polygon.
///
/// The vertices are wound counter-clockwise. Edge `i` goes from vertex `i` to
/// vertex `(i + 1) % n`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    points: Vec<Point>,
    center_of_mass: Point,
}

impl ConvexPolygon {
    /// Creates a new 2D convex polygon from an arbitrary set of points.
    ///
    /// The points are sorted counter-clockwise around their centroid, starting with the
    /// first point of the input. Duplicate points are removed. This does not compute a
    /// convex hull: if the input is not in convex position, an error is returned.
    pub fn from_point_cloud(points: &[Point]) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::TooFewVertices(points.len()));
        }

        check_finite(points)?;

        let center = utils::center(points);
        let angle = |pt: &Point| {
            let dir = pt - center;
            dir.y.atan2(dir.x)
        };
        let angle0 = angle(&points[0]);
        let two_pi = core::f64::consts::TAU as Real;

        let mut sorted: Vec<(Real, Point)> = points
            .iter()
            .map(|pt| ((angle(pt) - angle0).rem_euclid(two_pi), *pt))
            .collect();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut vertices: Vec<Point> = Vec::with_capacity(sorted.len());
        for (_, pt) in sorted {
            if !vertices.iter().any(|v| relative_eq!(*v, pt)) {
                vertices.push(pt);
            }
        }

        Self::from_convex_polyline(vertices)
    }

    /// Creates a new 2D convex polygon from a set of points assumed to describe a
    /// counter-clockwise convex polyline.
    ///
    /// Returns an error if there are less than three points, if a coordinate is not finite,
    /// if an edge is degenerate, or if the polyline is not strictly convex.
    pub fn from_convex_polyline(points: Vec<Point>) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::TooFewVertices(points.len()));
        }

        check_finite(&points)?;

        for i1 in 0..points.len() {
            let i2 = (i1 + 1) % points.len();

            if utils::ccw_face_normal([&points[i1], &points[i2]]).is_none() {
                return Err(ShapeError::Degenerate(i1));
            }
        }

        // Every turn must be a strict left turn.
        for i2 in 0..points.len() {
            let i1 = (i2 + points.len() - 1) % points.len();
            let i3 = (i2 + 1) % points.len();
            let e1 = points[i2] - points[i1];
            let e2 = points[i3] - points[i2];

            if e1.perp(&e2) <= DEFAULT_EPSILON * e1.norm() * e2.norm() {
                return Err(ShapeError::NotConvex(i2));
            }
        }

        let center_of_mass = utils::center(&points);

        Ok(ConvexPolygon {
            points,
            center_of_mass,
        })
    }

    /// An axis-aligned rectangle centered on the local origin.
    ///
    /// Its vertices start at the bottom-left corner: `(-hx, -hy)`, `(hx, -hy)`, `(hx, hy)`,
    /// `(-hx, hy)`.
    pub fn rectangle(half_extents: Vector) -> Self {
        assert!(
            half_extents.x > 0.0 && half_extents.y > 0.0,
            "The half-extents of a rectangle must be positive."
        );
        let (hx, hy) = (half_extents.x, half_extents.y);

        ConvexPolygon {
            points: vec![
                Point::new(-hx, -hy),
                Point::new(hx, -hy),
                Point::new(hx, hy),
                Point::new(-hx, hy),
            ],
            center_of_mass: Point::origin(),
        }
    }

    /// The vertices of this convex polygon.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The average of the vertices of this polygon.
    #[inline]
    pub fn center_of_mass(&self) -> Point {
        self.center_of_mass
    }

    /// Computes the support vertex along `dir` by walking the boundary from the vertex
    /// `start`.
    ///
    /// The walk follows the direction in which the dot product increases and stops at the
    /// first local maximum, which is global by convexity. When successive queries use
    /// similar directions, passing the previous result as `start` makes this sub-linear.
    /// The result is identical to [`SupportMap::local_support_point_id`], including the
    /// lowest-index tie-break.
    pub fn hill_climb_support_point_id(&self, dir: &Vector, start: u32) -> (u32, Point) {
        let n = self.points.len();
        let dot = |i: usize| self.points[i].coords.dot(dir);

        let mut best = start as usize % n;
        let mut best_dot = dot(best);

        for _ in 0..n {
            let next = (best + 1) % n;
            let prev = (best + n - 1) % n;
            let (next_dot, prev_dot) = (dot(next), dot(prev));

            if next_dot > best_dot && next_dot >= prev_dot {
                best = next;
                best_dot = next_dot;
            } else if prev_dot > best_dot {
                best = prev;
                best_dot = prev_dot;
            } else {
                break;
            }
        }

        // A maximal plateau has at most two vertices on a strictly convex polygon.
        let mut lowest = best;
        for neighbor in [(best + 1) % n, (best + n - 1) % n] {
            if dot(neighbor) == best_dot {
                lowest = lowest.min(neighbor);
            }
        }

        (lowest as u32, self.points[lowest])
    }
}

impl SupportMap for ConvexPolygon {
    #[inline]
    fn local_support_point_id(&self, dir: &Vector) -> (u32, Point) {
        let id = utils::point_cloud_support_point_id(dir, &self.points);
        (id as u32, self.points[id])
    }

    #[inline]
    fn vertices(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    fn center_of_mass(&self) -> Point {
        self.center_of_mass
    }
}

fn check_finite(points: &[Point]) -> Result<(), ShapeError> {
    match points
        .iter()
        .position(|pt| !pt.coords.iter().all(|x| x.is_finite()))
    {
        Some(i) => Err(ShapeError::NonFiniteVertex(i)),
        None => Ok(()),
    }
}
