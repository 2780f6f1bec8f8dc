use arrayvec::ArrayVec;

use crate::math::{Point, Real, Vector};
use crate::query::gjk::{self, SupportPoint};

/// The original indices of the vertices removed from a simplex by [`Simplex::reduce`].
pub type DroppedVertices = ArrayVec<usize, 3>;

/// A simplex of at most three points of a Minkowski difference.
///
/// Along with its vertices, the simplex stores the un-normalized barycentric coordinates of
/// the point it contains that is the closest to the last query point it was reduced
/// against. Dividing them by `divisor()` yields barycentric coordinates summing to one.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Simplex {
    vertices: [SupportPoint; 3],
    bcoords: [Real; 3],
    divisor: Real,
    len: usize,
}

impl Simplex {
    /// Creates a simplex with a single vertex.
    pub fn new(pt: SupportPoint) -> Simplex {
        Simplex {
            vertices: [pt; 3],
            bcoords: [1.0, 0.0, 0.0],
            divisor: 1.0,
            len: 1,
        }
    }

    /// The number of vertices of this simplex, between 1 and 3.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The i-th vertex of this simplex.
    #[inline]
    pub fn point(&self, i: usize) -> &SupportPoint {
        assert!(i < self.len, "Index out of bounds.");
        &self.vertices[i]
    }

    /// All the vertices of this simplex.
    #[inline]
    pub fn points(&self) -> &[SupportPoint] {
        &self.vertices[..self.len]
    }

    /// The un-normalized barycentric coordinate of the i-th vertex.
    #[inline]
    pub fn bcoord(&self, i: usize) -> Real {
        assert!(i < self.len, "Index out of bounds.");
        self.bcoords[i]
    }

    /// The sum of the barycentric coordinates of this simplex.
    #[inline]
    pub fn divisor(&self) -> Real {
        self.divisor
    }

    /// Appends a vertex to this simplex.
    ///
    /// # Panics
    ///
    /// Panics if the simplex already has three vertices.
    pub fn push(&mut self, pt: SupportPoint) {
        assert!(self.len < 3, "Invalid simplex: cannot grow past 3 vertices.");
        self.vertices[self.len] = pt;
        self.bcoords[self.len] = 0.0;
        self.len += 1;
    }

    /// Does this simplex already contain a vertex with the same index pair and location as `pt`?
    pub fn contains(&self, pt: &SupportPoint) -> bool {
        self.points()
            .iter()
            .any(|v| v.same_ids(pt) && (v.point - pt.point).norm() < gjk::eps_tol())
    }

    /// Reduces this simplex to the vertices supporting its point closest to `q`.
    ///
    /// Returns the original indices of the removed vertices. The retained vertices keep
    /// their relative order, except for the edge `(C, A)` of a triangle which is stored as
    /// `[C, A]`.
    pub fn reduce(&mut self, q: &Point) -> DroppedVertices {
        match self.len {
            1 => {
                self.bcoords[0] = 1.0;
                self.divisor = 1.0;
                DroppedVertices::new()
            }
            2 => self.reduce_line(q),
            3 => self.reduce_triangle(q),
            _ => unreachable!(),
        }
    }

    fn reduce_line(&mut self, q: &Point) -> DroppedVertices {
        let a = self.vertices[0].point;
        let b = self.vertices[1].point;
        let u = (q - b).dot(&(a - b));
        let v = (q - a).dot(&(b - a));

        if v <= 0.0 {
            // Voronoi region of A.
            self.keep_vertex(0)
        } else if u <= 0.0 {
            // Voronoi region of B.
            self.keep_vertex(1)
        } else {
            self.bcoords = [u, v, 0.0];
            self.divisor = (b - a).norm_squared();
            DroppedVertices::new()
        }
    }

    fn reduce_triangle(&mut self, q: &Point) -> DroppedVertices {
        let a = self.vertices[0].point;
        let b = self.vertices[1].point;
        let c = self.vertices[2].point;

        let u_ab = (q - b).dot(&(a - b));
        let v_ab = (q - a).dot(&(b - a));
        let u_bc = (q - c).dot(&(b - c));
        let v_bc = (q - b).dot(&(c - b));
        let u_ca = (q - a).dot(&(c - a));
        let v_ca = (q - c).dot(&(a - c));

        if v_ab <= 0.0 && u_ca <= 0.0 {
            return self.keep_vertex(0);
        }

        if u_ab <= 0.0 && v_bc <= 0.0 {
            return self.keep_vertex(1);
        }

        if u_bc <= 0.0 && v_ca <= 0.0 {
            return self.keep_vertex(2);
        }

        let area = (b - a).perp(&(c - a));

        if area.abs() <= gjk::eps_tol() * (b - a).norm() * (c - a).norm() {
            return self.reduce_flat_triangle(q);
        }

        let (pa, pb, pc) = (a - q, b - q, c - q);
        let u_abc = pb.perp(&pc);
        let v_abc = pc.perp(&pa);
        let w_abc = pa.perp(&pb);

        if w_abc * area <= 0.0 && u_ab >= 0.0 && v_ab >= 0.0 {
            return self.keep_edge(0, 1, u_ab, v_ab);
        }

        if u_abc * area <= 0.0 && u_bc >= 0.0 && v_bc >= 0.0 {
            return self.keep_edge(1, 2, u_bc, v_bc);
        }

        if v_abc * area <= 0.0 && u_ca >= 0.0 && v_ca >= 0.0 {
            return self.keep_edge(2, 0, u_ca, v_ca);
        }

        // Interior.
        let sign = area.signum();
        self.bcoords = [u_abc * sign, v_abc * sign, w_abc * sign];
        self.divisor = area.abs();
        DroppedVertices::new()
    }

    // The three vertices are aligned: the closest point lies on one of the edges.
    fn reduce_flat_triangle(&mut self, q: &Point) -> DroppedVertices {
        let mut best: Option<(Real, Simplex, [usize; 2])> = None;

        for (i, j) in [(0, 1), (1, 2), (2, 0)] {
            let mut line = *self;
            line.vertices = [self.vertices[i], self.vertices[j], self.vertices[j]];
            line.len = 2;

            let dropped = line.reduce_line(q);
            let retained = match dropped.first().copied() {
                None => [i, j],
                Some(0) => [j, j],
                Some(_) => [i, i],
            };
            let dist = (line.closest_point() - q).norm_squared();

            if best.as_ref().map(|b| dist < b.0).unwrap_or(true) {
                best = Some((dist, line, retained));
            }
        }

        let mut dropped = DroppedVertices::new();

        if let Some((_, line, retained)) = best {
            *self = line;
            dropped.extend((0..3).filter(|k| !retained.contains(k)));
        }

        dropped
    }

    fn keep_vertex(&mut self, i: usize) -> DroppedVertices {
        let dropped = (0..self.len).filter(|k| *k != i).collect();
        self.vertices[0] = self.vertices[i];
        self.bcoords = [1.0, 0.0, 0.0];
        self.divisor = 1.0;
        self.len = 1;
        dropped
    }

    fn keep_edge(&mut self, i: usize, j: usize, u: Real, v: Real) -> DroppedVertices {
        let divisor = u + v;

        if divisor <= 0.0 {
            return self.keep_vertex(i);
        }

        let dropped = (0..self.len).filter(|k| *k != i && *k != j).collect();
        self.vertices = [self.vertices[i], self.vertices[j], self.vertices[j]];
        self.bcoords = [u, v, 0.0];
        self.divisor = divisor;
        self.len = 2;
        dropped
    }

    /// The point of this simplex closest to the last point it was reduced against.
    pub fn closest_point(&self) -> Point {
        let mut res = Vector::zeros();

        for i in 0..self.len {
            res += self.vertices[i].point.coords * self.bcoords[i];
        }

        Point::from(res / self.divisor)
    }

    /// The points on each shape whose difference is [`Self::closest_point`].
    pub fn closest_points(&self) -> (Point, Point) {
        let mut res1 = Vector::zeros();
        let mut res2 = Vector::zeros();

        for i in 0..self.len {
            res1 += self.vertices[i].orig1.coords * self.bcoords[i];
            res2 += self.vertices[i].orig2.coords * self.bcoords[i];
        }

        (
            Point::from(res1 / self.divisor),
            Point::from(res2 / self.divisor),
        )
    }

    /// The direction in which the next support point must be searched for to get closer to
    /// the origin.
    ///
    /// Returns `None` if the origin lies on this simplex, in which case no direction can
    /// make progress.
    ///
    /// # Panics
    ///
    /// Panics if the simplex has three vertices: a reduced triangle encloses the origin.
    pub fn search_direction(&self) -> Option<Vector> {
        let eps = gjk::eps_tol();

        match self.len {
            1 => Self::toward_origin(&self.vertices[0].point, eps),
            2 => {
                let a = self.vertices[0].point;
                let ab = self.vertices[1].point - a;
                let ab_len = ab.norm();

                if ab_len <= eps {
                    return Self::toward_origin(&a, eps);
                }

                let sgn = ab.perp(&-a.coords);

                if sgn.abs() <= eps * ab_len {
                    None
                } else if sgn > 0.0 {
                    Some(Vector::new(-ab.y, ab.x))
                } else {
                    Some(Vector::new(ab.y, -ab.x))
                }
            }
            _ => panic!("Invalid simplex: no search direction for {} vertices.", self.len),
        }
    }

    fn toward_origin(pt: &Point, eps: Real) -> Option<Vector> {
        let dir = -pt.coords;
        if dir.norm() <= eps {
            None
        } else {
            Some(dir)
        }
    }
}
