use crate::math::{Point, Vector};

/// Computes the index of the support point of a cloud of points.
///
/// When several points reach the same maximal dot product, the one with the lowest
/// index is returned.
///
/// # Panics
///
/// Panics if `points` is empty.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector, points: &[Point]) -> usize {
    let mut best_pt = 0;
    let mut best_dot = points[0].coords.dot(dir);

    for (i, p) in points.iter().enumerate().skip(1) {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i;
        }
    }

    best_pt
}
