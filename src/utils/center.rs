use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally.
///
/// # Panics
///
/// Panics if the input slice is empty.
#[inline]
pub fn center(pts: &[Point]) -> Point {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom: Real = na::convert::<f64, Real>(1.0 / (pts.len() as f64));

    let mut res = Point::origin();

    for pt in pts {
        res += pt.coords * denom;
    }

    res
}
