use crate::math::Real;

/// Errors raised when building a shape from malformed input.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A polygon needs at least three vertices.
    #[error("a convex polygon needs at least 3 vertices, got {0}.")]
    TooFewVertices(usize),
    /// One of the input coordinates is NaN or infinite.
    #[error("the vertex {0} has a non-finite coordinate.")]
    NonFiniteVertex(usize),
    /// Two consecutive vertices are identical.
    #[error("the polygon has a zero-length edge at vertex {0}.")]
    Degenerate(usize),
    /// The vertices do not describe a convex polygon wound counter-clockwise.
    #[error("the polygon is not convex or not counter-clockwise at vertex {0}.")]
    NotConvex(usize),
    /// A ball radius must be strictly positive.
    #[error("invalid ball radius {0}.")]
    InvalidRadius(Real),
}
