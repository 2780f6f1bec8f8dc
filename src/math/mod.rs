//! Linear algebra type aliases.

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(not(feature = "f64"))]
pub type Real = f32;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The point type.
pub type Point = na::Point2<Real>;

/// The vector type.
pub type Vector = na::Vector2<Real>;

/// The unit vector type.
pub type UnitVector = na::UnitVector2<Real>;

/// The transformation matrix type.
pub type Isometry = na::Isometry2<Real>;

/// The rotation matrix type.
pub type Rotation = na::UnitComplex<Real>;
