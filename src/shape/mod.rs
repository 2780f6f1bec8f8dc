//! Convex shapes supported by the queries of this crate.

pub use self::ball::Ball;
pub use self::convex_polygon::ConvexPolygon;
pub use self::convex_shape::ConvexShape;
pub use self::error::ShapeError;
pub use self::segment::Segment;
#[doc(inline)]
pub use self::support_map::SupportMap;

mod ball;
mod convex_polygon;
mod convex_shape;
mod error;
mod segment;
mod support_map;
