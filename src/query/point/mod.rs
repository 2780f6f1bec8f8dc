//! Point projection on shapes.

pub use self::point_query::{project_point, PointProjection};

mod point_query;
