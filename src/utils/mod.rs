//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::center::center;
pub use self::point_cloud_support_point::point_cloud_support_point_id;

mod ccw_face_normal;
mod center;
mod point_cloud_support_point;
