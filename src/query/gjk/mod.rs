//! The GJK algorithm for distance computation.

pub use self::gjk::{eps_tol, gjk, GjkResult, GjkStatus};
pub use self::special_support_maps::{ConstantPoint, CoreShape};
pub use self::support_point::SupportPoint;
pub use self::voronoi_simplex2::{DroppedVertices, Simplex};

mod gjk;
mod special_support_maps;
mod support_point;
mod voronoi_simplex2;
