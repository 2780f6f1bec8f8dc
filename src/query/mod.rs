//! Non-persistent geometric queries.
//!
//! The most general functions provided by this module are:
//!
//! * [`distance()`] to compute the distance, closest points and closest features of two shapes.
//! * [`penetration()`] to compute the penetration depth and normal of two overlapping shapes.
//! * [`intersection_test()`] to determine if two shapes are intersecting or not.
//! * [`time_of_impact()`] to determine when two shapes undergoing continuous rigid motions
//!   come into contact for the first time.
//! * [`project_point()`] to project a point on a shape.
//!
//! All of them accept any shape implementing [`SupportMap`](crate::shape::SupportMap), placed
//! at a [`Pose`](crate::motion::Pose) or moving along a [`RigidMotion`](crate::motion::RigidMotion).
//! The lower-level algorithms are exposed by the [`gjk`], [`epa`] and [`time_of_impact`] submodules.

pub use self::closest_feature::{closest_features, ClosestFeature};
pub use self::distance::{distance, distance_with_options};
pub use self::epa::Penetration;
pub use self::gjk::{GjkResult, GjkStatus};
pub use self::intersection_test::intersection_test;
pub use self::penetration::{penetration, penetration_with_options};
pub use self::point::{project_point, PointProjection};
pub use self::query_options::{EpaOptions, GjkOptions, ToiOptions};
pub use self::time_of_impact::{time_of_impact, ToiDiagnostics, ToiResult, ToiState};

mod closest_feature;
mod distance;
pub mod epa;
pub mod gjk;
mod penetration;
pub mod point;
mod query_options;
pub mod time_of_impact;
