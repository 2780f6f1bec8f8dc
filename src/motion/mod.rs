//! Placement of shapes in space and their motion over time.

pub use self::pose::Pose;
pub use self::rigid_motion::{BodyState, RigidMotion};

mod pose;
mod rigid_motion;
