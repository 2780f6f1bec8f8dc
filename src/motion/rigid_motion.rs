use crate::math::{Isometry, Point, Real, Rotation, Vector};
use crate::motion::Pose;

/// A continuous motion of a shape parametrized by a time `t`.
///
/// Queries only ever read motions: advancing the simulation time is the
/// responsibility of the caller.
pub trait RigidMotion {
    /// The pose of the shape at the time `t`.
    fn pose_at(&self, t: Real) -> Pose;

    /// The rotation of the shape at the time `t`.
    fn rotation_at(&self, t: Real) -> Rotation {
        self.pose_at(t).rotation()
    }
}

impl RigidMotion for Pose {
    fn pose_at(&self, _: Real) -> Pose {
        *self
    }
}

impl RigidMotion for Isometry {
    fn pose_at(&self, _: Real) -> Pose {
        Pose::from_isometry(*self)
    }
}

/// The state of a body moving with constant linear and angular velocities.
///
/// The body rotates around its `local_center`, which is also the local point
/// located at `position` in world-space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BodyState {
    /// World-space location of the local center at `t = 0`.
    pub position: Vector,
    /// Rotation angle at `t = 0`.
    pub rotation: Real,
    /// Component-wise scaling applied in the local frame.
    pub scale: Vector,
    /// The local point the body rotates around (usually its center of mass).
    pub local_center: Point,
    /// Linear velocity.
    pub linvel: Vector,
    /// Angular velocity.
    pub angvel: Real,
}

impl Default for BodyState {
    fn default() -> Self {
        Self::new(Vector::zeros(), 0.0)
    }
}

impl BodyState {
    /// A body at rest at the given position and rotation angle.
    pub fn new(position: Vector, rotation: Real) -> Self {
        BodyState {
            position,
            rotation,
            scale: Vector::repeat(1.0),
            local_center: Point::origin(),
            linvel: Vector::zeros(),
            angvel: 0.0,
        }
    }

    /// This body with the given linear velocity.
    #[must_use]
    pub fn with_linvel(mut self, linvel: Vector) -> Self {
        self.linvel = linvel;
        self
    }

    /// This body with the given angular velocity.
    #[must_use]
    pub fn with_angvel(mut self, angvel: Real) -> Self {
        self.angvel = angvel;
        self
    }

    /// This body with the given scaling factors.
    #[must_use]
    pub fn with_scale(mut self, scale: Vector) -> Self {
        self.scale = scale;
        self
    }

    /// This body with the given rotation pivot.
    #[must_use]
    pub fn with_local_center(mut self, local_center: Point) -> Self {
        self.local_center = local_center;
        self
    }

    /// Stops this body at the time `t`: its pose becomes the one it has at `t` and its
    /// velocities are set to zero.
    pub fn freeze(&mut self, t: Real) {
        self.position += self.linvel * t;
        self.rotation += self.angvel * t;
        self.linvel = Vector::zeros();
        self.angvel = 0.0;
    }
}

impl RigidMotion for BodyState {
    fn pose_at(&self, t: Real) -> Pose {
        Pose {
            isometry: Isometry::new(self.position + self.linvel * t, self.rotation_angle_at(t)),
            scale: self.scale,
            local_center: self.local_center,
        }
    }

    fn rotation_at(&self, t: Real) -> Rotation {
        Rotation::new(self.rotation_angle_at(t))
    }
}

impl BodyState {
    #[inline]
    fn rotation_angle_at(&self, t: Real) -> Real {
        self.rotation + self.angvel * t
    }
}
