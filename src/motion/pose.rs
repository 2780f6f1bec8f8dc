use crate::math::{Isometry, Point, Real, Rotation, Vector};

/// The affine placement of a shape in world-space.
///
/// A local point `p` is mapped to world-space as
/// `isometry * (scale ⊙ (p - local_center))`: the shape is first recentered on its pivot,
/// scaled component-wise, then rotated and translated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Pose {
    /// The rotation and translation of the shape.
    pub isometry: Isometry,
    /// Component-wise scaling factors applied in the shape's local frame.
    pub scale: Vector,
    /// The local point the rotation pivots around. Usually the center of mass.
    pub local_center: Point,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    /// The pose leaving every local point unchanged.
    pub fn identity() -> Self {
        Self::from_isometry(Isometry::identity())
    }

    /// A pose with the given translation and rotation angle, without scaling.
    pub fn new(translation: Vector, angle: Real) -> Self {
        Self::from_isometry(Isometry::new(translation, angle))
    }

    /// A pure translation.
    pub fn translation(x: Real, y: Real) -> Self {
        Self::from_isometry(Isometry::translation(x, y))
    }

    /// A pose made of a rigid isometry only.
    pub fn from_isometry(isometry: Isometry) -> Self {
        Pose {
            isometry,
            scale: Vector::repeat(1.0),
            local_center: Point::origin(),
        }
    }

    /// This pose with its scaling factors replaced by `scale`.
    #[must_use]
    pub fn with_scale(mut self, scale: Vector) -> Self {
        self.scale = scale;
        self
    }

    /// This pose with its pivot replaced by `local_center`.
    #[must_use]
    pub fn with_local_center(mut self, local_center: Point) -> Self {
        self.local_center = local_center;
        self
    }

    /// The rotational part of this pose.
    #[inline]
    pub fn rotation(&self) -> Rotation {
        self.isometry.rotation
    }

    /// This pose translated by `shift` in world-space.
    #[must_use]
    pub fn translated(mut self, shift: &Vector) -> Self {
        self.isometry.translation.vector += shift;
        self
    }

    /// Maps a local point to world-space.
    #[inline]
    pub fn transform_point(&self, pt: &Point) -> Point {
        self.isometry * Point::from((pt - self.local_center).component_mul(&self.scale))
    }

    /// Maps a local vector (e.g. an edge direction) to world-space.
    #[inline]
    pub fn transform_vector(&self, v: &Vector) -> Vector {
        self.isometry * v.component_mul(&self.scale)
    }

    /// Maps a world-space point back to the local frame.
    #[inline]
    pub fn inverse_transform_point(&self, pt: &Point) -> Point {
        let unrotated = self.isometry.inverse_transform_point(pt);
        Point::from(unrotated.coords.component_div(&self.scale)) + self.local_center.coords
    }

    /// The local direction along which the support point of the untransformed shape is
    /// the preimage of the support point, along the world-space `dir`, of the transformed shape.
    ///
    /// This is the transpose of the linear part of the pose applied to `dir`, i.e., the
    /// inverse rotation followed by the scaling.
    #[inline]
    pub fn local_support_direction(&self, dir: &Vector) -> Vector {
        self.isometry
            .inverse_transform_vector(dir)
            .component_mul(&self.scale)
    }
}
