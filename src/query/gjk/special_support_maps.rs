use crate::math::{Point, Vector};
use crate::shape::SupportMap;

/// A support mapping that is a single point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantPoint(pub Point);

impl SupportMap for ConstantPoint {
    #[inline]
    fn local_support_point_id(&self, _: &Vector) -> (u32, Point) {
        (0, self.0)
    }

    #[inline]
    fn vertices(&self) -> &[Point] {
        core::slice::from_ref(&self.0)
    }

    #[inline]
    fn center_of_mass(&self) -> Point {
        self.0
    }
}

/// The core of a shape with a margin: the shape shrunk by the radius it is dilated by.
#[derive(Copy, Clone, Debug)]
pub struct CoreShape<'a, S: ?Sized>(pub &'a S);

impl<'a, S: ?Sized + SupportMap> SupportMap for CoreShape<'a, S> {
    #[inline]
    fn local_support_point_id(&self, dir: &Vector) -> (u32, Point) {
        self.0.local_core_support_point_id(dir)
    }

    #[inline]
    fn vertices(&self) -> &[Point] {
        self.0.vertices()
    }

    #[inline]
    fn center_of_mass(&self) -> Point {
        self.0.center_of_mass()
    }
}
