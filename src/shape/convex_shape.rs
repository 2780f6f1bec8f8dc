use crate::math::{Point, Real, Vector};
use crate::shape::{Ball, ConvexPolygon, Segment, SupportMap};

/// The closed set of convex shapes the queries of this crate operate on.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum ConvexShape {
    /// A disc.
    Ball(Ball),
    /// A segment.
    Segment(Segment),
    /// A convex polygon with at least three vertices.
    Polygon(ConvexPolygon),
}

impl ConvexShape {
    /// The shape as a trait-object, for code that is generic over the support mapping.
    #[inline]
    pub fn as_support_map(&self) -> &dyn SupportMap {
        match self {
            ConvexShape::Ball(s) => s,
            ConvexShape::Segment(s) => s,
            ConvexShape::Polygon(s) => s,
        }
    }
}

impl SupportMap for ConvexShape {
    #[inline]
    fn local_support_point_id(&self, dir: &Vector) -> (u32, Point) {
        self.as_support_map().local_support_point_id(dir)
    }

    #[inline]
    fn vertices(&self) -> &[Point] {
        self.as_support_map().vertices()
    }

    #[inline]
    fn center_of_mass(&self) -> Point {
        self.as_support_map().center_of_mass()
    }

    #[inline]
    fn witness_point(&self, id: u32, local_dir: &Vector) -> Point {
        self.as_support_map().witness_point(id, local_dir)
    }

    #[inline]
    fn margin(&self) -> Real {
        self.as_support_map().margin()
    }

    #[inline]
    fn local_core_support_point_id(&self, dir: &Vector) -> (u32, Point) {
        self.as_support_map().local_core_support_point_id(dir)
    }
}

impl From<Ball> for ConvexShape {
    fn from(s: Ball) -> Self {
        ConvexShape::Ball(s)
    }
}

impl From<Segment> for ConvexShape {
    fn from(s: Segment) -> Self {
        ConvexShape::Segment(s)
    }
}

impl From<ConvexPolygon> for ConvexShape {
    fn from(s: ConvexPolygon) -> Self {
        ConvexShape::Polygon(s)
    }
}
