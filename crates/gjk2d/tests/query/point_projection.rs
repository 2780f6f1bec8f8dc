use gjk2d::math::{Point, Real, Vector};
use gjk2d::motion::Pose;
use gjk2d::query::{self, ClosestFeature};
use gjk2d::shape::{Ball, ConvexPolygon, Segment};

#[test]
fn project_on_ball() {
    let ball = Ball::new(1.0);
    let pose = Pose::translation(2.0, 0.0);

    let proj = query::project_point(&ball, &pose, &Point::new(5.0, 0.0));
    assert!(!proj.is_inside);
    assert!(relative_eq!(proj.point, Point::new(3.0, 0.0), epsilon = 1.0e-3));
    assert!(relative_eq!(proj.distance, 2.0, epsilon = 1.0e-3));
    assert_eq!(proj.feature, Some(ClosestFeature::Vertex(0)));

    let proj = query::project_point(&ball, &pose, &Point::new(2.5, 0.2));
    assert!(proj.is_inside);
    assert_eq!(proj.distance, 0.0);
    assert_eq!(proj.feature, None);
}

#[test]
fn project_on_segment_interior() {
    let segment = Segment::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0));
    let proj = query::project_point(&segment, &Pose::identity(), &Point::new(0.5, 1.0));

    assert!(!proj.is_inside);
    assert!(relative_eq!(proj.point, Point::new(0.5, 0.0), epsilon = 1.0e-5));
    assert!(relative_eq!(proj.distance, 1.0, epsilon = 1.0e-5));
    assert_eq!(proj.feature, Some(ClosestFeature::Edge(0, 1)));
}

#[test]
fn project_on_scaled_rectangle_face() {
    // A unit square stretched into a 4x2 rectangle.
    let square = ConvexPolygon::rectangle(Vector::new(0.5, 0.5));
    let pose = Pose::identity().with_scale(Vector::new(4.0, 2.0));

    let proj = query::project_point(&square, &pose, &Point::new(0.5, 3.0));
    assert!(!proj.is_inside);
    assert!(relative_eq!(proj.point, Point::new(0.5, 1.0), epsilon = 1.0e-5));
    assert!(relative_eq!(proj.distance, 2.0 as Real, epsilon = 1.0e-5));
    assert_eq!(proj.feature, Some(ClosestFeature::Edge(2, 3)));

    let proj = query::project_point(&square, &pose, &Point::new(1.9, 0.9));
    assert!(proj.is_inside);
}
