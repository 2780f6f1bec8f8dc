use gjk2d::math::{Point, Real, Vector};
use gjk2d::motion::Pose;
use gjk2d::query::{self, ClosestFeature, GjkStatus};
use gjk2d::shape::{ConvexPolygon, Segment};

#[test]
fn unit_squares_three_units_apart() {
    let square = ConvexPolygon::rectangle(Vector::new(0.5, 0.5));
    let res = query::distance(
        &square,
        &Pose::identity(),
        &square,
        &Pose::translation(3.0, 0.0),
    );

    assert_eq!(res.distance, 2.0);
    assert!(!res.intersecting);
    assert!(res.feature1.unwrap().is_edge());
    assert!(res.feature2.unwrap().is_edge());
    assert_eq!(res.feature1, Some(ClosestFeature::Edge(1, 2)));
    assert_eq!(res.feature2, Some(ClosestFeature::Edge(3, 0)));
}

#[test]
fn point_inside_a_triangle() {
    let triangle = ConvexPolygon::from_convex_polyline(vec![
        Point::new(-1.0, -1.0),
        Point::new(2.0, -1.0),
        Point::new(0.0, 2.0),
    ])
    .unwrap();
    let point = query::gjk::ConstantPoint(Point::origin());

    let res = query::distance(&triangle, &Pose::identity(), &point, &Pose::identity());

    assert_eq!(res.status, GjkStatus::Containment);
    assert!(res.intersecting);
    assert_eq!(res.distance, 0.0);
    assert_eq!(res.simplex.len(), 3);
    assert!((0..3).all(|i| res.simplex.bcoord(i) >= 0.0));
}

#[test]
fn point_beyond_a_segment_endpoint() {
    let seg = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
    let pt = Point::new(3.0, 4.0);

    let proj = query::project_point(&seg, &Pose::identity(), &pt);

    assert!(!proj.is_inside);
    assert_eq!(proj.point, Point::new(1.0, 0.0));
    assert!(relative_eq!(
        proj.distance,
        (20.0 as Real).sqrt(),
        epsilon = 1.0e-5
    ));
    assert_eq!(proj.feature, Some(ClosestFeature::Vertex(1)));
}

#[test]
fn point_facing_a_segment() {
    let seg = Segment::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0));
    let proj = query::project_point(&seg, &Pose::identity(), &Point::new(0.25, -2.0));

    assert!(relative_eq!(proj.point, Point::new(0.25, 0.0), epsilon = 1.0e-5));
    assert!(relative_eq!(proj.distance, 2.0, epsilon = 1.0e-5));
    assert_eq!(proj.feature, Some(ClosestFeature::Edge(0, 1)));
}
