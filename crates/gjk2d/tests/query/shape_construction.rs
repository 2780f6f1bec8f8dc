use gjk2d::math::{Point, Real};
use gjk2d::shape::{Ball, ConvexPolygon, ConvexShape, ShapeError, SupportMap};

#[test]
fn point_cloud_polygon_matches_its_polyline() {
    let polyline = vec![
        Point::new(0.0, -1.0),
        Point::new(2.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(-2.0, 0.0),
    ];
    let shuffled = [polyline[2], polyline[0], polyline[3], polyline[1]];

    let from_polyline = ConvexPolygon::from_convex_polyline(polyline).unwrap();
    let from_cloud = ConvexPolygon::from_point_cloud(&shuffled).unwrap();

    // Same cyclic order, starting from the first point of the cloud.
    assert_eq!(from_cloud.points()[0], shuffled[0]);
    let n = from_cloud.points().len();
    for i in 0..n {
        let a = from_cloud.points()[i];
        let b = from_cloud.points()[(i + 1) % n];
        let ia = from_polyline.points().iter().position(|p| *p == a).unwrap();
        assert_eq!(from_polyline.points()[(ia + 1) % n], b);
    }

    assert!(relative_eq!(
        from_cloud.center_of_mass(),
        Point::origin(),
        epsilon = 1.0e-6
    ));
}

#[test]
fn malformed_inputs_are_rejected() {
    assert_eq!(
        ConvexPolygon::from_point_cloud(&[Point::origin(), Point::new(1.0, 0.0)]),
        Err(ShapeError::TooFewVertices(2))
    );
    assert_eq!(
        ConvexPolygon::from_point_cloud(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, Real::INFINITY),
            Point::new(0.0, 1.0),
        ]),
        Err(ShapeError::NonFiniteVertex(1))
    );
    assert_eq!(Ball::try_new(-1.0), Err(ShapeError::InvalidRadius(-1.0)));
    assert!(Ball::try_new(0.5).is_ok());
}

#[test]
fn enum_shapes_have_the_vertices_of_their_variant() {
    let square: ConvexShape = ConvexPolygon::from_point_cloud(&[
        Point::new(1.0, 1.0),
        Point::new(-1.0, 1.0),
        Point::new(-1.0, -1.0),
        Point::new(1.0, -1.0),
    ])
    .unwrap()
    .into();

    assert_eq!(square.num_vertices(), 4);
    assert_eq!(square.center_of_mass(), Point::origin());
    assert_eq!(square.as_support_map().vertices(), square.vertices());
}
