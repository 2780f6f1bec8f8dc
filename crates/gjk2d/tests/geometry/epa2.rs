use gjk2d::math::Vector;
use gjk2d::motion::Pose;
use gjk2d::query;
use gjk2d::shape::ConvexPolygon;

#[test]
fn unit_squares_overlapping_along_x() {
    let square = ConvexPolygon::rectangle(Vector::new(0.5, 0.5));
    let pose1 = Pose::identity();
    let pose2 = Pose::translation(0.5, 0.0);

    let res = query::distance(&square, &pose1, &square, &pose2);
    let pen = query::penetration(&square, &pose1, &square, &pose2, &res.simplex)
        .expect("Penetration not found.");

    assert!(relative_eq!(pen.depth, 0.5, epsilon = 1.0e-5));
    assert!(relative_eq!(pen.normal.norm(), 1.0, epsilon = 1.0e-5));
    assert!(pen.normal.y.abs() < 1.0e-5);

    let resolved = pose2.translated(&(*pen.normal * pen.depth));
    let res = query::distance(&square, &pose1, &square, &resolved);
    assert!(res.distance <= 1.0e-3);
    assert!(!query::intersection_test(
        &square,
        &pose1,
        &square,
        &resolved.translated(&(*pen.normal * 1.0e-2))
    ));
}

#[test]
#[allow(non_snake_case)]
fn rectangle_rectangle_EPA() {
    let c = ConvexPolygon::rectangle(Vector::new(2.0, 1.0));
    let m1 = Pose::translation(3.5, 0.0);
    let m2 = Pose::identity();

    let res = query::distance(&c, &m1, &c, &m2);
    let pen = query::penetration(&c, &m1, &c, &m2, &res.simplex).expect("Penetration not found.");
    assert!(relative_eq!(pen.depth, 0.5, epsilon = 1.0e-5));
    assert!(relative_eq!(*pen.normal, -Vector::x(), epsilon = 1.0e-5));

    let m1 = Pose::translation(0.0, 0.2);
    let res = query::distance(&c, &m1, &c, &m2);
    let pen = query::penetration(&c, &m1, &c, &m2, &res.simplex).expect("Penetration not found.");
    assert!(relative_eq!(pen.depth, 1.8, epsilon = 1.0e-5));
    assert!(relative_eq!(*pen.normal, -Vector::y(), epsilon = 1.0e-5));
}
