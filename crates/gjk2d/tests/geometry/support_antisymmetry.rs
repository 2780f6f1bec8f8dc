use gjk2d::math::{Point, Real, Vector};
use gjk2d::motion::Pose;
use gjk2d::query::gjk::SupportPoint;
use gjk2d::shape::{Ball, ConvexPolygon, ConvexShape};
use oorandom::Rand32;

#[test]
fn swapped_shapes_give_the_opposite_support() {
    let shapes: [ConvexShape; 3] = [
        Ball::new(0.75).into(),
        ConvexPolygon::rectangle(Vector::new(1.0, 0.25)).into(),
        ConvexPolygon::from_point_cloud(&[
            Point::new(0.0, 1.0),
            Point::new(-1.0, -0.5),
            Point::new(1.5, -0.5),
        ])
        .unwrap()
        .into(),
    ];
    let mut rng = Rand32::new(7);

    for g1 in &shapes {
        for g2 in &shapes {
            for _ in 0..32 {
                let angle = rng.rand_float() as Real * 6.0;
                let dir = Vector::new(angle.cos(), angle.sin()) * 3.0;
                let pose1 = Pose::new(Vector::new(1.0, -2.0), angle * 0.5);
                let pose2 = Pose::new(Vector::new(-0.5, 0.5), -angle)
                    .with_scale(Vector::new(1.5, 0.5));

                let sp12 = SupportPoint::from_shapes(g1, &pose1, g2, &pose2, &dir);
                let sp21 = SupportPoint::from_shapes(g2, &pose2, g1, &pose1, &-dir);

                assert_eq!(sp12.point, -sp21.point);
                assert_eq!(sp12.swapped(), sp21);
            }
        }
    }
}
