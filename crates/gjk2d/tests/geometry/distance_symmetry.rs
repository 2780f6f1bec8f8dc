use gjk2d::math::{Point, Real, Vector};
use gjk2d::motion::Pose;
use gjk2d::query::{self, GjkOptions};
use gjk2d::shape::{Ball, ConvexPolygon, ConvexShape, Segment};
use oorandom::Rand32;

fn random_real(rng: &mut Rand32, min: Real, max: Real) -> Real {
    min + (max - min) * rng.rand_float() as Real
}

fn random_polygon(rng: &mut Rand32) -> ConvexPolygon {
    let n = 3 + rng.rand_range(0..6) as usize;
    let radius = random_real(rng, 0.5, 2.0);
    let sector = core::f64::consts::TAU as Real / n as Real;

    let pts = (0..n)
        .map(|k| {
            let angle = sector * (k as Real + random_real(rng, 0.1, 0.9));
            Point::new(angle.cos(), angle.sin()) * radius
        })
        .collect();

    ConvexPolygon::from_convex_polyline(pts).unwrap()
}

fn random_shape(rng: &mut Rand32) -> ConvexShape {
    match rng.rand_range(0..4) {
        0 => Ball::new(random_real(rng, 0.2, 1.5)).into(),
        1 => Segment::new(
            Point::new(random_real(rng, -2.0, 0.0), random_real(rng, -1.0, 1.0)),
            Point::new(random_real(rng, 0.0, 2.0), random_real(rng, -1.0, 1.0)),
        )
        .into(),
        _ => random_polygon(rng).into(),
    }
}

fn random_pose(rng: &mut Rand32) -> Pose {
    Pose::new(
        Vector::new(random_real(rng, -4.0, 4.0), random_real(rng, -4.0, 4.0)),
        random_real(rng, -3.0, 3.0),
    )
}

#[test]
fn distance_is_symmetric() {
    let mut rng = Rand32::new(42);
    let options = GjkOptions { max_iterations: 32 };

    for _ in 0..500 {
        let (g1, g2) = (random_shape(&mut rng), random_shape(&mut rng));
        let (pose1, pose2) = (random_pose(&mut rng), random_pose(&mut rng));

        let res12 = query::distance_with_options(&g1, &pose1, &g2, &pose2, &options);
        let res21 = query::distance_with_options(&g2, &pose2, &g1, &pose1, &options);

        let tol = 3.0e-3 * res12.distance.max(1.0);
        assert!(
            (res12.distance - res21.distance).abs() <= tol,
            "{} != {}",
            res12.distance,
            res21.distance
        );

        assert!(relative_eq!(
            na::distance(&res12.point1, &res12.point2),
            res12.distance,
            epsilon = 1.0e-4
        ));

        if res12.distance > 1.0e-2 {
            assert!(!res21.intersecting);
        }
    }
}

#[test]
fn witness_points_are_swapped() {
    let square = ConvexPolygon::rectangle(Vector::new(0.5, 0.5));
    let ball = Ball::new(0.5);
    let pose1 = Pose::identity();
    let pose2 = Pose::translation(2.0, 2.0);

    let res12 = query::distance(&square, &pose1, &ball, &pose2);
    let res21 = query::distance(&ball, &pose2, &square, &pose1);

    assert!(relative_eq!(res12.distance, res21.distance, epsilon = 1.0e-3));
    assert!(relative_eq!(res12.point1, res21.point2, epsilon = 1.0e-3));
    assert!(relative_eq!(res12.point2, res21.point1, epsilon = 1.0e-3));
    assert_eq!(res12.feature1, res21.feature2);
    assert_eq!(res12.feature2, res21.feature1);
}
