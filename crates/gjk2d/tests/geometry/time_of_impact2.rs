use gjk2d::math::{Point, Real, Vector};
use gjk2d::motion::{BodyState, Pose, RigidMotion};
use gjk2d::query::gjk::ConstantPoint;
use gjk2d::query::{self, ToiOptions, ToiState};
use gjk2d::shape::{Ball, ConvexPolygon, Segment};

fn floor() -> Segment {
    Segment::new(Point::new(-5.0, 0.0), Point::new(5.0, 0.0))
}

#[test]
fn ball_falling_on_a_floor_converges_to_the_analytic_time() {
    let ball = Ball::new(0.5);
    let body1 = BodyState::new(Vector::new(0.0, 5.0), 0.0).with_linvel(Vector::new(0.0, -10.0));
    let body2 = BodyState::default();
    let target = 0.01;
    let analytic = (4.5 - target) / 10.0;

    for tolerance in [0.004, 0.002, 0.001, 0.0005] {
        let options = ToiOptions::with_target(target, tolerance);
        let res = query::time_of_impact(&ball, &body1, &floor(), &body2, &options);

        assert_eq!(res.state, ToiState::Hit);
        assert!(
            (res.fraction - analytic).abs() <= tolerance / 10.0 + 1.0e-5,
            "tolerance {}: {} vs. {}",
            tolerance,
            res.fraction,
            analytic
        );
    }
}

#[test]
fn square_falling_on_a_floor() {
    let square = ConvexPolygon::rectangle(Vector::new(0.5, 0.5));
    let body1 = BodyState::new(Vector::new(0.0, 3.0), 0.0).with_linvel(Vector::new(0.0, -4.0));
    let body2 = BodyState::default();
    let options = ToiOptions::default();

    let res = query::time_of_impact(&square, &body1, &floor(), &body2, &options);
    let expected = (2.5 - options.target) / 4.0;

    assert_eq!(res.state, ToiState::Hit);
    assert!((res.fraction - expected).abs() <= options.tolerance / 4.0 + 1.0e-5);
}

#[test]
fn rotating_bar_hits_the_floor() {
    let bar = ConvexPolygon::rectangle(Vector::new(2.0, 0.1));
    let angvel = core::f64::consts::FRAC_PI_2;
    let body1 = BodyState::new(Vector::new(0.0, 1.5), 0.0).with_angvel(angvel as Real);
    let body2 = BodyState::default();
    let options = ToiOptions::default();

    let res = query::time_of_impact(&bar, &body1, &floor(), &body2, &options);

    // The lowest corner of the bar is at `1.5 - 2 sin(a) - 0.1 cos(a)`.
    let height = |t: f64| {
        let angle = angvel * t;
        1.5 - 2.0 * angle.sin() - 0.1 * angle.cos() - options.target as f64
    };
    let (mut lo, mut hi) = (0.0f64, 1.0f64);
    for _ in 0..60 {
        let mid = (lo + hi) / 2.0;
        if height(mid) > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    assert_eq!(res.state, ToiState::Hit);
    assert!(
        (res.fraction as f64 - lo).abs() <= 5.0e-3,
        "{} vs. {}",
        res.fraction,
        lo
    );

    let pose = body1.pose_at(res.fraction);
    let dist = query::distance(&bar, &pose, &floor(), &Pose::identity()).distance;
    assert!(dist >= options.target - options.tolerance - 1.0e-4);
    assert!(dist <= options.target + options.tolerance + 1.0e-4);
}

#[test]
fn parallel_motions_never_hit() {
    let square = ConvexPolygon::rectangle(Vector::new(0.5, 0.5));
    let body1 = BodyState::default().with_linvel(Vector::new(1.0, 0.0));
    let body2 = BodyState::new(Vector::new(0.0, 3.0), 0.0).with_linvel(Vector::new(1.0, 0.0));

    let res = query::time_of_impact(&square, &body1, &square, &body2, &ToiOptions::default());
    assert_eq!(res.state, ToiState::Separated);
    assert_eq!(res.fraction, 1.0);
}

#[test]
fn ball_passing_over_a_square_never_hits() {
    let square = ConvexPolygon::rectangle(Vector::new(0.5, 0.5));
    let ball = Ball::new(0.5);
    let body1 = BodyState::default();
    let body2 = BodyState::new(Vector::new(-3.0, 2.0), 0.0).with_linvel(Vector::new(6.0, 0.0));

    let res = query::time_of_impact(&square, &body1, &ball, &body2, &ToiOptions::default());
    assert_eq!(res.state, ToiState::Separated);
    assert_eq!(res.fraction, 1.0);
    assert!(res.diagnostics.outer_iterations >= 2);
}

#[test]
fn balls_hit_along_the_line_of_centers() {
    let ball = Ball::new(0.5);
    let body1 = BodyState::new(Vector::new(-3.0, 0.0), 0.0).with_linvel(Vector::new(4.0, 0.0));
    let body2 = BodyState::default();
    let options = ToiOptions::default();

    let res = query::time_of_impact(&ball, &body1, &ball, &body2, &options);
    let expected = (2.0 - options.target) / 4.0;

    assert_eq!(res.state, ToiState::Hit);
    assert!((res.fraction - expected).abs() <= options.tolerance / 4.0 + 1.0e-5);
}

#[test]
fn point_hits_a_ball() {
    let point = ConstantPoint(Point::origin());
    let ball = Ball::new(0.5);
    let body1 = BodyState::new(Vector::new(-3.0, 0.0), 0.0).with_linvel(Vector::new(4.0, 0.0));
    let body2 = BodyState::default();
    let options = ToiOptions::default();

    let res = query::time_of_impact(&point, &body1, &ball, &body2, &options);
    let expected = (2.5 - options.target) / 4.0;

    assert_eq!(res.state, ToiState::Hit);
    assert!((res.fraction - expected).abs() <= options.tolerance / 4.0 + 1.0e-5);
}
