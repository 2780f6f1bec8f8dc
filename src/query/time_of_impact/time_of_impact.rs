use crate::math::Real;
use crate::motion::RigidMotion;
use crate::query::gjk::gjk;
use crate::query::time_of_impact::SeparationFunction;
use crate::query::ToiOptions;
use crate::shape::SupportMap;

/// The terminal state of a time of impact query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ToiState {
    /// The shapes reach the target separation at the reported fraction of the motion.
    Hit,
    /// The shapes stay further apart than the target separation during the whole motion.
    Separated,
    /// The shapes already overlap at the reported fraction. Nothing can be said about their
    /// first contact.
    Overlapped,
    /// The solver could not bracket the impact, or ran out of iterations.
    Unresolved,
}

/// Counters describing the work performed by a time of impact query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ToiDiagnostics {
    /// The number of conservative advancement steps, each running one distance query.
    pub outer_iterations: usize,
    /// The total number of root-finder iterations.
    pub root_iterations: usize,
    /// Whether an iteration limit was reached.
    pub budget_exhausted: bool,
}

/// The result of a time of impact query.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ToiResult {
    /// The terminal state of the query.
    pub state: ToiState,
    /// The fraction of the motion, in `[0, 1]`, at which the state was reached.
    pub fraction: Real,
    /// The work performed to reach this result.
    pub diagnostics: ToiDiagnostics,
}

/// Computes the fraction of the motion, between the times 0 and 1, at which two moving
/// shapes first come within `options.target` of each other.
///
/// This uses conservative advancement: at each step, the distance between both shapes
/// yields a separating axis whose separation is tracked over time with a root finder
/// alternating bisection and false position. The shapes are never allowed to get closer
/// than `options.target - options.tolerance` along the tracked axis.
///
/// # Panics
///
/// Panics if `options.tolerance` is not positive or not smaller than `options.target`.
pub fn time_of_impact<G1, M1, G2, M2>(
    g1: &G1,
    motion1: &M1,
    g2: &G2,
    motion2: &M2,
    options: &ToiOptions,
) -> ToiResult
where
    G1: ?Sized + SupportMap,
    M1: ?Sized + RigidMotion,
    G2: ?Sized + SupportMap,
    M2: ?Sized + RigidMotion,
{
    assert!(
        options.tolerance > 0.0 && options.target > options.tolerance,
        "The time of impact tolerance must be positive and smaller than the target separation."
    );

    let target = options.target;
    let tolerance = options.tolerance;
    let max_push_iterations = g1.num_vertices().max(g2.num_vertices()).max(1);

    let mut diagnostics = ToiDiagnostics::default();
    let mut t0: Real = 0.0;

    let result = |state, fraction, diagnostics| ToiResult {
        state,
        fraction,
        diagnostics,
    };

    loop {
        if diagnostics.outer_iterations == options.max_iterations {
            diagnostics.budget_exhausted = true;
            log::warn!(
                "Time of impact did not converge after {} iterations.",
                options.max_iterations
            );
            return result(ToiState::Unresolved, t0, diagnostics);
        }

        diagnostics.outer_iterations += 1;

        let pose1 = motion1.pose_at(t0);
        let pose2 = motion2.pose_at(t0);
        let closest = gjk(g1, &pose1, g2, &pose2, &options.gjk);

        if closest.intersecting || closest.distance <= 0.0 {
            log::debug!("Time of impact: initial overlap at t = {}.", t0);
            return result(ToiState::Overlapped, t0, diagnostics);
        }

        if closest.distance <= target + tolerance {
            return result(ToiState::Hit, t0, diagnostics);
        }

        let Some(separation) = SeparationFunction::new(g1, motion1, g2, motion2, &closest, t0)
        else {
            return result(ToiState::Unresolved, t0, diagnostics);
        };

        // Push back the end of the time interval until the separation along the current
        // axis is within the tolerance of the target.
        let mut t1: Real = 1.0;
        let mut push_iterations = 0;

        loop {
            let (s1, witnesses) = separation.find_min_separation(t1);

            if s1 > target + tolerance {
                return result(ToiState::Separated, 1.0, diagnostics);
            }

            if s1 > target - tolerance {
                t0 = t1;
                break;
            }

            if push_iterations == max_push_iterations {
                diagnostics.budget_exhausted = true;
                log::debug!(
                    "Time of impact: no convergence after {} push-backs.",
                    max_push_iterations
                );
                return result(ToiState::Unresolved, t0, diagnostics);
            }

            push_iterations += 1;

            let s0 = separation.evaluate(&witnesses, t0);

            if s0 < target - tolerance {
                log::debug!(
                    "Time of impact: the root could not be bracketed in [{}, {}].",
                    t0,
                    t1
                );
                return result(ToiState::Unresolved, t0, diagnostics);
            }

            if s0 <= target + tolerance {
                return result(ToiState::Hit, t0, diagnostics);
            }

            // Find the root of `separation(t) - target` in [t0, t1].
            let (mut a1, mut a2) = (t0, t1);
            let (mut sa1, mut sa2) = (s0, s1);
            let mut converged = false;

            for root_iteration in 0..options.max_root_iterations {
                let t = if root_iteration % 2 == 1 {
                    // False position.
                    a1 + (target - sa1) * (a2 - a1) / (sa2 - sa1)
                } else {
                    // Bisection.
                    0.5 * (a1 + a2)
                };

                diagnostics.root_iterations += 1;

                let s = separation.evaluate(&witnesses, t);
                t1 = t;

                if (s - target).abs() < tolerance {
                    converged = true;
                    break;
                }

                if s > target {
                    a1 = t;
                    sa1 = s;
                } else {
                    a2 = t;
                    sa2 = s;
                }
            }

            if !converged {
                diagnostics.budget_exhausted = true;
                log::debug!("Time of impact: the root finder reached its iteration limit.");
            }
        }
    }
}
