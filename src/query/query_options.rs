use crate::math::Real;

/// Options controlling the GJK distance algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GjkOptions {
    /// The maximum number of support points added to the simplex before giving up.
    ///
    /// Reaching this limit is reported through [`GjkStatus::MaxIterations`](crate::query::GjkStatus)
    /// and should never be relied upon for correctness.
    pub max_iterations: usize,
}

impl Default for GjkOptions {
    fn default() -> Self {
        GjkOptions { max_iterations: 8 }
    }
}

/// Options controlling the Expanding Polytope Algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EpaOptions {
    /// The maximum number of vertices inserted into the polytope.
    pub max_iterations: usize,
    /// The polytope has converged once the support point along the normal of its closest edge
    /// is less than `epsilon` beyond that edge.
    pub epsilon: Real,
}

impl Default for EpaOptions {
    fn default() -> Self {
        EpaOptions {
            max_iterations: 16,
            epsilon: 1.0e-4,
        }
    }
}

/// Options controlling the conservative-advancement time of impact solver.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ToiOptions {
    /// The separation at which the two shapes are considered in contact.
    pub target: Real,
    /// The accepted deviation from `target`. Must be positive and smaller than `target`.
    pub tolerance: Real,
    /// The maximum number of conservative advancement steps.
    pub max_iterations: usize,
    /// The maximum number of root-finder iterations for a single separating axis.
    pub max_root_iterations: usize,
    /// Options of the distance queries run at each advancement step.
    pub gjk: GjkOptions,
}

impl Default for ToiOptions {
    fn default() -> Self {
        ToiOptions {
            target: 0.01,
            tolerance: 0.0025,
            max_iterations: 20,
            max_root_iterations: 50,
            gjk: GjkOptions::default(),
        }
    }
}

impl ToiOptions {
    /// Default options with the given target separation and tolerance.
    pub fn with_target(target: Real, tolerance: Real) -> Self {
        ToiOptions {
            target,
            tolerance,
            ..Default::default()
        }
    }
}
