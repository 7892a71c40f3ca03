use approx::relative_eq;
use thiserror::Error;

use crate::autograd::backpropagate;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::VarId;

/// Default perturbation for [`central_difference`].
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for leaf {leaf_index}: analytical {analytical:?} != numerical {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        leaf_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),

    #[error("Oracle evaluation failed during gradient check: {0}")]
    OracleError(ScalarGradError),

    #[error("Numerical derivative is NaN or infinite for leaf {leaf_index}. Value: {value:?}")]
    NumericalNotFinite { leaf_index: usize, value: f64 },

    #[error("Analytical derivative is NaN or infinite for leaf {leaf_index}. Value: {value:?}")]
    AnalyticalNotFinite { leaf_index: usize, value: f64 },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::BackwardPassError(err)
    }
}

/// Central-difference approximation of the derivative of `f` with respect to
/// `vals[arg]`.
///
/// Perturbs only `vals[arg]` by `-epsilon` and `+epsilon`, calls `f` with
/// each perturbed tuple (all other arguments unchanged), and returns
/// `(f(.., +eps, ..) - f(.., -eps, ..)) / (2 * epsilon)`. The input slice is
/// never mutated; perturbed copies are built instead. Purely numerical, with
/// no knowledge of (and no shared state with) the computation graph.
///
/// # Errors
///
/// A non-positive `epsilon` and an out-of-range `arg` are rejected before
/// any evaluation of `f`.
pub fn central_difference<F>(
    f: F,
    vals: &[f64],
    arg: usize,
    epsilon: f64,
) -> Result<f64, ScalarGradError>
where
    F: Fn(&[f64]) -> f64,
{
    if !(epsilon > 0.0) {
        return Err(ScalarGradError::NonPositiveEpsilon { epsilon });
    }
    if arg >= vals.len() {
        return Err(ScalarGradError::ArgIndexOutOfBounds {
            index: arg,
            len: vals.len(),
        });
    }

    let mut plus = vals.to_vec();
    plus[arg] += epsilon;
    let mut minus = vals.to_vec();
    minus[arg] -= epsilon;

    Ok((f(&plus) - f(&minus)) / (2.0 * epsilon))
}

/// Checks analytical gradients against numerical gradients using central
/// differences.
///
/// `build` constructs the expression under test inside the supplied graph,
/// given one leaf per entry of `inputs`, and returns the output node. The
/// analytical side backpropagates a seed of 1.0 through a fresh graph; the
/// numerical side re-evaluates the same construction on perturbed plain
/// values, one leaf at a time. The two derivatives must agree within
/// `tolerance` (absolute or relative).
pub fn check_grad<F>(
    build: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[VarId]) -> VarId,
{
    let mut graph = Graph::new();
    let leaves: Vec<VarId> = inputs.iter().map(|&v| graph.leaf(v)).collect();
    let output = build(&mut graph, &leaves);

    backpropagate(&mut graph, output, 1.0).map_err(GradCheckError::BackwardPassError)?;

    // Forward-only evaluation for the oracle; retention is pointless here.
    let eval = |vals: &[f64]| -> f64 {
        let mut g = Graph::no_grad();
        let ids: Vec<VarId> = vals.iter().map(|&v| g.leaf(v)).collect();
        let out = build(&mut g, &ids);
        g.value(out)
    };

    for (i, &leaf) in leaves.iter().enumerate() {
        let analytical = graph.grad(leaf);
        let numerical =
            central_difference(&eval, inputs, i, epsilon).map_err(GradCheckError::OracleError)?;

        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalNotFinite {
                leaf_index: i,
                value: numerical,
            });
        }
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalNotFinite {
                leaf_index: i,
                value: analytical,
            });
        }

        if !relative_eq!(
            analytical,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                leaf_index: i,
                analytical,
                numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{central_difference, check_grad, DEFAULT_EPSILON};
    use crate::error::ScalarGradError;
    use approx::assert_relative_eq;
    use std::cell::Cell;

    #[test]
    fn test_central_difference_quadratic() {
        let f = |vals: &[f64]| vals[0] * vals[0] + vals[1];
        let d0 = central_difference(f, &[3.0, 2.0], 0, DEFAULT_EPSILON).unwrap();
        assert_relative_eq!(d0, 6.0, epsilon = 1e-4);
        let d1 = central_difference(f, &[3.0, 2.0], 1, DEFAULT_EPSILON).unwrap();
        assert_relative_eq!(d1, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_central_difference_rejects_non_positive_epsilon() {
        let called = Cell::new(false);
        let f = |_: &[f64]| {
            called.set(true);
            0.0
        };
        let err = central_difference(f, &[1.0], 0, 0.0).unwrap_err();
        assert_eq!(err, ScalarGradError::NonPositiveEpsilon { epsilon: 0.0 });
        let err = central_difference(f, &[1.0], 0, -1e-6).unwrap_err();
        assert_eq!(err, ScalarGradError::NonPositiveEpsilon { epsilon: -1e-6 });
        assert!(!called.get(), "f must not be evaluated on malformed input");
    }

    #[test]
    fn test_central_difference_rejects_out_of_range_arg() {
        let err = central_difference(|vals| vals[0], &[1.0, 2.0], 2, DEFAULT_EPSILON).unwrap_err();
        assert_eq!(err, ScalarGradError::ArgIndexOutOfBounds { index: 2, len: 2 });
    }

    #[test]
    fn test_central_difference_leaves_input_unchanged() {
        let vals = [3.0, 2.0];
        central_difference(|v| v[0] * v[1], &vals, 0, DEFAULT_EPSILON).unwrap();
        assert_eq!(vals, [3.0, 2.0]);
    }

    #[test]
    fn test_check_grad_single_input() {
        check_grad(|g, ids| g.sigmoid(ids[0]), &[0.4], DEFAULT_EPSILON, 1e-2).unwrap();
    }

    #[test]
    fn test_check_grad_composed_expression() {
        // f(x, y) = sigmoid(x * y) + ln(y)
        check_grad(
            |g, ids| {
                let m = g.mul(ids[0], ids[1]);
                let s = g.sigmoid(m);
                let l = g.ln(ids[1]);
                g.add(s, l)
            },
            &[0.5, 2.0],
            DEFAULT_EPSILON,
            1e-2,
        )
        .unwrap();
    }

    #[test]
    fn test_check_grad_diamond() {
        // e = -a + exp(a): both paths into the shared leaf must be counted.
        check_grad(
            |g, ids| {
                let c = g.neg(ids[0]);
                let d = g.exp(ids[0]);
                g.add(c, d)
            },
            &[1.0],
            DEFAULT_EPSILON,
            1e-2,
        )
        .unwrap();
    }
}
