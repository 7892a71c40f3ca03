use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, Op, VarId};
use crate::num;
use crate::ops::saved_unary;

/// Natural logarithm of a graph value.
///
/// Only defined for strictly positive inputs: non-positive values produce
/// `NaN` or `-inf` in the forward pass, matching `f64::ln`, and the gradient
/// `1/x` is likewise undefined at zero.
pub fn ln_op(graph: &mut Graph, a: VarId) -> VarId {
    let va = graph.value(a);
    let mut ctx = graph.new_context();
    ctx.save(&[va]);
    graph.push_op(Op::Ln, vec![a], num::ln(va), ctx)
}

/// d(ln a)/da = 1/a.
pub(crate) fn ln_backward(node: &Node, upstream: f64) -> Result<Vec<(VarId, f64)>, ScalarGradError> {
    let va = saved_unary(node, "ln")?;
    Ok(vec![(node.parents[0], num::ln_back(va, upstream))])
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
