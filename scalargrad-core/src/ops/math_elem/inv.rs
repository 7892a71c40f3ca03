use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, Op, VarId};
use crate::num;
use crate::ops::saved_unary;

/// Reciprocal of a graph value.
///
/// Undefined at zero; the forward value is infinite there, matching
/// `f64::recip`.
pub fn inv_op(graph: &mut Graph, a: VarId) -> VarId {
    let va = graph.value(a);
    let mut ctx = graph.new_context();
    ctx.save(&[va]);
    graph.push_op(Op::Inv, vec![a], num::inv(va), ctx)
}

/// d(1/a)/da = -1/a^2.
pub(crate) fn inv_backward(node: &Node, upstream: f64) -> Result<Vec<(VarId, f64)>, ScalarGradError> {
    let va = saved_unary(node, "inv")?;
    Ok(vec![(node.parents[0], num::inv_back(va, upstream))])
}

#[cfg(test)]
#[path = "inv_test.rs"]
mod tests;
