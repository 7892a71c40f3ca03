use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, Op, VarId};
use crate::num;
use crate::ops::saved_unary;

/// Rectified linear unit of a graph value: `max(x, 0)`.
pub fn relu_op(graph: &mut Graph, a: VarId) -> VarId {
    let va = graph.value(a);
    let mut ctx = graph.new_context();
    ctx.save(&[va]);
    graph.push_op(Op::Relu, vec![a], num::relu(va), ctx)
}

/// Upstream derivative where the rectifier was active, zero elsewhere
/// (including at the kink itself).
pub(crate) fn relu_backward(node: &Node, upstream: f64) -> Result<Vec<(VarId, f64)>, ScalarGradError> {
    let va = saved_unary(node, "relu")?;
    Ok(vec![(node.parents[0], num::relu_back(va, upstream))])
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
